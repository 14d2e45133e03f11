//! Offline data source: embedded coin list and synthetic price histories.

use {
    anyhow::{Context, Result, bail},
    std::hash::{DefaultHasher, Hash, Hasher},
};

use crate::{
    config::DEMO,
    data::HistoryProvider,
    demo_coins_file,
    domain::{Coin, Currency, Period, PricePoint, Series},
    utils::now_timestamp_sec,
};

const DEMO_COINS_JSON: &str = include_str!(demo_coins_file!());

/// Coins bundled with the binary, ordered by rank.
pub fn load_demo_coins() -> Result<Vec<Coin>> {
    parse_coins(DEMO_COINS_JSON)
}

pub fn parse_coins(json: &str) -> Result<Vec<Coin>> {
    let mut coins: Vec<Coin> =
        serde_json::from_str(json).context("Failed to parse demo coin list")?;
    coins.sort_by_key(|c| c.rank);
    coins.truncate(DEMO.max_coins);
    Ok(coins)
}

pub struct DemoProvider {
    coins: Vec<Coin>,
    simulate_latency: bool,
}

impl DemoProvider {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self {
            coins,
            simulate_latency: cfg!(not(target_arch = "wasm32")),
        }
    }

    pub fn without_latency(mut self) -> Self {
        self.simulate_latency = false;
        self
    }
}

impl HistoryProvider for DemoProvider {
    fn fetch_history(&self, coin_id: &str, currency: Currency, period: Period) -> Result<Series> {
        let Some(coin) = self.coins.iter().find(|c| c.id == coin_id) else {
            bail!("Unknown coin '{}'", coin_id);
        };

        #[cfg(not(target_arch = "wasm32"))]
        if self.simulate_latency {
            std::thread::sleep(DEMO.latency);
        }

        let series = synthetic_series(coin, period, now_timestamp_sec());
        log::debug!(
            "Demo history for {} ({}, {}): {} points",
            coin.id,
            currency,
            period,
            series.len()
        );
        Ok(series)
    }
}

/// Deterministic wave around the coin's current price, ending at `end_ts`
/// with the current price itself.
pub fn synthetic_series(coin: &Coin, period: Period, end_ts: i64) -> Series {
    let count = period.sample_count();
    let step = period.sample_step().as_secs() as i64;

    let mut hasher = DefaultHasher::new();
    coin.id.hash(&mut hasher);
    period.hash(&mut hasher);
    // Phase in [0, 2pi)
    let phase = (hasher.finish() % 10_000) as f64 / 10_000.0 * std::f64::consts::TAU;

    let amplitude = DEMO.volatility_pct;
    (0..=count)
        .map(|i| {
            let timestamp = end_ts - (count - i) as i64 * step;
            let t = i as f64 / count.max(1) as f64;
            let wave = (t * 3.0 * std::f64::consts::PI + phase).sin() * 0.6
                + (t * 11.0 * std::f64::consts::PI + phase * 0.5).sin() * 0.4;
            let end_wave = (3.0 * std::f64::consts::PI + phase).sin() * 0.6
                + (11.0 * std::f64::consts::PI + phase * 0.5).sin() * 0.4;
            let price = coin.price * (1.0 + amplitude * (wave - end_wave));
            PricePoint::new(timestamp, price.max(0.0))
        })
        .collect()
}
