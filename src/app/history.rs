//! Price-history request lifecycle for the chart.
//!
//! One request is in flight at most. Starting a new one drops the previous
//! promise, and a result that arrives for an older generation is discarded.

use {
    anyhow::Result,
    poll_promise::Promise,
    std::sync::Arc,
};

use crate::{
    data::HistoryProvider,
    domain::{Currency, Extrema, Period, Series},
};

/// What the chart is showing (or waiting for).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct HistoryKey {
    pub coin_id: String,
    pub currency: Currency,
    pub period: Period,
}

/// A loaded series plus the extrema the chart annotates against.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartData {
    pub series: Series,
    pub extrema: Option<Extrema>,
}

impl ChartData {
    pub fn new(series: Series) -> Self {
        let extrema = Extrema::of(&series);
        Self { series, extrema }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Loaded(ChartData),
    Failed(String),
}

#[derive(Default)]
pub(crate) struct HistoryLoader {
    generation: u64,
    key: Option<HistoryKey>,
    in_flight: Option<(u64, Promise<Result<Series>>)>,
    status: FetchStatus,
}

impl HistoryLoader {
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn key(&self) -> Option<&HistoryKey> {
        self.key.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, FetchStatus::Pending)
    }

    /// Marks a new request as pending and returns its generation.
    /// Whatever was in flight before is abandoned.
    pub fn begin(&mut self, key: HistoryKey) -> u64 {
        self.generation += 1;
        if let Some((stale, _)) = self.in_flight.take() {
            log::debug!("History: abandoning request #{} for a newer one", stale);
        }
        log::info!(
            "History: request #{} for {} ({}, {})",
            self.generation,
            key.coin_id,
            key.currency,
            key.period
        );
        self.key = Some(key);
        self.status = FetchStatus::Pending;
        self.generation
    }

    /// Applies a finished request. Returns false (and changes nothing) when
    /// `generation` is not the latest one.
    pub fn resolve(&mut self, generation: u64, result: Result<Series>) -> bool {
        if generation != self.generation {
            log::debug!(
                "History: dropping stale result #{} (current #{})",
                generation,
                self.generation
            );
            return false;
        }
        self.status = match result {
            Ok(series) => FetchStatus::Loaded(ChartData::new(series)),
            Err(err) => {
                log::error!("History: request #{} failed: {:#}", generation, err);
                FetchStatus::Failed(format!("{:#}", err))
            }
        };
        true
    }

    /// Starts fetching `key` from `provider`. Native builds run the provider on
    /// a background thread; wasm builds resolve immediately.
    pub fn request(&mut self, key: HistoryKey, provider: Arc<dyn HistoryProvider>) {
        let generation = self.begin(key.clone());

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("history_fetch", move || {
            provider.fetch_history(&key.coin_id, key.currency, key.period)
        });

        #[cfg(target_arch = "wasm32")]
        let promise =
            Promise::from_ready(provider.fetch_history(&key.coin_id, key.currency, key.period));

        self.in_flight = Some((generation, promise));
    }

    /// Moves a finished promise into `status`. Call once per frame.
    pub fn poll(&mut self) {
        let Some((generation, promise)) = self.in_flight.take() else {
            return;
        };
        match promise.try_take() {
            Ok(result) => {
                self.resolve(generation, result);
            }
            Err(promise) => self.in_flight = Some((generation, promise)),
        }
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.key = None;
        self.status = FetchStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use anyhow::anyhow;

    fn key(period: Period) -> HistoryKey {
        HistoryKey {
            coin_id: "bitcoin".to_string(),
            currency: Currency::Usd,
            period,
        }
    }

    fn series() -> Series {
        vec![PricePoint::new(0, 10.0), PricePoint::new(60, 20.0)]
    }

    #[test]
    fn starts_idle() {
        let loader = HistoryLoader::default();
        assert_eq!(loader.status(), &FetchStatus::Idle);
        assert!(loader.key().is_none());
    }

    #[test]
    fn begin_then_resolve_loads_data_with_extrema() {
        let mut loader = HistoryLoader::default();
        let generation = loader.begin(key(Period::D7));
        assert!(loader.is_pending());
        assert!(loader.resolve(generation, Ok(series())));
        match loader.status() {
            FetchStatus::Loaded(data) => {
                assert_eq!(data.series.len(), 2);
                assert_eq!(data.extrema, Some(Extrema::new(10.0, 20.0)));
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn newer_request_supersedes_older_one() {
        let mut loader = HistoryLoader::default();
        let first = loader.begin(key(Period::D1));
        let second = loader.begin(key(Period::D30));

        // The slow first answer lands after the second request started.
        assert!(!loader.resolve(first, Ok(series())));
        assert!(loader.is_pending());
        assert_eq!(loader.key().map(|k| k.period), Some(Period::D30));

        assert!(loader.resolve(second, Ok(Vec::new())));
        assert_eq!(
            loader.status(),
            &FetchStatus::Loaded(ChartData {
                series: Vec::new(),
                extrema: None
            })
        );
    }

    #[test]
    fn failure_is_reported_not_fatal() {
        let mut loader = HistoryLoader::default();
        let generation = loader.begin(key(Period::Y1));
        assert!(loader.resolve(generation, Err(anyhow!("rate limited"))));
        assert_eq!(loader.status(), &FetchStatus::Failed("rate limited".to_string()));
    }

    #[test]
    fn clear_invalidates_in_flight_results() {
        let mut loader = HistoryLoader::default();
        let generation = loader.begin(key(Period::D7));
        loader.clear();
        assert!(!loader.resolve(generation, Ok(series())));
        assert_eq!(loader.status(), &FetchStatus::Idle);
    }

    #[test]
    fn poll_picks_up_ready_promise() {
        let mut loader = HistoryLoader::default();
        let generation = loader.begin(key(Period::D7));
        loader.in_flight = Some((generation, Promise::from_ready(Ok(series()))));
        loader.poll();
        assert!(matches!(loader.status(), FetchStatus::Loaded(_)));
        assert!(loader.in_flight.is_none());
    }
}
