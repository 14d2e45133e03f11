use {
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{sync::Arc, time::Duration},
};

use crate::{
    Cli,
    app::{FetchStatus, HistoryKey, HistoryLoader},
    chart::PeriodChange,
    data::{DemoProvider, HistoryProvider, load_demo_coins},
    domain::{Coin, Currency, Period},
    ui::{ChartView, UI_CONFIG},
};

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct App {
    pub(crate) selected_currency: Currency, // persists across sessions.
    pub(crate) period: Period,
    pub(crate) selected_coin_id: Option<String>,
    #[serde(skip)]
    pub(crate) coins: Vec<Coin>,
    #[serde(skip)]
    pub(crate) history: HistoryLoader,
    #[serde(skip)]
    pub(crate) chart_view: ChartView,
    #[serde(skip)]
    pub(crate) provider: Option<Arc<dyn HistoryProvider>>,
    #[serde(skip)]
    pub(crate) load_error: Option<String>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        egui_extras::install_image_loaders(&cc.egui_ctx);
        setup_custom_visuals(&cc.egui_ctx);

        match load_demo_coins() {
            Ok(coins) => {
                log::info!("Loaded {} coins", coins.len());
                let provider = Arc::new(DemoProvider::new(coins.clone()));
                app.attach(coins, provider);
            }
            Err(err) => {
                log::error!("Failed to load coin list: {:#}", err);
                app.load_error = Some(format!("{:#}", err));
            }
        }

        app.apply_cli(&args);
        app.request_history();
        app
    }

    /// Installs the coin list and the history source. A saved coin that is
    /// no longer listed is forgotten.
    pub(crate) fn attach(&mut self, coins: Vec<Coin>, provider: Arc<dyn HistoryProvider>) {
        self.coins = coins;
        self.provider = Some(provider);
        if let Some(id) = &self.selected_coin_id {
            if !self.coins.iter().any(|c| &c.id == id) {
                log::warn!("Saved coin '{}' is not in the list anymore", id);
                self.selected_coin_id = None;
            }
        }
    }

    /// Command-line flags win over the saved session.
    pub(crate) fn apply_cli(&mut self, args: &Cli) {
        if let Some(currency) = args.currency {
            self.selected_currency = currency;
        }
        if let Some(period) = args.period {
            self.period = period;
        }
        if let Some(id) = &args.coin {
            if self.coins.iter().any(|c| &c.id == id) {
                self.selected_coin_id = Some(id.clone());
            } else {
                log::warn!("Unknown coin '{}' on the command line, ignoring", id);
            }
        }
    }

    pub(crate) fn selected_coin(&self) -> Option<&Coin> {
        let id = self.selected_coin_id.as_deref()?;
        self.coins.iter().find(|c| c.id == id)
    }

    /// Re-clicking the selected coin is a no-op.
    pub(crate) fn handle_select_coin(&mut self, coin_id: &str) {
        if self.selected_coin_id.as_deref() == Some(coin_id) {
            return;
        }
        if !self.coins.iter().any(|c| c.id == coin_id) {
            log::warn!("Ignoring selection of unknown coin '{}'", coin_id);
            return;
        }
        self.selected_coin_id = Some(coin_id.to_string());
        self.request_history();
    }

    /// Re-clicking the active currency is a no-op.
    pub(crate) fn handle_select_currency(&mut self, currency: Currency) {
        if self.selected_currency == currency {
            return;
        }
        self.selected_currency = currency;
        self.request_history();
    }

    /// The chip row reports every click; only a different period triggers a fetch.
    pub(crate) fn handle_period_change(&mut self, change: PeriodChange) {
        if change.is_reselect() {
            return;
        }
        self.period = change.requested;
        self.request_history();
    }

    /// Fetches the history for the current selection, if there is one.
    pub(crate) fn request_history(&mut self) {
        let Some(coin_id) = self.selected_coin_id.clone() else {
            self.history.clear();
            return;
        };
        let Some(provider) = self.provider.clone() else {
            return;
        };
        let key = HistoryKey {
            coin_id,
            currency: self.selected_currency,
            period: self.period,
        };
        let is_retry = matches!(self.history.status(), FetchStatus::Failed(_));
        if self.history.key() == Some(&key) && !is_retry {
            return;
        }
        self.history.request(key, provider);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.history.poll();
        if self.history.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
        self.render_central_panel(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        log::debug!(
            "SAVE [App]: currency={}, period={}, coin={:?}",
            self.selected_currency,
            self.period,
            self.selected_coin_id
        );
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_coins;

    const COINS: &str = r#"[
        {"id":"bitcoin","name":"Bitcoin","symbol":"BTC","icon":"btc.png","rank":1,
         "price":60000.0,"marketCap":1.2e12,"volume":3.0e10,"availableSupply":1.9e7,
         "totalSupply":2.1e7,"priceChange1h":0.1,"priceChange1d":-1.0,"priceChange1w":4.0},
        {"id":"ethereum","name":"Ethereum","symbol":"ETH","icon":"eth.png","rank":2,
         "price":3000.0,"marketCap":3.6e11,"volume":1.5e10,"availableSupply":1.2e8,
         "totalSupply":1.2e8,"priceChange1h":0.0,"priceChange1d":2.0,"priceChange1w":-3.0}
    ]"#;

    fn app() -> App {
        let coins = parse_coins(COINS).unwrap();
        let provider = Arc::new(DemoProvider::new(coins.clone()).without_latency());
        let mut app = App::default();
        app.attach(coins, provider);
        app
    }

    fn requested_key(app: &App) -> Option<HistoryKey> {
        app.history.key().cloned()
    }

    #[test]
    fn nothing_is_requested_without_a_coin() {
        let mut app = app();
        app.request_history();
        assert_eq!(app.history.status(), &FetchStatus::Idle);
    }

    #[test]
    fn selecting_a_coin_requests_its_history() {
        let mut app = app();
        app.handle_select_coin("ethereum");
        assert!(app.history.is_pending());
        let key = requested_key(&app).unwrap();
        assert_eq!(key.coin_id, "ethereum");
        assert_eq!(key.period, Period::D7);
        assert_eq!(app.selected_coin().map(|c| c.rank), Some(2));
    }

    #[test]
    fn reselecting_the_same_coin_does_not_refetch() {
        let mut app = app();
        app.handle_select_coin("bitcoin");
        app.history.clear();
        app.handle_select_coin("bitcoin");
        assert_eq!(app.history.status(), &FetchStatus::Idle);
    }

    #[test]
    fn unknown_coin_is_ignored() {
        let mut app = app();
        app.handle_select_coin("dogecoin");
        assert!(app.selected_coin_id.is_none());
    }

    #[test]
    fn currency_switch_refetches_only_when_changed() {
        let mut app = app();
        app.handle_select_coin("bitcoin");
        app.handle_select_currency(Currency::Usd);
        assert_eq!(requested_key(&app).map(|k| k.currency), Some(Currency::Usd));

        app.history.clear();
        app.handle_select_currency(Currency::Usd);
        assert_eq!(app.history.status(), &FetchStatus::Idle);
    }

    #[test]
    fn reselecting_the_active_period_is_ignored() {
        let mut app = app();
        app.handle_select_coin("bitcoin");
        app.history.clear();

        app.handle_period_change(PeriodChange {
            requested: Period::D7,
            previous: Period::D7,
        });
        assert_eq!(app.history.status(), &FetchStatus::Idle);

        app.handle_period_change(PeriodChange {
            requested: Period::Y1,
            previous: Period::D7,
        });
        assert_eq!(app.period, Period::Y1);
        assert_eq!(requested_key(&app).map(|k| k.period), Some(Period::Y1));
    }

    #[test]
    fn cli_overrides_saved_choices() {
        let mut app = app();
        app.selected_currency = Currency::Eur;
        app.apply_cli(&Cli {
            currency: Some(Currency::Usd),
            period: Some(Period::D30),
            coin: Some("ethereum".to_string()),
        });
        assert_eq!(app.selected_currency, Currency::Usd);
        assert_eq!(app.period, Period::D30);
        assert_eq!(app.selected_coin_id.as_deref(), Some("ethereum"));

        app.apply_cli(&Cli {
            coin: Some("nope".to_string()),
            ..Cli::default()
        });
        assert_eq!(app.selected_coin_id.as_deref(), Some("ethereum"));
    }

    #[test]
    fn saved_coin_missing_from_list_is_dropped() {
        let coins = parse_coins(COINS).unwrap();
        let provider = Arc::new(DemoProvider::new(coins.clone()));
        let mut app = App {
            selected_coin_id: Some("delisted".to_string()),
            ..App::default()
        };
        app.attach(coins, provider);
        assert!(app.selected_coin_id.is_none());
    }

    #[test]
    fn settings_survive_a_save_round_trip() {
        let mut app = app();
        app.handle_select_currency(Currency::Usd);
        app.period = Period::D1;
        app.selected_coin_id = Some("bitcoin".to_string());

        let json = serde_json::to_string(&app).unwrap();
        let restored: App = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.selected_currency, Currency::Usd);
        assert_eq!(restored.period, Period::D1);
        assert_eq!(restored.selected_coin_id.as_deref(), Some("bitcoin"));
        assert!(restored.coins.is_empty());
    }
}
