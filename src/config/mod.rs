//! Configuration module for the coin-chart application.

mod currency;
mod demo;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

pub use currency::{CURRENCIES, CurrencyFormat, CurrencyFormatter, CurrencyTable, SymbolPlacement};
pub use demo::DEMO;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;

/// Log slow blocks wrapped in `trace_time!`
pub const LOG_PERFORMANCE: bool = cfg!(debug_assertions);
