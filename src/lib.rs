#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::PERSISTENCE;
pub use domain::{Currency, Period, PricePoint};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Currency to show prices in (overrides the saved choice)
    #[arg(long, value_enum)]
    pub currency: Option<Currency>,

    /// Chart period to open with (overrides the saved choice)
    #[arg(long, value_enum)]
    pub period: Option<Period>,

    /// Coin id to select on startup, e.g. `bitcoin`
    #[arg(long)]
    pub coin: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
