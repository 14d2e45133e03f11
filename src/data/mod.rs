mod demo;
mod provider;

pub use {
    demo::{DemoProvider, load_demo_coins, parse_coins, synthetic_series},
    provider::HistoryProvider,
};
