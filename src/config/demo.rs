//! Demo data configuration

use std::time::Duration;

pub struct DemoConfig {
    /// Number of coins shown on the landing view
    pub max_coins: usize,
    /// Simulated network latency for history requests (native only)
    pub latency: Duration,
    /// Relative amplitude of the synthetic price wave
    pub volatility_pct: f64,
}

pub const DEMO: DemoConfig = DemoConfig {
    max_coins: 5,
    latency: Duration::from_millis(600),
    volatility_pct: 0.06,
};

// --- MACROS FOR COMPILE-TIME INCLUDES ---
// Lets include_str! read the path as a literal.

#[macro_export]
macro_rules! demo_coins_file {
    () => {
        "../../assets/demo_coins.json"
    };
}
