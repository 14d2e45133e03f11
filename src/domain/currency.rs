use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Quote currency for prices and market caps. Formatting rules live in
/// `config::CURRENCIES`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    Default,
    clap::ValueEnum,
)]
pub enum Currency {
    #[default]
    #[strum(to_string = "EUR")]
    Eur,
    #[strum(to_string = "USD")]
    Usd,
}
