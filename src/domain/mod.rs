// Domain types and value objects
mod coin;
mod currency;
mod period;
mod price_point;

pub use coin::{Coin, exchange_name};
pub use currency::Currency;
pub use period::Period;
pub use price_point::{Extrema, PricePoint, Series, is_chronological};
