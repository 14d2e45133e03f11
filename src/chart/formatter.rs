//! Axis and tooltip text for the price chart.

use crate::{
    config::CurrencyFormatter,
    domain::{Currency, PricePoint},
    utils::epoch_sec_to_date_string,
};

/// Calendar date (`YYYY-MM-DD`, UTC) of a unix timestamp. Never fails: a
/// timestamp outside the representable range gives an empty label.
pub fn format_axis_timestamp(timestamp: i64) -> String {
    epoch_sec_to_date_string(timestamp).unwrap_or_default()
}

pub fn format_axis_price(
    formatter: &dyn CurrencyFormatter,
    currency: Currency,
    value: f64,
) -> String {
    formatter.format(currency, value)
}

/// Date on the first line, price on the second.
pub fn format_tooltip(
    formatter: &dyn CurrencyFormatter,
    currency: Currency,
    point: &PricePoint,
) -> String {
    format!(
        "{}\n{}",
        format_axis_timestamp(point.timestamp),
        format_axis_price(formatter, currency, point.price)
    )
}
