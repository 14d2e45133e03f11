//! Currency formatting rules.
//!
//! The table is handed to the chart and the dashboard explicitly; nothing in
//! the chart core reaches for it on its own.

use crate::{domain::Currency, utils::group_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1,234.50`
    Prefix,
    /// `1.234,50 €`
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyFormat {
    pub currency: Currency,
    pub symbol: &'static str,
    /// Decimals for values >= 1. Sub-unit values get more (see `decimals_for`).
    pub decimals: usize,
    /// Upper bound on decimals for tiny values
    pub max_decimals: usize,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub placement: SymbolPlacement,
}

impl CurrencyFormat {
    /// Sub-unit prices keep two significant digits so meme-coin moves stay visible.
    pub fn decimals_for(&self, value: f64) -> usize {
        let abs_value = value.abs();
        if abs_value >= 1.0 || abs_value == 0.0 {
            return self.decimals;
        }
        let exponent = abs_value.log10().floor().abs() as usize;
        (exponent + 1).clamp(self.decimals, self.max_decimals)
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "n/a".to_string();
        }

        let decimals = self.decimals_for(value);
        let fixed = format!("{:.1$}", value.abs(), decimals);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut number = group_thousands(int_part, self.thousands_separator);
        if !frac_part.is_empty() {
            number.push(self.decimal_separator);
            number.push_str(frac_part);
        }

        // "-0.00" reads like a bug
        let is_negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        let sign = if is_negative { "-" } else { "" };

        match self.placement {
            SymbolPlacement::Prefix => format!("{}{}{}", sign, self.symbol, number),
            SymbolPlacement::Suffix => format!("{}{} {}", sign, number, self.symbol),
        }
    }
}

/// Formatting collaborator used by the chart axes, tooltip and dashboard cards.
pub trait CurrencyFormatter {
    fn format(&self, currency: Currency, value: f64) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct CurrencyTable {
    pub formats: &'static [CurrencyFormat],
}

impl CurrencyTable {
    pub fn lookup(&self, currency: Currency) -> Option<&CurrencyFormat> {
        self.formats.iter().find(|f| f.currency == currency)
    }
}

impl CurrencyFormatter for CurrencyTable {
    fn format(&self, currency: Currency, value: f64) -> String {
        match self.lookup(currency) {
            Some(rule) => rule.format(value),
            None => {
                log::warn!("No format rule for {}, using plain rendering", currency);
                format!("{:.2} {}", value, currency)
            }
        }
    }
}

pub const CURRENCIES: CurrencyTable = CurrencyTable {
    formats: &[
        CurrencyFormat {
            currency: Currency::Eur,
            symbol: "€",
            decimals: 2,
            max_decimals: 8,
            thousands_separator: '.',
            decimal_separator: ',',
            placement: SymbolPlacement::Suffix,
        },
        CurrencyFormat {
            currency: Currency::Usd,
            symbol: "$",
            decimals: 2,
            max_decimals: 8,
            thousands_separator: ',',
            decimal_separator: '.',
            placement: SymbolPlacement::Prefix,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_thousands_with_prefix_symbol() {
        assert_eq!(CURRENCIES.format(Currency::Usd, 1234567.891), "$1,234,567.89");
        assert_eq!(CURRENCIES.format(Currency::Usd, 999.0), "$999.00");
        assert_eq!(CURRENCIES.format(Currency::Usd, 1000.0), "$1,000.00");
    }

    #[test]
    fn eur_uses_european_separators_and_suffix() {
        assert_eq!(CURRENCIES.format(Currency::Eur, 1234.5), "1.234,50 €");
        assert_eq!(CURRENCIES.format(Currency::Eur, 10.0), "10,00 €");
    }

    #[test]
    fn negative_values_keep_sign_in_front() {
        assert_eq!(CURRENCIES.format(Currency::Usd, -1500.25), "-$1,500.25");
        assert_eq!(CURRENCIES.format(Currency::Usd, -0.00012), "-$0.00012");
    }

    #[test]
    fn tiny_negative_rounding_to_zero_has_no_sign() {
        let rule = CurrencyFormat {
            max_decimals: 2,
            ..*CURRENCIES.lookup(Currency::Usd).unwrap()
        };
        assert_eq!(rule.format(-0.0001), "$0.00");
    }

    #[test]
    fn sub_unit_prices_get_extra_precision() {
        assert_eq!(CURRENCIES.format(Currency::Usd, 0.5), "$0.50");
        assert_eq!(CURRENCIES.format(Currency::Usd, 0.0123), "$0.012");
        assert_eq!(CURRENCIES.format(Currency::Usd, 0.00001234), "$0.000012");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(CURRENCIES.format(Currency::Usd, f64::NAN), "n/a");
        assert_eq!(CURRENCIES.format(Currency::Eur, f64::INFINITY), "n/a");
    }

    #[test]
    fn missing_rule_falls_back_to_plain_code() {
        let table = CurrencyTable {
            formats: &[],
        };
        assert_eq!(table.format(Currency::Usd, 12.5), "12.50 USD");
    }
}
