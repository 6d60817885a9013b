//! ZAR/USD currency codes and the shared display formatting policy.

use std::fmt;

/// The two currencies a document can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Zar,
    Usd,
}

impl Currency {
    /// Parses an exact currency code. Anything other than "ZAR" or "USD"
    /// is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ZAR" => Some(Currency::Zar),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Zar => "ZAR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Zar => "R",
            Currency::Usd => "$",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Currency::Zar => Currency::Usd,
            Currency::Usd => Currency::Zar,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats a numeric amount, identically for both currencies.
///
/// Millions collapse to one decimal with an "M" suffix, thousands to one
/// decimal with a "K" suffix, amounts of at least one use two decimals and
/// anything smaller keeps four decimals.
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.4}")
    }
}

/// Prefixes the currency symbol to the formatted amount.
pub fn format_currency(value: f64, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("ZAR"), Some(Currency::Zar));
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("EUR"), None);
        // Codes are matched exactly, no case folding
        assert_eq!(Currency::from_code("usd"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_other_is_symmetric() {
        assert_eq!(Currency::Zar.other(), Currency::Usd);
        assert_eq!(Currency::Usd.other(), Currency::Zar);
        assert_eq!(Currency::Zar.other().other(), Currency::Zar);
    }

    #[test]
    fn test_format_number_boundaries() {
        assert_eq!(format_number(1_000_000.0), "1.0M");
        assert_eq!(format_number(999_999.0), "1000.0K");
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(1_000.0), "1.0K");
        assert_eq!(format_number(999.0), "999.00");
        assert_eq!(format_number(1.0), "1.00");
        assert_eq!(format_number(0.5), "0.5000");
    }

    #[test]
    fn test_format_number_large_values() {
        assert_eq!(format_number(12_500_000.0), "12.5M");
        assert_eq!(format_number(2_750_000_000.0), "2750.0M");
    }

    #[test]
    fn test_format_currency_symbols() {
        assert_eq!(format_currency(1_500_000.0, Currency::Zar), "R1.5M");
        assert_eq!(format_currency(78_000.0, Currency::Usd), "$78.0K");
        assert_eq!(format_currency(0.052, Currency::Usd), "$0.0520");
    }
}
