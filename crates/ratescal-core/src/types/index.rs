//! Rate indices referenced by forward curves and conventions.
//!
//! Indices are identified by their conventional names: a currency prefix,
//! the index family, and for term rates a trailing tenor, e.g.
//! `USD-LIBOR-3M`, `EUR-EURIBOR-6M`, `USD-FED-FUND`, `GBP-SONIA`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Currency, Period};
use crate::error::CoreError;

/// A floating rate index.
///
/// Serialized as its name, so it can key JSON maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RateIndex {
    /// Term rate fixing for a tenor (LIBOR, EURIBOR, TIBOR, ...).
    Ibor {
        /// Currency of the index.
        currency: Currency,
        /// Full index name.
        name: String,
        /// Tenor of the underlying deposit.
        tenor: Period,
    },
    /// Overnight rate (Fed Funds, SOFR, SONIA, ESTR, ...).
    Overnight {
        /// Currency of the index.
        currency: Currency,
        /// Full index name.
        name: String,
    },
}

impl RateIndex {
    /// Parses an index from its conventional name.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        let name = name.trim().to_ascii_uppercase();
        let segments: Vec<&str> = name.split('-').collect();
        if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            return Err(CoreError::invalid_rate_index(
                &name,
                "expected '<CCY>-<NAME>' or '<CCY>-<NAME>-<TENOR>'",
            ));
        }

        let currency = Currency::from_code(segments[0]).ok_or_else(|| {
            CoreError::invalid_rate_index(&name, format!("unknown currency '{}'", segments[0]))
        })?;

        let tenor = match segments.as_slice() {
            [_, _, .., last] => match Period::parse_tenor(last) {
                Some(tenor) => Some(tenor),
                None if is_tenor_shaped(last) => {
                    return Err(CoreError::invalid_rate_index(
                        &name,
                        format!("tenor '{}' is out of range", last),
                    ));
                }
                None => None,
            },
            _ => None,
        };

        Ok(match tenor {
            Some(tenor) => RateIndex::Ibor {
                currency,
                name,
                tenor,
            },
            None => RateIndex::Overnight { currency, name },
        })
    }

    /// Returns the currency of the index.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            RateIndex::Ibor { currency, .. } | RateIndex::Overnight { currency, .. } => *currency,
        }
    }

    /// Returns the full index name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            RateIndex::Ibor { name, .. } | RateIndex::Overnight { name, .. } => name,
        }
    }

    /// Returns the tenor of a term index, or `None` for an overnight index.
    #[must_use]
    pub fn tenor(&self) -> Option<Period> {
        match self {
            RateIndex::Ibor { tenor, .. } => Some(*tenor),
            RateIndex::Overnight { .. } => None,
        }
    }

    /// Returns true for overnight indices.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        matches!(self, RateIndex::Overnight { .. })
    }
}

/// True for `<digits><unit>` with an optional `P` prefix.
fn is_tenor_shaped(segment: &str) -> bool {
    let body = segment.strip_prefix('P').unwrap_or(segment);
    match body.as_bytes().split_last() {
        Some((unit, digits)) => {
            matches!(unit, b'D' | b'W' | b'M' | b'Y')
                && !digits.is_empty()
                && digits.iter().all(u8::is_ascii_digit)
        }
        None => false,
    }
}

impl fmt::Display for RateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<String> for RateIndex {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RateIndex> for String {
    fn from(index: RateIndex) -> Self {
        match index {
            RateIndex::Ibor { name, .. } | RateIndex::Overnight { name, .. } => name,
        }
    }
}

impl FromStr for RateIndex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ibor() {
        let index = RateIndex::parse("usd-libor-3m").unwrap();
        assert_eq!(index.currency(), Currency::USD);
        assert_eq!(index.tenor(), Some(Period::of_months(3)));
        assert_eq!(index.to_string(), "USD-LIBOR-3M");
    }

    #[test]
    fn test_parse_overnight() {
        let index = RateIndex::parse("USD-FED-FUND").unwrap();
        assert!(index.is_overnight());
        assert_eq!(index.tenor(), None);

        let sonia = RateIndex::parse("GBP-SONIA").unwrap();
        assert_eq!(sonia.currency(), Currency::GBP);
        assert!(sonia.is_overnight());
    }

    #[test]
    fn test_serializes_as_name() {
        let index = RateIndex::parse("EUR-EURIBOR-6M").unwrap();
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, "\"EUR-EURIBOR-6M\"");
        let back: RateIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, index);
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        assert!(RateIndex::parse("LIBOR").is_err());
        assert!(RateIndex::parse("XXX-LIBOR-3M").is_err());
        assert!(RateIndex::parse("USD--3M").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_tenor() {
        let err = RateIndex::parse("USD-LIBOR-700000000W").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rate index 'USD-LIBOR-700000000W': tenor '700000000W' is out of range"
        );
        assert!(RateIndex::parse("USD-LIBOR-99999999999M").is_err());
        assert!(RateIndex::parse("USD-LIBOR-52W").unwrap().tenor().is_some());
    }

    proptest::proptest! {
        #[test]
        fn prop_term_index_names_round_trip(
            ccy in proptest::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CHF", "AUD"]),
            family in "[A-Z]{2,8}",
            months in 1u32..=12,
        ) {
            let name = format!("{ccy}-{family}-{months}M");
            let index = RateIndex::parse(&name).unwrap();
            proptest::prop_assert_eq!(index.tenor(), Some(Period::of_months(months)));
            proptest::prop_assert_eq!(index.currency().code(), ccy);
            proptest::prop_assert_eq!(index.to_string(), name);
        }
    }
}
