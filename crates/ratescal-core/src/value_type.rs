//! What the values of a calibrated curve represent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The quantity a curve's nodal values are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Continuously compounded zero rates.
    ZeroRate,
    /// Discount factors, with P(0) = 1.
    DiscountFactor,
}

impl ValueType {
    /// Returns the short code used in settings files.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ValueType::ZeroRate => "zero",
            ValueType::DiscountFactor => "df",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::ZeroRate => write!(f, "ZeroRate"),
            ValueType::DiscountFactor => write!(f, "DiscountFactor"),
        }
    }
}

impl FromStr for ValueType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(ValueType::ZeroRate),
            "df" => Ok(ValueType::DiscountFactor),
            _ => Err(CoreError::UnknownValueType {
                name: s.to_string(),
            }),
        }
    }
}
