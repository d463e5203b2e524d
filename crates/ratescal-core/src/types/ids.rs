//! Identifier types used across calibration sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a curve.
///
/// This is the join key between the groups, settings and nodes tables.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CurveName(String);

impl CurveName {
    /// Create a new curve name. Surrounding whitespace is removed.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CurveName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CurveName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Name of a curve group.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CurveGroupName(String);

impl CurveGroupName {
    /// Create a new curve group name. Surrounding whitespace is removed.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CurveGroupName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CurveGroupName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An identifier within a symbology scheme, such as a Bloomberg ticker.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandardId {
    /// Symbology scheme (e.g., "OG-Ticker", "BBG").
    pub scheme: String,
    /// Identifier within the scheme.
    pub value: String,
}

impl StandardId {
    /// Create a new identifier.
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

/// Name of a market data field, such as a bid, ask or mid value.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldName(String);

impl FieldName {
    /// Name of the field holding the market value of a quote.
    pub const MARKET_VALUE: &'static str = "MarketValue";

    /// Create a new field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The default field, used when no field is specified.
    pub fn market_value() -> Self {
        Self(Self::MARKET_VALUE.to_string())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldName {
    fn default() -> Self {
        Self::market_value()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a single market quote: an identifier plus the field to read.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct QuoteId {
    /// The quoted instrument.
    pub standard_id: StandardId,
    /// The field of the quote.
    pub field_name: FieldName,
}

impl QuoteId {
    /// Create a quote reference reading the given field.
    pub fn new(standard_id: StandardId, field_name: FieldName) -> Self {
        Self {
            standard_id,
            field_name,
        }
    }

    /// Create a quote reference reading the market value field.
    pub fn market_value(standard_id: StandardId) -> Self {
        Self::new(standard_id, FieldName::market_value())
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.standard_id, self.field_name)
    }
}
