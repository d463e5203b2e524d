//! Day count conventions, identified by name.
//!
//! Calibration sets only name the day count of a curve; year fractions are
//! computed by the calibration engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Day count convention of a curve or instrument leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCount {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365F,
    /// Actual/365.25
    Act36525,
    /// Actual/Actual ISDA
    ActActIsda,
    /// Actual/Actual ICMA
    ActActIcma,
    /// 30/360 ISDA
    Thirty360Isda,
    /// 30E/360
    ThirtyE360,
    /// 30U/360
    ThirtyU360,
    /// One, for instruments quoted without accrual.
    OneOne,
}

impl DayCount {
    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "Act/360",
            DayCount::Act365F => "Act/365F",
            DayCount::Act36525 => "Act/365.25",
            DayCount::ActActIsda => "Act/Act ISDA",
            DayCount::ActActIcma => "Act/Act ICMA",
            DayCount::Thirty360Isda => "30/360 ISDA",
            DayCount::ThirtyE360 => "30E/360",
            DayCount::ThirtyU360 => "30U/360",
            DayCount::OneOne => "1/1",
        }
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCount] {
        &[
            DayCount::Act360,
            DayCount::Act365F,
            DayCount::Act36525,
            DayCount::ActActIsda,
            DayCount::ActActIcma,
            DayCount::Thirty360Isda,
            DayCount::ThirtyE360,
            DayCount::ThirtyU360,
            DayCount::OneOne,
        ]
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCount {
    type Err = CoreError;

    /// Parses a day count from its name.
    ///
    /// Accepts the canonical names plus the usual spreadsheet spellings
    /// ("ACT/365", "Actual/360", "30/360", "ACT/ACT").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "A/360" => Ok(DayCount::Act360),

            "ACT/365F" | "ACT/365" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "A/365F" => Ok(DayCount::Act365F),

            "ACT/365.25" | "ACTUAL/365.25" => Ok(DayCount::Act36525),

            "ACT/ACT ISDA" | "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA" => {
                Ok(DayCount::ActActIsda)
            }

            "ACT/ACT ICMA" | "ACTUAL/ACTUAL ICMA" | "ISMA" => Ok(DayCount::ActActIcma),

            "30/360 ISDA" | "30/360" | "30/360 US" => Ok(DayCount::Thirty360Isda),

            "30E/360" | "30/360 ICMA" | "EUROBOND" => Ok(DayCount::ThirtyE360),

            "30U/360" | "BOND" => Ok(DayCount::ThirtyU360),

            "1/1" | "ONE/ONE" => Ok(DayCount::OneOne),

            _ => Err(CoreError::UnknownDayCount {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_roundtrip() {
        for dc in DayCount::all() {
            assert_eq!(dc.name().parse::<DayCount>().unwrap(), *dc);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("act/365".parse::<DayCount>().unwrap(), DayCount::Act365F);
        assert_eq!("Actual/360".parse::<DayCount>().unwrap(), DayCount::Act360);
        assert_eq!(" ACT/ACT ".parse::<DayCount>().unwrap(), DayCount::ActActIsda);
    }

    #[test]
    fn test_unknown() {
        assert!(matches!(
            "Bus/252".parse::<DayCount>(),
            Err(CoreError::UnknownDayCount { .. })
        ));
    }
}
