//! Calendar periods.
//!
//! A [`Period`] is an amount of calendar time (years, months and days) rather
//! than a fixed number of days, so `Period::of_months(12)` and
//! `Period::of_years(1)` are distinct values that roll dates the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of calendar time in years, months and days.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize)]
pub struct Period {
    /// Whole years.
    pub years: u32,
    /// Whole months.
    pub months: u32,
    /// Whole days.
    pub days: u32,
}

impl Period {
    /// The zero period.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a period from its components.
    #[must_use]
    pub const fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Creates a period of a number of months.
    #[must_use]
    pub const fn of_months(months: u32) -> Self {
        Self::new(0, months, 0)
    }

    /// Creates a period of a number of years.
    #[must_use]
    pub const fn of_years(years: u32) -> Self {
        Self::new(years, 0, 0)
    }

    /// Creates a period of a number of days.
    #[must_use]
    pub const fn of_days(days: u32) -> Self {
        Self::new(0, 0, days)
    }

    /// Creates a period of a number of weeks, or `None` if the day count
    /// does not fit in a `u32`.
    #[must_use]
    pub const fn of_weeks(weeks: u32) -> Option<Self> {
        match weeks.checked_mul(7) {
            Some(days) => Some(Self::of_days(days)),
            None => None,
        }
    }

    /// Returns true if all components are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Parses a single-unit market tenor such as `1W`, `3M` or `10Y`.
    ///
    /// Accepts an optional leading `P`, ignores case, and returns `None` for
    /// anything else. This is the form used inside index names.
    pub fn parse_tenor(text: &str) -> Option<Self> {
        let upper = text.trim().to_ascii_uppercase();
        let body = upper.strip_prefix('P').unwrap_or(&upper);
        let unit = body.chars().last()?;
        let amount = &body[..body.len() - unit.len_utf8()];
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let n: u32 = amount.parse().ok()?;
        match unit {
            'D' => Some(Self::of_days(n)),
            'W' => Self::of_weeks(n),
            'M' => Some(Self::of_months(n)),
            'Y' => Some(Self::of_years(n)),
            _ => None,
        }
    }

    /// Short market form of the period, such as `3M`, `1Y6M` or `2W`.
    pub fn to_tenor_string(&self) -> String {
        if self.is_zero() {
            return "0D".to_string();
        }
        let mut out = String::new();
        if self.years > 0 {
            out.push_str(&format!("{}Y", self.years));
        }
        if self.months > 0 {
            out.push_str(&format!("{}M", self.months));
        }
        if self.days > 0 {
            if self.days % 7 == 0 && self.years == 0 && self.months == 0 {
                out.push_str(&format!("{}W", self.days / 7));
            } else {
                out.push_str(&format!("{}D", self.days));
            }
        }
        out
    }
}

/// ISO 8601 rendering: `P1Y6M`, `P3M`, zero as `P0D`.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(1, 6, 0).to_string(), "P1Y6M");
        assert_eq!(Period::of_weeks(1).unwrap().to_string(), "P7D");
    }

    #[test]
    fn test_parse_tenor() {
        assert_eq!(Period::parse_tenor("3M"), Some(Period::of_months(3)));
        assert_eq!(Period::parse_tenor("p10y"), Some(Period::of_years(10)));
        assert_eq!(Period::parse_tenor("1W"), Some(Period::of_days(7)));
        assert_eq!(Period::parse_tenor("M"), None);
        assert_eq!(Period::parse_tenor("LIBOR"), None);
        assert_eq!(Period::parse_tenor(""), None);
    }

    #[test]
    fn test_parse_tenor_rejects_overflow() {
        assert_eq!(Period::of_weeks(613_566_756), Some(Period::of_days(4_294_967_292)));
        assert_eq!(Period::of_weeks(613_566_757), None);
        assert_eq!(Period::parse_tenor("700000000W"), None);
        assert_eq!(Period::parse_tenor("99999999999M"), None);
    }

    #[test]
    fn test_tenor_string() {
        assert_eq!(Period::of_months(3).to_tenor_string(), "3M");
        assert_eq!(Period::new(1, 6, 0).to_tenor_string(), "1Y6M");
        assert_eq!(Period::of_weeks(2).unwrap().to_tenor_string(), "2W");
        assert_eq!(Period::ZERO.to_tenor_string(), "0D");
    }

    #[test]
    fn test_is_zero() {
        assert!(Period::ZERO.is_zero());
        assert!(!Period::of_days(1).is_zero());
    }
}
