//! Tenor grammars used in the `Time` column of node files.
//!
//! Two small grammars, both case-insensitive and matched against the whole
//! trimmed cell:
//!
//! - FRA: `P? digits M? ws* X ws* P? digits M?`, e.g. `3Mx6M`, `3 X 6`
//! - simple: `P? (digits M)? (digits Y)?`, e.g. `18M`, `1Y`, `6M1Y`, or empty
//!
//! The simple grammar takes months before years; `1Y6M` is rejected.

use ratescal_core::curve::NodeKind;
use ratescal_core::Period;

use crate::error::{LoadError, LoadResult};

/// Byte cursor over upper-cased tenor text.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// One or more digits, or `None` if there are none or they overflow.
    fn number(&mut self) -> Option<u32> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }

    /// `digits unit`, consumed only if both are present.
    fn amount_with_unit(&mut self, unit: u8) -> Option<u32> {
        let start = self.pos;
        match self.number() {
            Some(n) if self.eat(unit) => Some(n),
            _ => {
                self.pos = start;
                None
            }
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

fn invalid(kind: NodeKind, text: &str) -> LoadError {
    LoadError::InvalidTenor {
        kind,
        text: text.to_string(),
    }
}

/// One side of a FRA tenor: `P? digits M?`, in months.
fn fra_side(cursor: &mut Cursor<'_>) -> Option<u32> {
    cursor.eat(b'P');
    let months = cursor.number()?;
    cursor.eat(b'M');
    Some(months)
}

fn fra_months(upper: &str) -> Option<(u32, u32)> {
    let mut cursor = Cursor::new(upper);
    let start = fra_side(&mut cursor)?;
    cursor.skip_whitespace();
    if !cursor.eat(b'X') {
        return None;
    }
    cursor.skip_whitespace();
    let end = fra_side(&mut cursor)?;
    cursor.at_end().then_some((start, end))
}

/// Parses a FRA tenor such as `3Mx6M` into the periods to start and to end.
pub fn parse_fra_tenor(text: &str) -> LoadResult<(Period, Period)> {
    let upper = text.trim().to_ascii_uppercase();
    let (start, end) = fra_months(&upper).ok_or_else(|| invalid(NodeKind::Fra, text))?;
    Ok((Period::of_months(start), Period::of_months(end)))
}

fn simple_period(upper: &str) -> Option<Period> {
    let mut cursor = Cursor::new(upper);
    cursor.eat(b'P');
    let months = cursor.amount_with_unit(b'M').unwrap_or(0);
    let years = cursor.amount_with_unit(b'Y').unwrap_or(0);
    cursor.at_end().then_some(Period::new(years, months, 0))
}

/// Parses a swap tenor such as `18M`, `2Y` or `6M1Y`.
///
/// `kind` names the instrument in the error when the text does not match.
/// An empty cell is the zero period.
pub fn parse_simple_tenor(kind: NodeKind, text: &str) -> LoadResult<Period> {
    let upper = text.trim().to_ascii_uppercase();
    simple_period(&upper).ok_or_else(|| invalid(kind, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fra_variants() {
        let expected = (Period::of_months(3), Period::of_months(6));
        for text in ["3Mx6M", "3M X 6M", "3mx6m", "3 X 6", "P3MxP6M", " 3x6 ", "3M  x  6"] {
            assert_eq!(parse_fra_tenor(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn test_fra_rejects() {
        for text in ["", "3M", "3Mx", "x6M", "3Yx6Y", "3Mx6Mx9M", "3M-6M", "M3x6"] {
            let err = parse_fra_tenor(text).unwrap_err();
            assert!(
                matches!(err, LoadError::InvalidTenor { kind: NodeKind::Fra, .. }),
                "{text}"
            );
        }
    }

    #[test]
    fn test_fra_error_message() {
        let err = parse_fra_tenor("3Mto6M").unwrap_err();
        assert_eq!(err.to_string(), "Invalid time format for Fra: '3Mto6M'");
    }

    #[test]
    fn test_simple_forms() {
        let kind = NodeKind::FixedIborSwap;
        assert_eq!(parse_simple_tenor(kind, "1Y").unwrap(), Period::of_years(1));
        assert_eq!(parse_simple_tenor(kind, "18M").unwrap(), Period::of_months(18));
        assert_eq!(parse_simple_tenor(kind, "6M1Y").unwrap(), Period::new(1, 6, 0));
        assert_eq!(parse_simple_tenor(kind, "p10y").unwrap(), Period::of_years(10));
        assert_eq!(parse_simple_tenor(kind, "").unwrap(), Period::ZERO);
        assert_eq!(parse_simple_tenor(kind, "  ").unwrap(), Period::ZERO);
    }

    #[test]
    fn test_simple_rejects() {
        for text in ["1Y6M", "3W", "1D", "Y", "1", "1Y1Y", "1 Y", "abc"] {
            let err = parse_simple_tenor(NodeKind::FixedOvernightSwap, text).unwrap_err();
            match err {
                LoadError::InvalidTenor { kind, text: raw } => {
                    assert_eq!(kind, NodeKind::FixedOvernightSwap);
                    assert_eq!(raw, text);
                }
                other => panic!("unexpected error for {text}: {other}"),
            }
        }
    }

    #[test]
    fn test_simple_error_names_kind() {
        let err = parse_simple_tenor(NodeKind::IborIborSwap, "1Y6M").unwrap_err();
        assert_eq!(err.to_string(), "Invalid time format for IborIborSwap: '1Y6M'");
    }

    #[test]
    fn test_overflowing_amounts() {
        let err = parse_fra_tenor("99999999999x6M").unwrap_err();
        assert!(matches!(err, LoadError::InvalidTenor { kind: NodeKind::Fra, .. }));
        let err = parse_simple_tenor(NodeKind::FixedIborSwap, "99999999999Y").unwrap_err();
        assert!(matches!(err, LoadError::InvalidTenor { kind: NodeKind::FixedIborSwap, .. }));
    }

    proptest! {
        #[test]
        fn prop_simple_round_trip(
            months in proptest::option::of(0u32..1000),
            years in proptest::option::of(0u32..100),
        ) {
            let mut text = String::new();
            if let Some(m) = months {
                text.push_str(&format!("{m}M"));
            }
            if let Some(y) = years {
                text.push_str(&format!("{y}Y"));
            }
            let period = parse_simple_tenor(NodeKind::FixedIborSwap, &text).unwrap();
            prop_assert_eq!(period.months, months.unwrap_or(0));
            prop_assert_eq!(period.years, years.unwrap_or(0));
            prop_assert_eq!(period.days, 0);
        }

        #[test]
        fn prop_fra_ignores_case_and_spacing(
            start in 0u32..120,
            end in 0u32..120,
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
            upper in any::<bool>(),
        ) {
            let x = if upper { "X" } else { "x" };
            let text = format!("{start}M{left}{x}{right}{end}M");
            let parsed = parse_fra_tenor(&text).unwrap();
            prop_assert_eq!(parsed, (Period::of_months(start), Period::of_months(end)));
        }
    }
}
