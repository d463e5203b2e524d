//! Curve settings file.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use ratescal_core::curve::CurveSettings;
use ratescal_core::CurveName;
use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::table::{CsvRow, CsvTable};

/// Column holding the curve name.
pub const CURVE_NAME: &str = "Curve Name";
/// Column holding `zero` or `df`.
pub const VALUE_TYPE: &str = "Value Type";
/// Column holding the day count name.
pub const DAY_COUNT: &str = "Day Count";
/// Column holding the interpolator name.
pub const INTERPOLATOR: &str = "Interpolator";
/// Column holding the left extrapolator name.
pub const LEFT_EXTRAPOLATOR: &str = "Left Extrapolator";
/// Column holding the right extrapolator name.
pub const RIGHT_EXTRAPOLATOR: &str = "Right Extrapolator";

/// Settings per curve.
pub type SettingsMap = BTreeMap<CurveName, CurveSettings>;

/// Reads the settings table. Each curve may appear once.
pub fn load_curve_settings(table: &CsvTable) -> LoadResult<SettingsMap> {
    let mut settings = SettingsMap::new();
    for row in table.rows() {
        let (curve, parsed) = parse_row(&row).map_err(|e| row.error(e))?;
        // Insert only if absent: a second row for a curve is an error.
        match settings.entry(curve) {
            Entry::Vacant(slot) => {
                slot.insert(parsed);
            }
            Entry::Occupied(slot) => {
                return Err(row.error(LoadError::DuplicateSettings {
                    curve: slot.key().clone(),
                }));
            }
        }
    }
    debug!(
        resource = table.resource(),
        curves = settings.len(),
        "Loaded curve settings"
    );
    Ok(settings)
}

fn parse_row(row: &CsvRow<'_>) -> LoadResult<(CurveName, CurveSettings)> {
    let curve = CurveName::new(row.required(CURVE_NAME)?);
    let settings = CurveSettings {
        value_type: row.required(VALUE_TYPE)?.parse()?,
        day_count: row.required(DAY_COUNT)?.parse()?,
        interpolator: row.required(INTERPOLATOR)?.parse()?,
        left_extrapolator: row.required(LEFT_EXTRAPOLATOR)?.parse()?,
        right_extrapolator: row.required(RIGHT_EXTRAPOLATOR)?.parse()?,
    };
    Ok((curve, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratescal_core::daycount::DayCount;
    use ratescal_core::interpolation::{CurveExtrapolator, CurveInterpolator};
    use ratescal_core::value_type::ValueType;
    use ratescal_core::CoreError;

    const HEADER: &str =
        "Curve Name,Value Type,Day Count,Interpolator,Left Extrapolator,Right Extrapolator\n";

    fn load(body: &str) -> LoadResult<SettingsMap> {
        let table = CsvTable::parse("settings.csv", &format!("{HEADER}{body}")).unwrap();
        load_curve_settings(&table)
    }

    #[test]
    fn test_settings_parsed() {
        let map = load(
            "USD-Disc,zero,Act/365F,Linear,Flat,Flat\n\
             USD-3ML,DF,act/360,LogLinear,Flat,Exponential\n",
        )
        .unwrap();

        assert_eq!(
            map[&CurveName::new("USD-Disc")],
            CurveSettings {
                value_type: ValueType::ZeroRate,
                day_count: DayCount::Act365F,
                interpolator: CurveInterpolator::Linear,
                left_extrapolator: CurveExtrapolator::Flat,
                right_extrapolator: CurveExtrapolator::Flat,
            }
        );
        let libor = &map[&CurveName::new("USD-3ML")];
        assert_eq!(libor.value_type, ValueType::DiscountFactor);
        assert_eq!(libor.day_count, DayCount::Act360);
        assert_eq!(libor.right_extrapolator, CurveExtrapolator::Exponential);
    }

    #[test]
    fn test_duplicate_settings_rejected() {
        let err = load(
            "USD-Disc,zero,Act/365F,Linear,Flat,Flat\n\
             USD-Disc,df,Act/360,Linear,Flat,Flat\n",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "settings.csv, row 2: Duplicate settings for curve: USD-Disc");
    }

    #[test]
    fn test_unknown_value_type() {
        let err = load("USD-Disc,par,Act/365F,Linear,Flat,Flat\n").unwrap_err();
        assert!(matches!(
            err.root(),
            LoadError::Core(CoreError::UnknownValueType { .. })
        ));
    }

    #[test]
    fn test_unknown_day_count() {
        let err = load("USD-Disc,zero,Bus/252,Linear,Flat,Flat\n").unwrap_err();
        assert!(matches!(
            err.root(),
            LoadError::Core(CoreError::UnknownDayCount { .. })
        ));
    }
}
