//! Curve group file: which roles each curve plays in which group.

use std::collections::BTreeMap;

use ratescal_core::curve::CurveRole;
use ratescal_core::{Currency, CurveGroupName, CurveName, RateIndex};
use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::table::{CsvRow, CsvTable};

/// Column holding the group name.
pub const GROUP_NAME: &str = "Group Name";
/// Column holding `discount` or `forward`.
pub const CURVE_TYPE: &str = "Curve Type";
/// Column holding the currency or index the curve is used for.
pub const REFERENCE: &str = "Reference";
/// Column holding the curve name.
pub const CURVE_NAME: &str = "Curve Name";

/// Roles per curve, in the order the rows were read.
pub type CurveRoles = BTreeMap<CurveName, Vec<CurveRole>>;

/// Reads the roles of every curve named in a groups table.
///
/// Repeated rows are kept as repeated roles; applying them again when groups
/// are built is harmless.
pub fn load_curve_groups(table: &CsvTable) -> LoadResult<CurveRoles> {
    let mut roles = CurveRoles::new();
    for row in table.rows() {
        let (curve, role) = parse_row(&row).map_err(|e| row.error(e))?;
        roles.entry(curve).or_default().push(role);
    }
    debug!(
        resource = table.resource(),
        curves = roles.len(),
        "Loaded curve groups"
    );
    Ok(roles)
}

fn parse_row(row: &CsvRow<'_>) -> LoadResult<(CurveName, CurveRole)> {
    let group = CurveGroupName::new(row.required(GROUP_NAME)?);
    let curve_type = row.required(CURVE_TYPE)?;
    let reference = row.required(REFERENCE)?;
    let curve = CurveName::new(row.required(CURVE_NAME)?);

    let role = if curve_type.eq_ignore_ascii_case("discount") {
        CurveRole::discount(reference.parse::<Currency>()?, group)
    } else if curve_type.eq_ignore_ascii_case("forward") {
        CurveRole::forward(RateIndex::parse(reference)?, group)
    } else {
        return Err(LoadError::UnknownCurveType {
            value: curve_type.to_string(),
        });
    };
    Ok((curve, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Group Name,Curve Type,Reference,Curve Name\n";

    fn load(body: &str) -> LoadResult<CurveRoles> {
        let table = CsvTable::parse("groups.csv", &format!("{HEADER}{body}")).unwrap();
        load_curve_groups(&table)
    }

    #[test]
    fn test_roles_per_curve() {
        let roles = load(
            "Default,Discount,USD,USD-Disc\n\
             Default,forward,USD-FED-FUND,USD-Disc\n\
             Default,FORWARD,USD-LIBOR-3M,USD-3ML\n\
             Other,discount,usd,USD-3ML\n",
        )
        .unwrap();

        assert_eq!(roles.len(), 2);
        let disc = &roles[&CurveName::new("USD-Disc")];
        assert_eq!(disc.len(), 2);
        assert_eq!(disc[0], CurveRole::discount(Currency::USD, "Default"));
        assert!(matches!(&disc[1], CurveRole::Forward { index, .. } if index.is_overnight()));

        let libor = &roles[&CurveName::new("USD-3ML")];
        assert_eq!(libor[1], CurveRole::discount(Currency::USD, "Other"));
    }

    #[test]
    fn test_duplicate_rows_are_kept() {
        let roles = load("G,discount,USD,A\nG,discount,USD,A\n").unwrap();
        assert_eq!(roles[&CurveName::new("A")].len(), 2);
    }

    #[test]
    fn test_unknown_curve_type() {
        let err = load("G,discount,USD,A\nG,projection,USD,A\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "groups.csv, row 2: Invalid curve type: 'projection', expected 'discount' or 'forward'"
        );
    }

    #[test]
    fn test_bad_reference_is_a_core_error() {
        let err = load("G,discount,XXX,A\n").unwrap_err();
        assert!(matches!(err.root(), LoadError::Core(_)));
    }

    #[test]
    fn test_out_of_range_index_tenor() {
        let err = load("G,forward,USD-LIBOR-700000000W,A\n").unwrap_err();
        assert!(matches!(err, LoadError::Row { row: 1, .. }));
        assert!(matches!(err.root(), LoadError::Core(_)));
    }

    #[test]
    fn test_blank_curve_name() {
        let err = load("G,discount,USD,\n").unwrap_err();
        assert!(matches!(err.root(), LoadError::EmptyField { column } if column == CURVE_NAME));
    }

    #[test]
    fn test_missing_column() {
        let table = CsvTable::parse("groups.csv", "Group Name,Curve Type\nG,discount\n").unwrap();
        let err = load_curve_groups(&table).unwrap_err();
        assert!(matches!(err.root(), LoadError::MissingColumn { .. }));
    }
}
