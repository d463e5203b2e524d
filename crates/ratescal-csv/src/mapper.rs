//! Folds built curves into curve groups according to their roles.

use std::collections::BTreeMap;

use ratescal_core::curve::{
    CurveGroupDefinition, CurveGroupDefinitionBuilder, CurveRole, NodalCurveDefinition,
};
use ratescal_core::CurveGroupName;
use tracing::{debug, warn};

use crate::assembler::CurveDefinitions;
use crate::groups::CurveRoles;

/// Curve groups by name.
pub type CurveGroupMap = BTreeMap<CurveGroupName, CurveGroupDefinition>;

/// Assigns each curve to the groups its roles name.
///
/// Curves are applied in name order and each curve's roles in row order. A
/// role for a currency or index that already has a curve in the group
/// replaces it. Curves without roles are left out, and groups only exist
/// once some role refers to them.
pub fn map_groups(roles: &CurveRoles, curves: CurveDefinitions) -> CurveGroupMap {
    let mut builders: BTreeMap<CurveGroupName, CurveGroupDefinitionBuilder> = BTreeMap::new();

    for (name, curve) in curves {
        let Some(curve_roles) = roles.get(&name).filter(|r| !r.is_empty()) else {
            warn!(curve = %name, "Curve has nodes but no group role, dropping it");
            continue;
        };
        for role in curve_roles {
            let builder = builders
                .entry(role.group().clone())
                .or_insert_with(|| CurveGroupDefinitionBuilder::new(role.group().clone()));
            // Overwrite: the last role applied to a slot wins.
            if let Some(previous) = apply_role(builder, role, curve.clone()) {
                if previous.name != name {
                    warn!(
                        role = %role,
                        replaced = %previous.name,
                        curve = %name,
                        "Curve group slot reassigned"
                    );
                }
            }
        }
    }

    builders
        .into_iter()
        .map(|(group, builder)| {
            let definition = builder.build();
            debug!(
                group = %group,
                discount = definition.discount_curves.len(),
                forward = definition.forward_curves.len(),
                "Built curve group"
            );
            (group, definition)
        })
        .collect()
}

fn apply_role(
    builder: &mut CurveGroupDefinitionBuilder,
    role: &CurveRole,
    curve: NodalCurveDefinition,
) -> Option<NodalCurveDefinition> {
    match role {
        CurveRole::Discount { currency, .. } => builder.add_discount_curve(*currency, curve),
        CurveRole::Forward { index, .. } => builder.add_forward_curve(index.clone(), curve),
    }
}
