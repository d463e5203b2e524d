//! Curve and curve group definitions.
//!
//! A [`NodalCurveDefinition`] is everything the calibration engine needs to
//! build one curve; a [`CurveGroupDefinition`] bundles the curves used
//! together for discounting and forward projection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::node::CurveNode;
use crate::daycount::DayCount;
use crate::interpolation::{CurveExtrapolator, CurveInterpolator};
use crate::types::{Currency, CurveGroupName, CurveName, RateIndex};
use crate::value_type::ValueType;

// =============================================================================
// CURVE SETTINGS
// =============================================================================

/// Per-curve metadata: value representation, day count and interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveSettings {
    /// What the nodal values represent.
    pub value_type: ValueType,
    /// Day count used to turn dates into curve times.
    pub day_count: DayCount,
    /// Interpolator between nodes.
    pub interpolator: CurveInterpolator,
    /// Extrapolator before the first node.
    pub left_extrapolator: CurveExtrapolator,
    /// Extrapolator after the last node.
    pub right_extrapolator: CurveExtrapolator,
}

impl CurveSettings {
    /// Binds these settings and a list of nodes to a curve name.
    pub fn create_definition(
        &self,
        name: CurveName,
        nodes: Vec<CurveNode>,
    ) -> NodalCurveDefinition {
        NodalCurveDefinition {
            name,
            settings: *self,
            nodes,
        }
    }
}

// =============================================================================
// NODAL CURVE DEFINITION
// =============================================================================

/// Definition of a curve calibrated at a discrete set of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodalCurveDefinition {
    /// Curve name.
    pub name: CurveName,
    /// Curve settings.
    pub settings: CurveSettings,
    /// Calibration nodes. Their order carries no meaning.
    pub nodes: Vec<CurveNode>,
}

impl NodalCurveDefinition {
    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

// =============================================================================
// CURVE GROUP DEFINITION
// =============================================================================

/// A named set of discount and forward curves.
///
/// At most one discount curve per currency and one forward curve per index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGroupDefinition {
    /// Group name.
    pub name: CurveGroupName,
    /// Discount curves by currency.
    pub discount_curves: BTreeMap<Currency, NodalCurveDefinition>,
    /// Forward curves by index.
    pub forward_curves: BTreeMap<RateIndex, NodalCurveDefinition>,
}

impl CurveGroupDefinition {
    /// Starts building a group.
    pub fn builder(name: CurveGroupName) -> CurveGroupDefinitionBuilder {
        CurveGroupDefinitionBuilder::new(name)
    }

    /// Returns the discount curve for a currency.
    #[must_use]
    pub fn discount_curve(&self, currency: Currency) -> Option<&NodalCurveDefinition> {
        self.discount_curves.get(&currency)
    }

    /// Returns the forward curve for an index.
    #[must_use]
    pub fn forward_curve(&self, index: &RateIndex) -> Option<&NodalCurveDefinition> {
        self.forward_curves.get(index)
    }

    /// Returns the distinct names of all curves in the group, sorted.
    #[must_use]
    pub fn curve_names(&self) -> Vec<&CurveName> {
        let mut names: Vec<&CurveName> = self
            .discount_curves
            .values()
            .chain(self.forward_curves.values())
            .map(|c| &c.name)
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Builder for [`CurveGroupDefinition`].
///
/// Assigning a currency or index that already has a curve replaces it; the
/// replaced curve is returned so callers can report the overwrite.
#[derive(Debug, Clone)]
pub struct CurveGroupDefinitionBuilder {
    name: CurveGroupName,
    discount_curves: BTreeMap<Currency, NodalCurveDefinition>,
    forward_curves: BTreeMap<RateIndex, NodalCurveDefinition>,
}

impl CurveGroupDefinitionBuilder {
    /// Creates an empty builder for the named group.
    pub fn new(name: CurveGroupName) -> Self {
        Self {
            name,
            discount_curves: BTreeMap::new(),
            forward_curves: BTreeMap::new(),
        }
    }

    /// Sets the discount curve for a currency, returning the curve it replaced.
    pub fn add_discount_curve(
        &mut self,
        currency: Currency,
        curve: NodalCurveDefinition,
    ) -> Option<NodalCurveDefinition> {
        self.discount_curves.insert(currency, curve)
    }

    /// Sets the forward curve for an index, returning the curve it replaced.
    pub fn add_forward_curve(
        &mut self,
        index: RateIndex,
        curve: NodalCurveDefinition,
    ) -> Option<NodalCurveDefinition> {
        self.forward_curves.insert(index, curve)
    }

    /// Builds the group.
    pub fn build(self) -> CurveGroupDefinition {
        CurveGroupDefinition {
            name: self.name,
            discount_curves: self.discount_curves,
            forward_curves: self.forward_curves,
        }
    }
}
