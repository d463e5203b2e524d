//! Roles a curve plays within a curve group.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Currency, CurveGroupName, RateIndex};

/// How a curve is used within a group.
///
/// A curve may carry several roles, in one group or across groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveRole {
    /// Discount curve for a currency.
    Discount {
        /// The discounted currency.
        currency: Currency,
        /// The group the role belongs to.
        group: CurveGroupName,
    },
    /// Forward curve for a rate index.
    Forward {
        /// The projected index.
        index: RateIndex,
        /// The group the role belongs to.
        group: CurveGroupName,
    },
}

impl CurveRole {
    /// Creates a discount role.
    pub fn discount(currency: Currency, group: impl Into<CurveGroupName>) -> Self {
        CurveRole::Discount {
            currency,
            group: group.into(),
        }
    }

    /// Creates a forward role.
    pub fn forward(index: RateIndex, group: impl Into<CurveGroupName>) -> Self {
        CurveRole::Forward {
            index,
            group: group.into(),
        }
    }

    /// Returns the group the role belongs to.
    #[must_use]
    pub fn group(&self) -> &CurveGroupName {
        match self {
            CurveRole::Discount { group, .. } | CurveRole::Forward { group, .. } => group,
        }
    }

    /// Short name of the role kind, `discount` or `forward`.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            CurveRole::Discount { .. } => "discount",
            CurveRole::Forward { .. } => "forward",
        }
    }

    /// The currency or index the role is keyed by, as text.
    #[must_use]
    pub fn reference(&self) -> String {
        match self {
            CurveRole::Discount { currency, .. } => currency.to_string(),
            CurveRole::Forward { index, .. } => index.to_string(),
        }
    }
}

impl fmt::Display for CurveRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group(), self.kind_name(), self.reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let role = CurveRole::discount(Currency::USD, "Default");
        assert_eq!(role.to_string(), "Default:discount:USD");

        let index = RateIndex::parse("USD-LIBOR-3M").unwrap();
        let role = CurveRole::forward(index, "Default");
        assert_eq!(role.kind_name(), "forward");
        assert_eq!(role.group().as_str(), "Default");
        assert_eq!(role.reference(), "USD-LIBOR-3M");
    }
}
