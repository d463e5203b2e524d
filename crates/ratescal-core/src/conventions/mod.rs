//! Market conventions for curve calibration instruments.
//!
//! A convention fixes everything about an instrument except its dates and
//! rate: the index it references, day counts and leg frequencies. Curve node
//! rows refer to conventions by name; a [`ConventionSource`] resolves the name
//! for the instrument kind of the row.
//!
//! # Example
//!
//! ```rust
//! use ratescal_core::conventions::{ConventionRegistry, ConventionSource};
//!
//! let registry = ConventionRegistry::standard();
//! let fra = registry.fra("USD-LIBOR-3M").unwrap();
//! assert_eq!(fra.index.to_string(), "USD-LIBOR-3M");
//! ```

mod registry;

pub use registry::ConventionRegistry;

use serde::{Deserialize, Serialize};

use crate::daycount::DayCount;
use crate::error::{CoreError, CoreResult};
use crate::types::{Period, RateIndex};

/// Resolves convention names to conventions, one lookup per instrument kind.
///
/// Each lookup fails with [`CoreError::UnknownConvention`] when the name is
/// not known for that kind.
pub trait ConventionSource {
    /// Looks up an IBOR fixing deposit convention.
    fn ibor_fixing_deposit(&self, name: &str) -> CoreResult<IborFixingDepositConvention>;

    /// Looks up a FRA convention.
    fn fra(&self, name: &str) -> CoreResult<FraConvention>;

    /// Looks up a fixed vs overnight swap convention.
    fn fixed_overnight_swap(&self, name: &str) -> CoreResult<FixedOvernightSwapConvention>;

    /// Looks up a fixed vs IBOR swap convention.
    fn fixed_ibor_swap(&self, name: &str) -> CoreResult<FixedIborSwapConvention>;

    /// Looks up an IBOR vs IBOR basis swap convention.
    fn ibor_ibor_swap(&self, name: &str) -> CoreResult<IborIborSwapConvention>;
}

fn require_ibor(name: &str, index: &RateIndex) -> CoreResult<()> {
    if index.is_overnight() {
        return Err(CoreError::invalid_convention(
            name,
            format!("index {} is not a term index", index),
        ));
    }
    Ok(())
}

/// Convention for a deposit whose rate is an IBOR fixing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IborFixingDepositConvention {
    /// Convention name.
    pub name: String,
    /// The fixing index; always a term index.
    pub index: RateIndex,
    /// Accrual day count.
    pub day_count: DayCount,
    /// Business days from trade to start.
    pub spot_days: u32,
}

impl IborFixingDepositConvention {
    /// Creates the convention, rejecting overnight indices.
    pub fn new(
        name: impl Into<String>,
        index: RateIndex,
        day_count: DayCount,
        spot_days: u32,
    ) -> CoreResult<Self> {
        let name = name.into();
        require_ibor(&name, &index)?;
        Ok(Self {
            name,
            index,
            day_count,
            spot_days,
        })
    }

    /// Deposit term, equal to the tenor of the index.
    pub fn deposit_period(&self) -> CoreResult<Period> {
        self.index.tenor().ok_or_else(|| {
            CoreError::invalid_convention(&self.name, "index has no tenor for the deposit term")
        })
    }
}

/// Convention for a forward rate agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraConvention {
    /// Convention name.
    pub name: String,
    /// The settlement index; always a term index.
    pub index: RateIndex,
    /// Accrual day count.
    pub day_count: DayCount,
    /// Business days from trade to spot.
    pub spot_days: u32,
}

impl FraConvention {
    /// Creates the convention, rejecting overnight indices.
    pub fn new(
        name: impl Into<String>,
        index: RateIndex,
        day_count: DayCount,
        spot_days: u32,
    ) -> CoreResult<Self> {
        let name = name.into();
        require_ibor(&name, &index)?;
        Ok(Self {
            name,
            index,
            day_count,
            spot_days,
        })
    }
}

/// Convention for a fixed vs compounded overnight swap (OIS).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedOvernightSwapConvention {
    /// Convention name.
    pub name: String,
    /// The overnight index of the floating leg.
    pub index: RateIndex,
    /// Day count of the fixed leg.
    pub fixed_day_count: DayCount,
    /// Payment frequency of both legs.
    pub payment_frequency: Period,
}

impl FixedOvernightSwapConvention {
    /// Creates the convention, rejecting term indices.
    pub fn new(
        name: impl Into<String>,
        index: RateIndex,
        fixed_day_count: DayCount,
        payment_frequency: Period,
    ) -> CoreResult<Self> {
        let name = name.into();
        if !index.is_overnight() {
            return Err(CoreError::invalid_convention(
                name,
                format!("index {} is not an overnight index", index),
            ));
        }
        Ok(Self {
            name,
            index,
            fixed_day_count,
            payment_frequency,
        })
    }
}

/// Convention for a fixed vs IBOR swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedIborSwapConvention {
    /// Convention name.
    pub name: String,
    /// The index of the floating leg; always a term index.
    pub index: RateIndex,
    /// Day count of the fixed leg.
    pub fixed_day_count: DayCount,
    /// Accrual frequency of the fixed leg.
    pub fixed_frequency: Period,
}

impl FixedIborSwapConvention {
    /// Creates the convention, rejecting overnight indices.
    pub fn new(
        name: impl Into<String>,
        index: RateIndex,
        fixed_day_count: DayCount,
        fixed_frequency: Period,
    ) -> CoreResult<Self> {
        let name = name.into();
        require_ibor(&name, &index)?;
        Ok(Self {
            name,
            index,
            fixed_day_count,
            fixed_frequency,
        })
    }
}

/// Convention for an IBOR vs IBOR basis swap, spread paid on the first leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IborIborSwapConvention {
    /// Convention name.
    pub name: String,
    /// Index of the leg carrying the spread.
    pub spread_index: RateIndex,
    /// Index of the flat leg.
    pub flat_index: RateIndex,
}

impl IborIborSwapConvention {
    /// Creates the convention. Both legs must be term indices in one currency.
    pub fn new(
        name: impl Into<String>,
        spread_index: RateIndex,
        flat_index: RateIndex,
    ) -> CoreResult<Self> {
        let name = name.into();
        require_ibor(&name, &spread_index)?;
        require_ibor(&name, &flat_index)?;
        if spread_index.currency() != flat_index.currency() {
            return Err(CoreError::invalid_convention(
                name,
                "basis swap legs must share a currency",
            ));
        }
        Ok(Self {
            name,
            spread_index,
            flat_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(name: &str) -> RateIndex {
        RateIndex::parse(name).unwrap()
    }

    #[test]
    fn test_deposit_period_from_index() {
        let conv = IborFixingDepositConvention::new(
            "USD-LIBOR-6M",
            index("USD-LIBOR-6M"),
            DayCount::Act360,
            2,
        )
        .unwrap();
        assert_eq!(conv.deposit_period().unwrap(), Period::of_months(6));
    }

    #[test]
    fn test_index_kind_checked() {
        assert!(FraConvention::new("X", index("USD-FED-FUND"), DayCount::Act360, 2).is_err());
        assert!(FixedOvernightSwapConvention::new(
            "X",
            index("USD-LIBOR-3M"),
            DayCount::Act360,
            Period::of_years(1)
        )
        .is_err());
    }

    #[test]
    fn test_basis_currency_checked() {
        let err =
            IborIborSwapConvention::new("X", index("USD-LIBOR-3M"), index("EUR-EURIBOR-6M"))
                .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConvention { .. }));
    }
}
