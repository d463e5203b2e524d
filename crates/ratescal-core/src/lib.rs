//! # Ratescal Core
//!
//! Data model for rates curve calibration sets.
//!
//! A calibration set names a number of curves, gives each curve its settings
//! and calibration instruments ("nodes"), and bundles the curves into groups
//! where each curve discounts a currency or projects a rate index. This crate
//! holds those definitions; loading them from files lives in `ratescal-csv`.
//!
//! - **Types**: `CurveName`, `CurveGroupName`, `Currency`, `RateIndex`,
//!   `Period`, `QuoteId`
//! - **Curve settings**: `ValueType`, `DayCount`, interpolators and extrapolators
//! - **Conventions**: instrument conventions and the `ConventionSource` lookup
//! - **Curves**: `CurveNode`, `CurveRole`, `NodalCurveDefinition`,
//!   `CurveGroupDefinition`
//!
//! ## Example
//!
//! ```rust
//! use ratescal_core::prelude::*;
//!
//! let settings = CurveSettings {
//!     value_type: ValueType::ZeroRate,
//!     day_count: DayCount::Act365F,
//!     interpolator: CurveInterpolator::Linear,
//!     left_extrapolator: CurveExtrapolator::Flat,
//!     right_extrapolator: CurveExtrapolator::Flat,
//! };
//! let curve = settings.create_definition(CurveName::new("USD-Disc"), Vec::new());
//!
//! let mut group = CurveGroupDefinition::builder(CurveGroupName::new("Default"));
//! group.add_discount_curve(Currency::USD, curve);
//! assert!(group.build().discount_curve(Currency::USD).is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod conventions;
pub mod curve;
pub mod daycount;
pub mod error;
pub mod interpolation;
pub mod types;
pub mod value_type;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::conventions::{ConventionRegistry, ConventionSource};
    pub use crate::curve::{
        CurveGroupDefinition, CurveGroupDefinitionBuilder, CurveNode, CurveRole, CurveSettings,
        NodalCurveDefinition, NodeKind,
    };
    pub use crate::daycount::DayCount;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::interpolation::{CurveExtrapolator, CurveInterpolator};
    pub use crate::types::{
        Currency, CurveGroupName, CurveName, FieldName, Period, QuoteId, RateIndex, StandardId,
    };
    pub use crate::value_type::ValueType;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, CurveGroupName, CurveName, Period, RateIndex};
