//! Domain types for calibration sets.

mod currency;
mod ids;
mod index;
mod period;

pub use currency::Currency;
pub use ids::{CurveGroupName, CurveName, FieldName, QuoteId, StandardId};
pub use index::RateIndex;
pub use period::Period;
