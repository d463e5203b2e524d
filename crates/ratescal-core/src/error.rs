//! Error types for the Ratescal core model.
//!
//! These are the failures raised while turning configuration text into model
//! values: unknown reference data names and unresolvable conventions.

use thiserror::Error;

use crate::curve::NodeKind;

/// A specialized Result type for core model operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core model operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Currency code is not a supported ISO 4217 code.
    #[error("Unknown currency: '{code}'")]
    UnknownCurrency {
        /// The unrecognised code.
        code: String,
    },

    /// Rate index name could not be parsed.
    #[error("Invalid rate index '{name}': {reason}")]
    InvalidRateIndex {
        /// The index name as written.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Day count name is not recognised.
    #[error("Unknown day count: '{name}'")]
    UnknownDayCount {
        /// The unrecognised name.
        name: String,
    },

    /// Interpolator name is not recognised.
    #[error("Unknown curve interpolator: '{name}'")]
    UnknownInterpolator {
        /// The unrecognised name.
        name: String,
    },

    /// Extrapolator name is not recognised.
    #[error("Unknown curve extrapolator: '{name}'")]
    UnknownExtrapolator {
        /// The unrecognised name.
        name: String,
    },

    /// Value type is neither a zero rate nor a discount factor.
    #[error("Unknown value type: '{name}', expected 'zero' or 'df'")]
    UnknownValueType {
        /// The unrecognised name.
        name: String,
    },

    /// No convention of the requested kind is registered under the name.
    #[error("Unknown {kind} convention: '{name}'")]
    UnknownConvention {
        /// Instrument kind the convention was requested for.
        kind: NodeKind,
        /// The convention name.
        name: String,
    },

    /// A convention exists but cannot be used the way it was requested.
    #[error("Invalid convention '{name}': {reason}")]
    InvalidConvention {
        /// The convention name.
        name: String,
        /// Why it is unusable.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid rate index error.
    #[must_use]
    pub fn invalid_rate_index(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRateIndex {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::UnknownConvention {
            kind,
            name: name.into(),
        }
    }

    /// Creates an invalid convention error.
    #[must_use]
    pub fn invalid_convention(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConvention {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
