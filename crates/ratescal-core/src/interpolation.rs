//! Curve interpolator and extrapolator names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// =============================================================================
// INTERPOLATOR
// =============================================================================

/// Interpolation between the nodes of a calibrated curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveInterpolator {
    /// Linear on the curve values.
    Linear,
    /// Linear on the log of the curve values.
    LogLinear,
    /// Double quadratic (smooth, local).
    DoubleQuadratic,
    /// Natural cubic spline.
    NaturalCubicSpline,
    /// Natural spline with clamped ends.
    NaturalSpline,
    /// Natural spline on the log of the curve values.
    LogNaturalSpline,
    /// Linear on the product of value and time.
    ProductLinear,
    /// Piecewise constant, taking the upper node.
    StepUpper,
}

impl CurveInterpolator {
    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::LogLinear => "LogLinear",
            Self::DoubleQuadratic => "DoubleQuadratic",
            Self::NaturalCubicSpline => "NaturalCubicSpline",
            Self::NaturalSpline => "NaturalSpline",
            Self::LogNaturalSpline => "LogNaturalSpline",
            Self::ProductLinear => "ProductLinear",
            Self::StepUpper => "StepUpper",
        }
    }

    /// Returns whether the interpolant has continuous first derivatives.
    pub fn is_smooth(&self) -> bool {
        matches!(
            self,
            Self::DoubleQuadratic
                | Self::NaturalCubicSpline
                | Self::NaturalSpline
                | Self::LogNaturalSpline
        )
    }
}

impl fmt::Display for CurveInterpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CurveInterpolator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "LINEAR" => Ok(Self::Linear),
            "LOGLINEAR" => Ok(Self::LogLinear),
            "DOUBLEQUADRATIC" => Ok(Self::DoubleQuadratic),
            "NATURALCUBICSPLINE" => Ok(Self::NaturalCubicSpline),
            "NATURALSPLINE" => Ok(Self::NaturalSpline),
            "LOGNATURALSPLINE" => Ok(Self::LogNaturalSpline),
            "PRODUCTLINEAR" => Ok(Self::ProductLinear),
            "STEPUPPER" => Ok(Self::StepUpper),
            _ => Err(CoreError::UnknownInterpolator {
                name: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// EXTRAPOLATOR
// =============================================================================

/// Extrapolation beyond the first or last node of a calibrated curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveExtrapolator {
    /// Flat (last known value).
    Flat,
    /// Linear continuation of the end segment.
    Linear,
    /// Exponential decay.
    Exponential,
    /// Continue the interpolator's own formula.
    Interpolator,
    /// Linear on the log of the values.
    LogLinear,
    /// Linear on the product of value and time.
    ProductLinear,
    /// Quadratic towards zero, left side only.
    QuadraticLeft,
    /// No extrapolation; out of range queries fail.
    Exception,
}

impl CurveExtrapolator {
    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Linear => "Linear",
            Self::Exponential => "Exponential",
            Self::Interpolator => "Interpolator",
            Self::LogLinear => "LogLinear",
            Self::ProductLinear => "ProductLinear",
            Self::QuadraticLeft => "QuadraticLeft",
            Self::Exception => "Exception",
        }
    }
}

impl fmt::Display for CurveExtrapolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CurveExtrapolator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "FLAT" => Ok(Self::Flat),
            "LINEAR" => Ok(Self::Linear),
            "EXPONENTIAL" => Ok(Self::Exponential),
            "INTERPOLATOR" => Ok(Self::Interpolator),
            "LOGLINEAR" => Ok(Self::LogLinear),
            "PRODUCTLINEAR" => Ok(Self::ProductLinear),
            "QUADRATICLEFT" => Ok(Self::QuadraticLeft),
            "EXCEPTION" | "NONE" => Ok(Self::Exception),
            _ => Err(CoreError::UnknownExtrapolator {
                name: s.to_string(),
            }),
        }
    }
}

// "Log Linear", "log-linear" and "LogLinear" all name the same thing.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolator_spellings() {
        assert_eq!(
            "Linear".parse::<CurveInterpolator>().unwrap(),
            CurveInterpolator::Linear
        );
        assert_eq!(
            "log-linear".parse::<CurveInterpolator>().unwrap(),
            CurveInterpolator::LogLinear
        );
        assert_eq!(
            "Double Quadratic".parse::<CurveInterpolator>().unwrap(),
            CurveInterpolator::DoubleQuadratic
        );
        assert!("Cubic".parse::<CurveInterpolator>().is_err());
    }

    #[test]
    fn test_extrapolator_spellings() {
        assert_eq!(
            "flat".parse::<CurveExtrapolator>().unwrap(),
            CurveExtrapolator::Flat
        );
        assert_eq!(
            "Quadratic_Left".parse::<CurveExtrapolator>().unwrap(),
            CurveExtrapolator::QuadraticLeft
        );
        assert!(matches!(
            "Sideways".parse::<CurveExtrapolator>(),
            Err(CoreError::UnknownExtrapolator { .. })
        ));
    }

    #[test]
    fn test_interpolator_properties() {
        assert!(CurveInterpolator::NaturalCubicSpline.is_smooth());
        assert!(!CurveInterpolator::Linear.is_smooth());
    }
}
