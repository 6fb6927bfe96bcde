//! Validated configuration scalars (zero-cost newtypes).
//!
//! A badge is configured once and drawn many times, so the ranges are
//! checked when the value is built and the layout code can trust them.

use std::fmt;

use crate::errors::BadgeError;

/// Why a raw value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value lies outside the accepted range
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::OutOfRange => write!(f, "value is out of range"),
        }
    }
}

impl std::error::Error for NumericError {}

fn finite(val: f32) -> Result<f32, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn unit_interval(val: f32) -> Result<f32, NumericError> {
    let val = finite(val)?;
    if (0.0..=1.0).contains(&val) {
        Ok(val)
    } else {
        Err(NumericError::OutOfRange)
    }
}

/// Size of the badge relative to the canvas, in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scale(f32);

impl Scale {
    pub const FULL: Scale = Scale(1.0);
    pub const HALF: Scale = Scale(0.5);

    pub fn try_new(value: f32) -> Result<Scale, BadgeError> {
        unit_interval(value)
            .map(Scale)
            .map_err(|reason| BadgeError::InvalidScale { value, reason })
    }

    #[inline]
    pub fn raw(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Scale {
    type Error = BadgeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Scale::try_new(value)
    }
}

/// Width to height ratio of the badge, strictly positive
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// Circles and squares
    pub const SQUARE: AspectRatio = AspectRatio(1.0);

    pub fn try_new(value: f32) -> Result<AspectRatio, BadgeError> {
        finite(value)
            .and_then(|v| if v > 0.0 { Ok(v) } else { Err(NumericError::OutOfRange) })
            .map(AspectRatio)
            .map_err(|reason| BadgeError::InvalidAspectRatio { value, reason })
    }

    #[inline]
    pub fn raw(self) -> f32 {
        self.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::SQUARE
    }
}

impl TryFrom<f32> for AspectRatio {
    type Error = BadgeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        AspectRatio::try_new(value)
    }
}

/// Fraction of half the shorter side used as corner radius, in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct RadiusFactor(f32);

impl RadiusFactor {
    pub const ZERO: RadiusFactor = RadiusFactor(0.0);

    pub fn try_new(value: f32) -> Result<RadiusFactor, BadgeError> {
        unit_interval(value)
            .map(RadiusFactor)
            .map_err(|reason| BadgeError::InvalidRadiusFactor { value, reason })
    }

    #[inline]
    pub fn raw(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f32> for RadiusFactor {
    type Error = BadgeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        RadiusFactor::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_accepts_unit_interval() {
        assert_eq!(Scale::try_new(0.0).map(Scale::raw), Ok(0.0));
        assert_eq!(Scale::try_new(0.5).map(Scale::raw), Ok(0.5));
        assert_eq!(Scale::try_new(1.0).map(Scale::raw), Ok(1.0));
    }

    #[test]
    fn scale_rejects_without_clamping() {
        assert_eq!(
            Scale::try_new(1.01),
            Err(BadgeError::InvalidScale {
                value: 1.01,
                reason: NumericError::OutOfRange
            })
        );
        assert!(matches!(
            Scale::try_new(-0.1),
            Err(BadgeError::InvalidScale { reason: NumericError::OutOfRange, .. })
        ));
        assert!(matches!(
            Scale::try_new(f32::NAN),
            Err(BadgeError::InvalidScale { reason: NumericError::NaN, .. })
        ));
    }

    #[test]
    fn aspect_ratio_must_be_positive() {
        assert!(AspectRatio::try_new(0.5).is_ok());
        assert!(AspectRatio::try_new(12.0).is_ok());
        assert!(matches!(
            AspectRatio::try_new(0.0),
            Err(BadgeError::InvalidAspectRatio { reason: NumericError::OutOfRange, .. })
        ));
        assert!(matches!(
            AspectRatio::try_new(-2.0),
            Err(BadgeError::InvalidAspectRatio { reason: NumericError::OutOfRange, .. })
        ));
        assert!(matches!(
            AspectRatio::try_new(f32::INFINITY),
            Err(BadgeError::InvalidAspectRatio { reason: NumericError::Infinite, .. })
        ));
    }

    #[test]
    fn radius_factor_range() {
        assert!(RadiusFactor::try_new(0.0).is_ok_and(RadiusFactor::is_zero));
        assert!(RadiusFactor::try_new(1.0).is_ok());
        assert!(matches!(
            RadiusFactor::try_new(1.5),
            Err(BadgeError::InvalidRadiusFactor { .. })
        ));
    }
}
