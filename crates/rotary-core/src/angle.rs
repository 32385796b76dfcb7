//! Mapping between knob rotation and the bound numeric range.
//!
//! The knob travels 300 degrees, from -150° (fully counter-clockwise) to
//! +150° (fully clockwise), with 0° pointing straight up. The 60° wedge at
//! the bottom is dead travel and is never reachable by relative input.
//!
//! ```text
//!               0°
//!               |
//!   -90° ------ o ------ +90°
//!              / \
//!         -150°   +150°
//!            (dead)
//! ```

use crate::KnobError;

/// Fully counter-clockwise rotation, in degrees.
pub const MIN_ANGLE: f64 = -150.0;

/// Fully clockwise rotation, in degrees.
pub const MAX_ANGLE: f64 = 150.0;

/// Total rotational travel, in degrees.
pub const TRAVEL: f64 = MAX_ANGLE - MIN_ANGLE;

/// Wheel deltas are divided by this before being applied as degrees.
pub const WHEEL_DIVISOR: f64 = 10.0;

/// Clamp an angle into [`MIN_ANGLE`, `MAX_ANGLE`].
#[inline]
pub fn clamp_angle(angle: f64) -> f64 {
    angle.clamp(MIN_ANGLE, MAX_ANGLE)
}

/// Numeric range a knob's travel maps onto.
///
/// Always satisfies `min < max` with both bounds finite; see [`Bounds::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl Bounds {
    /// Create a range, rejecting non-finite or inverted/empty bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, KnobError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(KnobError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Linear map from [-150, 150] degrees to [min, max].
    #[inline]
    pub fn knob_to_value(&self, angle: f64) -> f64 {
        ((angle - MIN_ANGLE) / TRAVEL) * (self.max - self.min) + self.min
    }

    /// Inverse of [`knob_to_value`](Self::knob_to_value).
    ///
    /// Not clamped: values outside `[min, max]` yield angles outside the
    /// travel range.
    #[inline]
    pub fn value_to_angle(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * TRAVEL + MIN_ANGLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_centre_is_zero_degrees() {
        let b = Bounds::default();
        assert_eq!(b.value_to_angle(50.0), 0.0);
        assert_eq!(b.knob_to_value(0.0), 50.0);
    }

    #[test]
    fn ends_of_travel() {
        let b = Bounds::new(-12.0, 12.0).unwrap();
        assert_eq!(b.knob_to_value(MIN_ANGLE), -12.0);
        assert_eq!(b.knob_to_value(MAX_ANGLE), 12.0);
        assert_eq!(b.value_to_angle(-12.0), MIN_ANGLE);
        assert_eq!(b.value_to_angle(12.0), MAX_ANGLE);
    }

    #[test]
    fn out_of_range_value_is_not_clamped() {
        let b = Bounds::default();
        assert_eq!(b.value_to_angle(150.0), 300.0);
        assert_eq!(b.value_to_angle(-50.0), -300.0);
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp_angle(-151.0), MIN_ANGLE);
        assert_eq!(clamp_angle(1e9), MAX_ANGLE);
        assert_eq!(clamp_angle(12.5), 12.5);
    }

    #[test]
    fn rejects_inverted_and_empty_bounds() {
        assert!(Bounds::new(5.0, 5.0).is_err());
        assert!(Bounds::new(10.0, 0.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
    }
}
