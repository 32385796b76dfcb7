//! Layer sizes derived from the knob diameter.

use crate::KnobError;

/// Extra pixels the outline ring extends beyond the base disc (2 px per side).
pub const OUTLINE_GROWTH: f32 = 4.0;

/// Sizes of the three layers: outline ring, base disc, indicator mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobGeometry {
    diameter: f32,
}

impl KnobGeometry {
    /// Validate and store the base diameter in pixels.
    pub fn new(diameter: f32) -> Result<Self, KnobError> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(KnobError::InvalidDiameter(diameter));
        }
        Ok(Self { diameter })
    }

    /// Base disc diameter; also the surface's box size.
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Outline ring diameter.
    pub fn outline_diameter(&self) -> f32 {
        self.diameter + OUTLINE_GROWTH
    }

    /// Indicator mark width (`d / 16`).
    pub fn indicator_width(&self) -> f32 {
        self.diameter / 16.0
    }

    /// Indicator mark length (`d / 2`), running from the rim to the centre.
    pub fn indicator_length(&self) -> f32 {
        self.diameter / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_sizes() {
        let g = KnobGeometry::new(64.0).unwrap();
        assert_eq!(g.outline_diameter(), 68.0);
        assert_eq!(g.indicator_width(), 4.0);
        assert_eq!(g.indicator_length(), 32.0);
    }

    #[test]
    fn rejects_degenerate_diameter() {
        assert!(KnobGeometry::new(0.0).is_err());
        assert!(KnobGeometry::new(-1.0).is_err());
        assert!(KnobGeometry::new(f32::NAN).is_err());
    }
}
