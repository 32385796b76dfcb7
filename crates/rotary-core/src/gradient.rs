//! Conic gradient painted on the outline ring.
//!
//! Offsets are degrees measured clockwise from the conic origin, which sits
//! at the fully counter-clockwise end of travel (-150°). The ring shows the
//! indicator colour up to the current angle, the dark track colour for the
//! rest of travel, and nothing across the 60° dead zone.

use core::fmt;

use crate::Rgb;
use crate::angle::{MIN_ANGLE, TRAVEL};

/// Full circle, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Paint of one arc of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcFill {
    /// Opaque colour.
    Solid(Rgb),
    /// Not painted.
    Transparent,
}

/// One arc of the gradient, `[start, end)` in conic offset degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientArc {
    /// Start offset.
    pub start: f64,
    /// End offset; equal to `start` for an empty arc.
    pub end: f64,
    /// Paint.
    pub fill: ArcFill,
}

impl GradientArc {
    /// Angular extent in degrees.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `offset` lies in `[start, end)`.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Indicator / track / dead-zone gradient for a single knob angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineGradient {
    arcs: [GradientArc; 3],
}

impl OutlineGradient {
    /// Build the gradient for `angle` (degrees, knob convention).
    ///
    /// Angles outside the travel range (reachable only through
    /// [`Knob::set`](crate::Knob::set)) follow CSS colour-stop clamping:
    /// a stop never precedes the one before it.
    pub fn new(angle: f64, indicator: Rgb, dark: Rgb) -> Self {
        let fill_end = (angle - MIN_ANGLE).clamp(0.0, FULL_TURN);
        let track_end = TRAVEL.max(fill_end);
        Self {
            arcs: [
                GradientArc {
                    start: 0.0,
                    end: fill_end,
                    fill: ArcFill::Solid(indicator),
                },
                GradientArc {
                    start: fill_end,
                    end: track_end,
                    fill: ArcFill::Solid(dark),
                },
                GradientArc {
                    start: track_end,
                    end: FULL_TURN,
                    fill: ArcFill::Transparent,
                },
            ],
        }
    }

    /// The three arcs in order: indicator, track, dead zone.
    pub fn arcs(&self) -> &[GradientArc; 3] {
        &self.arcs
    }

    /// Paint at a conic offset, wrapped into `[0, 360)`.
    pub fn color_at(&self, offset: f64) -> ArcFill {
        let offset = offset.rem_euclid(FULL_TURN);
        self.arcs
            .iter()
            .find(|arc| arc.contains(offset))
            .map_or(ArcFill::Transparent, |arc| arc.fill)
    }

    /// Conic offset of the boundary between indicator and track.
    pub fn fill_end(&self) -> f64 {
        self.arcs[0].end
    }
}

/// Renders as CSS `conic-gradient(...)` text.
impl fmt::Display for OutlineGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conic-gradient(from {MIN_ANGLE}deg")?;
        for arc in &self.arcs {
            let color = match arc.fill {
                ArcFill::Solid(c) => c.to_string(),
                ArcFill::Transparent => "#00000000".to_string(),
            };
            write!(f, ", {color} {}deg, {color} {}deg", arc.start, arc.end)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IND: Rgb = Rgb::new(0xff, 0x80, 0x00);
    const DARK: Rgb = Rgb::new(0x47, 0x47, 0x47);

    #[test]
    fn centre_angle_splits_travel_in_half() {
        let g = OutlineGradient::new(0.0, IND, DARK);
        let [fill, track, dead] = *g.arcs();
        assert_eq!((fill.start, fill.end), (0.0, 150.0));
        assert_eq!((track.start, track.end), (150.0, 300.0));
        assert_eq!((dead.start, dead.end), (300.0, 360.0));
        assert_eq!(dead.fill, ArcFill::Transparent);
    }

    #[test]
    fn minimum_angle_has_empty_indicator_arc() {
        let g = OutlineGradient::new(MIN_ANGLE, IND, DARK);
        assert_eq!(g.arcs()[0].sweep(), 0.0);
        assert_eq!(g.color_at(0.0), ArcFill::Solid(DARK));
    }

    #[test]
    fn dead_zone_is_always_sixty_degrees_inside_travel() {
        for angle in [-150.0, -20.0, 0.0, 75.0, 150.0] {
            let g = OutlineGradient::new(angle, IND, DARK);
            assert_eq!(g.arcs()[2].sweep(), 60.0);
            assert_eq!(g.color_at(330.0), ArcFill::Transparent);
        }
    }

    #[test]
    fn overshoot_follows_css_stop_clamping() {
        let g = OutlineGradient::new(180.0, IND, DARK);
        assert_eq!(g.fill_end(), 330.0);
        assert_eq!(g.arcs()[1].sweep(), 0.0);
        assert_eq!(g.color_at(320.0), ArcFill::Solid(IND));

        let under = OutlineGradient::new(-400.0, IND, DARK);
        assert_eq!(under.fill_end(), 0.0);
        assert_eq!(under.color_at(10.0), ArcFill::Solid(DARK));
    }

    #[test]
    fn color_at_wraps_negative_offsets() {
        let g = OutlineGradient::new(0.0, IND, DARK);
        assert_eq!(g.color_at(-30.0), ArcFill::Transparent);
        assert_eq!(g.color_at(370.0), ArcFill::Solid(IND));
    }

    #[test]
    fn css_text() {
        let css = OutlineGradient::new(0.0, IND, DARK).to_string();
        assert!(css.starts_with("conic-gradient(from -150deg"), "got: {css}");
        assert!(css.contains("#ff8000 150deg, #474747 150deg"), "got: {css}");
        assert!(css.ends_with("#00000000 360deg)"), "got: {css}");
    }
}
