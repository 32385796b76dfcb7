//! Error types for knob construction and pointer capture.

use thiserror::Error;

/// Errors raised while constructing a [`Knob`](crate::Knob).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnobError {
    /// Colour string is not `#` followed by six hex digits.
    #[error("invalid color '{input}': {reason}")]
    InvalidColor {
        /// The rejected input, verbatim.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },

    /// Diameter is zero, negative, or not finite.
    #[error("invalid diameter {0}: must be a positive, finite number of pixels")]
    InvalidDiameter(f32),

    /// Bounds are not finite or `min >= max`.
    #[error("invalid bounds [{min}, {max}]: min must be less than max")]
    InvalidBounds {
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },
}

impl KnobError {
    /// Create an invalid colour error.
    pub fn invalid_color(input: impl Into<String>, reason: &'static str) -> Self {
        KnobError::InvalidColor {
            input: input.into(),
            reason,
        }
    }
}

/// Failure reported by a [`PointerCapture`](crate::PointerCapture) host.
///
/// The knob never surfaces these to its caller; they only reach the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The host refused the request (e.g. no user gesture, permission denied).
    #[error("pointer capture denied by host")]
    Denied,

    /// The host has no exclusive pointer capture.
    #[error("pointer capture unsupported")]
    Unsupported,

    /// Any other host-specific failure.
    #[error("pointer capture failed: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_display() {
        let err = KnobError::invalid_color("#12", "expected 6 hex digits");
        assert_eq!(err.to_string(), "invalid color '#12': expected 6 hex digits");
    }

    #[test]
    fn invalid_bounds_display() {
        let err = KnobError::InvalidBounds {
            min: 10.0,
            max: 1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("[10, 1]"), "got: {msg}");
    }

    #[test]
    fn invalid_diameter_display() {
        let msg = KnobError::InvalidDiameter(-2.0).to_string();
        assert!(msg.starts_with("invalid diameter -2"), "got: {msg}");
    }

    #[test]
    fn capture_host_display() {
        let err = CaptureError::Host("no window".to_string());
        assert_eq!(err.to_string(), "pointer capture failed: no window");
    }
}
