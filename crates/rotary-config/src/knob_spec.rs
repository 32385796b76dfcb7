//! Serializable description of a single knob.

use rotary_core::{KnobError, KnobOptions, Rgb};
use serde::{Deserialize, Serialize};

/// One knob as written in a panel file.
///
/// Colours stay as text so that files round-trip exactly as written;
/// they are parsed by [`KnobSpec::to_options`].
///
/// # TOML Format
///
/// ```toml
/// [[knobs]]
/// label = "Drive"
/// diameter = 64.0
/// color = "#ff8000"
/// base_color = "#3a3a3a"
/// min = 0.0
/// max = 10.0
/// value = 2.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnobSpec {
    /// Caption shown under the knob.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Base disc diameter in pixels.
    pub diameter: f32,

    /// Indicator colour, `#rrggbb`.
    pub color: String,

    /// Base disc colour, `#rrggbb`.
    #[serde(default = "default_base_color")]
    pub base_color: String,

    /// Lower bound.
    #[serde(default = "default_min")]
    pub min: f64,

    /// Upper bound.
    #[serde(default = "default_max")]
    pub max: f64,

    /// Initial value.
    #[serde(default = "default_value")]
    pub value: f64,
}

fn default_base_color() -> String {
    "#777777".to_string()
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    100.0
}

fn default_value() -> f64 {
    50.0
}

impl KnobSpec {
    /// Create a knob spec with default base colour, range 0–100 and value 50.
    pub fn new(diameter: f32, color: impl Into<String>) -> Self {
        Self {
            label: None,
            diameter,
            color: color.into(),
            base_color: default_base_color(),
            min: default_min(),
            max: default_max(),
            value: default_value(),
        }
    }

    /// Set the caption.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the base colour.
    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = color.into();
        self
    }

    /// Set the range.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Caption, or `"unnamed"`.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("unnamed")
    }

    /// Parse colours and build construction options.
    ///
    /// Diameter and bounds are validated when the knob is built.
    pub fn to_options(&self) -> Result<KnobOptions, KnobError> {
        let indicator: Rgb = self.color.parse()?;
        let base: Rgb = self.base_color.parse()?;
        Ok(KnobOptions::new(self.diameter, indicator)
            .base_color(base)
            .bounds(self.min, self.max)
            .value(self.value))
    }
}
