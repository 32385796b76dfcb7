//! Panel file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use rotary_core::{Bounds, KnobGeometry, KnobOptions};

use crate::error::ConfigError;
use crate::knob_spec::KnobSpec;

/// A titled set of knobs loaded from TOML.
///
/// # TOML Format
///
/// ```toml
/// title = "Tone Stack"
///
/// [[knobs]]
/// label = "Bass"
/// diameter = 64.0
/// color = "#ff8000"
///
/// [[knobs]]
/// label = "Treble"
/// diameter = 64.0
/// color = "#40c0ff"
/// min = -12.0
/// max = 12.0
/// value = 0.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Panel {
    /// Window / panel title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Knobs in display order.
    #[serde(default)]
    pub knobs: Vec<KnobSpec>,
}

fn default_title() -> String {
    "Rotary".to_string()
}

impl Panel {
    /// Create an empty panel.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            knobs: Vec::new(),
        }
    }

    /// Add a knob.
    pub fn with_knob(mut self, knob: KnobSpec) -> Self {
        self.knobs.push(knob);
        self
    }

    /// The panel shown when no configuration file is available.
    pub fn demo() -> Self {
        Self::new("Rotary")
            .with_knob(
                KnobSpec::new(72.0, "#ff8000")
                    .with_label("Drive")
                    .with_base_color("#3a3a3a"),
            )
            .with_knob(
                KnobSpec::new(72.0, "#40c0ff")
                    .with_label("Tone")
                    .with_bounds(-12.0, 12.0)
                    .with_value(0.0),
            )
            .with_knob(
                KnobSpec::new(48.0, "#7cff6b")
                    .with_label("Mix")
                    .with_base_color("#202020")
                    .with_bounds(0.0, 1.0)
                    .with_value(0.75),
            )
    }

    /// Load a panel from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a panel from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the panel to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the panel to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Number of knobs.
    pub fn len(&self) -> usize {
        self.knobs.len()
    }

    /// Whether the panel has no knobs.
    pub fn is_empty(&self) -> bool {
        self.knobs.is_empty()
    }

    /// Check every knob and build its construction options.
    ///
    /// Fails on the first knob with a malformed colour, degenerate diameter,
    /// or empty/inverted range, and on panels without knobs.
    pub fn knob_options(&self) -> Result<Vec<KnobOptions>, ConfigError> {
        if self.knobs.is_empty() {
            return Err(ConfigError::EmptyPanel(self.title.clone()));
        }
        self.knobs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let invalid = |source| ConfigError::InvalidKnob {
                    index,
                    label: spec.display_label().to_string(),
                    source,
                };
                let options = spec.to_options().map_err(invalid)?;
                KnobGeometry::new(options.diameter).map_err(invalid)?;
                Bounds::new(options.min, options.max).map_err(invalid)?;
                Ok(options)
            })
            .collect()
    }

    /// Validate without keeping the options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.knob_options().map(|_| ())
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(default_title())
    }
}
