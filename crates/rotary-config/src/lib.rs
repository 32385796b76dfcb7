//! Configuration for rotary knob panels.
//!
//! A panel is a titled list of knobs stored as TOML. Each entry describes
//! how one [`Knob`](rotary_core::Knob) is constructed: diameter, colours,
//! range and initial value. Knob values are never written back; files only
//! describe construction.
//!
//! # Example
//!
//! ```rust,no_run
//! use rotary_config::{KnobSpec, Panel, paths};
//!
//! let panel = Panel::new("Mixer")
//!     .with_knob(KnobSpec::new(64.0, "#ff8000").with_label("Gain"));
//! panel.save(paths::default_panel_path()).unwrap();
//!
//! let loaded = Panel::load(paths::default_panel_path()).unwrap();
//! for options in loaded.knob_options().unwrap() {
//!     println!("{options:?}");
//! }
//! ```

mod error;
mod knob_spec;
mod panel;

/// Platform-specific paths for panel files.
pub mod paths;

pub use error::ConfigError;
pub use knob_spec::KnobSpec;
pub use panel::Panel;
pub use paths::{default_panel_path, ensure_user_config_dir, resolve_panel_path, user_config_dir};
