//! Knob widgets for egui.
//!
//! - [`KnobWidget`] — Paints a [`Knob`](rotary_core::Knob) and drives it from
//!   drag and scroll input

mod knob;

pub use knob::{KnobWidget, color32};
