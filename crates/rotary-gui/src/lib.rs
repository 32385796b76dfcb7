//! Rotary GUI - egui rendering and input for rotary knobs
//!
//! This crate paints a [`rotary_core::Knob`] with egui and feeds egui input
//! back into it, provides cursor capture through egui viewport commands, and
//! ships a small eframe demo application driven by a TOML panel file.

pub mod app;
pub mod capture;
pub mod widgets;

pub use app::{RotaryApp, load_panel};
pub use capture::EguiCapture;
pub use widgets::KnobWidget;
