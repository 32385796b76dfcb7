//! Rotary Core - headless model of a rotary knob widget
//!
//! This crate holds everything about a knob that does not depend on a GUI
//! toolkit: the mapping between rotation and value, the colours derived from
//! the base colour, the outline gradient, and the drag state machine that
//! turns pointer and wheel input into value changes.
//!
//! # Core Abstractions
//!
//! - [`Knob`] - Stateful knob driven by [`KnobEvent`]s
//! - [`Bounds`] - Linear map between [-150°, 150°] and `[min, max]`
//! - [`Rgb`] / [`Shading`] - Colour parsing and bevel/track shading
//! - [`OutlineGradient`] - Conic gradient of the outline ring
//! - [`PointerCapture`] - Host seam for exclusive pointer capture
//! - [`Listeners`] - Ordered change subscriptions
//!
//! # Example
//!
//! ```rust
//! use rotary_core::{Knob, KnobEvent, KnobOptions, Rgb};
//!
//! let indicator: Rgb = "#ff8000".parse().unwrap();
//! let mut knob = Knob::new(KnobOptions::new(64.0, indicator).bounds(0.0, 10.0).value(5.0)).unwrap();
//! assert_eq!(knob.angle(), 0.0);
//!
//! knob.on_change(|v| println!("value: {v}"));
//! knob.handle(KnobEvent::PointerDown);
//! knob.handle(KnobEvent::PointerMove { movement_y: -30.0 });
//! knob.handle(KnobEvent::PointerUp);
//! assert_eq!(knob.angle(), 30.0);
//! ```
//!
//! # Tracing
//!
//! Enable the `tracing` feature to get debug events for construction,
//! capture failures and teardown.

pub mod angle;
mod capture;
pub mod color;
mod error;
pub mod geometry;
pub mod gradient;
mod knob;
mod listeners;

pub use angle::{Bounds, MAX_ANGLE, MIN_ANGLE, TRAVEL, clamp_angle};
pub use capture::{NoCapture, PointerCapture};
pub use color::{Rgb, Shading};
pub use error::{CaptureError, KnobError};
pub use geometry::KnobGeometry;
pub use gradient::{ArcFill, GradientArc, OutlineGradient};
pub use knob::{DragState, Knob, KnobEvent, KnobOptions};
pub use listeners::{Listeners, SubscriptionId};
