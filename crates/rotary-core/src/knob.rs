//! The knob model: rotation state, drag state machine, and change listeners.
//!
//! [`Knob`] knows nothing about any GUI toolkit. Hosts translate their input
//! into [`KnobEvent`]s, feed them to [`Knob::handle`], and paint from
//! [`Knob::angle`], [`Knob::outline`], [`Knob::geometry`] and
//! [`Knob::shading`] every frame.
//!
//! # State machine
//!
//! ```text
//!            PointerDown (acquire capture)
//!   Idle ─────────────────────────────────► Dragging
//!    ▲                                         │
//!    └─────────────────────────────────────────┘
//!      PointerUp (release) / CaptureLost
//! ```
//!
//! `Wheel` adjusts the angle in either state and always notifies.
//! `PointerMove` is only honoured while dragging and notifies only when the
//! clamped angle differs from the one recorded after the previous move.

use core::fmt;

use crate::angle::{Bounds, WHEEL_DIVISOR, clamp_angle};
use crate::capture::{NoCapture, PointerCapture};
use crate::color::{DEFAULT_BASE, Rgb, Shading};
use crate::geometry::KnobGeometry;
use crate::gradient::OutlineGradient;
use crate::listeners::{Listeners, SubscriptionId};
use crate::{CaptureError, KnobError};

/// Construction parameters for a [`Knob`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobOptions {
    /// Base disc diameter in pixels.
    pub diameter: f32,
    /// Indicator mark and filled-arc colour.
    pub indicator: Rgb,
    /// Base disc colour; shading is derived from it.
    pub base: Rgb,
    /// Lower bound of the value range.
    pub min: f64,
    /// Upper bound of the value range.
    pub max: f64,
    /// Initial value.
    pub value: f64,
}

impl KnobOptions {
    /// Options with a grey base, range 0–100 and initial value 50.
    pub fn new(diameter: f32, indicator: Rgb) -> Self {
        Self {
            diameter,
            indicator,
            base: DEFAULT_BASE,
            min: 0.0,
            max: 100.0,
            value: 50.0,
        }
    }

    /// Set the base colour.
    pub fn base_color(mut self, base: Rgb) -> Self {
        self.base = base;
        self
    }

    /// Set the value range.
    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the initial value.
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}

/// Host input, already reduced to what the knob cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobEvent {
    /// Primary pointer pressed on the knob surface.
    PointerDown,
    /// Primary pointer released.
    PointerUp,
    /// Relative pointer motion; positive `movement_y` is downward.
    PointerMove {
        /// Vertical motion in pixels since the previous move.
        movement_y: f64,
    },
    /// Scroll over the surface; positive `delta_y` scrolls down.
    Wheel {
        /// Vertical scroll delta in pixels.
        delta_y: f64,
    },
    /// The host lost the drag without a pointer-up (focus change, capture
    /// revoked, button released outside the surface).
    CaptureLost,
}

/// Whether a drag session is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Between pointer-down and pointer-up.
    Dragging,
}

/// A rotary knob bound to a numeric range.
pub struct Knob {
    geometry: KnobGeometry,
    indicator: Rgb,
    base: Rgb,
    shading: Shading,
    bounds: Bounds,
    raw_angle: f64,
    last_raw_angle: f64,
    drag: DragState,
    capture: Box<dyn PointerCapture>,
    capture_held: bool,
    listeners: Listeners,
    disposed: bool,
}

impl fmt::Debug for Knob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Knob")
            .field("geometry", &self.geometry)
            .field("indicator", &self.indicator)
            .field("base", &self.base)
            .field("bounds", &self.bounds)
            .field("raw_angle", &self.raw_angle)
            .field("drag", &self.drag)
            .field("capture_held", &self.capture_held)
            .field("listeners", &self.listeners)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl Knob {
    /// Validate `options` and build a knob showing `options.value`.
    pub fn new(options: KnobOptions) -> Result<Self, KnobError> {
        let geometry = KnobGeometry::new(options.diameter)?;
        let bounds = Bounds::new(options.min, options.max)?;

        let mut knob = Self {
            geometry,
            indicator: options.indicator,
            base: options.base,
            shading: Shading::from_base(options.base),
            bounds,
            raw_angle: 0.0,
            last_raw_angle: 0.0,
            drag: DragState::Idle,
            capture: Box::new(NoCapture),
            capture_held: false,
            listeners: Listeners::new(),
            disposed: false,
        };
        knob.set(options.value);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            diameter = options.diameter,
            min = options.min,
            max = options.max,
            angle = knob.raw_angle,
            "knob created"
        );
        Ok(knob)
    }

    /// Install the host's pointer capture.
    pub fn with_capture(mut self, capture: Box<dyn PointerCapture>) -> Self {
        self.set_capture(capture);
        self
    }

    /// Replace the pointer capture. Capture held by the previous one is released.
    pub fn set_capture(&mut self, capture: Box<dyn PointerCapture>) {
        if self.capture_held {
            self.release_capture();
        }
        self.capture = capture;
    }

    /// Move to `value` without notifying listeners.
    ///
    /// The value is not clamped to the bounds, so out-of-range values place
    /// the knob beyond its travel until the next relative adjustment.
    /// Non-finite values are ignored.
    pub fn set(&mut self, value: f64) {
        if !value.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::warn!(value, "ignoring non-finite knob value");
            return;
        }
        self.raw_angle = self.bounds.value_to_angle(value);
    }

    /// Feed one input event. Returns the value passed to listeners, if any ran.
    pub fn handle(&mut self, event: KnobEvent) -> Option<f64> {
        if self.disposed {
            return None;
        }
        match event {
            KnobEvent::PointerDown => {
                self.drag = DragState::Dragging;
                if !self.capture_held {
                    self.acquire_capture();
                }
                None
            }
            KnobEvent::PointerUp => {
                self.drag = DragState::Idle;
                self.release_capture();
                None
            }
            KnobEvent::CaptureLost => {
                #[cfg(feature = "tracing")]
                tracing::debug!(was = ?self.drag, "pointer capture lost");
                self.drag = DragState::Idle;
                if self.capture_held {
                    self.release_capture();
                }
                None
            }
            KnobEvent::Wheel { delta_y } => {
                if !delta_y.is_finite() {
                    return None;
                }
                self.raw_angle = clamp_angle(self.raw_angle - delta_y / WHEEL_DIVISOR);
                Some(self.emit())
            }
            KnobEvent::PointerMove { movement_y } => {
                if self.drag != DragState::Dragging || !movement_y.is_finite() {
                    return None;
                }
                self.raw_angle = clamp_angle(self.raw_angle - movement_y);
                let fired = (self.raw_angle != self.last_raw_angle).then(|| self.emit());
                self.last_raw_angle = self.raw_angle;
                fired
            }
        }
    }

    /// Subscribe to value changes caused by user input.
    pub fn on_change(&mut self, callback: impl FnMut(f64) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    /// Remove a subscription. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Release held capture, drop all listeners, and ignore further events.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if self.capture_held || self.drag == DragState::Dragging {
            self.release_capture();
        }
        self.drag = DragState::Idle;
        self.listeners.clear();
        self.disposed = true;

        #[cfg(feature = "tracing")]
        tracing::debug!("knob disposed");
    }

    /// Current value, mapped from the angle onto the bounds.
    pub fn value(&self) -> f64 {
        self.bounds.knob_to_value(self.raw_angle)
    }

    /// Current rotation in degrees, clockwise from 12 o'clock.
    pub fn angle(&self) -> f64 {
        self.raw_angle
    }

    /// Value range.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Outline ring gradient for the current angle.
    pub fn outline(&self) -> OutlineGradient {
        OutlineGradient::new(self.raw_angle, self.indicator, self.shading.dark)
    }

    /// Layer sizes.
    pub fn geometry(&self) -> KnobGeometry {
        self.geometry
    }

    /// Indicator colour.
    pub fn indicator_color(&self) -> Rgb {
        self.indicator
    }

    /// Base disc colour.
    pub fn base_color(&self) -> Rgb {
        self.base
    }

    /// Colours derived from the base colour.
    pub fn shading(&self) -> Shading {
        self.shading
    }

    /// Drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Whether the host granted pointer capture for the current drag.
    pub fn capture_held(&self) -> bool {
        self.capture_held
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self) -> f64 {
        let value = self.value();
        self.listeners.notify(value);
        value
    }

    fn acquire_capture(&mut self) {
        match self.capture.acquire() {
            Ok(()) => self.capture_held = true,
            Err(err) => Self::capture_failed("acquire", &err),
        }
    }

    fn release_capture(&mut self) {
        self.capture_held = false;
        if let Err(err) = self.capture.release() {
            Self::capture_failed("release", &err);
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn capture_failed(op: &'static str, err: &CaptureError) {
        #[cfg(feature = "tracing")]
        tracing::debug!(op, error = %err, "pointer capture unavailable");
    }
}

impl Drop for Knob {
    fn drop(&mut self) {
        self.dispose();
    }
}
