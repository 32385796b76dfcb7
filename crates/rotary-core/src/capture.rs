//! Exclusive pointer capture seam.
//!
//! While a drag is in progress the knob asks the host for exclusive,
//! relative pointer motion (pointer lock on the web, a locked cursor grab on
//! desktop). Capture is best effort: hosts may refuse, and the knob keeps
//! working on ordinary pointer deltas when they do.

use crate::CaptureError;

/// Host-side exclusive pointer capture.
pub trait PointerCapture {
    /// Request exclusive relative-motion capture.
    fn acquire(&mut self) -> Result<(), CaptureError>;

    /// Release capture obtained by [`acquire`](Self::acquire).
    fn release(&mut self) -> Result<(), CaptureError>;
}

/// Capture for hosts without one; both calls report [`CaptureError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&mut self) -> Result<(), CaptureError> {
        Err(CaptureError::Unsupported)
    }

    fn release(&mut self) -> Result<(), CaptureError> {
        Err(CaptureError::Unsupported)
    }
}
