//! Pointer capture backed by egui viewport commands.

use egui::{Context, CursorGrab, ViewportCommand};
use rotary_core::{CaptureError, PointerCapture};

/// Locks and hides the cursor of the root viewport while a knob is dragged.
///
/// Commands are fire-and-forget: the backend applies them on the next frame
/// and logs if the platform cannot lock the cursor. On the web the commands
/// are not supported and the knob falls back to ordinary pointer deltas.
#[derive(Clone)]
pub struct EguiCapture {
    ctx: Context,
}

impl EguiCapture {
    /// Capture for the given context.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl PointerCapture for EguiCapture {
    fn acquire(&mut self) -> Result<(), CaptureError> {
        if cfg!(target_arch = "wasm32") {
            return Err(CaptureError::Unsupported);
        }
        self.ctx
            .send_viewport_cmd(ViewportCommand::CursorGrab(CursorGrab::Locked));
        self.ctx.send_viewport_cmd(ViewportCommand::CursorVisible(false));
        tracing::trace!("cursor locked");
        Ok(())
    }

    fn release(&mut self) -> Result<(), CaptureError> {
        if cfg!(target_arch = "wasm32") {
            return Err(CaptureError::Unsupported);
        }
        self.ctx
            .send_viewport_cmd(ViewportCommand::CursorGrab(CursorGrab::None));
        self.ctx.send_viewport_cmd(ViewportCommand::CursorVisible(true));
        tracing::trace!("cursor released");
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use rotary_core::{Knob, KnobEvent, KnobOptions, Rgb};

    #[test]
    fn drag_grabs_and_releases_cursor() {
        let ctx = Context::default();
        let mut knob = Knob::new(KnobOptions::new(32.0, Rgb::new(255, 255, 255)))
            .unwrap()
            .with_capture(Box::new(EguiCapture::new(ctx.clone())));

        knob.handle(KnobEvent::PointerDown);
        assert!(knob.capture_held());
        knob.handle(KnobEvent::PointerUp);
        assert!(!knob.capture_held());
    }
}
