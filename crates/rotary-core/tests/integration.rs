//! Integration tests for rotary-core: full drag sessions as a host drives them.

use std::cell::RefCell;
use std::rc::Rc;

use rotary_core::{
    ArcFill, CaptureError, DragState, Knob, KnobError, KnobEvent, KnobOptions, PointerCapture,
    Rgb,
};

fn rgb(s: &str) -> Rgb {
    s.parse().unwrap()
}

/// Capture that is granted once, then lost.
#[derive(Default)]
struct FlakyCapture {
    acquired: Rc<RefCell<u32>>,
    released: Rc<RefCell<u32>>,
}

impl PointerCapture for FlakyCapture {
    fn acquire(&mut self) -> Result<(), CaptureError> {
        let mut n = self.acquired.borrow_mut();
        *n += 1;
        if *n > 1 {
            Err(CaptureError::Host("already locked elsewhere".to_string()))
        } else {
            Ok(())
        }
    }

    fn release(&mut self) -> Result<(), CaptureError> {
        *self.released.borrow_mut() += 1;
        Err(CaptureError::Denied)
    }
}

#[test]
fn eq_gain_knob_session() {
    let options = KnobOptions::new(56.0, rgb("#40c0ff"))
        .base_color(rgb("#303030"))
        .bounds(-12.0, 12.0)
        .value(0.0);
    let mut knob = Knob::new(options).unwrap();
    assert_eq!(knob.angle(), 0.0);
    assert_eq!(knob.shading().dark, rgb("#000000"));

    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    knob.on_change(move |v| sink.borrow_mut().push(v));

    // Drag up 75 px, pause, then 150 px down.
    knob.handle(KnobEvent::PointerDown);
    knob.handle(KnobEvent::PointerMove { movement_y: -75.0 });
    knob.handle(KnobEvent::PointerMove { movement_y: 0.0 });
    knob.handle(KnobEvent::PointerMove { movement_y: 150.0 });
    knob.handle(KnobEvent::PointerUp);

    assert_eq!(knob.drag_state(), DragState::Idle);
    assert_eq!(*values.borrow(), vec![6.0, -6.0]);
    assert_eq!(knob.value(), -6.0);
    assert_eq!(knob.outline().color_at(50.0), ArcFill::Solid(rgb("#40c0ff")));
    assert_eq!(knob.outline().color_at(140.0), ArcFill::Solid(rgb("#000000")));
}

#[test]
fn capture_failures_never_surface() {
    let capture = FlakyCapture::default();
    let acquired = Rc::clone(&capture.acquired);
    let released = Rc::clone(&capture.released);
    let mut knob = Knob::new(KnobOptions::new(40.0, rgb("#ffffff")))
        .unwrap()
        .with_capture(Box::new(capture));

    for _ in 0..2 {
        knob.handle(KnobEvent::PointerDown);
        assert!(knob.is_dragging());
        knob.handle(KnobEvent::PointerMove { movement_y: -1.0 });
        knob.handle(KnobEvent::PointerUp);
    }
    assert_eq!(*acquired.borrow(), 2);
    assert_eq!(*released.borrow(), 2);
    assert_eq!(knob.angle(), 2.0);
}

#[test]
fn set_beyond_bounds_then_wheel_reclamps() {
    let mut knob = Knob::new(KnobOptions::new(40.0, rgb("#ffffff"))).unwrap();
    knob.set(150.0);
    assert_eq!(knob.angle(), 300.0);
    assert_eq!(knob.value(), 150.0);

    knob.handle(KnobEvent::Wheel { delta_y: 0.0 });
    assert_eq!(knob.angle(), 150.0);
    assert_eq!(knob.value(), 100.0);
}

#[test]
fn many_knobs_dispose_cleanly() {
    let counter = Rc::new(RefCell::new(0));
    let mut knobs: Vec<Knob> = (0..32)
        .map(|i| {
            let mut k = Knob::new(KnobOptions::new(32.0, rgb("#ff0000")).value(f64::from(i)))
                .unwrap();
            let c = Rc::clone(&counter);
            k.on_change(move |_| *c.borrow_mut() += 1);
            k
        })
        .collect();
    assert_eq!(Rc::strong_count(&counter), 33);

    for k in &mut knobs {
        k.dispose();
    }
    assert_eq!(Rc::strong_count(&counter), 1);
    assert_eq!(*counter.borrow(), 0);
}

#[test]
fn invalid_options_report_descriptive_errors() {
    let err = Knob::new(KnobOptions::new(32.0, rgb("#ffffff")).bounds(100.0, 0.0)).unwrap_err();
    assert_eq!(
        err,
        KnobError::InvalidBounds {
            min: 100.0,
            max: 0.0
        }
    );
    let err = "#12345".parse::<Rgb>().unwrap_err();
    assert!(err.to_string().contains("#12345"));
}
