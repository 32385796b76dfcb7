//! Rotary knob widget.
//!
//! Paints a [`Knob`] as three layers and feeds egui input back into it:
//! - Outline ring: conic gradient, indicator colour up to the current angle
//! - Base disc: base colour with an inset highlight and a soft shadow
//! - Indicator mark: bar from the rim to the centre, rotated to the angle
//!
//! Vertical drag adjusts the value (up = increase); the scroll wheel adjusts
//! it in steps of a tenth of the scroll distance. Scrolling is never consumed,
//! so enclosing scroll areas keep working.

use egui::{Color32, Mesh, Pos2, Response, Sense, Shape, Stroke, Ui, Vec2, Widget, pos2, vec2};
use rotary_core::{ArcFill, Knob, KnobEvent, KnobGeometry, MIN_ANGLE, OutlineGradient, Rgb};

/// Degrees per tessellated segment of the outline ring.
const RING_STEP_DEG: f64 = 3.0;

/// Overlap of the ring under the base disc, in points.
const RING_TUCK: f32 = 1.0;

/// Extra width of the indicator glow on each side, in points.
const GLOW_SPREAD: f32 = 1.5;

/// egui widget for a [`Knob`].
pub struct KnobWidget<'a> {
    knob: &'a mut Knob,
}

impl<'a> KnobWidget<'a> {
    /// Wrap a knob for one frame.
    pub fn new(knob: &'a mut Knob) -> Self {
        Self { knob }
    }
}

impl Widget for KnobWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let geometry = self.knob.geometry();
        let size = Vec2::splat(geometry.outline_diameter());
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::drag());

        // Handle interaction before painting so the frame shows the new angle
        let mut changed = false;
        for event in input_events(ui, &response, self.knob) {
            changed |= self.knob.handle(event).is_some();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = geometry.diameter() / 2.0;
            let shading = self.knob.shading();

            // Shadow, mostly hidden under the ring except across the dead zone
            let shadow = color32(shading.shadow).gamma_multiply(0.6);
            painter.circle_filled(center, radius + 1.0, shadow);

            // Outline ring
            painter.add(Shape::mesh(ring_mesh(
                center,
                radius - RING_TUCK,
                geometry.outline_diameter() / 2.0,
                &self.knob.outline(),
            )));

            // Base disc with inset highlight
            painter.circle_filled(center, radius, color32(self.knob.base_color()));
            let highlight = Stroke::new(1.0, color32(shading.light));
            painter.circle_stroke(center, radius - 1.0, highlight);

            // Indicator mark with glow
            let indicator = color32(self.knob.indicator_color());
            let angle = self.knob.angle();
            painter.add(Shape::convex_polygon(
                indicator_quad(center, &geometry, angle, GLOW_SPREAD).to_vec(),
                indicator.gamma_multiply(0.35),
                Stroke::NONE,
            ));
            painter.add(Shape::convex_polygon(
                indicator_quad(center, &geometry, angle, 0.0).to_vec(),
                indicator,
                Stroke::NONE,
            ));
        }

        if changed {
            response.mark_changed();
        }

        response
    }
}

/// Reduce this frame's egui input to knob events, in the order they apply.
fn input_events(ui: &Ui, response: &Response, knob: &Knob) -> Vec<KnobEvent> {
    let mut events = Vec::new();
    let dragging = knob.is_dragging();

    let (focused, motion, scroll) =
        ui.input(|i| (i.focused, i.pointer.motion(), i.raw_scroll_delta));

    // A drag we believe is live but egui no longer reports was lost
    // (window unfocused, another widget took the pointer).
    if dragging && (!focused || (!response.dragged() && !response.drag_stopped())) {
        events.push(KnobEvent::CaptureLost);
    }

    if response.drag_started() {
        events.push(KnobEvent::PointerDown);
    }

    if response.dragged() {
        // With the cursor locked the pointer position is frozen and only raw
        // motion keeps arriving. Uncaptured drags follow the positional delta.
        let dy = match motion {
            Some(m) if knob.capture_held() => m.y,
            _ => response.drag_delta().y,
        };
        if dy != 0.0 {
            events.push(KnobEvent::PointerMove {
                movement_y: f64::from(dy),
            });
        }
    }

    if response.drag_stopped() {
        events.push(KnobEvent::PointerUp);
    }

    // egui scrolls content down for positive y; wheel deltas use the opposite sign.
    if response.hovered() && scroll.y != 0.0 {
        events.push(KnobEvent::Wheel {
            delta_y: -f64::from(scroll.y),
        });
    }

    events
}

/// Convert a knob colour to egui.
pub fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Point at `radius` from `center`, `degrees` clockwise from 12 o'clock.
pub(crate) fn polar(center: Pos2, radius: f32, degrees: f64) -> Pos2 {
    let rad = degrees.to_radians() as f32;
    pos2(center.x + radius * rad.sin(), center.y - radius * rad.cos())
}

/// Tessellate the outline gradient into an annulus between `inner` and `outer`.
///
/// Every segment owns its vertices so hard colour stops stay hard.
pub(crate) fn ring_mesh(
    center: Pos2,
    inner: f32,
    outer: f32,
    gradient: &OutlineGradient,
) -> Mesh {
    let mut mesh = Mesh::default();
    for arc in gradient.arcs() {
        let ArcFill::Solid(rgb) = arc.fill else {
            continue;
        };
        if arc.sweep() <= 0.0 {
            continue;
        }
        let color = color32(rgb);
        let segments = (arc.sweep() / RING_STEP_DEG).ceil().max(1.0) as usize;
        let step = arc.sweep() / segments as f64;
        for s in 0..segments {
            // Conic offsets start at the counter-clockwise end of travel
            let a0 = MIN_ANGLE + arc.start + step * s as f64;
            let a1 = a0 + step;
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(polar(center, inner, a0), color);
            mesh.colored_vertex(polar(center, outer, a0), color);
            mesh.colored_vertex(polar(center, outer, a1), color);
            mesh.colored_vertex(polar(center, inner, a1), color);
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base, base + 2, base + 3);
        }
    }
    mesh
}

/// Corners of the indicator bar, widened by `spread` on every side.
///
/// The bar runs from the rim to the centre along the knob's angle.
pub(crate) fn indicator_quad(
    center: Pos2,
    geometry: &KnobGeometry,
    angle: f64,
    spread: f32,
) -> [Pos2; 4] {
    let rad = angle.to_radians() as f32;
    let along = vec2(rad.sin(), -rad.cos());
    let across = vec2(rad.cos(), rad.sin());

    let half_w = geometry.indicator_width() / 2.0 + spread;
    let tip = center + along * (geometry.indicator_length() + spread);
    let tail = center - along * spread;

    [
        tail - across * half_w,
        tip - across * half_w,
        tip + across * half_w,
        tail + across * half_w,
    ]
}
