use super::InputWiring;
use crate::constants::ZOOM_SPEED;
use crate::dom;
use crate::input;
use heimer_core::constants::DOLLY_SCALE;
use web_sys as web;

/// Wheel zoom. A wheel step outside a drag counts as a zero-length
/// interaction, so it reports start and end around the dolly.
pub fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let Some(scale) = input::wheel_scale(ev.delta_y(), DOLLY_SCALE, ZOOM_SPEED) else {
            return;
        };
        let standalone = !w.scene.borrow().is_interacting();
        if standalone {
            w.begin();
        }
        w.orbit.borrow_mut().dolly(scale);
        if standalone {
            w.end();
        }
    });
}
