use super::InputWiring;
use crate::constants::{PAN_SPEED, ROTATE_SPEED, ZOOM_SPEED};
use crate::dom;
use crate::input::{self, DragMode};
use glam::Vec2;
use heimer_core::constants::DOLLY_SCALE;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn css_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}

pub fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointerdown", move |ev: web::PointerEvent| {
        if w.pointer.borrow().active() {
            return;
        }
        let modifier = ev.ctrl_key() || ev.meta_key() || ev.shift_key();
        let mode = input::drag_mode(ev.button(), modifier);
        if mode == DragMode::None {
            return;
        }
        w.pointer
            .borrow_mut()
            .press(mode, ev.pointer_id(), client_pos(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        w.begin();
        ev.prevent_default();
    });
}

pub fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let (mode, delta) = {
            let mut p = w.pointer.borrow_mut();
            match p.moved_to(ev.pointer_id(), client_pos(&ev)) {
                Some(d) => (p.mode, d),
                None => return,
            }
        };
        let height = css_height(&w.canvas);
        let mut orbit = w.orbit.borrow_mut();
        match mode {
            DragMode::Rotate => {
                let (left, up) = input::rotate_angles(delta, height, ROTATE_SPEED);
                orbit.rotate(left, up);
            }
            DragMode::Pan => {
                let (right, up) = input::pan_offset(
                    delta,
                    height,
                    orbit.distance(),
                    orbit.fovy_radians,
                    PAN_SPEED,
                );
                orbit.pan(right, up);
            }
            DragMode::Dolly => {
                if let Some(scale) = input::drag_dolly_scale(delta.y, DOLLY_SCALE, ZOOM_SPEED) {
                    orbit.dolly(scale);
                }
            }
            DragMode::None => {}
        }
    });
}

pub fn wire_pointerup(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        dom::listen(&window, event, move |ev: web::PointerEvent| {
            if w.pointer.borrow_mut().release(ev.pointer_id()) {
                _ = w.canvas.release_pointer_capture(ev.pointer_id());
                w.end();
            }
        });
    }
}

pub fn wire_contextmenu(w: &InputWiring) {
    dom::listen(&w.canvas, "contextmenu", |ev: web::Event| {
        ev.prevent_default();
    });
}
