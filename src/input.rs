use glam::Vec2;
use std::f32::consts::TAU;

/// What an active pointer drag does to the orbit camera.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Rotate,
    Dolly,
    Pan,
}

/// Pointer bookkeeping shared by the down/move/up handlers.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub mode: DragMode,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl PointerState {
    #[inline]
    pub fn active(&self) -> bool {
        self.mode != DragMode::None
    }

    /// Start tracking `pointer_id` at `pos`.
    pub fn press(&mut self, mode: DragMode, pointer_id: i32, pos: Vec2) {
        self.mode = mode;
        self.pointer_id = pointer_id;
        self.last = pos;
    }

    /// Movement since the previous sample of the tracked pointer.
    pub fn moved_to(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if !self.active() || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    /// Stop tracking; true if `pointer_id` was the one being dragged.
    pub fn release(&mut self, pointer_id: i32) -> bool {
        if !self.active() || pointer_id != self.pointer_id {
            return false;
        }
        self.mode = DragMode::None;
        true
    }
}

/// Map a pressed `MouseEvent.button` (plus ctrl/meta/shift) to a drag mode.
/// Left rotates, middle dollies, right pans; a modifier turns left into pan.
pub fn drag_mode(button: i16, modifier: bool) -> DragMode {
    match button {
        0 if modifier => DragMode::Pan,
        0 => DragMode::Rotate,
        1 => DragMode::Dolly,
        2 => DragMode::Pan,
        _ => DragMode::None,
    }
}

/// Pixel delta to (left, up) orbit angles: a full viewport height is one turn.
pub fn rotate_angles(delta: Vec2, viewport_height: f32, rotate_speed: f32) -> (f32, f32) {
    let h = viewport_height.max(1.0);
    (
        TAU * delta.x / h * rotate_speed,
        TAU * delta.y / h * rotate_speed,
    )
}

/// Pixel delta to a (right, up) pan in world units at the target's depth.
///
/// Dragging right moves the scene right, so the target moves left.
pub fn pan_offset(
    delta: Vec2,
    viewport_height: f32,
    distance: f32,
    fovy_radians: f32,
    pan_speed: f32,
) -> (f32, f32) {
    let h = viewport_height.max(1.0);
    let visible = 2.0 * distance * (fovy_radians * 0.5).tan();
    (
        -delta.x * visible / h * pan_speed,
        delta.y * visible / h * pan_speed,
    )
}

/// Dolly factor for one wheel step: scrolling up moves in.
pub fn wheel_scale(delta_y: f64, dolly_scale: f32, zoom_speed: f32) -> Option<f32> {
    let step = dolly_scale.powf(zoom_speed);
    if delta_y < 0.0 {
        Some(step)
    } else if delta_y > 0.0 {
        Some(1.0 / step)
    } else {
        None
    }
}

/// Dolly factor for a vertical middle-button drag: dragging down moves out.
pub fn drag_dolly_scale(delta_y: f32, dolly_scale: f32, zoom_speed: f32) -> Option<f32> {
    wheel_scale(delta_y as f64, dolly_scale, zoom_speed)
}
