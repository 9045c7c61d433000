/// Front-end wiring and pointer tuning constants.
///
/// Scene tuning (layout, animation, camera start) lives in
/// `heimer_core::constants`; these only cover the browser side.
// Canvas element the renderer attaches to
pub const CANVAS_ID: &str = "app-canvas";

// Pointer sensitivities, same meaning as three.js OrbitControls
pub const ROTATE_SPEED: f32 = 1.0;
pub const PAN_SPEED: f32 = 1.0;
pub const ZOOM_SPEED: f32 = 1.0;

// Largest step handed to the spring and auto-rotate (seconds)
pub const MAX_FRAME_DELTA: f32 = 0.1;

// Upper bound for devicePixelRatio when sizing the backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Cleared behind the sky pass (linear RGB)
pub const CLEAR_COLOR: [f64; 4] = [0.02, 0.03, 0.05, 1.0];

