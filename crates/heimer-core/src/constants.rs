use glam::Vec3;

// Shared layout/animation tuning constants used by the scene and the web frontend.

// Glyph grid
pub const CELL_SIZE: f32 = 0.5; // edge length of one box and grid pitch
pub const GLYPH_BASELINE: f32 = 1.0; // lowered so a 5-row glyph spans -1..1

// Word layout
pub const WORD_LETTER_SPACING: f32 = 2.5;
pub const DANGLING_LETTER_SPACING: f32 = 0.95;

// Throttle for sine drift sampling (seconds, ~60 updates/s)
pub const DRIFT_UPDATE_INTERVAL: f32 = 0.016;

// Letter idle drift
pub const LETTER_DRIFT_AMPLITUDE: Vec3 = Vec3::new(0.1, 0.08, 0.06);
pub const LETTER_DRIFT_SPEED: [(f32, f32); 3] = [(0.4, 0.7), (0.5, 0.9), (0.3, 0.6)];
pub const LETTER_DRIFT_PHASE_BASE: [f32; 3] = [0.0, 500.0, 1000.0];

// Dangling text float
pub const DANGLING_FLOAT_AMPLITUDE: Vec3 = Vec3::new(0.12, 0.08, 0.06);
pub const DANGLING_FLOAT_SPEED: [(f32, f32); 3] = [(0.3, 0.6), (0.6, 1.0), (0.2, 0.4)];
pub const DANGLING_FLOAT_PHASE_BASE: [f32; 3] = [0.0, 300.0, 600.0];

// Random phase span added on top of the phase bases
pub const DRIFT_PHASE_SPAN: f32 = 1000.0;

// Swing spring
pub const SWING_STIFFNESS: f32 = 4.0;
pub const SWING_DAMPING: f32 = 3.0; // exponential velocity decay rate (1/s)
pub const SWING_THRESHOLD: f32 = 0.003; // min committed change (rad)
pub const SWING_TARGET_THRESHOLD: f32 = 0.02; // distance that always commits (rad)
pub const SWAY_FREQUENCY: f32 = 0.5;
pub const SWAY_AMPLITUDE: f32 = 0.01;
pub const SWAY_INFLUENCE: f32 = 0.1;

// Orbit camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 15.0);
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const DEFAULT_AUTO_ROTATE_SPEED: f32 = 0.5; // one turn per 120 s
pub const DOLLY_SCALE: f32 = 0.95;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const DIRECTIONAL_INTENSITY: f32 = 0.5;

// Default palette
pub const WORD_COLOR: &str = "#0070f3";
pub const DANGLING_COLOR: &str = "#666666";
pub const EDGE_COLOR: &str = "#214dbd";

// Environment backgrounds (equirectangular)
pub const ENVIRONMENT_URL_MOBILE: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/download3-7FArHVIJTFszlXm2045mQDPzsZqAyo.jpg";
pub const ENVIRONMENT_URL_DESKTOP: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/dither_it_M3_Drone_Shot_equirectangular-jpg_San_Francisco_Big_City_1287677938_12251179%20(1)-NY2qcmpjkyG6rDp1cPGIdX0bHk3hMR.jpg";
