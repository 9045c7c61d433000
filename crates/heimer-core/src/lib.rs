pub mod color;
pub mod constants;
pub mod dangling;
pub mod drift;
pub mod error;
pub mod glyph;
pub mod gpu;
pub mod interaction;
pub mod layout;
pub mod letter;
pub mod lighting;
pub mod orbit;
pub mod primitive;
pub mod scene;
pub mod state;
pub mod swing;

pub use color::Rgb;
pub use dangling::DanglingText;
pub use error::SceneError;
pub use glyph::{shape_of, Glyph};
pub use interaction::{InteractionPhase, InteractionState};
pub use letter::LetterInstance;
pub use lighting::{Environment, Lighting};
pub use orbit::OrbitControls;
pub use scene::{BoxInstance, Scene, SceneConfig};
pub use state::*;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
