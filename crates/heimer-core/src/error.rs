use thiserror::Error;

/// Errors raised while building a scene from configuration.
///
/// Animation itself never fails: unknown letters fall back to a default glyph
/// and a missing parent rotation simply skips the dependent update.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),
    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f32),
    #[error("drift update interval must be finite and non-negative, got {0}")]
    InvalidThrottle(f32),
    #[error("orbit distance bounds are inverted: min {min} > max {max}")]
    InvalidDistanceBounds { min: f32, max: f32 },
    #[error("word must contain at least one letter")]
    EmptyWord,
}

pub type Result<T> = std::result::Result<T, SceneError>;
