use crate::color::Rgb;
use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector from the scene origin toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Static light rig; nothing in the scene animates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Rgb::WHITE,
                intensity: AMBIENT_INTENSITY,
            },
            directional: DirectionalLight {
                position: DIRECTIONAL_POSITION,
                color: Rgb::WHITE,
                intensity: DIRECTIONAL_INTENSITY,
            },
        }
    }
}

/// Equirectangular background picked by device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Mobile,
    Desktop,
}

impl Environment {
    pub fn for_device(is_mobile: bool) -> Self {
        if is_mobile {
            Environment::Mobile
        } else {
            Environment::Desktop
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Environment::Mobile => ENVIRONMENT_URL_MOBILE,
            Environment::Desktop => ENVIRONMENT_URL_DESKTOP,
        }
    }
}
