//! Spherical orbit camera around a target, three.js `OrbitControls` style.
//!
//! Azimuth is measured around +Y from +Z, polar from +Y. Auto-rotate speed is
//! in the same units as three.js: 2.0 completes a turn every 30 seconds.

use crate::constants::*;
use crate::error::{Result, SceneError};
use crate::state::Camera;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-6;

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub fovy_radians: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::looking_from(CAMERA_START, Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        let (azimuth, polar) = if distance > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / distance).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            target,
            azimuth,
            polar,
            distance,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            enable_zoom: true,
            enable_pan: true,
            enable_rotate: true,
            auto_rotate: true,
            auto_rotate_speed: DEFAULT_AUTO_ROTATE_SPEED,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
        }
    }

    pub fn with_distance_bounds(mut self, min: f32, max: f32) -> Result<Self> {
        if min > max {
            return Err(SceneError::InvalidDistanceBounds { min, max });
        }
        self.min_distance = min;
        self.max_distance = max;
        self.distance = self.distance.clamp(min, max);
        Ok(self)
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    #[inline]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.polar.sin();
        self.target
            + Vec3::new(
                s * self.azimuth.sin(),
                self.polar.cos(),
                s * self.azimuth.cos(),
            ) * self.distance
    }

    /// Rotate by angle deltas; positive `left` swings the camera clockwise
    /// seen from above, matching three.js `rotateLeft`.
    pub fn rotate(&mut self, left: f32, up: f32) {
        if !self.enable_rotate {
            return;
        }
        self.azimuth = wrap_azimuth(self.azimuth - left);
        self.polar = (self.polar - up).clamp(POLAR_EPS, PI - POLAR_EPS);
    }

    /// Multiply the distance by `scale` (< 1 moves in), within bounds.
    pub fn dolly(&mut self, scale: f32) {
        if !self.enable_zoom || !scale.is_finite() || scale <= 0.0 {
            return;
        }
        self.distance = (self.distance * scale).clamp(self.min_distance, self.max_distance);
    }

    /// Move target and eye together in the camera's screen plane.
    pub fn pan(&mut self, right: f32, up: f32) {
        if !self.enable_pan {
            return;
        }
        let forward = (self.target - self.eye()).normalize_or_zero();
        let side = forward.cross(Vec3::Y).normalize_or_zero();
        let cam_up = side.cross(forward).normalize_or_zero();
        self.target += side * right + cam_up * up;
    }

    /// Apply auto-rotation for a frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            self.rotate(auto_rotation_angle(self.auto_rotate_speed, dt), 0.0);
        }
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fovy_radians,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// Angle swept by auto-rotate at `speed` over `dt` seconds.
#[inline]
pub fn auto_rotation_angle(speed: f32, dt: f32) -> f32 {
    TAU / 60.0 * speed * dt
}

#[inline]
fn wrap_azimuth(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
