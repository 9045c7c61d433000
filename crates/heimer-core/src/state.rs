//! Per-frame state types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! frontend builds a `FrameTime` from its clock each frame and hands it to
//! `Scene::advance`; the scene derives a `FrameContext` for its children.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Clock sample for one rendered frame.
///
/// `elapsed` drives the sine oscillators and their throttle, `delta` drives
/// the swing spring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

impl FrameTime {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Next frame after `delta` seconds.
    pub fn step(self, delta: f32) -> Self {
        Self {
            elapsed: self.elapsed + delta,
            delta,
        }
    }
}

/// What an animated component may read from its surroundings each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameContext {
    pub interacting: bool,
    /// Yaw of the owning group; `None` until the parent exists.
    pub parent_yaw: Option<f32>,
}
