use crate::constants::DEFAULT_AUTO_ROTATE_SPEED;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionPhase {
    /// Auto-rotating at the current speed.
    Idle,
    /// The user is dragging the camera.
    Interacting { started_at: f64, start_azimuth: f32 },
}

/// Drag tracking for the orbit camera and the speed it releases into.
#[derive(Clone, Debug)]
pub struct InteractionState {
    phase: InteractionPhase,
    auto_rotate_speed: f32,
    default_speed: f32,
    last_drag_velocity: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_ROTATE_SPEED)
    }
}

/// Wrap an angle difference into \[-PI, PI\].
#[inline]
pub fn wrap_angle(delta: f32) -> f32 {
    let d = (delta + PI).rem_euclid(TAU) - PI;
    if d == -PI && delta > 0.0 {
        PI
    } else {
        d
    }
}

impl InteractionState {
    pub fn new(default_speed: f32) -> Self {
        Self {
            phase: InteractionPhase::Idle,
            auto_rotate_speed: default_speed,
            default_speed,
            last_drag_velocity: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    #[inline]
    pub fn is_interacting(&self) -> bool {
        matches!(self.phase, InteractionPhase::Interacting { .. })
    }

    #[inline]
    pub fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
    }

    #[inline]
    pub fn default_speed(&self) -> f32 {
        self.default_speed
    }

    /// Angular velocity (rad/s) measured over the last completed drag.
    #[inline]
    pub fn last_drag_velocity(&self) -> f32 {
        self.last_drag_velocity
    }

    /// Idle -> Interacting. A repeated start re-records the drag origin.
    pub fn begin_drag(&mut self, now_sec: f64, azimuth: f32) {
        self.phase = InteractionPhase::Interacting {
            started_at: now_sec,
            start_azimuth: azimuth,
        };
        log::debug!("[orbit] drag start azimuth={:.3}", azimuth);
    }

    /// Interacting -> Idle. The release speed keeps the default magnitude and
    /// takes the sign opposite to the drag's angular velocity. Azimuth deltas
    /// are wrapped, so a drag past half a turn reads as the short way round.
    pub fn end_drag(&mut self, now_sec: f64, azimuth: f32) {
        let InteractionPhase::Interacting {
            started_at,
            start_azimuth,
        } = self.phase
        else {
            log::debug!("[orbit] drag end without start; ignored");
            return;
        };
        let elapsed = (now_sec - started_at) as f32;
        if elapsed > 0.0 {
            let velocity = wrap_angle(azimuth - start_azimuth) / elapsed;
            self.last_drag_velocity = velocity;
            let candidate = -velocity.to_degrees();
            let direction = if candidate >= 0.0 { 1.0 } else { -1.0 };
            self.auto_rotate_speed = direction * self.default_speed.abs();
            log::debug!(
                "[orbit] drag end velocity={:.3} rad/s -> auto-rotate {:.2}",
                velocity,
                self.auto_rotate_speed
            );
        }
        self.phase = InteractionPhase::Idle;
    }
}
