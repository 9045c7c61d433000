use crate::constants::*;
use rand::Rng;

/// Rotational spring pulling an angle toward the parent's yaw.
///
/// Velocity decays exponentially rather than through a viscous term, so the
/// spring stays bounded for any timestep.
#[derive(Clone, Debug)]
pub struct Swing {
    angle: f32,
    velocity: f32,
    last_parent_yaw: f32,
    sway_phase: f32,
}

impl Swing {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_phase(rng.gen::<f32>() * DRIFT_PHASE_SPAN)
    }

    pub fn with_phase(sway_phase: f32) -> Self {
        Self {
            angle: 0.0,
            velocity: 0.0,
            last_parent_yaw: 0.0,
            sway_phase,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn last_parent_yaw(&self) -> f32 {
        self.last_parent_yaw
    }

    /// Advance by `dt`; returns whether the angle changed.
    pub fn step(&mut self, parent_yaw: f32, dt: f32, elapsed: f32) -> bool {
        let force = SWING_STIFFNESS * (parent_yaw - self.angle);
        self.velocity += force * dt;
        self.velocity *= (-SWING_DAMPING * dt).exp();

        let sway = (elapsed * SWAY_FREQUENCY + self.sway_phase).sin() * SWAY_AMPLITUDE;
        let change = self.velocity * dt + sway * dt * SWAY_INFLUENCE;
        self.last_parent_yaw = parent_yaw;

        // negligible changes are dropped, so the angle can rest just short of the target
        let far = (parent_yaw - self.angle).abs() > SWING_TARGET_THRESHOLD;
        if change.abs() > SWING_THRESHOLD || far {
            self.angle += change;
            true
        } else {
            false
        }
    }
}
