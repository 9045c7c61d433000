use crate::constants::*;
use glam::Vec3;
use rand::Rng;

/// Ranges a drift draws its per-axis seeds from.
#[derive(Clone, Copy, Debug)]
pub struct DriftProfile {
    pub amplitude: Vec3,
    pub speed: [(f32, f32); 3],
    pub phase_base: [f32; 3],
}

pub const LETTER_DRIFT: DriftProfile = DriftProfile {
    amplitude: LETTER_DRIFT_AMPLITUDE,
    speed: LETTER_DRIFT_SPEED,
    phase_base: LETTER_DRIFT_PHASE_BASE,
};

pub const DANGLING_FLOAT: DriftProfile = DriftProfile {
    amplitude: DANGLING_FLOAT_AMPLITUDE,
    speed: DANGLING_FLOAT_SPEED,
    phase_base: DANGLING_FLOAT_PHASE_BASE,
};

/// Three independent sine oscillators, sampled at most once per `interval`.
///
/// Phases and speeds are drawn once at construction and never change.
#[derive(Clone, Debug)]
pub struct Drift {
    amplitude: Vec3,
    speed: Vec3,
    phase: Vec3,
    interval: f32,
    last_update: f32,
}

impl Drift {
    pub fn new(profile: &DriftProfile, rng: &mut impl Rng) -> Self {
        let mut speed = [0.0_f32; 3];
        let mut phase = [0.0_f32; 3];
        for axis in 0..3 {
            let (lo, hi) = profile.speed[axis];
            speed[axis] = lo + rng.gen::<f32>() * (hi - lo);
            phase[axis] = profile.phase_base[axis] + rng.gen::<f32>() * DRIFT_PHASE_SPAN;
        }
        Self {
            amplitude: profile.amplitude,
            speed: Vec3::from(speed),
            phase: Vec3::from(phase),
            interval: DRIFT_UPDATE_INTERVAL,
            last_update: 0.0,
        }
    }

    pub fn with_interval(mut self, interval: f32) -> Self {
        self.interval = interval;
        self
    }

    #[inline]
    pub fn speed(&self) -> Vec3 {
        self.speed
    }

    #[inline]
    pub fn phase(&self) -> Vec3 {
        self.phase
    }

    /// Offset at `elapsed` seconds, ignoring the throttle.
    #[inline]
    pub fn offset_at(&self, elapsed: f32) -> Vec3 {
        let arg = self.speed * elapsed + self.phase;
        Vec3::new(arg.x.sin(), arg.y.sin(), arg.z.sin()) * self.amplitude
    }

    /// Returns a fresh offset when at least `interval` has passed since the
    /// last sample, otherwise `None` and the caller keeps its current value.
    pub fn sample(&mut self, elapsed: f32) -> Option<Vec3> {
        if elapsed - self.last_update < self.interval {
            return None;
        }
        self.last_update = elapsed;
        Some(self.offset_at(elapsed))
    }
}
