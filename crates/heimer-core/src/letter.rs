use crate::color::Rgb;
use crate::drift::{Drift, LETTER_DRIFT};
use crate::layout::{cell_positions, CellPositions};
use crate::state::{FrameContext, FrameTime};
use glam::{Mat4, Vec3};
use rand::Rng;

/// One box letter: a glyph's cells grouped at an anchor with uniform scale.
#[derive(Clone, Debug)]
pub struct LetterInstance {
    letter: char,
    anchor: Vec3,
    position: Vec3,
    scale: f32,
    color: Rgb,
    cells: CellPositions,
    drift: Option<Drift>,
}

impl LetterInstance {
    /// Build a letter. When `enable_random_movement` is set, drift seeds are
    /// drawn from `rng` here and fixed for the instance's lifetime.
    pub fn new(
        letter: char,
        anchor: Vec3,
        scale: f32,
        color: Rgb,
        enable_random_movement: bool,
        rng: &mut impl Rng,
    ) -> Self {
        let drift = enable_random_movement.then(|| Drift::new(&LETTER_DRIFT, rng));
        Self {
            letter,
            anchor,
            position: anchor,
            scale,
            color,
            cells: cell_positions(letter),
            drift,
        }
    }

    pub fn with_drift_interval(mut self, interval: f32) -> Self {
        self.drift = self.drift.map(|d| d.with_interval(interval));
        self
    }

    /// Per-frame update. Frozen while the user interacts; otherwise the
    /// throttled drift overwrites the position around the anchor.
    pub fn advance(&mut self, time: FrameTime, ctx: FrameContext) {
        if ctx.interacting {
            return;
        }
        if let Some(drift) = self.drift.as_mut() {
            if let Some(offset) = drift.sample(time.elapsed) {
                self.position = self.anchor + offset;
            }
        }
    }

    #[inline]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn enable_random_movement(&self) -> bool {
        self.drift.is_some()
    }

    /// Local positions of the letter's boxes before the group transform.
    #[inline]
    pub fn boxes(&self) -> &[Vec3] {
        &self.cells
    }

    /// Group transform: translate to the current position, then scale.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(Vec3::splat(self.scale))
    }
}
