//! A line of small letters hanging under the word, floating on its own and
//! swinging after the parent group's yaw.

use crate::color::Rgb;
use crate::constants::DANGLING_LETTER_SPACING;
use crate::drift::{Drift, DANGLING_FLOAT};
use crate::letter::LetterInstance;
use crate::state::{FrameContext, FrameTime};
use crate::swing::Swing;
use glam::{Mat4, Vec3};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct DanglingText {
    text: String,
    anchor: Vec3,
    color: Rgb,
    scale: f32,
    letters: Vec<LetterInstance>,
    float: Drift,
    float_offset: Vec3,
    swing: Swing,
}

/// X of slot `idx` among `count` slots spaced `spacing` apart, centered on 0.
#[inline]
pub fn slot_x(idx: usize, count: usize, spacing: f32) -> f32 {
    let total_width = count.saturating_sub(1) as f32 * spacing;
    idx as f32 * spacing - total_width / 2.0
}

impl DanglingText {
    pub fn new(text: &str, anchor: Vec3, color: Rgb, scale: f32, rng: &mut impl Rng) -> Self {
        let upper: Vec<char> = text.chars().flat_map(char::to_uppercase).collect();
        let count = upper.len();
        let letters = upper
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != ' ')
            .map(|(idx, &c)| {
                let pos = Vec3::new(slot_x(idx, count, DANGLING_LETTER_SPACING), 0.0, 0.0);
                LetterInstance::new(c, pos, scale, color, false, rng)
            })
            .collect();
        Self {
            text: text.to_string(),
            anchor,
            color,
            scale,
            letters,
            float: Drift::new(&DANGLING_FLOAT, rng),
            float_offset: Vec3::ZERO,
            swing: Swing::new(rng),
        }
    }

    pub fn with_float_interval(mut self, interval: f32) -> Self {
        self.float = self.float.with_interval(interval);
        self
    }

    /// Per-frame update of float and swing. Skipped entirely while the user
    /// interacts or before the parent's rotation is available.
    pub fn advance(&mut self, time: FrameTime, ctx: FrameContext) {
        if ctx.interacting {
            return;
        }
        let Some(parent_yaw) = ctx.parent_yaw else {
            return;
        };
        if let Some(offset) = self.float.sample(time.elapsed) {
            self.float_offset = offset;
        }
        self.swing.step(parent_yaw, time.delta, time.elapsed);
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn letters(&self) -> &[LetterInstance] {
        &self.letters
    }

    #[inline]
    pub fn float_offset(&self) -> Vec3 {
        self.float_offset
    }

    #[inline]
    pub fn swing_angle(&self) -> f32 {
        self.swing.angle()
    }

    #[inline]
    pub fn swing_velocity(&self) -> f32 {
        self.swing.velocity()
    }

    /// Group position: the float is only shown while idle.
    pub fn group_position(&self, interacting: bool) -> Vec3 {
        if interacting {
            self.anchor
        } else {
            self.anchor + self.float_offset
        }
    }

    /// Group transform relative to the parent: translate, then swing about Z.
    pub fn transform(&self, interacting: bool) -> Mat4 {
        Mat4::from_translation(self.group_position(interacting))
            * Mat4::from_rotation_z(self.swing.angle())
    }
}
