//! Scene orchestration: composes the word and the dangling line, owns the
//! interaction state, and flattens everything into drawable box instances.

use crate::color::Rgb;
use crate::constants::*;
use crate::dangling::DanglingText;
use crate::error::{Result, SceneError};
use crate::interaction::InteractionState;
use crate::letter::LetterInstance;
use crate::lighting::Lighting;
use crate::orbit::OrbitControls;
use crate::primitive::{box_with_edges, BoxPrimitive};
use crate::state::{FrameContext, FrameTime};
use glam::{Mat4, Vec3};
use rand::prelude::*;

/// Everything needed to compose a scene. `Default` reproduces the HEIMER page.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub word: String,
    pub word_color: String,
    pub word_spacing: f32,
    pub word_scale: f32,
    pub dangling_text: Option<String>,
    pub dangling_anchor: Vec3,
    pub dangling_color: String,
    pub dangling_scale: f32,
    pub edge_color: String,
    pub group_yaw: f32,
    pub auto_rotate_speed: f32,
    pub drift_interval: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            word: "HEIMER".to_string(),
            word_color: WORD_COLOR.to_string(),
            word_spacing: WORD_LETTER_SPACING,
            word_scale: 1.0,
            dangling_text: Some("Software Developer".to_string()),
            dangling_anchor: Vec3::new(0.0, -3.5, 0.0),
            dangling_color: DANGLING_COLOR.to_string(),
            dangling_scale: 1.0 / 3.0,
            edge_color: EDGE_COLOR.to_string(),
            group_yaw: 0.0,
            auto_rotate_speed: DEFAULT_AUTO_ROTATE_SPEED,
            drift_interval: DRIFT_UPDATE_INTERVAL,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.word.chars().all(char::is_whitespace) {
            return Err(SceneError::EmptyWord);
        }
        for scale in [self.word_scale, self.dangling_scale] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(SceneError::InvalidScale(scale));
            }
        }
        if !self.drift_interval.is_finite() || self.drift_interval < 0.0 {
            return Err(SceneError::InvalidThrottle(self.drift_interval));
        }
        for hex in [&self.word_color, &self.dangling_color, &self.edge_color] {
            Rgb::from_hex(hex)?;
        }
        Ok(())
    }
}

/// X anchors for `count` letters `spacing` apart, centered on the origin.
pub fn word_anchors(count: usize, spacing: f32) -> Vec<Vec3> {
    let half = count.saturating_sub(1) as f32 * spacing / 2.0;
    (0..count)
        .map(|i| Vec3::new(i as f32 * spacing - half, 0.0, 0.0))
        .collect()
}

/// One drawable box with its world transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxInstance {
    pub model: Mat4,
    pub primitive: BoxPrimitive,
}

pub struct Scene {
    letters: Vec<LetterInstance>,
    dangling: Option<DanglingText>,
    interaction: InteractionState,
    group_yaw: f32,
    edge_color: Rgb,
    lighting: Lighting,
}

impl Scene {
    /// Compose a scene; per-instance RNGs are derived from `seed`.
    pub fn new(config: &SceneConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let word_color = Rgb::from_hex(&config.word_color)?;
        let dangling_color = Rgb::from_hex(&config.dangling_color)?;
        let edge_color = Rgb::from_hex(&config.edge_color)?;

        let glyphs: Vec<char> = config.word.chars().flat_map(char::to_uppercase).collect();
        let letters = glyphs
            .iter()
            .zip(word_anchors(glyphs.len(), config.word_spacing))
            .enumerate()
            .filter(|(_, (c, _))| **c != ' ')
            .map(|(i, (&c, anchor))| {
                let mut rng = instance_rng(seed, i as u64);
                LetterInstance::new(c, anchor, config.word_scale, word_color, true, &mut rng)
                    .with_drift_interval(config.drift_interval)
            })
            .collect::<Vec<_>>();

        let dangling = config.dangling_text.as_deref().map(|text| {
            let mut rng = instance_rng(seed, glyphs.len() as u64);
            DanglingText::new(
                text,
                config.dangling_anchor,
                dangling_color,
                config.dangling_scale,
                &mut rng,
            )
            .with_float_interval(config.drift_interval)
        });

        log::debug!(
            "[scene] composed word={:?} letters={} dangling={:?}",
            config.word,
            letters.len(),
            config.dangling_text
        );

        Ok(Self {
            letters,
            dangling,
            interaction: InteractionState::new(config.auto_rotate_speed),
            group_yaw: config.group_yaw,
            edge_color,
            lighting: Lighting::default(),
        })
    }

    /// Advance every animated component once, in tree order.
    pub fn advance(&mut self, time: FrameTime) {
        let interacting = self.interaction.is_interacting();
        let word_ctx = FrameContext {
            interacting,
            parent_yaw: None,
        };
        for letter in &mut self.letters {
            letter.advance(time, word_ctx);
        }
        if let Some(dangling) = self.dangling.as_mut() {
            dangling.advance(
                time,
                FrameContext {
                    interacting,
                    parent_yaw: Some(self.group_yaw),
                },
            );
        }
    }

    /// Forward orbit-control start/end events and keep the controls in sync.
    pub fn begin_drag(&mut self, orbit: &mut OrbitControls, now_sec: f64) {
        self.interaction.begin_drag(now_sec, orbit.azimuth());
        self.sync_orbit(orbit);
    }

    pub fn end_drag(&mut self, orbit: &mut OrbitControls, now_sec: f64) {
        self.interaction.end_drag(now_sec, orbit.azimuth());
        self.sync_orbit(orbit);
    }

    /// Auto-rotate runs only while idle, at the interaction's current speed.
    pub fn sync_orbit(&self, orbit: &mut OrbitControls) {
        orbit.auto_rotate = !self.interaction.is_interacting();
        orbit.auto_rotate_speed = self.interaction.auto_rotate_speed();
    }

    #[inline]
    pub fn letters(&self) -> &[LetterInstance] {
        &self.letters
    }

    #[inline]
    pub fn dangling(&self) -> Option<&DanglingText> {
        self.dangling.as_ref()
    }

    #[inline]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[inline]
    pub fn is_interacting(&self) -> bool {
        self.interaction.is_interacting()
    }

    #[inline]
    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    #[inline]
    pub fn group_yaw(&self) -> f32 {
        self.group_yaw
    }

    pub fn set_group_yaw(&mut self, yaw: f32) {
        self.group_yaw = yaw;
    }

    /// Flatten group -> (dangling) -> letter -> cell into world-space boxes.
    pub fn box_instances(&self) -> Vec<BoxInstance> {
        let group = Mat4::from_rotation_y(self.group_yaw);
        let mut out = Vec::with_capacity(self.box_count());
        for letter in &self.letters {
            self.push_letter(&mut out, group * letter.transform(), letter);
        }
        if let Some(dangling) = &self.dangling {
            let parent = group * dangling.transform(self.is_interacting());
            for letter in dangling.letters() {
                self.push_letter(&mut out, parent * letter.transform(), letter);
            }
        }
        out
    }

    pub fn box_count(&self) -> usize {
        let dangling = self
            .dangling
            .iter()
            .flat_map(|d| d.letters())
            .map(|l| l.boxes().len());
        self.letters
            .iter()
            .map(|l| l.boxes().len())
            .chain(dangling)
            .sum()
    }

    fn push_letter(&self, out: &mut Vec<BoxInstance>, transform: Mat4, letter: &LetterInstance) {
        for &cell in letter.boxes() {
            let model = transform * Mat4::from_translation(cell);
            out.push(BoxInstance {
                model,
                primitive: box_with_edges(
                    model.w_axis.truncate(),
                    letter.color(),
                    self.edge_color,
                ),
            });
        }
    }
}

fn instance_rng(seed: u64, index: u64) -> StdRng {
    let mix = seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}
