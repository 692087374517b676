//! Per-frame animation state for the brain canvas.
//!
//! `Animator` owns the current [`Scene`] plus the timeline that drives it:
//! the entrance fades, the delayed outline stroke, the random lit and
//! flicker effects, and the per-lobe hover intensity. It never touches the
//! DOM; the host calls [`Animator::advance`] once per frame and then paints
//! whatever the animator holds.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::brain::geometry::Lobe;
use crate::brain::scene::Scene;
use crate::config::Theme;
use crate::consts::{
    FADE_MS, FLICKER_BASE_MS, FLICKER_CHANCE, FLICKER_EXTRA_MS, HOVER_SCALE, HOVER_STEP, LIT_CHANCE, LIT_MAX_MS,
    LIT_MIN_MS, OUTLINE_DELAY_MS, OUTLINE_DRAW_MS,
};
use crate::geom::{Point, Size};

/// Entrance opacity of an element with fade delay `delay_ms`, `elapsed_ms`
/// after the timeline started.
///
/// Zero until the delay passes, then a linear ramp that reaches exactly 1
/// after [`FADE_MS`] and stays there.
#[must_use]
pub fn fade_opacity(elapsed_ms: f64, delay_ms: f64) -> f64 {
    if elapsed_ms > delay_ms {
        ((elapsed_ms - delay_ms) / FADE_MS).min(1.0)
    } else {
        0.0
    }
}

/// Outline progress in `[0, 1]` given time since the outline began.
#[must_use]
pub fn outline_progress_at(outline_elapsed_ms: f64) -> f64 {
    (outline_elapsed_ms / OUTLINE_DRAW_MS).clamp(0.0, 1.0)
}

/// Smoothed hover intensity per lobe.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hover {
    pub left: f64,
    pub right: f64,
}

impl Hover {
    #[must_use]
    pub fn get(&self, lobe: Lobe) -> f64 {
        match lobe {
            Lobe::Left => self.left,
            Lobe::Right => self.right,
        }
    }

    fn step(&mut self, lobe: Lobe, toward: bool) {
        let slot = match lobe {
            Lobe::Left => &mut self.left,
            Lobe::Right => &mut self.right,
        };
        *slot = if toward { (*slot + HOVER_STEP).min(1.0) } else { (*slot - HOVER_STEP).max(0.0) };
    }
}

pub struct Animator {
    scene: Option<Scene>,
    rng: SmallRng,
    theme: Theme,
    start_ms: Option<f64>,
    outline_start_ms: Option<f64>,
    outline_progress: f64,
    hover: Hover,
    pointer: Option<Point>,
}

impl Animator {
    #[must_use]
    pub fn new(seed: u64, theme: Theme) -> Self {
        Self {
            scene: None,
            rng: SmallRng::seed_from_u64(seed),
            theme,
            start_ms: None,
            outline_start_ms: None,
            outline_progress: 0.0,
            hover: Hover::default(),
            pointer: None,
        }
    }

    // --- Scene ---

    /// Discard the current scene and generate one for `size`.
    ///
    /// An empty size leaves the animator without a scene and returns `false`.
    /// The timeline is kept, so elements of a regenerated scene whose delay
    /// has already passed show at once.
    pub fn resize(&mut self, size: Size) -> bool {
        self.scene = Scene::generate(size, &mut self.rng);
        match &self.scene {
            Some(scene) => {
                log::debug!(
                    "brain: scene {}x{} with {} shapes, {} glyphs",
                    size.width,
                    size.height,
                    scene.shapes.len(),
                    scene.glyphs.len()
                );
                true
            }
            None => {
                log::warn!("brain: skipping scene for empty size {}x{}", size.width, size.height);
                false
            }
        }
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Colors only; scene and timeline are untouched.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // --- Timeline ---

    #[must_use]
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        self.start_ms.map_or(0.0, |start| now_ms - start)
    }

    #[must_use]
    pub fn outline_progress(&self) -> f64 {
        self.outline_progress
    }

    /// Advance every time-driven effect to `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
        let elapsed = self.elapsed_ms(now_ms);

        if elapsed >= OUTLINE_DELAY_MS {
            let outline_start = *self.outline_start_ms.get_or_insert(now_ms);
            self.outline_progress = outline_progress_at(now_ms - outline_start);
        }

        self.step_hover();

        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let rng = &mut self.rng;

        for shape in &mut scene.shapes {
            if elapsed > shape.fade_delay_ms {
                shape.fade_opacity = fade_opacity(elapsed, shape.fade_delay_ms);
            }
            if shape.fade_opacity <= 0.0 {
                continue;
            }
            if shape.fade_opacity >= 1.0 && shape.lit_until_ms.is_none() && rng.random_bool(LIT_CHANCE) {
                shape.lit_until_ms = Some(now_ms + rng.random_range(LIT_MIN_MS..LIT_MAX_MS));
            }
            if shape.lit_until_ms.is_some_and(|until| now_ms > until) {
                shape.lit_until_ms = None;
            }
        }

        for glyph in &mut scene.glyphs {
            if elapsed > glyph.fade_delay_ms {
                glyph.fade_opacity = fade_opacity(elapsed, glyph.fade_delay_ms);
            }
            if glyph.fade_opacity >= 1.0 && glyph.binary && rng.random_bool(FLICKER_CHANCE) {
                glyph.flip();
                glyph.flicker_until_ms = now_ms + FLICKER_BASE_MS + rng.random::<f64>() * FLICKER_EXTRA_MS;
            }
        }
    }

    // --- Hover ---

    /// Latest pointer position in canvas CSS pixels.
    pub fn pointer_moved(&mut self, p: Point) {
        self.pointer = Some(p);
    }

    /// Pointer left the canvas; both lobes relax back to rest.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    #[must_use]
    pub fn hover(&self) -> Hover {
        self.hover
    }

    /// Uniform scale applied around a lobe's center while hovered.
    #[must_use]
    pub fn lobe_scale(&self, lobe: Lobe) -> f64 {
        1.0 + self.hover.get(lobe) * HOVER_SCALE
    }

    fn step_hover(&mut self) {
        let geometry = self.scene.as_ref().map(|s| s.geometry);
        for lobe in [Lobe::Left, Lobe::Right] {
            let over = match (geometry, self.pointer) {
                (Some(g), Some(p)) => g.hover_hit(lobe, p),
                _ => false,
            };
            self.hover.step(lobe, over);
        }
    }
}
