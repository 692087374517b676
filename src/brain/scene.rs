//! Scene generation: shape markers for the left lobe, glyphs for the right.
//!
//! A scene is built once per canvas size. Positions, kinds, colors, and the
//! random per-element parameters are fixed at generation; the animator only
//! touches the fade, lit, and flicker fields.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::brain::geometry::{BrainGeometry, Lobe};
use crate::brain::scatter::{ScatterParams, scatter};
use crate::consts::{
    BINARY_GLYPH_RATE, FADE_DELAY_MAX_MS, GLYPH_COUNT, GLYPH_POOL, SHAPE_DROP_RATE, SHAPE_GRID_PX, SHAPE_PALETTE,
    SHAPE_SIZE_PX,
};
use crate::geom::{Point, Size};

/// Outline drawn for a shape marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Cross,
}

impl ShapeKind {
    pub const ALL: [Self; 4] = [Self::Circle, Self::Square, Self::Triangle, Self::Cross];
}

/// A pulsing icon on the left lobe's grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMarker {
    pub pos: Point,
    pub kind: ShapeKind,
    pub color: [u8; 3],
    pub size: f64,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
    pub fade_delay_ms: f64,
    pub fade_opacity: f64,
    /// End of the current lit period, if lit.
    pub lit_until_ms: Option<f64>,
}

impl ShapeMarker {
    #[must_use]
    pub fn is_lit(&self) -> bool {
        self.lit_until_ms.is_some()
    }

    /// Fill alpha while lit: a sine pulse between 0.6 and 1.0, scaled by the fade.
    #[must_use]
    pub fn lit_alpha(&self, t_secs: f64) -> f64 {
        let pulse = 0.5 + 0.5 * (t_secs * self.pulse_speed * 3.0 + self.pulse_phase).sin();
        (0.6 + pulse * 0.4) * self.fade_opacity
    }
}

/// A flickering character in the right lobe.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPoint {
    pub base: Point,
    pub jitter_radius: f64,
    pub phase: f64,
    pub speed: f64,
    pub glyph: char,
    /// Binary glyphs (`0`/`1`) flip and flicker; the rest stay put.
    pub binary: bool,
    pub base_alpha: f64,
    pub flicker_until_ms: f64,
    pub fade_delay_ms: f64,
    pub fade_opacity: f64,
}

impl GlyphPoint {
    /// On-screen position at `t_secs`: base plus a small Lissajous wobble.
    #[must_use]
    pub fn position(&self, t_secs: f64) -> Point {
        let angle = self.phase + t_secs * self.speed * 1.2;
        self.base + Point::new(angle.cos() * self.jitter_radius, (angle * 1.1).sin() * self.jitter_radius)
    }

    #[must_use]
    pub fn is_flickering(&self, now_ms: f64) -> bool {
        now_ms < self.flicker_until_ms
    }

    /// Alpha at `now_ms`, boosted while flickering.
    #[must_use]
    pub fn alpha(&self, now_ms: f64) -> f64 {
        if self.is_flickering(now_ms) {
            ((self.base_alpha + 0.2) * self.fade_opacity).min(0.95)
        } else {
            self.base_alpha * self.fade_opacity
        }
    }

    /// Swap `0` and `1`. Non-binary glyphs are left alone.
    pub fn flip(&mut self) {
        self.glyph = match self.glyph {
            '0' => '1',
            '1' => '0',
            other => other,
        };
    }
}

/// The generated contents of one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub geometry: BrainGeometry,
    pub shapes: Vec<ShapeMarker>,
    pub glyphs: Vec<GlyphPoint>,
    /// Spacing enforced between glyphs until the retry budget relaxed it.
    pub glyph_min_distance: f64,
    /// Number of leading glyphs placed before spacing was relaxed.
    pub glyphs_spaced: usize,
}

impl Scene {
    /// Generate a scene for a canvas of `size`. `None` when the size is empty.
    pub fn generate<R: Rng>(size: Size, rng: &mut R) -> Option<Self> {
        let geometry = BrainGeometry::new(size)?;
        let shapes = generate_shapes(&geometry, rng);
        let glyph_min_distance = geometry.glyph_min_distance(GLYPH_COUNT);
        let (glyphs, glyphs_spaced) = generate_glyphs(&geometry, GLYPH_COUNT, glyph_min_distance, rng);
        Some(Self { geometry, shapes, glyphs, glyph_min_distance, glyphs_spaced })
    }
}

fn generate_shapes<R: Rng>(geometry: &BrainGeometry, rng: &mut R) -> Vec<ShapeMarker> {
    let bounds = geometry.shape_grid_bounds();
    let right = bounds.origin.x + bounds.size.width;
    let bottom = bounds.origin.y + bounds.size.height;

    let mut shapes = Vec::new();
    let mut y = bounds.origin.y;
    while y < bottom {
        let mut x = bounds.origin.x;
        while x < right {
            let pos = Point::new(x, y);
            x += SHAPE_GRID_PX;
            if !geometry.contains(Lobe::Left, pos) || rng.random_bool(SHAPE_DROP_RATE) {
                continue;
            }
            shapes.push(ShapeMarker {
                pos,
                kind: ShapeKind::ALL[shapes.len() % ShapeKind::ALL.len()],
                color: SHAPE_PALETTE[rng.random_range(0..SHAPE_PALETTE.len())],
                size: SHAPE_SIZE_PX,
                pulse_phase: rng.random_range(0.0..TAU),
                pulse_speed: rng.random_range(0.5..1.0),
                fade_delay_ms: rng.random_range(0.0..FADE_DELAY_MAX_MS),
                fade_opacity: 0.0,
                lit_until_ms: None,
            });
        }
        y += SHAPE_GRID_PX;
    }
    shapes
}

fn generate_glyphs<R: Rng>(
    geometry: &BrainGeometry,
    count: usize,
    min_distance: f64,
    rng: &mut R,
) -> (Vec<GlyphPoint>, usize) {
    let bounds = geometry.glyph_sample_bounds();
    let scattered = scatter(
        ScatterParams::for_count(count, min_distance),
        || {
            Point::new(
                bounds.origin.x + rng.random::<f64>() * bounds.size.width,
                bounds.origin.y + rng.random::<f64>() * bounds.size.height,
            )
        },
        |p| geometry.contains(Lobe::Right, p),
    );

    let glyphs = scattered
        .points
        .into_iter()
        .map(|base| {
            let binary = rng.random_bool(BINARY_GLYPH_RATE);
            let glyph = if binary {
                if rng.random_bool(0.5) { '0' } else { '1' }
            } else {
                GLYPH_POOL[rng.random_range(0..GLYPH_POOL.len())]
            };
            GlyphPoint {
                base,
                jitter_radius: rng.random_range(0.3..1.5),
                phase: rng.random_range(0.0..TAU),
                speed: rng.random_range(0.4..1.2),
                glyph,
                binary,
                base_alpha: rng.random_range(0.4..0.85),
                flicker_until_ms: 0.0,
                fade_delay_ms: rng.random_range(0.0..FADE_DELAY_MAX_MS),
                fade_opacity: 0.0,
            }
        })
        .collect();
    (glyphs, scattered.spaced)
}
