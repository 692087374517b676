#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn scene(seed: u64) -> Scene {
    let mut rng = SmallRng::seed_from_u64(seed);
    Scene::generate(Size::new(800.0, 600.0), &mut rng).expect("non-empty size")
}

fn glyph(ch: char) -> GlyphPoint {
    GlyphPoint {
        base: Point::new(10.0, 20.0),
        jitter_radius: 1.0,
        phase: 0.0,
        speed: 1.0,
        glyph: ch,
        binary: ch == '0' || ch == '1',
        base_alpha: 0.5,
        flicker_until_ms: 0.0,
        fade_delay_ms: 0.0,
        fade_opacity: 1.0,
    }
}

// --- Generation ---

#[test]
fn empty_size_generates_nothing() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(Scene::generate(Size::new(0.0, 0.0), &mut rng).is_none());
    assert!(Scene::generate(Size::new(f64::NAN, 400.0), &mut rng).is_none());
}

#[test]
fn shapes_stay_inside_left_lobe() {
    let s = scene(7);
    assert!(!s.shapes.is_empty());
    for shape in &s.shapes {
        assert!(s.geometry.contains(Lobe::Left, shape.pos), "{:?} outside left lobe", shape.pos);
    }
}

#[test]
fn glyphs_stay_inside_right_lobe() {
    let s = scene(7);
    assert_eq!(s.glyphs.len(), GLYPH_COUNT);
    for g in &s.glyphs {
        assert!(s.geometry.contains(Lobe::Right, g.base), "{:?} outside right lobe", g.base);
    }
}

#[test]
fn shape_kinds_cycle_in_order() {
    let s = scene(11);
    for (i, shape) in s.shapes.iter().enumerate() {
        assert_eq!(shape.kind, ShapeKind::ALL[i % 4]);
    }
}

#[test]
fn shape_colors_come_from_palette() {
    let s = scene(12);
    assert!(s.shapes.iter().all(|shape| SHAPE_PALETTE.contains(&shape.color)));
    assert!(s.shapes.iter().all(|shape| shape.size == SHAPE_SIZE_PX));
}

#[test]
fn shapes_sit_on_grid_spacing() {
    let s = scene(13);
    let origin = s.geometry.shape_grid_bounds().origin;
    for shape in &s.shapes {
        let cols = (shape.pos.x - origin.x) / SHAPE_GRID_PX;
        let rows = (shape.pos.y - origin.y) / SHAPE_GRID_PX;
        assert!((cols - cols.round()).abs() < 1e-6);
        assert!((rows - rows.round()).abs() < 1e-6);
    }
}

#[test]
fn fresh_scene_starts_invisible() {
    let s = scene(3);
    assert!(s.shapes.iter().all(|shape| shape.fade_opacity == 0.0 && !shape.is_lit()));
    assert!(s.glyphs.iter().all(|g| g.fade_opacity == 0.0 && g.flicker_until_ms == 0.0));
    assert!(s.shapes.iter().all(|shape| (0.0..FADE_DELAY_MAX_MS).contains(&shape.fade_delay_ms)));
}

#[test]
fn glyph_characters_match_binary_flag() {
    let s = scene(5);
    for g in &s.glyphs {
        if g.binary {
            assert!(g.glyph == '0' || g.glyph == '1');
        } else {
            assert!(GLYPH_POOL.contains(&g.glyph));
        }
        assert!((0.4..0.85).contains(&g.base_alpha));
    }
}

#[test]
fn glyphs_spaced_until_relaxed() {
    for (seed, size) in [(21, Size::new(800.0, 600.0)), (5, Size::new(400.0, 300.0)), (9, Size::new(1200.0, 500.0))] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let s = Scene::generate(size, &mut rng).expect("non-empty size");
        assert_eq!(s.glyphs.len(), GLYPH_COUNT);
        assert!(s.glyphs_spaced <= s.glyphs.len());
        let min_sq = s.glyph_min_distance * s.glyph_min_distance;
        let spaced = &s.glyphs[..s.glyphs_spaced];
        for (i, a) in spaced.iter().enumerate() {
            for b in &spaced[i + 1..] {
                assert!(a.base.distance_sq(b.base) >= min_sq, "seed {seed}: glyphs {:?} and {:?} too close", a.base, b.base);
            }
        }
    }
}

#[test]
fn same_seed_same_scene() {
    assert_eq!(scene(42), scene(42));
    assert_ne!(scene(42), scene(43));
}

// --- Elements ---

#[test]
fn lit_alpha_scales_with_fade() {
    let mut shape = scene(1).shapes[0].clone();
    shape.fade_opacity = 1.0;
    let a = shape.lit_alpha(2.5);
    assert!((0.6..=1.0).contains(&a));
    shape.fade_opacity = 0.5;
    assert!((shape.lit_alpha(2.5) - a * 0.5).abs() < 1e-12);
}

#[test]
fn flip_swaps_binary_only() {
    let mut zero = glyph('0');
    zero.flip();
    assert_eq!(zero.glyph, '1');
    zero.flip();
    assert_eq!(zero.glyph, '0');

    let mut other = glyph('Σ');
    other.flip();
    assert_eq!(other.glyph, 'Σ');
}

#[test]
fn flicker_boosts_alpha_until_deadline() {
    let mut g = glyph('1');
    assert_eq!(g.alpha(100.0), 0.5);
    g.flicker_until_ms = 300.0;
    assert!(g.is_flickering(299.0));
    assert!((g.alpha(299.0) - 0.7).abs() < 1e-12);
    assert!(!g.is_flickering(300.0));
    assert_eq!(g.alpha(300.0), 0.5);
}

#[test]
fn flicker_alpha_is_capped() {
    let mut g = glyph('0');
    g.base_alpha = 0.85;
    g.flicker_until_ms = 1000.0;
    assert_eq!(g.alpha(0.0), 0.95);
}

#[test]
fn position_wobbles_within_radius() {
    let g = glyph('1');
    for step in 0..50 {
        let p = g.position(f64::from(step) * 0.1);
        assert!(p.distance_sq(g.base).sqrt() <= g.jitter_radius * std::f64::consts::SQRT_2 + 1e-9);
    }
    assert_eq!(g.position(0.0), g.base + Point::new(1.0, 0.0));
}
