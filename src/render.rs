//! Painting: CSS transforms for the viewport and 2D canvas drawing for the brain.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads animator state and produces pixels; it never mutates the scene.
//!
//! Fallible `Canvas2D` calls propagate via `Result<(), JsValue>`; the frame
//! loop in [`crate::host::brain`] decides what to do with a failure.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::brain::{Animator, GlyphPoint, Lobe, Scene, ShapeKind, ShapeMarker};
use crate::config::Theme;
use crate::geom::{Point, Size};

const GLYPH_FONT: &str = "11px Menlo, Monaco, Consolas, 'Fira Code', monospace";
const OUTLINE_WIDTH_PX: f64 = 1.5;
/// Stroke alpha of an unlit marker, before the global fade alpha.
const UNLIT_STROKE_ALPHA: f64 = 0.4;

// =============================================================
// Viewport
// =============================================================

/// CSS transform for a content offset, each component rounded to two decimals.
#[must_use]
pub fn transform_css(offset: Point) -> String {
    format!("translate3d({}px, {}px, 0)", round2(offset.x), round2(offset.y))
}

fn round2(v: f64) -> f64 {
    // `+ 0.0` folds negative zero so it prints as `0`.
    (v * 100.0).round() / 100.0 + 0.0
}

// =============================================================
// Colors
// =============================================================

#[must_use]
pub fn rgba(rgb: [u8; 3], alpha: f64) -> String {
    let [r, g, b] = rgb;
    format!("rgba({r},{g},{b},{alpha:.3})")
}

/// Glyph fill color. Flickering glyphs darken on the light theme.
#[must_use]
pub fn glyph_rgb(theme: Theme, flickering: bool) -> [u8; 3] {
    match (theme, flickering) {
        (Theme::Dark, _) => [160, 160, 160],
        (Theme::Light, true) => [60, 60, 60],
        (Theme::Light, false) => [100, 100, 100],
    }
}

#[must_use]
pub fn outline_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rgba(120,120,120,0.5)",
        Theme::Light => "rgba(150,150,150,0.6)",
    }
}

// =============================================================
// Brain
// =============================================================

/// Draw one brain frame at `now_ms`.
///
/// `size` is in CSS pixels and `dpr` is the device pixel ratio. The animator
/// must already have been advanced to `now_ms`.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_brain(
    ctx: &CanvasRenderingContext2d,
    animator: &Animator,
    size: Size,
    dpr: f64,
    now_ms: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, size.width, size.height);

    let Some(scene) = animator.scene() else {
        return Ok(());
    };

    draw_outlines(ctx, scene, animator)?;

    let t_secs = now_ms / 1000.0;

    ctx.save();
    scale_about(ctx, scene.geometry.center(Lobe::Left), animator.lobe_scale(Lobe::Left))?;
    for shape in &scene.shapes {
        if shape.fade_opacity > 0.0 {
            draw_shape(ctx, shape, t_secs)?;
        }
    }
    ctx.restore();

    ctx.save();
    scale_about(ctx, scene.geometry.center(Lobe::Right), animator.lobe_scale(Lobe::Right))?;
    ctx.set_font(GLYPH_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for glyph in &scene.glyphs {
        if glyph.fade_opacity > 0.0 {
            draw_glyph(ctx, glyph, animator.theme(), now_ms)?;
        }
    }
    ctx.restore();

    Ok(())
}

fn scale_about(ctx: &CanvasRenderingContext2d, center: Point, scale: f64) -> Result<(), JsValue> {
    ctx.translate(center.x, center.y)?;
    ctx.scale(scale, scale)?;
    ctx.translate(-center.x, -center.y)
}

fn draw_outlines(ctx: &CanvasRenderingContext2d, scene: &Scene, animator: &Animator) -> Result<(), JsValue> {
    let progress = animator.outline_progress();
    if progress <= 0.0 {
        return Ok(());
    }

    ctx.save();
    ctx.set_stroke_style_str(outline_color(animator.theme()));
    ctx.set_line_width(OUTLINE_WIDTH_PX);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    let (left, right) = scene.geometry.outline(progress);
    for (lobe, points) in [(Lobe::Left, left), (Lobe::Right, right)] {
        if points.is_empty() {
            continue;
        }
        ctx.save();
        scale_about(ctx, scene.geometry.center(lobe), animator.lobe_scale(lobe))?;
        stroke_polyline(ctx, &points);
        ctx.restore();
    }

    ctx.restore();
    Ok(())
}

fn stroke_polyline(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &ShapeMarker, t_secs: f64) -> Result<(), JsValue> {
    let ShapeMarker { pos, kind, color, size, .. } = *shape;
    ctx.save();

    if shape.is_lit() {
        let alpha = shape.lit_alpha(t_secs);
        let glow = ctx.create_radial_gradient(pos.x, pos.y, 0.0, pos.x, pos.y, size * 2.0)?;
        glow.add_color_stop(0.0, &rgba(color, alpha))?;
        glow.add_color_stop(0.5, &rgba(color, alpha * 0.3))?;
        glow.add_color_stop(1.0, &rgba(color, 0.0))?;
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        trace_shape(ctx, kind, pos, size * 2.0, size * 1.5)?;
        ctx.fill();

        ctx.set_fill_style_str(&rgba(color, (alpha * 1.2).min(1.0)));
        ctx.begin_path();
        trace_shape(ctx, kind, pos, size, size)?;
        ctx.fill();
    } else {
        ctx.set_global_alpha(shape.fade_opacity * UNLIT_STROKE_ALPHA);
        ctx.set_stroke_style_str(&rgba(color, UNLIT_STROKE_ALPHA));
        ctx.set_line_width(1.0);
        ctx.begin_path();
        trace_shape(ctx, kind, pos, size, size)?;
        ctx.stroke();
    }

    ctx.restore();
    Ok(())
}

/// Add the outline of `kind` centered on `c` to the current path.
///
/// `r` is the circle radius (and the half-extent of the other kinds); `arm`
/// is the half-length of the cross arms.
fn trace_shape(ctx: &CanvasRenderingContext2d, kind: ShapeKind, c: Point, r: f64, arm: f64) -> Result<(), JsValue> {
    match kind {
        ShapeKind::Circle => ctx.arc(c.x, c.y, r, 0.0, TAU)?,
        ShapeKind::Square => ctx.rect(c.x - r, c.y - r, r * 2.0, r * 2.0),
        ShapeKind::Triangle => {
            ctx.move_to(c.x, c.y - r);
            ctx.line_to(c.x + r * 0.866, c.y + r * 0.5);
            ctx.line_to(c.x - r * 0.866, c.y + r * 0.5);
            ctx.close_path();
        }
        ShapeKind::Cross => {
            let w = r * 0.3;
            ctx.rect(c.x - w, c.y - arm, w * 2.0, arm * 2.0);
            ctx.rect(c.x - arm, c.y - w, arm * 2.0, w * 2.0);
        }
    }
    Ok(())
}

fn draw_glyph(ctx: &CanvasRenderingContext2d, glyph: &GlyphPoint, theme: Theme, now_ms: f64) -> Result<(), JsValue> {
    let flickering = glyph.is_flickering(now_ms);
    ctx.set_fill_style_str(&rgba(glyph_rgb(theme, flickering), glyph.alpha(now_ms)));
    let at = glyph.position(now_ms / 1000.0);
    let mut buf = [0u8; 4];
    ctx.fill_text(glyph.glyph.encode_utf8(&mut buf), at.x, at.y)
}
