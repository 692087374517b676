//! Lobe geometry derived from the canvas size.
//!
//! Each lobe is an ellipse with radii `(rx, ry)`. A point belongs to a lobe
//! when it is inside the ellipse, inside a sinusoidally folded inner boundary,
//! and on the lobe's side of the vertical midline (with a small margin).

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::PI;

use crate::consts::{HOVER_TOLERANCE, LOBE_GAP_PX, MIDLINE_MARGIN_PX, OUTLINE_POINTS};
use crate::geom::{Point, Rect, Size};

/// One half of the brain silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lobe {
    /// Shape marker grid.
    Left,
    /// Glyph scatter.
    Right,
}

/// Silhouette geometry for one canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrainGeometry {
    pub size: Size,
    pub left_center: Point,
    pub right_center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl BrainGeometry {
    /// Lay out both lobes for a canvas of `size`. `None` when the size is empty.
    #[must_use]
    pub fn new(size: Size) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        let brain_width = (size.width * 0.95).min(size.height * 1.3);
        let midline = size.width * 0.5;
        let cy = size.height * 0.5 + size.height * 0.01;
        Some(Self {
            size,
            left_center: Point::new(midline - LOBE_GAP_PX * 0.5, cy),
            right_center: Point::new(midline + LOBE_GAP_PX * 0.5, cy),
            rx: brain_width * 0.22,
            ry: brain_width * 0.35,
        })
    }

    #[must_use]
    pub fn center(&self, lobe: Lobe) -> Point {
        match lobe {
            Lobe::Left => self.left_center,
            Lobe::Right => self.right_center,
        }
    }

    /// X coordinate of the vertical line between the lobes.
    #[must_use]
    pub fn midline(&self) -> f64 {
        self.size.width * 0.5
    }

    /// Approximate lobe area (`π·rx·ry`).
    #[must_use]
    pub fn lobe_area(&self) -> f64 {
        PI * self.rx * self.ry
    }

    /// `√((dx/rx)² + (dy/ry)²)` relative to the lobe center; 1 on the ellipse.
    #[must_use]
    pub fn normalized_radius(&self, lobe: Lobe, p: Point) -> f64 {
        let d = p - self.center(lobe);
        ((d.x * d.x) / (self.rx * self.rx) + (d.y * d.y) / (self.ry * self.ry)).sqrt()
    }

    /// Whether `p` lies inside the folded silhouette of `lobe`.
    #[must_use]
    pub fn contains(&self, lobe: Lobe, p: Point) -> bool {
        if self.normalized_radius(lobe, p) > 1.0 {
            return false;
        }

        let d = p - self.center(lobe);
        let angle = d.y.atan2(d.x);
        let norm_dist = d.length() / self.rx.hypot(self.ry);
        let fold = 0.85 + 0.15 * (angle * 5.0 + norm_dist * 3.0).sin();
        if norm_dist >= fold * 0.9 {
            return false;
        }

        let midline = self.midline();
        match lobe {
            Lobe::Left => p.x <= midline - MIDLINE_MARGIN_PX,
            Lobe::Right => p.x >= midline + MIDLINE_MARGIN_PX,
        }
    }

    /// Whether the pointer at `p` should count as hovering `lobe`.
    #[must_use]
    pub fn hover_hit(&self, lobe: Lobe, p: Point) -> bool {
        if self.normalized_radius(lobe, p) > HOVER_TOLERANCE {
            return false;
        }
        match lobe {
            Lobe::Left => p.x < self.midline(),
            Lobe::Right => p.x >= self.midline(),
        }
    }

    /// Region scanned by the shape marker grid: the left lobe's box, clipped at the midline.
    #[must_use]
    pub fn shape_grid_bounds(&self) -> Rect {
        let left = self.left_center.x - self.rx;
        let right = self.midline() - MIDLINE_MARGIN_PX;
        let top = self.left_center.y - self.ry;
        Rect::new(left, top, (right - left).max(0.0), self.ry * 2.0)
    }

    /// Box glyph candidates are drawn from: the right lobe's box grown by 10%.
    #[must_use]
    pub fn glyph_sample_bounds(&self) -> Rect {
        let hw = self.rx * 1.1;
        let hh = self.ry * 1.1;
        Rect::new(self.right_center.x - hw, self.right_center.y - hh, hw * 2.0, hh * 2.0)
    }

    /// Minimum spacing for `count` glyphs: 75% of the ideal even spacing.
    #[must_use]
    pub fn glyph_min_distance(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let per_point = self.lobe_area() / count as f64;
        per_point.sqrt() * 0.75
    }

    /// Vertex `i` of a lobe's outline polyline, `i` in `0..=OUTLINE_POINTS / 2`.
    #[must_use]
    pub fn outline_vertex(&self, lobe: Lobe, i: usize) -> Point {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / (OUTLINE_POINTS / 2) as f64;
        match lobe {
            Lobe::Left => {
                let angle = PI / 2.15 + t * PI;
                let r = self.rx * (0.98 + 0.08 * (angle * 7.0).sin() + 0.04 * (angle * 13.0).cos());
                let r_y = self.ry * (0.98 + 0.06 * (angle * 5.0).cos() + 0.05 * (angle * 11.0).sin());
                let ridge = 1.0 - (0.03 + 0.02 * (angle * 19.0).sin()) * (angle * 23.0).cos();
                Point::new(
                    self.left_center.x + angle.cos() * r * ridge - 6.0,
                    self.left_center.y + angle.sin() * r_y * ridge - 8.0,
                )
            }
            Lobe::Right => {
                let angle = -PI / 2.0 + t * PI;
                let r = self.rx * (0.98 + 0.07 * (angle * 6.0).sin() + 0.05 * (angle * 14.0).cos());
                let r_y = self.ry * (0.98 + 0.05 * (angle * 8.0).cos() + 0.06 * (angle * 12.0).sin());
                let ridge = 1.0 - (0.025 + 0.025 * (angle * 17.0).sin()) * (angle * 21.0).cos();
                Point::new(
                    self.right_center.x + angle.cos() * r * ridge + 6.0,
                    self.right_center.y + angle.sin() * r_y * ridge,
                )
            }
        }
    }

    /// Outline vertices to draw for each lobe at `progress` in `[0, 1]`.
    ///
    /// The left outline draws first; the right one starts only once the left
    /// is complete.
    #[must_use]
    pub fn outline(&self, progress: f64) -> (Vec<Point>, Vec<Point>) {
        let half = OUTLINE_POINTS / 2;
        let (left_n, right_n) = outline_vertex_counts(progress);
        let left = (0..left_n.min(half + 1)).map(|i| self.outline_vertex(Lobe::Left, i)).collect();
        let right = (0..right_n.min(half + 1)).map(|i| self.outline_vertex(Lobe::Right, i)).collect();
        (left, right)
    }
}

/// Number of vertices drawn per lobe at outline `progress`.
#[must_use]
pub fn outline_vertex_counts(progress: f64) -> (usize, usize) {
    if progress <= 0.0 || progress.is_nan() {
        return (0, 0);
    }
    let half = OUTLINE_POINTS / 2;
    #[allow(clippy::cast_precision_loss)]
    let drawn = progress.min(1.0) * OUTLINE_POINTS as f64;
    #[allow(clippy::cast_precision_loss)]
    let half_f = half as f64;
    let count = |n: f64| -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = n.floor() as usize;
        whole + 1
    };
    let left = count(drawn.min(half_f));
    let right = if drawn > half_f { count((drawn - half_f).min(half_f)) } else { 0 };
    (left, right)
}
