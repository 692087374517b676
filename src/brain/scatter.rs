//! Minimum-distance rejection sampling.
//!
//! Candidates come from a caller-supplied sampler and are kept when they pass
//! the boundary test and sit at least `min_distance` from every point already
//! kept. After `relax_after` attempts the spacing rule is dropped so the target
//! count can still be reached; sampling stops for good at `max_attempts`.

#[cfg(test)]
#[path = "scatter_test.rs"]
mod scatter_test;

use crate::geom::Point;

/// Limits for [`scatter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterParams {
    /// Number of points wanted.
    pub count: usize,
    /// Minimum pairwise spacing while it is enforced.
    pub min_distance: f64,
    /// Attempt number after which spacing is no longer enforced.
    pub relax_after: usize,
    /// Hard cap on candidates drawn.
    pub max_attempts: usize,
}

impl ScatterParams {
    /// Budget of 50 attempts per point before relaxing and 100 per point in total.
    #[must_use]
    pub fn for_count(count: usize, min_distance: f64) -> Self {
        Self { count, min_distance, relax_after: count * 50, max_attempts: count * 100 }
    }
}

/// Output of [`scatter`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scattered {
    /// Accepted points in acceptance order.
    pub points: Vec<Point>,
    /// Length of the prefix of `points` accepted while spacing was enforced.
    /// No two points in that prefix are closer than `min_distance`.
    pub spaced: usize,
}

/// Scatter up to `params.count` points accepted by `inside`.
///
/// The result is shorter than `count` only if `max_attempts` ran out.
pub fn scatter<S, B>(params: ScatterParams, mut sample: S, inside: B) -> Scattered
where
    S: FnMut() -> Point,
    B: Fn(Point) -> bool,
{
    let mut points: Vec<Point> = Vec::with_capacity(params.count);
    let min_sq = params.min_distance * params.min_distance;
    let mut attempts = 0;
    let mut spaced = None;

    while points.len() < params.count && attempts < params.max_attempts {
        attempts += 1;
        if attempts >= params.relax_after && spaced.is_none() {
            spaced = Some(points.len());
        }
        let candidate = sample();
        if !inside(candidate) {
            continue;
        }
        let crowded = points.iter().any(|p| p.distance_sq(candidate) < min_sq);
        if crowded && attempts < params.relax_after {
            continue;
        }
        points.push(candidate);
    }
    let spaced = spaced.unwrap_or(points.len());
    Scattered { points, spaced }
}
