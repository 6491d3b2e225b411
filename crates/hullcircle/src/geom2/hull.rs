//! Convex hull of a planar point set (Andrew's monotone chain).
//!
//! Output conventions
//! - Counter-clockwise, starting at the lexicographically smallest vertex.
//! - No repeated vertices and no three consecutive collinear vertices: the
//!   chain pops on `cross <= 0`, so straight turns are discarded too.
//! - Degenerate inputs (fewer than 3 points, duplicates only, all collinear)
//!   are returned unchanged. Callers detect them by `len() < 3` or by zero area.
//!
//! Code cross-refs: `util::{cross, lex_cmp}`, `inscribed::solve`

use super::types::Point;
use super::util::{cross, lex_cmp};

/// Build the convex hull of `points` (CCW).
///
/// Pure and deterministic: sorting is stable and the scan order is fixed.
/// O(n log n) for the sort, O(n) for the chains.
pub fn build_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return points.to_vec();
    }
    let mut lower = half_chain(pts.iter().copied(), pts.len());
    let mut upper = half_chain(pts.iter().rev().copied(), pts.len());
    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        // all collinear
        return points.to_vec();
    }
    hull
}

/// One monotone chain: keep only strict left turns.
fn half_chain(pts: impl Iterator<Item = Point>, cap: usize) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for p in pts {
        while chain.len() >= 2
            && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Whether `hull` is a proper polygon (at least 3 vertices enclosing positive area).
#[inline]
pub fn is_proper(hull: &[Point]) -> bool {
    hull.len() >= 3 && super::util::signed_area(hull) > 0.0
}
