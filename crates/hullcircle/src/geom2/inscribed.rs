//! Largest inscribed circle of a convex hull, by circumcircle enumeration.
//!
//! Method
//! - Candidates are circumcenters of vertex triples `(h[i], h[(i+1)%n], h[j])`
//!   for `i` over all vertices and `j` in `i+1..n`. This is O(n²) triples, not
//!   every combination of three vertices; the narrower pattern is kept because
//!   it decides which centers are ever considered.
//! - A candidate survives if it is inside the hull (`cross >= 0` on every
//!   edge, boundary counts as inside). Its radius is the clearance: minimum
//!   point-to-segment distance over all edges.
//! - The largest clearance wins. Ties keep the first candidate found.
//!
//! Overall O(n³); fine for hulls with tens to low hundreds of vertices.
//!
//! Assumptions
//! - `hull` is CCW (as produced by `hull::build_hull`). Zero-length edges are
//!   tolerated: the segment distance degenerates to a point distance.
//!
//! Code cross-refs: `util::{cross, point_segment_distance, polygon_edges}`

use super::types::{Circle, Point};
use super::util::{cross, point_segment_distance, polygon_edges};

/// Circumcenter of `p1, p2, p3`, or `None` if the triple is exactly collinear
/// (or the closed form overflows).
pub fn circumcenter(p1: Point, p2: Point, p3: Point) -> Option<Point> {
    let (ax, ay) = (p1.x, p1.y);
    let (bx, by) = (p2.x, p2.y);
    let (cx, cy) = (p3.x, p3.y);
    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d == 0.0 {
        return None;
    }
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;
    if !(ux.is_finite() && uy.is_finite()) {
        return None;
    }
    Some(Point::new(ux, uy))
}

/// Membership in a CCW convex polygon; points on an edge count as inside.
pub fn is_inside_hull(p: Point, hull: &[Point]) -> bool {
    polygon_edges(hull).all(|(a, b)| cross(a, b, p) >= 0.0)
}

/// Distance from `p` to the nearest hull edge (segment distance, not line distance).
///
/// Returns `f64::INFINITY` for an empty hull.
pub fn clearance(p: Point, hull: &[Point]) -> f64 {
    polygon_edges(hull)
        .map(|(a, b)| point_segment_distance(p, a, b))
        .fold(f64::INFINITY, f64::min)
}

/// Largest circle inside `hull` among the enumerated circumcenter candidates.
///
/// `None` if `hull.len() < 3` or no candidate has positive clearance
/// (collinear hulls, or triangles whose circumcenter is not strictly inside).
pub fn solve(hull: &[Point]) -> Option<Circle> {
    let n = hull.len();
    if n < 3 {
        return None;
    }
    let mut best: Option<Circle> = None;
    let mut best_radius = 0.0;
    for i in 0..n {
        let p1 = hull[i];
        let p2 = hull[(i + 1) % n];
        for &p3 in &hull[i + 1..] {
            let Some(center) = circumcenter(p1, p2, p3) else {
                continue;
            };
            if !is_inside_hull(center, hull) {
                continue;
            }
            let radius = clearance(center, hull);
            if radius > best_radius {
                best_radius = radius;
                best = Some(Circle::new(center, radius));
            }
        }
    }
    best
}

/// Host-facing form of `solve`: `(center, radius)`.
#[inline]
pub fn find_largest_inscribed_circle(hull: &[Point]) -> Option<(Point, f64)> {
    solve(hull).map(Circle::into_parts)
}
