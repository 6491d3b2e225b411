//! Basic 2D types shared by the hull builder and the inscribed-circle solver.
//!
//! - `Point`: finite `(x, y)` pair; nalgebra's `Point2<f64>` so that differences
//!   are `Vector2<f64>` and distances come for free.
//! - `Circle`: center plus non-negative radius.
//!
//! Code cross-refs: `hull::build_hull`, `inscribed::solve`

use nalgebra::Point2;

/// A 2D point with double-precision coordinates.
///
/// Equality is coordinate equality. The lexicographic order used by the hull
/// builder lives in `util::lex_cmp`; it is not a semantic ordering.
pub type Point = Point2<f64>;

/// Circle given by center and radius.
///
/// Invariants:
/// - `radius >= 0`.
/// - When produced by the solver, the circle lies inside the hull it was
///   computed for (tangency allowed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// `(center, radius)` tuple, the shape handed to renderers.
    #[inline]
    pub fn into_parts(self) -> (Point, f64) {
        (self.center, self.radius)
    }
}
