//! 2D convex hull and largest inscribed circle.
//!
//! Purpose
//! - `build_hull`: unordered points → CCW convex hull (monotone chain).
//! - `solve` / `find_largest_inscribed_circle`: CCW hull → largest circle
//!   among circumcenter candidates that stays inside the hull.
//!
//! Pipeline
//! - Points flow one way: source (`rand`, or caller data checked by
//!   `validate`) → `hull` → `inscribed`. No stage retains state between calls.
//!
//! Numerics
//! - Predicates are exact sign tests (`cross >= 0`, `d == 0`) with no epsilon.
//!   Degenerate cases are explicit branches, never NaN propagation.

pub mod hull;
pub mod inscribed;
pub mod rand;
mod types;
mod util;
pub mod validate;

pub use hull::{build_hull, is_proper};
pub use inscribed::{circumcenter, clearance, find_largest_inscribed_circle, is_inside_hull, solve};
pub use types::{Circle, Point};
pub use util::{cross, lex_cmp, point_segment_distance, polygon_edges, signed_area};
pub use validate::{validate_points, PointSetError};
