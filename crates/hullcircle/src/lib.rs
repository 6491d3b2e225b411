//! Convex hull and largest inscribed circle of planar point sets.
//!
//! The core is two pure functions composed in a strict pipeline:
//! points → `build_hull` → CCW hull → `find_largest_inscribed_circle` →
//! `Option<(center, radius)>`. Point sources (random clouds, caller data) and
//! timing live beside the core; rendering is left to hosts.
//!
//! API Policy
//! - `geom2` is the algorithmic surface; `api` and `prelude` are curated
//!   re-exports for hosts (the CLI, benches, examples).

pub mod api;
pub mod geom2;
pub mod timing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{build_hull, find_largest_inscribed_circle, Circle, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_uniform_points, RectCfg, ReplayToken, SampleError, UniformCloudGenerator,
        DEFAULT_POINT_COUNT,
    };
    pub use crate::geom2::{
        build_hull, find_largest_inscribed_circle, is_inside_hull, solve, validate_points,
        Circle, Point, PointSetError,
    };
    pub use crate::timing::{timed_pipeline, BuildTimes, TimedRun};
}
