//! Curated host-facing API.
//!
//! The two geometric operations plus the collaborators a host wires around
//! them: a point source, input validation, and optional timing.

// Hull + inscribed circle
pub use crate::geom2::{
    build_hull, circumcenter, clearance, find_largest_inscribed_circle, is_inside_hull,
    is_proper, point_segment_distance, polygon_edges, signed_area, solve, Circle, Point,
};
// Point sources and input checks
pub use crate::geom2::rand::{
    draw_uniform_points, CloudSample, RectCfg, ReplayToken, SampleError,
    UniformCloudGenerator, DEFAULT_POINT_COUNT,
};
pub use crate::geom2::validate::{validate_points, PointSetError};
// Instrumentation
pub use crate::timing::{timed_pipeline, BuildTimes, TimedRun};
