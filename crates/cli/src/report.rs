//! JSON shape of a pipeline result, ready for a renderer.

use hullcircle::geom2::polygon_edges;
use hullcircle::timing::TimedRun;
use hullcircle::Point;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CircleOut {
    pub center: [f64; 2],
    pub radius: f64,
}

/// Input points, hull, closed edge list, and circle (or `null`).
#[derive(Debug, Serialize)]
pub struct PipelineReport {
    pub point_count: usize,
    pub points: Vec<[f64; 2]>,
    pub hull: Vec<[f64; 2]>,
    pub edges: Vec<[[f64; 2]; 2]>,
    pub circle: Option<CircleOut>,
    pub elapsed_ms: f64,
}

#[inline]
fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

impl PipelineReport {
    pub fn new(points: &[Point], run: &TimedRun) -> Self {
        Self {
            point_count: run.point_count,
            points: points.iter().copied().map(xy).collect(),
            hull: run.hull.iter().copied().map(xy).collect(),
            edges: polygon_edges(&run.hull)
                .map(|(a, b)| [xy(a), xy(b)])
                .collect(),
            circle: run.circle.map(|c| CircleOut {
                center: xy(c.center),
                radius: c.radius,
            }),
            elapsed_ms: run.elapsed.as_secs_f64() * 1e3,
        }
    }
}
