//! Wall-clock instrumentation for the hull → circle pipeline.
//!
//! Diagnostic only: durations are keyed by input point count so a host can
//! plot "build time vs number of points". Nothing here feeds back into the
//! geometry.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::geom2::{build_hull, solve, Circle, Point};

/// Result of one timed `build_hull` + `solve` pair.
#[derive(Clone, Debug)]
pub struct TimedRun {
    pub point_count: usize,
    pub hull: Vec<Point>,
    pub circle: Option<Circle>,
    pub elapsed: Duration,
}

/// Run the full pipeline on `points` and measure it.
pub fn timed_pipeline(points: &[Point]) -> TimedRun {
    let start = Instant::now();
    let hull = build_hull(points);
    let circle = solve(&hull);
    let elapsed = start.elapsed();
    TimedRun {
        point_count: points.len(),
        hull,
        circle,
        elapsed,
    }
}

/// Append-only log of `(point_count, elapsed)` samples.
#[derive(Clone, Debug, Default)]
pub struct BuildTimes {
    samples: Vec<(usize, Duration)>,
}

impl BuildTimes {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, point_count: usize, elapsed: Duration) {
        self.samples.push((point_count, elapsed));
    }

    /// Record a finished run; returns it for chaining.
    pub fn record_run(&mut self, run: TimedRun) -> TimedRun {
        self.record(run.point_count, run.elapsed);
        run
    }

    #[inline]
    pub fn samples(&self) -> &[(usize, Duration)] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Mean duration per point count, ascending by count.
    pub fn mean_by_count(&self) -> Vec<(usize, Duration)> {
        let mut acc: BTreeMap<usize, (Duration, u32)> = BTreeMap::new();
        for &(n, d) in &self.samples {
            let e = acc.entry(n).or_insert((Duration::ZERO, 0));
            e.0 += d;
            e.1 += 1;
        }
        acc.into_iter()
            .map(|(n, (total, k))| (n, total / k))
            .collect()
    }
}
