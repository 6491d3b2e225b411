//! Random point clouds in an axis-aligned rectangle (uniform + replay tokens).
//!
//! Purpose
//! - The point-set source feeding `build_hull`: `count` points drawn uniformly
//!   from `[x0, x0+width) × [y0, y0+height)` (a drawing canvas by default).
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the `index`-th cloud of a stream can be regenerated on its own.
//!
//! Code cross-refs: `hull::build_hull`, `crate::timing`

use std::fmt;

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count used when the caller does not supply one.
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Errors surfaced by the samplers.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sampling rectangle. Defaults to a 1024×768 canvas anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectCfg {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            width: 1024.0,
            height: 768.0,
        }
    }
}

impl RectCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        if !(self.x0.is_finite() && self.y0.is_finite()) {
            return Err(SampleError::invalid("rectangle origin must be finite"));
        }
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(SampleError::invalid("rectangle extent must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SampleError::invalid("width and height must be > 0"));
        }
        Ok(())
    }

    /// Closed-rectangle membership; the far edges absorb rounding of `x0 + u*width`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.x0..=self.x0 + self.width).contains(&p.x)
            && (self.y0..=self.y0 + self.height).contains(&p.y)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `count` points uniformly in `rect`.
pub fn draw_uniform_points(
    count: usize,
    rect: RectCfg,
    tok: ReplayToken,
) -> Result<Vec<Point>, SampleError> {
    rect.validate()?;
    let mut rng = tok.to_std_rng();
    let pts = (0..count)
        .map(|_| {
            let x = rect.x0 + rng.gen::<f64>() * rect.width;
            let y = rect.y0 + rng.gen::<f64>() * rect.height;
            Point::new(x, y)
        })
        .collect::<Vec<_>>();
    debug_assert!(pts.iter().all(|&p| rect.contains(p)));
    Ok(pts)
}

/// A drawn cloud plus the token that regenerates it.
#[derive(Clone, Debug)]
pub struct CloudSample {
    pub points: Vec<Point>,
    pub replay: ReplayToken,
}

/// Stream of uniform clouds with a fixed count and rectangle.
#[derive(Clone, Debug)]
pub struct UniformCloudGenerator {
    count: usize,
    rect: RectCfg,
    seed: u64,
    next_index: u64,
}

impl UniformCloudGenerator {
    pub fn new(count: usize, rect: RectCfg, seed: u64) -> Result<Self, SampleError> {
        rect.validate()?;
        Ok(Self {
            count,
            rect,
            seed,
            next_index: 0,
        })
    }

    pub fn generate_next(&mut self) -> Result<CloudSample, SampleError> {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index += 1;
        let points = draw_uniform_points(self.count, self.rect, replay)?;
        Ok(CloudSample { points, replay })
    }

    pub fn regenerate(&self, replay: &ReplayToken) -> Result<Vec<Point>, SampleError> {
        draw_uniform_points(self.count, self.rect, *replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_uniform_points(50, RectCfg::default(), tok).unwrap();
        let b = draw_uniform_points(50, RectCfg::default(), tok).unwrap();
        assert_eq!(a, b);
        let c = draw_uniform_points(50, RectCfg::default(), ReplayToken { seed: 42, index: 8 })
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn points_stay_in_rectangle() {
        let rect = RectCfg {
            x0: -5.0,
            y0: 10.0,
            width: 2.0,
            height: 0.5,
        };
        let pts = draw_uniform_points(500, rect, ReplayToken { seed: 1, index: 0 }).unwrap();
        assert_eq!(pts.len(), 500);
        assert!(pts.iter().all(|&p| rect.contains(p)));
    }

    #[test]
    fn zero_count_is_empty() {
        let pts = draw_uniform_points(0, RectCfg::default(), ReplayToken { seed: 3, index: 0 })
            .unwrap();
        assert!(pts.is_empty());
    }

    #[test]
    fn invalid_rectangles_are_rejected() {
        let tok = ReplayToken { seed: 0, index: 0 };
        for rect in [
            RectCfg {
                width: 0.0,
                ..RectCfg::default()
            },
            RectCfg {
                height: -1.0,
                ..RectCfg::default()
            },
            RectCfg {
                x0: f64::NAN,
                ..RectCfg::default()
            },
            RectCfg {
                width: f64::INFINITY,
                ..RectCfg::default()
            },
        ] {
            let err = draw_uniform_points(3, rect, tok).unwrap_err();
            assert!(matches!(err, SampleError::InvalidParams { .. }));
        }
    }

    #[test]
    fn generator_stream_replays() {
        let mut gen = UniformCloudGenerator::new(20, RectCfg::default(), 2025).unwrap();
        let first = gen.generate_next().unwrap();
        let second = gen.generate_next().unwrap();
        assert_eq!(first.replay.index, 0);
        assert_eq!(second.replay.index, 1);
        assert_ne!(first.points, second.points);
        assert_eq!(gen.regenerate(&first.replay).unwrap(), first.points);
    }
}
