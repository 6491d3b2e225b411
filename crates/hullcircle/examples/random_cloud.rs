//! Print hull and inscribed circle for a few seeded random clouds.
//!
//! Usage:
//!   cargo run -p hullcircle --example random_cloud -- 200

use hullcircle::prelude::*;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_POINT_COUNT);
    let mut gen = match UniformCloudGenerator::new(count, RectCfg::default(), 2025) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let mut times = BuildTimes::new();
    for _ in 0..3 {
        let sample = match gen.generate_next() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };
        let run = times.record_run(timed_pipeline(&sample.points));
        match run.circle {
            Some(c) => println!(
                "cloud {}: n={}, hull={}, center=({:.3}, {:.3}), r={:.3}",
                sample.replay.index,
                run.point_count,
                run.hull.len(),
                c.center.x,
                c.center.y,
                c.radius
            ),
            None => println!(
                "cloud {}: n={}, hull={}, no circle",
                sample.replay.index,
                run.point_count,
                run.hull.len()
            ),
        }
    }
    for (n, d) in times.mean_by_count() {
        println!("mean build time for n={n}: {:.3} ms", d.as_secs_f64() * 1e3);
    }
}
