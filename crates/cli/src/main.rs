use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hullcircle::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod report;

use provenance::{ensure_parent_dir, write_sidecar, Payload};
use report::PipelineReport;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull and largest inscribed circle runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random cloud, run the pipeline, write a JSON result
    Random {
        /// Points to draw; unparsable values fall back to the default
        #[arg(long, default_value_t = DEFAULT_POINT_COUNT, value_parser = count_or_default)]
        count: usize,
        #[arg(long, default_value_t = 1024.0)]
        width: f64,
        #[arg(long, default_value_t = 768.0)]
        height: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Also dump the drawn points as an x,y CSV
        #[arg(long)]
        points_out: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run the pipeline on user points read from an x,y CSV
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Time the pipeline over several point counts and write a points,millis CSV
    Sweep {
        #[arg(long, value_delimiter = ',', default_values_t = vec![10usize, 100, 1000])]
        counts: Vec<usize>,
        /// Clouds per count; the table holds the mean
        #[arg(long, default_value_t = 3)]
        repeats: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn count_or_default(raw: &str) -> Result<usize, std::convert::Infallible> {
    Ok(raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(raw, fallback = DEFAULT_POINT_COUNT, "invalid_count");
        DEFAULT_POINT_COUNT
    }))
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Random {
            count,
            width,
            height,
            seed,
            index,
            points_out,
            out,
        } => {
            let rect = RectCfg {
                width,
                height,
                ..RectCfg::default()
            };
            random(count, rect, ReplayToken { seed, index }, points_out, out)
        }
        Action::Run { input, out } => run(input, out),
        Action::Sweep {
            counts,
            repeats,
            seed,
            out,
        } => sweep(counts, repeats, seed, out),
        Action::Report => report(),
    }
}

fn random(
    count: usize,
    rect: RectCfg,
    tok: ReplayToken,
    points_out: Option<PathBuf>,
    out: PathBuf,
) -> Result<()> {
    tracing::info!(count, seed = tok.seed, index = tok.index, "random");
    let points = draw_uniform_points(count, rect, tok)?;
    if let Some(path) = &points_out {
        points_io::write_points_csv(path, &points)?;
    }
    let params = serde_json::json!({
        "count": count,
        "width": rect.width,
        "height": rect.height,
        "seed": tok.seed,
        "index": tok.index,
        "points_out": points_out,
    });
    pipeline_to_json(&points, &out, Payload::new("random", params))
}

fn run(input: PathBuf, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "run");
    let points = points_io::read_points_csv(&input)?;
    validate_points(&points).with_context(|| format!("validating {}", input.display()))?;
    let params = serde_json::json!({ "input": input });
    pipeline_to_json(&points, &out, Payload::new("run", params))
}

fn pipeline_to_json(points: &[Point], out: &Path, payload: Payload) -> Result<()> {
    let result = timed_pipeline(points);
    let elapsed_ms = result.elapsed.as_secs_f64() * 1e3;
    match result.circle {
        Some(c) => tracing::info!(
            points = result.point_count,
            hull = result.hull.len(),
            center_x = c.center.x,
            center_y = c.center.y,
            radius = c.radius,
            elapsed_ms,
            "inscribed_circle"
        ),
        None => tracing::info!(
            points = result.point_count,
            hull = result.hull.len(),
            elapsed_ms,
            "no_inscribed_circle"
        ),
    }
    let doc = PipelineReport::new(points, &result);
    write_bytes(out, &serde_json::to_vec_pretty(&doc)?)?;
    write_sidecar(out, payload)?;
    Ok(())
}

fn sweep(counts: Vec<usize>, repeats: usize, seed: u64, out: PathBuf) -> Result<()> {
    tracing::info!(counts = ?counts, repeats, seed, out = %out.display(), "sweep");
    let repeats = repeats.max(1);
    let mut times = BuildTimes::new();
    for &n in &counts {
        let mut gen = UniformCloudGenerator::new(n, RectCfg::default(), seed)?;
        for _ in 0..repeats {
            let sample = gen.generate_next()?;
            let run = times.record_run(timed_pipeline(&sample.points));
            tracing::debug!(
                points = n,
                index = sample.replay.index,
                hull = run.hull.len(),
                elapsed_ms = run.elapsed.as_secs_f64() * 1e3,
                "sweep_sample"
            );
        }
    }
    let rows = times.mean_by_count();
    for (n, d) in &rows {
        tracing::info!(points = n, mean_ms = d.as_secs_f64() * 1e3, "build_time");
    }
    points_io::write_timings_csv(&out, &rows)?;
    let params = serde_json::json!({
        "counts": counts,
        "repeats": repeats,
        "seed": seed,
    });
    write_sidecar(&out, Payload::new("sweep", params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hullcircle_version": hullcircle::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_bytes(out: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(out)?;
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
