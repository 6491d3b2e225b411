//! CSV in/out for point sets and timing tables (polars).

use anyhow::{bail, Context, Result};
use crate::provenance::ensure_parent_dir;
use hullcircle::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Read points from a CSV with numeric `x` and `y` columns (other columns ignored).
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{}: row {row} is missing x or y", path.display()),
        }
    }
    Ok(out)
}

/// Write points as an `x,y` CSV.
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    write_csv(path, &mut df)
}

/// Write a `points,millis` table (build time vs number of points).
pub fn write_timings_csv(path: &Path, rows: &[(usize, Duration)]) -> Result<()> {
    let counts: Vec<u64> = rows.iter().map(|&(n, _)| n as u64).collect();
    let millis: Vec<f64> = rows.iter().map(|&(_, d)| d.as_secs_f64() * 1e3).collect();
    let mut df = df!("points" => counts, "millis" => millis)?;
    write_csv(path, &mut df)
}

fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
