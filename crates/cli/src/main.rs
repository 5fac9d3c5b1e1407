use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use triangulator::sample::{draw_point_cloud, Bounds2, PointCloudCfg, ReplayToken};
use triangulator::{decode_triangulation, encode_point_set, triangulate_point_set, Point};

mod provenance;

use provenance::{write_sidecar, ArtifactKind, Payload};

#[derive(Parser)]
#[command(name = "triangulator")]
#[command(about = "Triangulate binary point sets and inspect the resulting payloads")]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a point-set payload and write the triangulation payload
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a JSON summary of a triangulation payload
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
    /// Convert a CSV with `x` and `y` columns into a point-set payload
    Points {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a seeded random point-set payload
    Generate {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Half-width of the square sampling box centered on the origin
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        /// Probability that a draw repeats an earlier point
        #[arg(long, default_value_t = 0.0)]
        repeat: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Triangulate { input, out } => triangulate(&input, &out),
        Action::Inspect { input } => {
            let summary = inspect(&input)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Points { input, out } => points(&input, &out),
        Action::Generate {
            count,
            seed,
            index,
            extent,
            repeat,
            out,
        } => {
            let cfg = cloud_cfg(count, extent, repeat)?;
            generate(&cfg, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn triangulate(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "triangulate");
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let payload = triangulate_point_set(&raw)
        .with_context(|| format!("triangulating {}", input.display()))?;
    ensure_parent(out)?;
    fs::write(out, &payload).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(input_bytes = raw.len(), output_bytes = payload.len(), "triangulation written");

    let params = serde_json::json!({
        "command": "triangulate",
        "input_bytes": raw.len(),
        "output_bytes": payload.len(),
    });
    write_sidecar(
        out,
        Payload::new(ArtifactKind::Triangulation, params).with_input(input),
    )?;
    Ok(())
}

/// Axis-aligned bounding box of the decoded vertices.
#[derive(Debug, Serialize)]
struct BBox {
    min: [f64; 2],
    max: [f64; 2],
}

/// JSON summary printed by `inspect`.
#[derive(Debug, Serialize)]
struct Summary {
    bytes: usize,
    vertex_count: usize,
    triangle_count: usize,
    degenerate: bool,
    bbox: Option<BBox>,
}

fn inspect(input: &Path) -> Result<Summary> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let t = decode_triangulation(&raw).with_context(|| format!("decoding {}", input.display()))?;
    let bbox = t.vertices.iter().fold(None, |acc: Option<BBox>, v| {
        Some(match acc {
            None => BBox {
                min: [v.x, v.y],
                max: [v.x, v.y],
            },
            Some(b) => BBox {
                min: [b.min[0].min(v.x), b.min[1].min(v.y)],
                max: [b.max[0].max(v.x), b.max[1].max(v.y)],
            },
        })
    });
    let summary = Summary {
        bytes: raw.len(),
        vertex_count: t.vertices.len(),
        triangle_count: t.triangles.len(),
        degenerate: t.is_degenerate(),
        bbox,
    };
    tracing::info!(
        vertices = summary.vertex_count,
        triangles = summary.triangle_count,
        "inspect"
    );
    Ok(summary)
}

fn read_csv_points(input: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        }
    }
    Ok(out)
}

fn points(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "points");
    let pts = read_csv_points(input).with_context(|| format!("reading {}", input.display()))?;
    let payload = encode_point_set(&pts);
    ensure_parent(out)?;
    fs::write(out, &payload).with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({ "command": "points", "count": pts.len() });
    write_sidecar(out, Payload::new(ArtifactKind::PointSet, params).with_input(input))?;
    Ok(())
}

/// Sampler config for a square box `[-extent, extent)²`.
fn cloud_cfg(count: usize, extent: f64, repeat: f64) -> Result<PointCloudCfg> {
    if !(extent >= 0.0) || !(2.0 * extent).is_finite() {
        bail!("--extent must be finite and non-negative with a finite box width (got {extent})");
    }
    if !(0.0..=1.0).contains(&repeat) {
        bail!("--repeat must lie in [0, 1] (got {repeat})");
    }
    Ok(PointCloudCfg {
        count,
        bounds: Bounds2 {
            min: Point::new(-extent, -extent),
            max: Point::new(extent, extent),
        },
        repeat_frac: repeat,
    })
}

fn generate(cfg: &PointCloudCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, "generate");
    let pts = draw_point_cloud(cfg, tok);
    ensure_parent(out)?;
    fs::write(out, encode_point_set(&pts)).with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "command": "generate",
        "count": cfg.count,
        "seed": tok.seed,
        "index": tok.index,
        "bounds": {
            "min": [cfg.bounds.min.x, cfg.bounds.min.y],
            "max": [cfg.bounds.max.x, cfg.bounds.max.y],
        },
        "repeat_frac": cfg.repeat_frac,
    });
    write_sidecar(out, Payload::new(ArtifactKind::PointSet, params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "triangulator_version": triangulator::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
