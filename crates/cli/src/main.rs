//! Command-line front end for the extremal-triangle search.
//!
//! `run` plays the role of the plotting tool's foreground loop: it starts
//! the controller, polls every tick without ever joining the worker, logs
//! integer-percent progress, and reports the outcome (or timeout) when the
//! poll observes a terminal state.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;
use trifinder::prelude::*;

mod plist;

#[derive(Parser)]
#[command(name = "trifinder")]
#[command(about = "Min/max triangle search over plotted point lists")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Search a point-list file for the extremal triangles
    Run {
        /// Point list in the `[x, y][x, y]…` format
        #[arg(long)]
        input: PathBuf,
        /// Wall-clock deadline for the search
        #[arg(long, default_value_t = 120)]
        timeout_secs: u64,
        /// Triples between cancellation checks
        #[arg(long, default_value_t = 1024)]
        batch: usize,
        /// Foreground poll interval in milliseconds
        #[arg(long, default_value_t = 50)]
        tick_ms: u64,
        /// Write the result as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a random point-list file
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 50.0)]
        half_extent: f64,
        /// Destination path; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            timeout_secs,
            batch,
            tick_ms,
            out,
        } => run(&input, timeout_secs, batch, tick_ms, out.as_deref()),
        Action::Gen {
            count,
            seed,
            half_extent,
            out,
        } => gen(count, seed, half_extent, out.as_deref()),
    }
}

fn run(
    input: &Path,
    timeout_secs: u64,
    batch: usize,
    tick_ms: u64,
    out: Option<&Path>,
) -> Result<()> {
    let points = plist::read_file(input)?;
    tracing::info!(count = points.len(), input = %input.display(), "loaded point list");

    let mut controller = SearchController::new(ControllerCfg {
        timeout: Duration::from_secs(timeout_secs),
        search: SearchCfg { batch_size: batch },
    });
    let progress = Arc::new(LatestProgress::new());
    let started = Instant::now();
    if !controller.start(&points, Arc::clone(&progress) as Arc<dyn ProgressSink>) {
        match controller.last_error() {
            Some(err) => bail!("search rejected: {err}"),
            None => bail!("search rejected"),
        }
    }

    // Foreground loop: tick, log percent steps, never block on the worker.
    let mut logged_percent: u64 = 0;
    let state = loop {
        let (done, state) = controller.poll();
        if done {
            break state;
        }
        let percent = progress.get() as u64;
        if percent > logged_percent {
            logged_percent = percent;
            tracing::info!(percent, "searching");
        }
        thread::sleep(Duration::from_millis(tick_ms.max(1)));
    };

    match state {
        SearchState::Completed => {
            let result = controller
                .result()
                .context("completed search without a result")?;
            tracing::info!(
                min_area = result.min_triangle.area(),
                max_area = result.max_triangle.area(),
                scanned = result.scanned,
                valid = result.valid,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "search completed"
            );
            println!(
                "min area: {}, max area: {}",
                result.min_triangle.area(),
                result.max_triangle.area()
            );
            if let Some(out) = out {
                let doc = ResultDoc::new(result, started.elapsed());
                std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
                    .with_context(|| format!("writing {}", out.display()))?;
                tracing::info!(out = %out.display(), "wrote result");
            }
            Ok(())
        }
        SearchState::TimedOut => {
            bail!("search did not finish within {timeout_secs}s (cancelled cooperatively)")
        }
        SearchState::Failed => match controller.last_error() {
            Some(err) => bail!("search failed: {err}"),
            None => bail!("search failed"),
        },
        SearchState::Idle | SearchState::Running => unreachable!("poll reported done"),
    }
}

fn gen(count: usize, seed: u64, half_extent: f64, out: Option<&Path>) -> Result<()> {
    let cloud = draw_point_cloud(
        CloudCfg {
            count,
            half_extent,
            snap_to_grid: true,
        },
        ReplayToken { seed, index: 0 },
    );
    let rendered = plist::format(&cloud);
    match out {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(count, seed, out = %path.display(), "wrote point list");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[derive(Serialize)]
struct PointDoc {
    id: u64,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct TriangleDoc {
    label: String,
    area: f64,
    points: Vec<PointDoc>,
}

impl TriangleDoc {
    fn new(t: &Triangle) -> Self {
        let (p1, p2, p3) = t.points();
        Self {
            label: t.label.clone(),
            area: t.area(),
            points: [p1, p2, p3]
                .iter()
                .map(|p| PointDoc {
                    id: p.id,
                    x: p.x(),
                    y: p.y(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct ResultDoc {
    min: TriangleDoc,
    max: TriangleDoc,
    scanned: u64,
    valid: u64,
    elapsed_ms: u64,
}

impl ResultDoc {
    fn new(result: &SearchResult, elapsed: Duration) -> Self {
        Self {
            min: TriangleDoc::new(&result.min_triangle),
            max: TriangleDoc::new(&result.max_triangle),
            scanned: result.scanned,
            valid: result.valid,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}
