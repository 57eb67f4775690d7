//! Enumeration engine: ordered triples, strict incumbent updates.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use crate::geom::{is_valid_triangle, triangle_area, Point, Triangle};

use super::types::{CancelToken, ProgressSink, SearchCfg, SearchError, SearchResult};

/// Run one search over a read-only snapshot of the point registry.
///
/// Enumerates all ordered triples of distinct points (n·(n−1)·(n−2), the
/// reference behavior; area is permutation-invariant so the redundancy costs
/// work, not correctness). Collinear triples are counted in `scanned` but
/// never become extremal candidates. Cancellation is checked once per
/// `cfg.batch_size` triples; progress fires when the integer percent
/// increases.
///
/// Nothing escapes this boundary as an unwind: a panic inside the
/// enumeration is converted to `SearchError::Internal`.
pub fn run(
    points: &[Point],
    cfg: SearchCfg,
    progress: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<SearchResult, SearchError> {
    let distinct: HashSet<u64> = points.iter().map(|p| p.id).collect();
    if distinct.len() < 3 {
        return Err(SearchError::InsufficientPoints {
            got: distinct.len(),
        });
    }

    match panic::catch_unwind(AssertUnwindSafe(|| enumerate(points, cfg, progress, cancel))) {
        Ok(res) => res,
        Err(payload) => Err(SearchError::Internal(panic_message(payload))),
    }
}

fn enumerate(
    points: &[Point],
    cfg: SearchCfg,
    progress: &dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<SearchResult, SearchError> {
    let n = points.len();
    let total = (n as u64) * (n as u64 - 1) * (n as u64 - 2);
    let batch = cfg.batch_size.max(1) as u64;

    let mut scanned: u64 = 0;
    let mut valid: u64 = 0;
    let mut last_whole: u64 = 0;
    // Incumbents as (area, index triple); strict comparisons keep the first
    // encountered on ties, which makes repeated runs bit-identical.
    let mut min: Option<(f64, [usize; 3])> = None;
    let mut max: Option<(f64, [usize; 3])> = None;

    for i in 0..n {
        for j in 0..n {
            if j == i {
                continue;
            }
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                if scanned % batch == 0 && cancel.is_cancelled() {
                    return Err(SearchError::Cancelled);
                }
                scanned += 1;

                let (p1, p2, p3) = (&points[i], &points[j], &points[k]);
                if is_valid_triangle(p1, p2, p3) {
                    valid += 1;
                    let area = triangle_area(p1, p2, p3);
                    match min {
                        Some((a, _)) if area >= a => {}
                        _ => min = Some((area, [i, j, k])),
                    }
                    match max {
                        Some((a, _)) if area <= a => {}
                        _ => max = Some((area, [i, j, k])),
                    }
                }

                let whole = scanned * 100 / total;
                if whole > last_whole {
                    last_whole = whole;
                    progress.on_progress(scanned as f64 / total as f64 * 100.0);
                }
            }
        }
    }

    match (min, max) {
        (Some((_, mi)), Some((_, ma))) => Ok(SearchResult {
            min_triangle: Triangle::new("min", points[mi[0]], points[mi[1]], points[mi[2]]),
            max_triangle: Triangle::new("max", points[ma[0]], points[ma[1]], points[ma[2]]),
            scanned,
            valid,
        }),
        _ => Err(SearchError::NoValidTriangle),
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
