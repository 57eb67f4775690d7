//! Configuration, outcome, and signalling types for the search.
//!
//! Kept small and explicit to make `engine` and `controller` easy to read.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use crate::geom::Triangle;

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Triples processed between cancellation checks. Bounds cancellation
    /// latency; progress is throttled separately (integer-percent steps).
    pub batch_size: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self { batch_size: 1024 }
    }
}

/// Outcome of one completed search. Immutable after construction.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub min_triangle: Triangle,
    pub max_triangle: Triangle,
    /// Ordered triples enumerated, degenerate ones included: n·(n−1)·(n−2).
    pub scanned: u64,
    /// Triples that passed the collinearity filter.
    pub valid: u64,
}

/// Error taxonomy of the engine. `Cancelled` is a normal operational
/// outcome, not a failure; the controller maps it accordingly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("need at least 3 points, got {got}")]
    InsufficientPoints { got: usize },
    #[error("all point triples are collinear; no valid triangle exists")]
    NoValidTriangle,
    #[error("search cancelled")]
    Cancelled,
    #[error("internal search failure: {0}")]
    Internal(String),
}

/// Consumed by the engine from the background thread; implementors must be
/// safe to call concurrently with the foreground. Percent values within one
/// run are monotonically non-decreasing.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, percent: f64);
}

/// Discards progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_progress(&self, _percent: f64) {}
}

/// Stores the most recent percent for the foreground to read between polls.
#[derive(Debug, Default)]
pub struct LatestProgress {
    bits: AtomicU64,
}

impl LatestProgress {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl ProgressSink for LatestProgress {
    fn on_progress(&self, percent: f64) {
        self.bits.store(percent.to_bits(), Ordering::Relaxed);
    }
}

/// Cooperative cancellation with an optional wall-clock deadline. There is
/// no preemption: the engine checks this once per batch and self-terminates.
/// `SeqCst` so no triple is processed after a trip is observed.
#[derive(Debug)]
pub struct CancelToken {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            deadline: None,
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            deadline: Some(deadline),
        }
    }

    /// Request cancellation. Callable from any thread, idempotent.
    pub fn trip(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::SeqCst) {
            return true;
        }
        match self.deadline {
            Some(d) => Instant::now() >= d,
            None => false,
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
