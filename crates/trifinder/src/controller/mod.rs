//! Ownership of the single in-flight search.
//!
//! The controller is the foreground's handle: `start` launches the engine on
//! a detached worker thread and returns immediately, `poll` is the only way
//! the foreground observes the outcome (it never joins), `cancel` trips the
//! shared token, and `result` is an idempotent read after completion.
//!
//! There is no preemptive kill. On timeout the controller trips the token,
//! invalidates the worker's generation, and moves on; the detached worker
//! reaches its next batch checkpoint, self-terminates (or runs to the end),
//! and its late write is discarded by the generation check under the slot
//! mutex. The earlier design that drove redraws inside a join loop froze the
//! interface during long searches; `poll` exists to rule that out.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crate::geom::Point;
use crate::search::{self, CancelToken, ProgressSink, SearchCfg, SearchError, SearchResult};

/// Controller configuration.
#[derive(Clone, Copy, Debug)]
pub struct ControllerCfg {
    /// Wall-clock deadline for one search.
    pub timeout: Duration,
    pub search: SearchCfg,
}

impl Default for ControllerCfg {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            search: SearchCfg::default(),
        }
    }
}

/// Controller state machine. `Start` from any terminal state re-arms; a
/// second `Start` while `Running` is a no-op, never a queued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running,
    Completed,
    TimedOut,
    Failed,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::TimedOut | Self::Failed)
    }
}

/// Handoff slot between the worker and the foreground. `generation` names
/// the worker whose write is still wanted; a superseded worker compares and
/// drops its outcome.
struct Slot {
    generation: u64,
    outcome: Option<Result<SearchResult, SearchError>>,
}

/// One controller per logical "find" button.
pub struct SearchController {
    cfg: ControllerCfg,
    slot: Arc<Mutex<Slot>>,
    cancel: Option<Arc<CancelToken>>,
    state: SearchState,
    generation: u64,
    deadline: Option<Instant>,
    result: Option<SearchResult>,
    last_error: Option<SearchError>,
}

impl SearchController {
    pub fn new(cfg: ControllerCfg) -> Self {
        Self {
            cfg,
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                outcome: None,
            })),
            cancel: None,
            state: SearchState::Idle,
            generation: 0,
            deadline: None,
            result: None,
            last_error: None,
        }
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Launch a search over a snapshot of `points`. No-op while `Running`
    /// (returns false). Fewer than 3 distinct points fails fast to `Failed`
    /// without spawning a worker. Otherwise transitions to `Running` and
    /// returns immediately; the outcome is observed via [`poll`].
    ///
    /// [`poll`]: Self::poll
    pub fn start(&mut self, points: &[Point], progress: Arc<dyn ProgressSink>) -> bool {
        if self.state == SearchState::Running {
            return false;
        }
        self.result = None;
        self.last_error = None;

        let distinct: HashSet<u64> = points.iter().map(|p| p.id).collect();
        if distinct.len() < 3 {
            self.last_error = Some(SearchError::InsufficientPoints {
                got: distinct.len(),
            });
            self.state = SearchState::Failed;
            return false;
        }

        self.generation += 1;
        let my_gen = self.generation;
        let deadline = Instant::now() + self.cfg.timeout;
        self.deadline = Some(deadline);
        let token = Arc::new(CancelToken::with_deadline(deadline));
        self.cancel = Some(Arc::clone(&token));
        {
            let mut slot = self.slot.lock().unwrap();
            slot.generation = my_gen;
            slot.outcome = None;
        }

        // Read-only snapshot for the worker; the registry may mutate freely
        // once start returns.
        let snapshot: Vec<Point> = points.to_vec();
        let search_cfg = self.cfg.search;
        let slot = Arc::clone(&self.slot);
        thread::spawn(move || {
            let outcome = search::run(&snapshot, search_cfg, progress.as_ref(), &token);
            let mut slot = slot.lock().unwrap();
            if slot.generation == my_gen {
                slot.outcome = Some(outcome);
            }
        });
        self.state = SearchState::Running;
        true
    }

    /// Non-blocking tick. Consumes a pending worker outcome or notices an
    /// elapsed deadline; returns whether the last started search has reached
    /// a terminal state, plus the current state.
    pub fn poll(&mut self) -> (bool, SearchState) {
        if self.state == SearchState::Running {
            let outcome = {
                let mut slot = self.slot.lock().unwrap();
                if slot.generation == self.generation {
                    slot.outcome.take()
                } else {
                    None
                }
            };
            if let Some(outcome) = outcome {
                match outcome {
                    Ok(result) => {
                        self.result = Some(result);
                        self.state = SearchState::Completed;
                    }
                    // Cancellation is an operational outcome, reported like
                    // a timeout rather than a failure.
                    Err(SearchError::Cancelled) => self.state = SearchState::TimedOut,
                    Err(err) => {
                        self.last_error = Some(err);
                        self.state = SearchState::Failed;
                    }
                }
            } else if self.deadline.is_some_and(|d| Instant::now() >= d) {
                self.supersede_worker();
                self.state = SearchState::TimedOut;
            }
        }
        (self.state.is_terminal(), self.state)
    }

    /// Request cancellation. The worker observes the token within one batch;
    /// the state transition happens at the `poll` that sees its outcome.
    pub fn cancel(&mut self) {
        if self.state == SearchState::Running {
            if let Some(token) = &self.cancel {
                token.trip();
            }
        }
    }

    /// The completed search's outcome. `Some` only in `Completed`; repeated
    /// calls return the same cached result until the next `start`.
    pub fn result(&self) -> Option<&SearchResult> {
        match self.state {
            SearchState::Completed => self.result.as_ref(),
            _ => None,
        }
    }

    /// The error behind a `Failed` state.
    pub fn last_error(&self) -> Option<&SearchError> {
        match self.state {
            SearchState::Failed => self.last_error.as_ref(),
            _ => None,
        }
    }

    /// Detach from the current worker: trip its token and bump the slot
    /// generation so its eventual write is discarded.
    fn supersede_worker(&mut self) {
        if let Some(token) = &self.cancel {
            token.trip();
        }
        self.generation += 1;
        self.slot.lock().unwrap().generation = self.generation;
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(ControllerCfg::default())
    }
}
