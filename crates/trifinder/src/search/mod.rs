//! One-shot extremal-triangle search.
//!
//! Purpose
//! - Enumerate every ordered triple of distinct points, filter exactly
//!   collinear ones, and track the running minimum- and maximum-area valid
//!   triangles with strict comparisons (ties keep the first encountered, so
//!   repeated runs are bit-identical).
//! - Stream throttled progress through `ProgressSink` and honor a
//!   cooperative `CancelToken` at batch boundaries.
//!
//! One invocation of [`run`] is one search; the engine holds no state across
//! invocations. Ownership of the worker thread and the timeout lives in
//! `controller`, not here.

mod engine;
mod types;

pub use engine::run;
pub use types::{
    CancelToken, LatestProgress, NullProgress, ProgressSink, SearchCfg, SearchError, SearchResult,
};
