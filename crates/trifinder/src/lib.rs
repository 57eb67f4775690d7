//! Extremal-triangle search over 2D point sets.
//!
//! Given a registry of plotted points, find the minimum- and maximum-area
//! triangles among all non-degenerate triples while the caller's event loop
//! keeps running. The search itself is a naive O(n³) enumeration; the
//! engineering substance is the filtering of collinear triples, throttled
//! progress reporting, and the poll-based controller that keeps the
//! foreground responsive with cooperative cancellation and a wall-clock
//! timeout.
//!
//! Layering (leaves first): `geom` (pure kernel and value types) → `search`
//! (one-shot enumeration engine) → `controller` (worker thread ownership and
//! the start/poll/cancel state machine). `rand` provides deterministic point
//! clouds for tests and benches.

pub mod controller;
pub mod geom;
pub mod rand;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::controller::{ControllerCfg, SearchController, SearchState};
    pub use crate::geom::{is_valid_triangle, triangle_area, Point, Triangle};
    pub use crate::rand::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::search::{
        CancelToken, LatestProgress, NullProgress, ProgressSink, SearchCfg, SearchError,
        SearchResult,
    };
    pub use nalgebra::Vector2 as Vec2;
}
