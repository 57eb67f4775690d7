//! Pure 2D triangle geometry.
//!
//! Purpose
//! - Value types (`Point`, `Triangle`) read from the caller's point registry
//!   for the duration of one search.
//! - Total kernel functions for triangle area and non-collinearity. No
//!   state, no error conditions.
//!
//! Numerics
//! - The collinearity test and all area comparisons are exact f64
//!   comparisons, no epsilon anywhere. Near-collinear triples may be
//!   classified either way under rounding; that is the intended policy, not
//!   an oversight.

mod kernel;
mod types;

pub use kernel::{is_valid_triangle, triangle_area};
pub use types::{Point, Triangle};

#[cfg(test)]
mod tests;
