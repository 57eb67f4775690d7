//! The plotting tool's point-list format: `[0, 1][2, 5][3, 0]…`.
//!
//! Coordinates are accepted as any f64 (the tool's own files use integers).
//! Ids are assigned sequentially at parse time, playing the registry role.

use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use trifinder::prelude::*;

/// Parse a point list. Empty input yields an empty vec; the minimum-count
/// check belongs to the search, not the parser.
pub fn parse(raw: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    let mut rest = raw.trim();
    while !rest.is_empty() {
        let Some(open) = rest.find('[') else {
            bail!("expected '[' at {:?}", truncate(rest));
        };
        if !rest[..open].trim().is_empty() {
            bail!("unexpected text before '[': {:?}", truncate(rest));
        }
        let close = rest[open..]
            .find(']')
            .map(|i| open + i)
            .with_context(|| format!("unterminated pair at {:?}", truncate(rest)))?;
        let body = &rest[open + 1..close];
        let (xs, ys) = body
            .split_once(',')
            .with_context(|| format!("expected \"x, y\" in {:?}", body))?;
        let x: f64 = xs
            .trim()
            .parse()
            .with_context(|| format!("bad x coordinate {:?}", xs.trim()))?;
        let y: f64 = ys
            .trim()
            .parse()
            .with_context(|| format!("bad y coordinate {:?}", ys.trim()))?;
        points.push(Point::new(points.len() as u64, x, y));
        rest = rest[close + 1..].trim_start();
    }
    Ok(points)
}

pub fn read_file(path: &Path) -> Result<Vec<Point>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading point list {}", path.display()))?;
    parse(&raw).with_context(|| format!("parsing point list {}", path.display()))
}

/// Render in the same format the tool reads back.
pub fn format(points: &[Point]) -> String {
    let mut out = String::new();
    for p in points {
        let _ = write!(out, "[{}, {}]", p.x(), p.y());
    }
    out
}

fn truncate(s: &str) -> &str {
    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(24)
        .unwrap_or(s.len());
    &s[..end]
}
