//! Random point clouds (uniform box + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the point sets used by
//!   tests, benches, and the CLI `gen` command. Reproducibility comes from a
//!   replay token `(seed, index)` mixed into a single RNG.
//!
//! Model
//! - Draw `count` positions uniformly from the square `[-half_extent,
//!   half_extent]²`, optionally snapped to integer coordinates to mimic the
//!   integer point-list files the plotting tool reads. Ids are assigned
//!   sequentially from 0, playing the registry role.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Half side length of the sampling square, centered on the origin.
    pub half_extent: f64,
    /// Round coordinates to integers (exact f64 arithmetic in the kernel,
    /// and a realistic chance of collinear triples).
    pub snap_to_grid: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 10,
            half_extent: 50.0,
            snap_to_grid: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud with ids `0..count`.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.max(1e-9);
    (0..cfg.count)
        .map(|id| {
            let mut x = rng.gen_range(-h..=h);
            let mut y = rng.gen_range(-h..=h);
            if cfg.snap_to_grid {
                x = x.round();
                y = y.round();
            }
            Point::new(id as u64, x, y)
        })
        .collect()
}
