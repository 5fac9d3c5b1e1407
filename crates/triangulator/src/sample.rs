//! Seeded random point clouds (uniform in an axis-aligned box, optional repeats).
//!
//! Purpose
//! - Reproducible inputs for benches, stress tests and the CLI `generate` command.
//! - Determinism uses a replay token `(seed, index)` mixed into a single `StdRng`,
//!   so the same token always yields the same cloud.

use crate::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box `[min.x, max.x) × [min.y, max.y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Point::new(-100.0, -100.0),
            max: Point::new(100.0, 100.0),
        }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub count: usize,
    pub bounds: Bounds2,
    /// Probability that a draw repeats an earlier point exactly. Clamped to [0, 1].
    pub repeat_frac: f64,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            bounds: Bounds2::default(),
            repeat_frac: 0.0,
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
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw `cfg.count` points. Degenerate bounds (`min >= max` on an axis, or a
/// non-finite bound) pin that axis to `min`.
pub fn draw_point_cloud(cfg: &PointCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let repeat = cfg.repeat_frac.clamp(0.0, 1.0);
    let Bounds2 { min, max } = cfg.bounds;
    let mut out: Vec<Point> = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        if !out.is_empty() && repeat > 0.0 && rng.gen_bool(repeat) {
            let k = rng.gen_range(0..out.len());
            out.push(out[k]);
            continue;
        }
        let x = sample_axis(&mut rng, min.x, max.x);
        let y = sample_axis(&mut rng, min.y, max.y);
        out.push(Point::new(x, y));
    }
    out
}

/// One coordinate in `[lo, hi)`. Empty or non-finite ranges pin to `lo`. Finite
/// ranges whose width overflows (e.g. `-1e308..1e308`) interpolate instead and
/// may return `hi` itself.
fn sample_axis<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if !(hi > lo) || !lo.is_finite() || !hi.is_finite() {
        return lo;
    }
    if (hi - lo).is_finite() {
        return rng.gen_range(lo..hi);
    }
    let u: f64 = rng.gen();
    (lo * (1.0 - u) + hi * u).min(hi)
}
