//! Random 2D polygons for fixtures, property tests and benchmarks.
//!
//! Purpose
//! - `draw_star_polygon`: star-shaped (often concave) integer polygons, the
//!   classic subject-polygon generator for clipping exercises.
//! - `draw_convex_polygon`: convex CCW polygons without collinear vertices,
//!   valid as clip polygons.
//!
//! Model
//! - Star: `n` radii in [0.5, 1) and `n` angle weights in [1, 10) normalized to
//!   a full turn; vertex `k` sits at the cumulative angle, scaled by the base
//!   radius and truncated toward zero. Consecutive repeats are dropped.
//! - Convex: equally spaced angles with bounded angular and radial jitter,
//!   followed by a convex hull.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;
use super::util::convex_hull;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
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
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Radius scale; vertex radii are `base_radius * r` with `r ∈ [0.5, 1)`.
    pub base_radius: f64,
    pub center: Point2,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            base_radius: 10.0,
            center: Point2::zeros(),
        }
    }
}

/// Draw a star-shaped polygon with integer coordinates (CCW around `center`).
///
/// Truncation may produce collinear runs; exact consecutive repeats are removed.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let radii: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() / 2.0 + 0.5).collect();
    let weights: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() * 9.0 + 1.0).collect();
    let to_radians = std::f64::consts::TAU / weights.iter().sum::<f64>();

    let mut theta = 0.0_f64;
    let mut out: Vec<Point2> = Vec::with_capacity(n);
    for (r, w) in radii.iter().zip(&weights) {
        let scaled = cfg.base_radius * r;
        let offset = Point2::new(
            (scaled * theta.cos()).trunc(),
            (scaled * theta.sin()).trunc(),
        );
        let p = cfg.center + offset;
        if out.last() != Some(&p) {
            out.push(p);
        }
        theta += w * to_radians;
    }
    out
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point2,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 6.0,
            center: Point2::zeros(),
            random_phase: true,
        }
    }
}

/// Draw a random convex polygon (CCW vertices) via radial jitter + convex hull.
///
/// The hull may have fewer vertices than sampled; `None` only if it degenerates.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Point2>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Point2> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            cfg.center + Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    convex_hull(&pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{is_convex, signed_area};

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(StarCfg::default(), tok);
        let p2 = draw_star_polygon(StarCfg::default(), tok);
        assert_eq!(p1, p2);
        let other = draw_star_polygon(StarCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, other);
    }

    #[test]
    fn star_vertices_are_integral_and_bounded() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 10, max: 20 },
            ..StarCfg::default()
        };
        for index in 0..20 {
            let poly = draw_star_polygon(cfg, ReplayToken { seed: 222, index });
            assert!(poly.len() >= 3);
            for p in &poly {
                assert_eq!(p.x, p.x.trunc());
                assert_eq!(p.y, p.y.trunc());
                assert!(p.norm() <= 10.0 + 1e-12);
            }
            // no exact consecutive repeats (wraparound excluded, as generated)
            assert!(poly.windows(2).all(|w| w[0] != w[1]));
        }
    }

    #[test]
    fn convex_draw_is_ccw_and_convex() {
        let cfg = RadialCfg {
            center: Point2::new(1.0, -2.0),
            ..RadialCfg::default()
        };
        for index in 0..20 {
            let poly = draw_convex_polygon(cfg, ReplayToken { seed: 5, index }).expect("hull");
            assert!(poly.len() >= 3);
            assert!(is_convex(&poly));
            assert!(signed_area(&poly) > 0.0);
        }
    }
}
