//! Basic 2D types and tolerances used by the clipper.
//!
//! - `ClipCfg`: centralizes epsilons for point equality and parallel-line detection.
//! - `Segment`: directed edge `ps → pe` with a side classifier.
//! - `Side`: sign of the cross product of the edge direction and the query offset.
//!
//! References
//! - Code cross-refs: `util::{is_same_side, eps_equals}`, `clip::intersect_polygons`

use nalgebra::Vector2;

/// Points are plain nalgebra column vectors.
pub type Point2 = Vector2<f64>;

/// Clipper configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipCfg {
    /// Per-axis tolerance for treating two points as the same vertex.
    pub eps_eq: f64,
    /// Relative tolerance below which two lines count as parallel.
    pub eps_det: f64,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self {
            eps_eq: 1e-6,
            eps_det: 1e-12,
        }
    }
}

/// Side of a directed line a point lies on.
///
/// `Left` means a positive cross product `(pe - ps) × (p - ps)`, i.e. a
/// counterclockwise turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    On,
    Right,
}

/// Directed segment `ps → pe`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub ps: Point2,
    pub pe: Point2,
}

impl Segment {
    #[inline]
    pub fn new(ps: Point2, pe: Point2) -> Self {
        Self { ps, pe }
    }

    /// Displacement `pe - ps`.
    #[inline]
    pub fn dir(&self) -> Point2 {
        self.pe - self.ps
    }

    /// Direction value of `p` relative to the supporting line. Exact: only a
    /// cross product of exactly zero maps to `Side::On`.
    #[inline]
    pub fn direction(&self, p: Point2) -> Side {
        let c = cross(self.dir(), p - self.ps);
        if c > 0.0 {
            Side::Left
        } else if c < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }
}

/// Signed area of the parallelogram spanned by `a` and `b` (z of `a × b`).
#[inline]
pub fn cross(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}
