//! 2D geometry primitives for polygon clipping.
//!
//! Purpose
//! - Points (`Point2`), directed segments with an exact side test, and the
//!   polygon helpers the clipper and its callers share (area, ε-equality,
//!   cyclic pairing, duplicate collapse, cycle comparison).
//! - Polygons are plain vertex slices read as closed cycles; there is no
//!   polygon type and no closing vertex.
//!
//! Tolerances
//! - Side classification is exact (zero cross product means "on the line").
//! - Point comparison is per-axis with `ClipCfg::eps_eq` (default 1e-6).
//!
//! References
//! - Code cross-refs: `clip::intersect_polygons`, `rand::{draw_star_polygon, draw_convex_polygon}`

pub mod rand;
mod types;
mod util;

pub use types::{cross, ClipCfg, Point2, Segment, Side};
pub use util::{
    convex_hull, cyclic_pairs, dedup_cyclic_eps, eps_equals, is_convex, is_same_side,
    polygon_area, same_cycle_eps, signed_area,
};
