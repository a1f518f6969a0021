//! Curated surface for harnesses and tooling (UNSTABLE).
//!
//! Important
//! - Convenience re-exports for fixture runners, visualizers and benches; the
//!   stable entry points are the crate-root re-exports.

// Clipping
pub use crate::clip::{
    clip_edges, clip_pass, intersect_polygons, intersect_polygons_with, segment_intersection,
    segment_intersection_eps,
};
pub use crate::error::ClipError;
// 2D primitives and polygon helpers
pub use crate::geom2::{
    convex_hull, cross, cyclic_pairs, dedup_cyclic_eps, eps_equals, is_convex, is_same_side,
    polygon_area, same_cycle_eps, signed_area, ClipCfg, Point2, Segment, Side,
};
// Random polygons
pub use crate::geom2::rand::{
    draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, StarCfg, VertexCount,
};

/// Polygon from `[x, y]` pairs, the interchange format of fixture files.
pub fn polygon_from_pairs(pairs: &[[f64; 2]]) -> Vec<Point2> {
    pairs.iter().map(|&[x, y]| Point2::new(x, y)).collect()
}

/// Inverse of `polygon_from_pairs`.
pub fn polygon_to_pairs(polygon: &[Point2]) -> Vec<[f64; 2]> {
    polygon.iter().map(|p| [p.x, p.y]).collect()
}
