//! Polygon intersection by Sutherland–Hodgman clipping.
//!
//! Layout
//! - `geom2`: points, directed segments, side test, area and polygon helpers,
//!   random polygon generators.
//! - `clip`: the clipper (`intersect_polygons`) and its building blocks.
//! - `error`: `ClipError`.
//!
//! API Policy
//! - Polygons are `&[Point2]` slices read as closed cycles.
//! - All functions are pure; callers may run independent clips in parallel.

pub mod api;
pub mod clip;
pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use clip::{intersect_polygons, intersect_polygons_with, segment_intersection};
pub use error::ClipError;
pub use geom2::{is_same_side, polygon_area, ClipCfg, Point2, Segment, Side};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{intersect_polygons, intersect_polygons_with, segment_intersection};
    pub use crate::error::ClipError;
    pub use crate::geom2::rand::{
        draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, StarCfg, VertexCount,
    };
    pub use crate::geom2::{
        eps_equals, is_convex, is_same_side, polygon_area, same_cycle_eps, signed_area, ClipCfg,
        Point2, Segment, Side,
    };
}
