//! Sutherland–Hodgman intersection of a simple polygon with a convex one.
//!
//! Purpose
//! - Cut the subject polygon by every directed edge of the clip polygon in turn;
//!   whatever survives all half-planes is the intersection.
//!
//! Inside test
//! - No orientation is computed. For clip edge `i` the reference point is the
//!   end point of edge `i + 1`; convexity puts it on the inner side of edge `i`.
//! - Points exactly on a clip edge count as inside, so subject vertices lying on
//!   the boundary are kept and may appear twice in the raw result. The final
//!   cyclic ε-collapse removes those repeats.
//!
//! Preconditions (not checked)
//! - `clip` is convex with a consistent winding.
//! - No three consecutive collinear vertices in either input.

use tracing::{debug, trace};

use crate::error::ClipError;
use crate::geom2::{cross, cyclic_pairs, dedup_cyclic_eps, is_same_side, ClipCfg, Point2, Segment};

/// Intersection point of the lines through `seg1` and `seg2`.
///
/// Errors with `DegenerateIntersection` when the lines are parallel.
#[inline]
pub fn segment_intersection(seg1: &Segment, seg2: &Segment) -> Result<Point2, ClipError> {
    segment_intersection_eps(seg1, seg2, ClipCfg::default().eps_det)
}

/// `segment_intersection` with an explicit relative determinant tolerance.
pub fn segment_intersection_eps(
    seg1: &Segment,
    seg2: &Segment,
    eps_det: f64,
) -> Result<Point2, ClipError> {
    let d1 = seg1.dir();
    let d2 = seg2.dir();
    let det = cross(d1, d2);
    if !det.is_finite() || det.abs() <= eps_det * d1.norm() * d2.norm() {
        return Err(ClipError::DegenerateIntersection { a: *seg1, b: *seg2 });
    }
    let t = cross(seg2.ps - seg1.ps, d2) / det;
    Ok(seg1.ps + d1 * t)
}

/// Directed edges `clip[i] → clip[i + 1]`, wrapping at the end.
pub fn clip_edges(clip: &[Point2]) -> Vec<Segment> {
    let successors = clip.iter().skip(1).chain(clip.first());
    clip.iter()
        .zip(successors)
        .map(|(a, b)| Segment::new(*a, *b))
        .collect()
}

/// One Sutherland–Hodgman pass: keep the part of `polygon` on `reference`'s side of `edge`.
///
/// A transition across a line that is parallel to the subject segment (up to
/// `eps_det`) means both endpoints already lie on that line within round-off.
/// The endpoint on the inside is emitted instead of a crossing: `p` when
/// entering, `last` when exiting. Re-clipping a clip result relies on this.
pub fn clip_pass(
    polygon: &[Point2],
    edge: &Segment,
    reference: Point2,
    cfg: ClipCfg,
) -> Result<Vec<Point2>, ClipError> {
    let Some(&tail) = polygon.last() else {
        return Ok(Vec::new());
    };
    let start = (
        Vec::with_capacity(polygon.len() + 2),
        is_same_side(tail, reference, edge),
    );
    let (out, _) = cyclic_pairs(polygon).try_fold(start, |(mut out, last_inside), (last, p)| {
        let p_inside = is_same_side(p, reference, edge);
        if p_inside != last_inside {
            let chord = Segment::new(last, p);
            let crossing = match segment_intersection_eps(&chord, edge, cfg.eps_det) {
                Ok(x) => x,
                Err(ClipError::DegenerateIntersection { .. }) => {
                    trace!(?last, ?p, "crossing along the clip line");
                    if p_inside {
                        p
                    } else {
                        last
                    }
                }
                Err(e) => return Err(e),
            };
            out.push(crossing);
        }
        if p_inside {
            out.push(p);
        }
        Ok((out, p_inside))
    })?;
    Ok(out)
}

/// Intersection of `subject` (any simple polygon) with the convex `clip`.
///
/// Returns the boundary of the common region; an empty vector means the
/// polygons do not overlap. Touching polygons may yield a zero-area result
/// (e.g. a shared edge as two vertices).
///
/// ```
/// use nalgebra::vector;
/// use shclip::intersect_polygons;
///
/// let subject = [vector![2.0, 1.0], vector![4.0, 1.0], vector![4.0, 3.0], vector![2.0, 3.0]];
/// let clip = [vector![3.0, 2.0], vector![5.0, 2.0], vector![5.0, 4.0], vector![3.0, 4.0]];
/// let result = intersect_polygons(&subject, &clip).unwrap();
/// assert_eq!(result.len(), 4);
/// assert!((shclip::polygon_area(&result) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn intersect_polygons(subject: &[Point2], clip: &[Point2]) -> Result<Vec<Point2>, ClipError> {
    intersect_polygons_with(subject, clip, ClipCfg::default())
}

/// `intersect_polygons` with explicit tolerances.
pub fn intersect_polygons_with(
    subject: &[Point2],
    clip: &[Point2],
    cfg: ClipCfg,
) -> Result<Vec<Point2>, ClipError> {
    if clip.len() < 3 {
        return Err(ClipError::DegenerateClip {
            vertices: clip.len(),
        });
    }
    let edges = clip_edges(clip);
    let mut working = subject.to_vec();
    for (i, edge) in edges.iter().enumerate() {
        if working.is_empty() {
            break;
        }
        let reference = edges[(i + 1) % edges.len()].pe;
        working = clip_pass(&working, edge, reference, cfg)?;
        trace!(edge = i, vertices = working.len(), "clip pass");
    }
    let result = dedup_cyclic_eps(&working, cfg.eps_eq);
    debug!(raw = working.len(), collapsed = result.len(), "intersection done");
    Ok(result)
}

#[cfg(test)]
mod tests;
