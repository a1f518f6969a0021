use std::cmp::Ordering;

use super::types::{cross, Point2, Segment, Side};

/// Per-axis tolerance comparison (not a distance).
#[inline]
pub fn eps_equals(a: Point2, b: Point2, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Same side of the line through `s`, counting on-line points as both sides.
///
/// False only for strictly opposite non-zero directions.
pub fn is_same_side(p1: Point2, p2: Point2, s: &Segment) -> bool {
    let d1 = s.direction(p1);
    let d2 = s.direction(p2);
    d1 == d2 || d1 == Side::On || d2 == Side::On
}

/// Signed area by fan triangulation from the first vertex (positive for CCW).
pub fn signed_area(polygon: &[Point2]) -> f64 {
    let Some(&v0) = polygon.first() else {
        return 0.0;
    };
    let twice: f64 = polygon
        .windows(2)
        .skip(1)
        .map(|w| cross(w[0] - v0, w[1] - v0))
        .sum();
    0.5 * twice
}

/// Unsigned polygon area (Gauss / shoelace). Fewer than 3 vertices give 0.
#[inline]
pub fn polygon_area(polygon: &[Point2]) -> f64 {
    signed_area(polygon).abs()
}

/// Every vertex paired with its cyclic predecessor: `(last, p)`.
///
/// The first vertex is paired with the final one.
pub fn cyclic_pairs(polygon: &[Point2]) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    let preds = polygon.last().into_iter().chain(polygon.iter()).copied();
    preds.zip(polygon.iter().copied())
}

/// Collapse runs of ε-equal consecutive vertices, wraparound included.
///
/// Vertex `i` survives iff it differs from vertex `(i + 1) mod n`. A cycle of
/// mutually equal points collapses to nothing.
pub fn dedup_cyclic_eps(points: &[Point2], eps: f64) -> Vec<Point2> {
    let successors = points.iter().skip(1).chain(points.first());
    points
        .iter()
        .zip(successors)
        .filter(|(p, q)| !eps_equals(**p, **q, eps))
        .map(|(p, _)| *p)
        .collect()
}

/// Cycle equality up to rotation and traversal direction.
pub fn same_cycle_eps(actual: &[Point2], expected: &[Point2], eps: f64) -> bool {
    if actual.len() != expected.len() {
        return false;
    }
    let n = actual.len();
    if n == 0 {
        return true;
    }
    let Some(start) = actual.iter().position(|p| eps_equals(*p, expected[0], eps)) else {
        return false;
    };
    let forward = (0..n).all(|i| eps_equals(actual[(start + i) % n], expected[i], eps));
    forward || (0..n).all(|i| eps_equals(actual[(start + n - i) % n], expected[i], eps))
}

/// True when every non-degenerate turn has the same orientation.
///
/// Collinear and repeated vertices are ignored. Fewer than 3 vertices count as
/// convex.
pub fn is_convex(polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return true;
    }
    let mut sign = 0.0_f64;
    for k in 0..n {
        let a = polygon[k];
        let b = polygon[(k + 1) % n];
        let c = polygon[(k + 2) % n];
        let turn = cross(b - a, c - b);
        if turn == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    true
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Collinear points are dropped so the result satisfies the clipper's
/// no-three-collinear precondition.
pub fn convex_hull(points: &[Point2]) -> Option<Vec<Point2>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut hull = half_hull(pts.iter());
    hull.extend(half_hull(pts.iter().rev()));
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

/// One monotone chain; the last point is dropped since it starts the other chain.
fn half_hull<'a>(points: impl Iterator<Item = &'a Point2>) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::new();
    for &p in points {
        while let &[.., a, b] = chain.as_slice() {
            if cross(b - a, p - a) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}
