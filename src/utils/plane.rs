//! Signed distances and intersections against planes given by a normal and a point.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

/// Signed distance from `point` to the plane passing through `plane_point` with the given `normal`.
///
/// The result is only a true distance if `normal` has unit length.
#[inline]
pub fn point_distance_to_plane(
    normal: &Vector<Real>,
    plane_point: &Point<Real>,
    point: &Point<Real>,
) -> Real {
    normal.dot(&(point - plane_point))
}

/// Is `point` strictly in front of the plane?
#[inline]
pub fn is_point_above_plane(
    normal: &Vector<Real>,
    plane_point: &Point<Real>,
    point: &Point<Real>,
) -> bool {
    point_distance_to_plane(normal, plane_point, point) > 0.0
}

/// Intersection between the infinite line through `a` and `b` and a plane.
///
/// Returns `None` if the line is parallel to the plane.
pub fn line_plane_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    normal: &Vector<Real>,
    plane_point: &Point<Real>,
) -> Option<Point<Real>> {
    let dir = b - a;
    let denom = normal.dot(&dir);

    if denom.abs() <= DEFAULT_EPSILON {
        return None;
    }

    let t = normal.dot(&(plane_point - a)) / denom;
    Some(a + dir * t)
}
