use crate::math::{Point, Real};

/// Parameter `t` of the projection of `point` on the line `start + t * (end - start)`.
///
/// The result is not clamped. A degenerate segment yields `0.0`.
#[inline]
pub fn closest_point_on_line_interpolant(
    start: &Point<Real>,
    end: &Point<Real>,
    point: &Point<Real>,
) -> Real {
    let dir = end - start;
    let sq_len = dir.norm_squared();

    if sq_len == 0.0 {
        0.0
    } else {
        (point - start).dot(&dir) / sq_len
    }
}

/// The point of the segment `[start, end]` closest to `point`.
#[inline]
pub fn closest_point_on_segment(
    start: &Point<Real>,
    end: &Point<Real>,
    point: &Point<Real>,
) -> Point<Real> {
    let t = closest_point_on_line_interpolant(start, end, point).clamp(0.0, 1.0);
    start + (end - start) * t
}
