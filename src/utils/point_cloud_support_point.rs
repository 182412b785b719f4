use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// When several points reach the maximal dot product, the first of them in
/// `points` order is returned. The cloud must not be empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}

/// Computes the support point of a cloud of points.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    points[point_cloud_support_point_id(dir, points)]
}

/// Computes the support point of a cloud of points together with its dot product with `dir`.
#[inline]
pub fn point_cloud_support_point_with_dot(
    dir: &Vector<Real>,
    points: &[Point<Real>],
) -> (Real, Point<Real>) {
    let pt = point_cloud_support_point(dir, points);
    (pt.coords.dot(dir), pt)
}
