//! Support mappings of convex shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// A convex shape described by its support function.
///
/// The support point along `dir` is the point of the shape with the largest
/// dot product with `dir`. It drives AABB construction and the face and edge
/// axis searches of the separating axis tests.
pub trait SupportMap {
    /// The support point of the shape in its local frame.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The support point of the shape placed at `transform`, with `dir` and
    /// the result in world space.
    ///
    /// `dir` is brought into the local frame once and only the winning point
    /// is transformed back.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}
