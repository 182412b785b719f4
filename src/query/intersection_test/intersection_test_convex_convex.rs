use crate::bounding_volume::{construct_aabb, BoundingVolume};
use crate::math::{Isometry, Real};
use crate::query::sat;
use crate::shape::ConvexCollider;

/// Intersection test between two convex colliders.
///
/// The world-space AABBs are compared first, the separating axis test only
/// runs if they overlap.
pub fn intersection_test_convex_convex(
    a: &ConvexCollider,
    pos_a: &Isometry<Real>,
    b: &ConvexCollider,
    pos_b: &Isometry<Real>,
) -> bool {
    if !construct_aabb(a, pos_a).intersects(&construct_aabb(b, pos_b)) {
        return false;
    }

    !sat::find_separating_axis(a, pos_a, b, pos_b).separated
}
