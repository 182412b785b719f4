use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Real};
use crate::query::sat;
use crate::shape::{Ball, ConvexCollider};

/// Intersection test between a convex collider and a ball.
///
/// Conservative near the edges and vertices of the collider, see
/// [`sat::convex_ball_separation`].
pub fn intersection_test_convex_ball(
    collider: &ConvexCollider,
    pos: &Isometry<Real>,
    ball: &Ball,
    ball_pos: &Isometry<Real>,
) -> bool {
    if !collider
        .compute_aabb(pos)
        .intersects(&ball.compute_aabb(ball_pos))
    {
        return false;
    }

    !sat::convex_ball_separation(collider, pos, ball, ball_pos).separated
}
