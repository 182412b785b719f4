use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Ball, ConvexCollider, HalfEdgeTopology};

/// Outcome of the separating axis test between a convex collider and a ball.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BallSeparation {
    /// Was a separating axis found?
    pub separated: bool,
    /// The largest signed distance between the ball surface and the collider
    /// along the tested axes.
    pub max_separation: Real,
    /// The axis `max_separation` was measured along, pointing from the
    /// collider toward the ball.
    pub axis: Vector<Real>,
}

/// Runs the separating axis test between a convex collider and a ball.
///
/// The axis joining the ball center to the collider centroid is tried first,
/// then every face plane of the collider. Edge and vertex axes are not
/// tested, so a ball facing an edge or a vertex of the collider closely may be
/// reported as overlapping while it is not.
pub fn convex_ball_separation(
    collider: &ConvexCollider,
    pos: &Isometry<Real>,
    ball: &Ball,
    ball_pos: &Isometry<Real>,
) -> BallSeparation {
    let center = ball.center(ball_pos);
    let centroid = collider.world_centroid(pos);

    if let Some(axis) = (centroid - center).try_normalize(DEFAULT_EPSILON) {
        let plane_point = center + axis * ball.radius;
        let support = collider.support_point_toward_plane(pos, &plane_point, &-axis);
        let separation = (support - plane_point).dot(&axis);

        if separation > 0.0 {
            return BallSeparation {
                separated: true,
                max_separation: separation,
                axis: -axis,
            };
        }
    }

    let mut result = BallSeparation {
        separated: false,
        max_separation: -Real::MAX,
        axis: Vector::zeros(),
    };

    for face in collider.face_ids() {
        let f = collider.face(face);
        let normal = pos * f.normal;
        let separation = (center - pos * f.centroid).dot(&normal) - ball.radius;

        if separation > result.max_separation {
            result.max_separation = separation;
            result.axis = normal;

            if separation > 0.0 {
                result.separated = true;
                break;
            }
        }
    }

    result
}
