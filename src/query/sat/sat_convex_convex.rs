use super::minkowski_face::edge_pair_builds_minkowski_face;
use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{ConvexCollider, EdgeId, FaceId, HalfEdgeTopology};
use crate::utils::GeometryTolerance;

/// The feature a [`SeparationResult`] is measured from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SeparatingFeature {
    /// A face of the first collider. The axis is its world-space normal.
    FaceA(FaceId),
    /// A face of the second collider. The axis is its world-space normal.
    FaceB(FaceId),
    /// An edge of each collider. The axis is orthogonal to both edges and
    /// points away from the first collider.
    EdgePair {
        /// The edge of the first collider.
        edge_a: EdgeId,
        /// The edge of the second collider.
        edge_b: EdgeId,
    },
}

/// Outcome of the separating axis test between two convex colliders.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SeparationResult {
    /// Was a separating axis found?
    pub separated: bool,
    /// The separating axis, or the axis of least penetration, in world space.
    pub axis: Vector<Real>,
    /// The feature `axis` comes from.
    pub reference: SeparatingFeature,
    /// The signed separation along `axis`. Negative when the colliders overlap.
    pub max_separation: Real,
}

/// The best edge/edge axis found by [`convex_convex_find_separating_edge_pair`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgePairSeparation {
    /// The signed separation along `axis`.
    pub separation: Real,
    /// The edge of the first collider.
    pub edge_a: EdgeId,
    /// The edge of the second collider.
    pub edge_b: EdgeId,
    /// World-space axis orthogonal to both edges, pointing away from the first collider.
    pub axis: Vector<Real>,
}

/// Computes the largest separation between the faces of `b` and the vertices of `a`.
///
/// For every face of `b`, the vertex of `a` furthest along the opposite of the
/// face normal is projected on the face plane. Returns the separation, the
/// face and its world-space normal. Stops at the first positive separation.
pub fn convex_convex_find_local_separating_face(
    a: &ConvexCollider,
    pos_a: &Isometry<Real>,
    b: &ConvexCollider,
    pos_b: &Isometry<Real>,
) -> (Real, FaceId, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_face = FaceId::INVALID;
    let mut best_axis = Vector::zeros();

    for face in b.face_ids() {
        let f = b.face(face);
        let normal = pos_b * f.normal;
        let centroid = pos_b * f.centroid;

        let support = a.support_point_toward_plane(pos_a, &centroid, &-normal);
        let separation = (support - centroid).dot(&normal);

        if separation > best_separation {
            best_separation = separation;
            best_face = face;
            best_axis = normal;

            if separation > 0.0 {
                break;
            }
        }
    }

    (best_separation, best_face, best_axis)
}

/// Computes the largest separation along the axes orthogonal to an edge of
/// `a` and an edge of `b`.
///
/// Only edge pairs building a face of the Minkowski difference are tested, and
/// nearly parallel pairs are skipped. Returns `None` if no pair qualifies.
/// Stops at the first positive separation.
pub fn convex_convex_find_separating_edge_pair(
    a: &ConvexCollider,
    pos_a: &Isometry<Real>,
    b: &ConvexCollider,
    pos_b: &Isometry<Real>,
    tolerance: &GeometryTolerance,
) -> Option<EdgePairSeparation> {
    let centroid_a = a.world_centroid(pos_a);
    let mut best: Option<EdgePairSeparation> = None;

    for edge_a in a.unique_edge_ids() {
        let ea = a.edge(edge_a);
        let origin_a = pos_a * ea.origin;
        let Some(dir_a) = (pos_a * ea.robust_dir).try_normalize(DEFAULT_EPSILON) else {
            continue;
        };

        for edge_b in b.unique_edge_ids() {
            let eb = b.edge(edge_b);
            let Some(dir_b) = (pos_b * eb.robust_dir).try_normalize(DEFAULT_EPSILON) else {
                continue;
            };

            if dir_a.dot(&dir_b).abs() > tolerance.parallel_edge_cos {
                continue;
            }

            if !edge_pair_builds_minkowski_face(a, edge_a, pos_a, b, edge_b, pos_b) {
                continue;
            }

            let Some(mut axis) = dir_a.cross(&dir_b).try_normalize(DEFAULT_EPSILON) else {
                continue;
            };

            if axis.dot(&(origin_a - centroid_a)) < 0.0 {
                axis = -axis;
            }

            let origin_b = pos_b * eb.origin;
            let separation = axis.dot(&(origin_b - origin_a));

            if best.map_or(true, |best| separation > best.separation) {
                best = Some(EdgePairSeparation {
                    separation,
                    edge_a,
                    edge_b,
                    axis,
                });

                if separation > 0.0 {
                    return best;
                }
            }
        }
    }

    best
}

/// Runs the separating axis test between two convex colliders.
///
/// The tolerances of `a` are used. See [`find_separating_axis_with_tolerance`].
pub fn find_separating_axis(
    a: &ConvexCollider,
    pos_a: &Isometry<Real>,
    b: &ConvexCollider,
    pos_b: &Isometry<Real>,
) -> SeparationResult {
    find_separating_axis_with_tolerance(a, pos_a, b, pos_b, a.tolerance())
}

/// Runs the separating axis test between two convex colliders.
///
/// The face normals of `a`, then the face normals of `b`, then the edge/edge
/// axes are tested. The first positive separation is returned immediately.
/// Otherwise the colliders overlap and the reported reference is the face of
/// `a`, unless the face of `b` penetrates less by more than
/// `face_to_face_bias`, unless an edge pair penetrates less than that face by
/// more than `face_to_edge_bias`. The biases keep the reference stable from
/// one frame to the next.
pub fn find_separating_axis_with_tolerance(
    a: &ConvexCollider,
    pos_a: &Isometry<Real>,
    b: &ConvexCollider,
    pos_b: &Isometry<Real>,
    tolerance: &GeometryTolerance,
) -> SeparationResult {
    let (sep_a, face_a, axis_a) = convex_convex_find_local_separating_face(b, pos_b, a, pos_a);
    let face_a_result = SeparationResult {
        separated: sep_a > 0.0,
        axis: axis_a,
        reference: SeparatingFeature::FaceA(face_a),
        max_separation: sep_a,
    };

    if face_a_result.separated {
        return face_a_result;
    }

    let (sep_b, face_b, axis_b) = convex_convex_find_local_separating_face(a, pos_a, b, pos_b);
    let face_b_result = SeparationResult {
        separated: sep_b > 0.0,
        axis: axis_b,
        reference: SeparatingFeature::FaceB(face_b),
        max_separation: sep_b,
    };

    if face_b_result.separated {
        return face_b_result;
    }

    let mut result = if sep_b > sep_a + tolerance.face_to_face_bias {
        face_b_result
    } else {
        face_a_result
    };

    if let Some(edges) = convex_convex_find_separating_edge_pair(a, pos_a, b, pos_b, tolerance) {
        let edge_result = SeparationResult {
            separated: edges.separation > 0.0,
            axis: edges.axis,
            reference: SeparatingFeature::EdgePair {
                edge_a: edges.edge_a,
                edge_b: edges.edge_b,
            },
            max_separation: edges.separation,
        };

        if edge_result.separated
            || edges.separation > result.max_separation + tolerance.face_to_edge_bias
        {
            result = edge_result;
        }
    }

    result
}
