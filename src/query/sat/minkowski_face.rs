//! Gauss-map test deciding whether two edges can define a separating axis.
//!
//! Each edge of a convex polyhedron maps to an arc on the unit sphere joining
//! the normals of its two adjacent faces. Two edges `a` and `b` build a face
//! of the Minkowski difference `A - B` iff the arc of `a` intersects the arc of
//! `-b`. Only such edge pairs need to be tested for separation.

use crate::math::{Isometry, Real, Vector};
use crate::shape::{ConvexCollider, EdgeId, HalfEdgeTopology};

/// Do the arcs `a1 → a2` and `b1 → b2` on the unit sphere intersect?
///
/// `dir_a` and `dir_b` are directions perpendicular to the planes of each arc,
/// typically the directions of the corresponding edges. The normals of `b` must
/// already be negated.
///
/// Three tests are made:
/// 1. `b1` and `b2` lie on opposite sides of the plane of arc `a`,
/// 2. `a1` and `a2` lie on opposite sides of the plane of arc `b`,
/// 3. the arcs lie on the same hemisphere.
#[inline]
pub fn is_minkowski_face(
    a1: &Vector<Real>,
    a2: &Vector<Real>,
    b1: &Vector<Real>,
    b2: &Vector<Real>,
    dir_a: &Vector<Real>,
    dir_b: &Vector<Real>,
) -> bool {
    let b1_side = dir_a.dot(b1);
    let b2_side = dir_a.dot(b2);

    if b1_side * b2_side > 0.0 {
        return false;
    }

    let a1_side = dir_b.dot(a1);
    let a2_side = dir_b.dot(a2);

    if a1_side * a2_side > 0.0 {
        return false;
    }

    let hemisphere = a2.cross(b2);
    let side = hemisphere.dot(a1) * hemisphere.dot(b1);

    side > 0.0 && !relative_eq!(side, 0.0)
}

/// Applies [`is_minkowski_face`] to `edge_a` of `a` and `edge_b` of `b`, both
/// placed in world space.
pub fn edge_pair_builds_minkowski_face(
    a: &ConvexCollider,
    edge_a: EdgeId,
    pos_a: &Isometry<Real>,
    b: &ConvexCollider,
    edge_b: EdgeId,
    pos_b: &Isometry<Real>,
) -> bool {
    let twin_a = a.edge(edge_a).twin;
    let twin_b = b.edge(edge_b).twin;

    let a1 = pos_a * a.local_normal(edge_a);
    let a2 = pos_a * a.local_normal(twin_a);
    let b1 = -(pos_b * b.local_normal(edge_b));
    let b2 = -(pos_b * b.local_normal(twin_b));

    let dir_a = pos_a * a.edge(edge_a).robust_dir;
    let dir_b = pos_b * b.edge(edge_b).robust_dir;

    is_minkowski_face(&a1, &a2, &b1, &b2, &dir_a, &dir_b)
}
