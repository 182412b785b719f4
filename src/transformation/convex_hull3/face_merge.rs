//! Merging of coplanar or concave neighbor faces.

use super::outside_set::{release_outside_set, FaceOutsideSet};
use crate::math::{Point, Real};
use crate::shape::{EdgeId, FaceId, HalfEdgeMesh, HalfEdgeTopology};
use crate::utils::{GeometryTolerance, NewellPlane};
use smallvec::SmallVec;

/// Fraction of `scaled_epsilon` allowed between a merged polygon and its
/// fitted plane while the hull grows.
pub(super) const GROWTH_COPLANARITY: Real = 0.5;
/// Fraction of `scaled_epsilon` used by the settle pass on the finished hull.
pub(super) const SETTLE_COPLANARITY: Real = 0.75;

/// The maximal run of consecutive edges of one face bordering the same
/// neighbor face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct SharedChain {
    pub first: EdgeId,
    pub last: EdgeId,
}

impl SharedChain {
    /// The run containing `edge`.
    pub fn around(mesh: &HalfEdgeMesh, edge: EdgeId) -> Self {
        let other = mesh.twin_face(edge);
        let mut first = edge;
        let mut last = edge;

        loop {
            let prev = mesh.edge(first).prev;
            if prev == edge || mesh.twin_face(prev) != other {
                break;
            }
            first = prev;
        }

        loop {
            let next = mesh.edge(last).next;
            if next == first || mesh.twin_face(next) != other {
                break;
            }
            last = next;
        }

        Self { first, last }
    }

    /// The edges of the run, from `first` to `last`.
    pub fn edges(&self, mesh: &HalfEdgeMesh) -> SmallVec<[EdgeId; 4]> {
        let mut result = SmallVec::new();
        let mut curr = self.first;

        loop {
            result.push(curr);
            if curr == self.last {
                break;
            }
            curr = mesh.edge(curr).next;
        }

        result
    }

    /// The boundary of the polygon obtained by removing the run and its twins.
    ///
    /// It starts after `last` on the owning face, then continues on the
    /// neighbor face after the twin of `first`.
    pub fn merged_boundary(&self, mesh: &HalfEdgeMesh) -> SmallVec<[EdgeId; 16]> {
        let mut result = SmallVec::new();

        let mut curr = mesh.edge(self.last).next;
        while curr != self.first {
            result.push(curr);
            curr = mesh.edge(curr).next;
        }

        let twin_last = mesh.edge(self.last).twin;
        let mut curr = mesh.edge(mesh.edge(self.first).twin).next;
        while curr != twin_last {
            result.push(curr);
            curr = mesh.edge(curr).next;
        }

        result
    }
}

/// Tests whether the faces on both sides of `chain` lie on a common plane.
///
/// A plane is fitted with Newell's method to the polygon left after removing
/// the shared run. The faces are coplanar if every vertex of that polygon is
/// within `eps` of the fitted plane.
pub(super) fn is_coplanar_merge(mesh: &HalfEdgeMesh, chain: &SharedChain, eps: Real) -> bool {
    let polygon: SmallVec<[Point<Real>; 16]> = chain
        .merged_boundary(mesh)
        .iter()
        .map(|e| mesh.edge(*e).origin)
        .collect();

    match NewellPlane::fit(&polygon) {
        Some(plane) => polygon
            .iter()
            .all(|pt| plane.distance_to_point(pt).abs() <= eps),
        None => false,
    }
}

/// Is the merged polygon a simple loop of at least three distinct vertices?
///
/// Merging across a run while the two faces also touch at a vertex outside of
/// it would pinch the result into two loops.
pub(super) fn is_simple_merge(mesh: &HalfEdgeMesh, chain: &SharedChain) -> bool {
    let mut vertices: SmallVec<[u32; 16]> = chain
        .merged_boundary(mesh)
        .iter()
        .map(|e| mesh.edge(*e).vertex)
        .collect();
    let len = vertices.len();
    vertices.sort_unstable();
    vertices.dedup();

    len >= 3 && vertices.len() == len
}

/// Is the centroid of `b` in front of the plane of `a`?
pub(super) fn is_faces_concave(mesh: &HalfEdgeMesh, a: FaceId, b: FaceId) -> bool {
    let fa = mesh.face(a);
    let fb = mesh.face(b);
    fa.normal.dot(&(fb.centroid - fa.centroid)) > 0.0
}

/// Merges every new face with its neighbors until no coplanar or concave pair
/// remains among them.
///
/// `sets[first_new..]` are the faces of the fan that was just added. Faces
/// absorbed by a merge have their outside points moved into `pool` and their
/// entry in `sets` marked as absorbed.
pub(super) fn merge_new_faces(
    mesh: &mut HalfEdgeMesh,
    sets: &mut [FaceOutsideSet],
    first_new: usize,
    pool: &mut Vec<u32>,
    tolerance: &GeometryTolerance,
) {
    let eps = tolerance.scaled_epsilon * GROWTH_COPLANARITY;

    for i in first_new..sets.len() {
        while let Some(face) = sets[i].face {
            if !merge_one_neighbor(mesh, sets, face, pool, eps) {
                break;
            }
        }
    }
}

/// Runs the merge pass over every face until nothing changes.
///
/// Returns the number of merges and vertex collapses performed. Running it a
/// second time on its own output returns zero.
pub(super) fn settle_faces(mesh: &mut HalfEdgeMesh, tolerance: &GeometryTolerance) -> usize {
    let eps = tolerance.scaled_epsilon * SETTLE_COPLANARITY;
    let mut pool = Vec::new();
    let mut num_changes = 0;

    loop {
        let before = num_changes;
        let faces: Vec<_> = mesh.face_ids().collect();

        for face in faces {
            while mesh.contains_face(face) && merge_one_neighbor(mesh, &mut [], face, &mut pool, eps)
            {
                num_changes += 1;
            }
        }

        if num_changes == before {
            return num_changes;
        }
    }
}

/// Performs at most one merge or vertex collapse on the boundary of `face`.
///
/// Returns `true` if the topology changed.
fn merge_one_neighbor(
    mesh: &mut HalfEdgeMesh,
    sets: &mut [FaceOutsideSet],
    face: FaceId,
    pool: &mut Vec<u32>,
    eps: Real,
) -> bool {
    for edge in mesh.face_edges(face) {
        let other = mesh.twin_face(edge);
        debug_assert_ne!(other, face, "{:?} borders itself", face);

        let chain = SharedChain::around(mesh, edge);

        if is_coplanar_merge(mesh, &chain, eps) || is_faces_concave(mesh, face, other) {
            if is_simple_merge(mesh, &chain) {
                merge_faces_across(mesh, sets, chain, pool);
                return true;
            }

            log::trace!("refusing a pinched merge of {:?} and {:?}", face, other);
        }

        let next = mesh.edge(edge).next;
        if mesh.twin_face(next) == other {
            if mesh.face_edge_count(face) > 3 && mesh.face_edge_count(other) > 3 {
                collapse_shared_vertex(mesh, edge);
                return true;
            }

            if is_simple_merge(mesh, &chain) {
                merge_faces_across(mesh, sets, chain, pool);
                return true;
            }
        }
    }

    false
}

/// Removes the vertex between `edge` and its successor when both border the
/// same neighbor face.
///
/// The two edges of each face meeting at that vertex are replaced by a single
/// edge, on both sides.
fn collapse_shared_vertex(mesh: &mut HalfEdgeMesh, edge: EdgeId) {
    let face = mesh.edge(edge).face;
    let twin = mesh.edge(edge).twin;
    let other = mesh.edge(twin).face;
    let next = mesh.edge(edge).next;
    let next_twin = mesh.edge(next).twin;

    let after_next = mesh.edge(next).next;
    let after_twin = mesh.edge(twin).next;
    debug_assert_ne!(after_next, edge, "{:?} would be left with one edge", face);
    debug_assert_ne!(after_twin, next_twin, "{:?} would be left with one edge", other);

    mesh.link(edge, after_next);
    mesh.link(next_twin, after_twin);
    mesh.set_twins(edge, next_twin);

    mesh.face_mut(face).start_edge = edge;
    mesh.face_mut(other).start_edge = next_twin;

    mesh.remove_edge(next);
    mesh.remove_edge(twin);

    mesh.initialize_face(face);
    mesh.initialize_face(other);
}

/// Merges the neighbor face on the other side of `chain` into the face owning
/// it.
///
/// Every edge of the run is removed together with its twin, and the merged
/// face gets the Newell normal of its new boundary.
pub(super) fn merge_faces_across(
    mesh: &mut HalfEdgeMesh,
    sets: &mut [FaceOutsideSet],
    chain: SharedChain,
    pool: &mut Vec<u32>,
) {
    let face = mesh.edge(chain.first).face;
    let other = mesh.twin_face(chain.first);
    release_outside_set(sets, other, pool);

    let twin_first = mesh.edge(chain.first).twin;
    let twin_last = mesh.edge(chain.last).twin;
    let before = mesh.edge(chain.first).prev;
    let after = mesh.edge(chain.last).next;
    let other_after = mesh.edge(twin_first).next;
    let other_before = mesh.edge(twin_last).prev;

    // Relinking an edge to its own twin leaves a spike.
    debug_assert_ne!(mesh.edge(before).twin, other_after);
    debug_assert_ne!(mesh.edge(after).twin, other_before);
    debug_assert_ne!(other_after, twin_last, "{:?} is enclosed by {:?}", other, face);

    let removed = chain.edges(mesh);

    mesh.link(before, other_after);
    mesh.link(other_before, after);
    mesh.face_mut(face).start_edge = before;

    for e in removed {
        let twin = mesh.edge(e).twin;
        mesh.remove_edge(e);
        mesh.remove_edge(twin);
    }

    mesh.remove_face_record(other);
    mesh.initialize_face(face);

    debug_assert!(
        mesh.face_edges(face)
            .iter()
            .all(|e| mesh.twin_face(*e) != face),
        "merging {:?} into {:?} left a spike",
        other,
        face
    );

    if let Some(plane) = NewellPlane::fit(&mesh.face_vertices(face)) {
        mesh.face_mut(face).normal = plane.normal.into_inner();
    }
}
