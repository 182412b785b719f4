use super::ConvexHullError;
use crate::math::{Point, Real, Vector};
use crate::shape::{EdgeId, FaceId, HalfEdgeMesh, HalfEdgeTopology};
use crate::utils;
use hashbrown::HashSet;

/// Collects the faces that can see `eye`, starting from `seed` and following
/// face adjacency.
///
/// Only faces connected to `seed` through other visible faces are reported, so
/// the visible region is always a single patch of the hull.
pub(super) fn visible_faces(
    mesh: &HalfEdgeMesh,
    seed: FaceId,
    eye: &Point<Real>,
    eps: Real,
) -> Vec<FaceId> {
    let mut visited = HashSet::new();
    let mut stack = vec![seed];
    let mut visible = Vec::new();
    let _ = visited.insert(seed);

    while let Some(face) = stack.pop() {
        visible.push(face);

        mesh.for_each_edge(face, |_, edge| {
            let adj = mesh.edge(edge.twin).face;

            if visited.insert(adj) && mesh.is_point_visible_from_face(adj, eye, eps) {
                stack.push(adj);
            }
        });
    }

    visible
}

/// Finds the closed loop of edges separating the visible faces from the rest
/// of the hull.
///
/// The returned edges belong to visible faces and are ordered so that each one
/// starts where the previous one ends.
pub(super) fn find_horizon_edges(
    mesh: &HalfEdgeMesh,
    visible: &[FaceId],
) -> Result<Vec<EdgeId>, ConvexHullError> {
    let visible_set: HashSet<FaceId> = visible.iter().copied().collect();
    let is_horizon = |edge: EdgeId| {
        visible_set.contains(&mesh.edge(edge).face)
            && !visible_set.contains(&mesh.twin_face(edge))
    };

    let mut num_boundary_edges = 0;
    let mut start = None;

    for face in visible {
        mesh.for_each_edge(*face, |id, _| {
            if is_horizon(id) {
                num_boundary_edges += 1;
                start = start.or(Some(id));
            }
        });
    }

    let start = start.ok_or(ConvexHullError::InternalError(
        "the visible faces cover the whole hull",
    ))?;

    let max_steps = mesh.num_edges();
    let mut horizon = vec![start];
    let mut curr = start;

    loop {
        curr = mesh.edge(curr).next;

        // Rotate around the end vertex of the last horizon edge until the
        // boundary is found again.
        let mut steps = 0;
        while !is_horizon(curr) {
            curr = mesh.edge(mesh.edge(curr).twin).next;
            steps += 1;

            if steps > max_steps {
                return Err(ConvexHullError::InternalError(
                    "the horizon walk did not find its next edge",
                ));
            }
        }

        if curr == start {
            break;
        }

        horizon.push(curr);

        if horizon.len() > num_boundary_edges {
            return Err(ConvexHullError::InternalError(
                "the horizon walk did not close",
            ));
        }
    }

    if horizon.len() != num_boundary_edges {
        log::warn!(
            "horizon loop has {} edges but the visible region has {} boundary edges",
            horizon.len(),
            num_boundary_edges
        );
        return Err(ConvexHullError::InternalError(
            "the visible region is not bounded by a single loop",
        ));
    }

    Ok(horizon)
}

/// Closes the hole left by the visible faces with a fan of triangles joining
/// each boundary edge to the eye vertex.
///
/// `boundary` lists the kept edges around the hole, in the order produced by
/// [`find_horizon_edges`] once mapped to twins, or any ordered loop where each
/// edge ends where the previous one starts. Each new triangle becomes the twin
/// face of its boundary edge and is linked to its neighbors in the fan.
pub(super) fn create_faces_from_eye_point(
    mesh: &mut HalfEdgeMesh,
    eye: Point<Real>,
    eye_vertex: u32,
    boundary: &[EdgeId],
) -> Vec<FaceId> {
    let mut new_faces = Vec::with_capacity(boundary.len());
    let mut first_prev_pairing = None;
    let mut last_next_pairing: Option<EdgeId> = None;

    for edge in boundary {
        let e = *mesh.edge(*edge);
        let end = *mesh.edge(e.next);

        let pairing = mesh.add_edge(end.origin, end.vertex);
        let next_pairing = mesh.add_edge(e.origin, e.vertex);
        let prev_pairing = mesh.add_edge(eye, eye_vertex);

        mesh.link(pairing, next_pairing);
        mesh.link(next_pairing, prev_pairing);
        mesh.link(prev_pairing, pairing);
        mesh.set_twins(pairing, *edge);

        let normal = utils::ccw_face_normal([&end.origin, &e.origin, &eye])
            .map(|n| n.into_inner())
            .unwrap_or_else(|| {
                log::debug!("degenerate triangle in the hull fan, it will be merged away");
                Vector::zeros()
            });
        new_faces.push(mesh.add_face(pairing, normal));

        if let Some(last) = last_next_pairing {
            mesh.set_twins(prev_pairing, last);
        } else {
            first_prev_pairing = Some(prev_pairing);
        }

        last_next_pairing = Some(next_pairing);
    }

    if let (Some(first), Some(last)) = (first_prev_pairing, last_next_pairing) {
        mesh.set_twins(first, last);
    }

    new_faces
}
