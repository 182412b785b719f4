use super::ConvexHullValidationError;
use crate::shape::{ConvexCollider, HalfEdgeTopology};

/// Checks that a collider is a well-formed closed convex polyhedron.
///
/// The following properties are verified:
/// - `twin(twin(e)) == e`, `prev(next(e)) == e` and `next(prev(e)) == e` for every edge,
/// - every face boundary is a closed loop of at least three edges owned by that face,
/// - every edge belongs to exactly one face loop,
/// - `V - E + F == 2`,
/// - no vertex lies in front of a face plane by more than `scaled_epsilon`.
pub fn check_convex_hull(collider: &ConvexCollider) -> Result<(), ConvexHullValidationError> {
    let edges = collider.halfedges();
    let num_edges = edges.len();

    for id in collider.edge_ids() {
        let edge = collider.edge(id);

        if edge.twin.index() >= num_edges || collider.edge(edge.twin).twin != id {
            return Err(ConvexHullValidationError::BrokenTwin(id));
        }

        if edge.next.index() >= num_edges
            || edge.prev.index() >= num_edges
            || collider.edge(edge.next).prev != id
            || collider.edge(edge.prev).next != id
        {
            return Err(ConvexHullValidationError::BrokenLink(id));
        }
    }

    let mut num_loop_edges = 0;

    for face in collider.face_ids() {
        let start = collider.face(face).start_edge;
        let mut curr = start;
        let mut count = 0;

        loop {
            let edge = collider.edge(curr);

            if edge.face != face {
                return Err(ConvexHullValidationError::WrongFace(face, curr));
            }

            count += 1;
            curr = edge.next;

            if curr == start {
                break;
            }

            if count > num_edges {
                return Err(ConvexHullValidationError::OpenFaceLoop(face));
            }
        }

        if count < 3 {
            return Err(ConvexHullValidationError::DegenerateFace(face));
        }

        num_loop_edges += count;
    }

    if num_loop_edges != num_edges {
        return Err(ConvexHullValidationError::DanglingEdges);
    }

    let num_vertices = collider.vertices().len();
    let num_faces = collider.halfedge_faces().len();

    if num_vertices + num_faces != num_edges / 2 + 2 {
        return Err(ConvexHullValidationError::EulerCharacteristic(
            num_vertices,
            num_edges / 2,
            num_faces,
        ));
    }

    let scaled_epsilon = collider.tolerance().scaled_epsilon;

    for face in collider.face_ids() {
        for (i, pt) in collider.vertices().iter().enumerate() {
            if collider.point_distance_to_face(face, pt) > scaled_epsilon {
                return Err(ConvexHullValidationError::NotConvex(face, i));
            }
        }
    }

    Ok(())
}
