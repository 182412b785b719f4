use super::face_merge::{merge_new_faces, settle_faces};
use super::horizon::{create_faces_from_eye_point, find_horizon_edges, visible_faces};
use super::initial_mesh::build_initial_simplex;
use super::outside_set::{partition_points, FaceOutsideSet};
use super::ConvexHullError;
use crate::math::{Point, Real};
use crate::shape::{ConvexCollider, FaceId, HalfEdgeMesh, HalfEdgeTopology};
use crate::utils::GeometryTolerance;
use hashbrown::HashSet;

/// Computes the convex hull of a set of 3d points.
///
/// Returns `None` if the points do not span a volume. See [`try_convex_hull`]
/// for the reason of a failure.
pub fn convex_hull(points: &[Point<Real>]) -> Option<ConvexCollider> {
    try_convex_hull(points).ok()
}

/// Computes the convex hull of a set of 3d points.
///
/// Coplanar neighbor triangles are merged, so each face of the result is a
/// planar convex polygon. Tolerances are scaled to the extent of the input with
/// [`GeometryTolerance::from_points`].
pub fn try_convex_hull(points: &[Point<Real>]) -> Result<ConvexCollider, ConvexHullError> {
    try_convex_hull_with_tolerance(points, GeometryTolerance::from_points(points))
}

/// Computes the convex hull of a set of 3d points, using the given tolerances.
pub fn try_convex_hull_with_tolerance(
    points: &[Point<Real>],
    tolerance: GeometryTolerance,
) -> Result<ConvexCollider, ConvexHullError> {
    let mesh = build_hull_mesh(points, &tolerance)?;
    Ok(ConvexCollider::from_half_edge_mesh(mesh, tolerance))
}

/// Runs QuickHull on `points`, then settles the faces of the result.
fn build_hull_mesh(
    points: &[Point<Real>],
    tolerance: &GeometryTolerance,
) -> Result<HalfEdgeMesh, ConvexHullError> {
    if points.len() < 4 {
        return Err(ConvexHullError::IncompleteInput);
    }

    let simplex = build_initial_simplex(points, tolerance)?;
    let mut mesh = simplex.mesh;
    let mut sets: Vec<_> = simplex.faces.into_iter().map(FaceOutsideSet::new).collect();
    let candidates = (0..points.len() as u32).filter(|i| !simplex.vertices.contains(i));
    partition_points(&mesh, &mut sets, points, candidates);

    let mut num_iterations = 0;

    while let Some(i) = sets
        .iter()
        .position(|set| set.face.is_some() && !set.settled && !set.points.is_empty())
    {
        let Some((eye, dist)) = sets[i].furthest_point(&mesh, points) else {
            break;
        };

        if dist <= tolerance.visibility_epsilon {
            sets[i].settled = true;
            continue;
        }

        let seed = sets[i].face.ok_or(ConvexHullError::InternalError(
            "the selected outside set has no face",
        ))?;
        add_point_to_hull(&mut mesh, &mut sets, points, seed, eye, tolerance)?;
        num_iterations += 1;
    }

    let num_settled = settle_faces(&mut mesh, tolerance);

    log::debug!(
        "convex hull of {} points: {} faces after {} iterations and {} settling merges",
        points.len(),
        mesh.num_faces(),
        num_iterations,
        num_settled
    );

    Ok(mesh)
}

/// Expands the hull so that it contains `points[eye]`, which must be in front
/// of `seed`.
fn add_point_to_hull(
    mesh: &mut HalfEdgeMesh,
    sets: &mut Vec<FaceOutsideSet>,
    points: &[Point<Real>],
    seed: FaceId,
    eye: u32,
    tolerance: &GeometryTolerance,
) -> Result<(), ConvexHullError> {
    let eye_pt = points[eye as usize];
    let visible = visible_faces(mesh, seed, &eye_pt, tolerance.scaled_epsilon);
    let visible_set: HashSet<FaceId> = visible.iter().copied().collect();

    let mut pool = Vec::new();
    sets.retain_mut(|set| match set.face {
        Some(face) if visible_set.contains(&face) => {
            pool.append(&mut set.points);
            false
        }
        Some(_) => true,
        None => false,
    });

    let horizon = find_horizon_edges(mesh, &visible)?;
    let boundary: Vec<_> = horizon.iter().map(|e| mesh.edge(*e).twin).collect();
    let new_faces = create_faces_from_eye_point(mesh, eye_pt, eye, &boundary);

    let first_new = sets.len();
    sets.extend(new_faces.into_iter().map(FaceOutsideSet::new));
    merge_new_faces(mesh, sets, first_new, &mut pool, tolerance);

    let mut seen = HashSet::new();
    sets.retain_mut(|set| match set.face {
        Some(face) if seen.insert(face) => true,
        _ => {
            pool.append(&mut set.points);
            false
        }
    });

    partition_points(mesh, sets, points, pool.into_iter().filter(|id| *id != eye));

    for face in visible {
        mesh.remove_face(face);
    }

    debug_assert!(mesh.has_consistent_links());
    Ok(())
}

/// Computes the convex hulls of several point clouds in parallel.
///
/// The result at index `i` is the hull of `clouds[i]`.
#[cfg(feature = "parallel")]
pub fn convex_hulls_par<P: AsRef<[Point<Real>]> + Sync>(
    clouds: &[P],
) -> Vec<Result<ConvexCollider, ConvexHullError>> {
    use rayon::prelude::*;

    clouds
        .par_iter()
        .map(|cloud| try_convex_hull(cloud.as_ref()))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cube_points(half_extent: Real) -> Vec<Point<Real>> {
        (0..8)
            .map(|i| {
                let sign = |bit: u32| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
                Point::new(sign(0), sign(1), sign(2)) * half_extent
            })
            .collect()
    }

    #[test]
    fn cube_hull_has_quad_faces() {
        let hull = try_convex_hull(&cube_points(0.5)).unwrap();

        assert_eq!(hull.halfedge_faces().len(), 6);
        assert_eq!(hull.halfedges().len(), 24);
        assert_eq!(hull.vertices().len(), 8);

        for face in hull.face_ids() {
            assert_eq!(hull.face_edge_count(face), 4);
            let normal = hull.face(face).normal;
            assert_relative_eq!(normal.amax(), 1.0, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn interior_points_are_ignored() {
        let mut points = cube_points(1.0);
        points.push(Point::origin());
        points.push(Point::new(0.5, -0.3, 0.2));
        points.insert(3, Point::new(0.9, 0.9, -0.9));

        let hull = try_convex_hull(&points).unwrap();
        assert_eq!(hull.vertices().len(), 8);
        assert_eq!(hull.halfedge_faces().len(), 6);
    }

    fn cube_surface_points(rng: &mut StdRng, count: usize) -> Vec<Point<Real>> {
        (0..count)
            .map(|_| {
                let mut pt: Point<Real> = Point::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                );
                pt[rng.gen_range(0..3)] = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                pt
            })
            .collect()
    }

    #[test]
    fn finished_hull_is_a_merge_fixed_point() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..10 {
            let points = cube_surface_points(&mut rng, 150);
            let tolerance = GeometryTolerance::from_points(&points);
            let mut mesh = build_hull_mesh(&points, &tolerance).unwrap();

            let faces: Vec<_> = mesh.face_ids().collect();
            let num_edges = mesh.num_edges();

            assert_eq!(settle_faces(&mut mesh, &tolerance), 0);

            let mut sets: Vec<_> = faces.iter().copied().map(FaceOutsideSet::new).collect();
            let mut pool = Vec::new();
            merge_new_faces(&mut mesh, &mut sets, 0, &mut pool, &tolerance);

            assert!(mesh.has_consistent_links());
            assert!(pool.is_empty());
            assert_eq!(mesh.face_ids().collect::<Vec<_>>(), faces);
            assert_eq!(mesh.num_edges(), num_edges);
        }
    }

    #[test]
    fn too_few_points() {
        let points = cube_points(1.0);
        assert_eq!(
            try_convex_hull(&points[..3]).err(),
            Some(ConvexHullError::IncompleteInput)
        );
        assert!(convex_hull(&[]).is_none());
    }
}
