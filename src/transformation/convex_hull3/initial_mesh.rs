use super::horizon::create_faces_from_eye_point;
use super::ConvexHullError;
use crate::math::{Point, Real, Vector};
use crate::shape::{FaceId, HalfEdgeMesh, HalfEdgeTopology};
use crate::utils::{self, GeometryTolerance};
use arrayvec::ArrayVec;

/// The tetrahedron the hull grows from.
pub(super) struct InitialSimplex {
    pub mesh: HalfEdgeMesh,
    pub faces: Vec<FaceId>,
    /// Input indices of the four corners.
    pub vertices: [u32; 4],
}

/// Builds a tetrahedron spanning the input cloud as much as cheaply possible.
///
/// 1. The two most distant points among the extreme points along each axis.
/// 2. The point furthest from the segment joining them.
/// 3. The point furthest from the plane of the resulting triangle.
///
/// The triangle is wound so that the fourth point lies behind it, then closed
/// with a fan of three triangles.
pub(super) fn build_initial_simplex(
    points: &[Point<Real>],
    tolerance: &GeometryTolerance,
) -> Result<InitialSimplex, ConvexHullError> {
    let eps = tolerance.scaled_epsilon;

    let mut seeds = ArrayVec::<usize, 6>::new();
    for axis in 0..3 {
        let dir = Vector::ith(axis, 1.0);
        seeds.push(utils::point_cloud_support_point_id(&dir, points));
        seeds.push(utils::point_cloud_support_point_id(&-dir, points));
    }

    let mut first = seeds[0];
    let mut second = seeds[0];
    let mut best_sq_dist = 0.0;

    for i in 0..seeds.len() {
        for j in i + 1..seeds.len() {
            let sq_dist = na::distance_squared(&points[seeds[i]], &points[seeds[j]]);

            if sq_dist > best_sq_dist {
                best_sq_dist = sq_dist;
                first = seeds[i];
                second = seeds[j];
            }
        }
    }

    let (p1, p2) = (points[first], points[second]);
    let Some(line_dir) = (p2 - p1).try_normalize(eps) else {
        return Err(ConvexHullError::CollinearInput);
    };

    let mut third = first;
    let mut best_dist = 0.0;

    for (i, pt) in points.iter().enumerate() {
        let Some(dir) = (pt - p1).try_normalize(Real::EPSILON) else {
            continue;
        };

        if relative_eq!(dir.dot(&line_dir).abs(), 1.0) {
            continue;
        }

        let dist = na::distance(pt, &utils::closest_point_on_segment(&p1, &p2, pt));

        if dist > best_dist {
            best_dist = dist;
            third = i;
        }
    }

    if best_dist <= eps {
        return Err(ConvexHullError::CollinearInput);
    }

    let p3 = points[third];
    let normal = utils::ccw_face_normal([&p1, &p2, &p3]).ok_or(ConvexHullError::CollinearInput)?;

    let mut eye = first;
    let mut eye_dist: Real = 0.0;

    for (i, pt) in points.iter().enumerate() {
        let dist = utils::point_distance_to_plane(&normal, &p1, pt);

        if dist.abs() > eye_dist.abs() {
            eye_dist = dist;
            eye = i;
        }
    }

    if eye_dist.abs() <= eps {
        return Err(ConvexHullError::CoplanarInput);
    }

    log::trace!(
        "initial simplex: {} {} {} {}, height {}",
        first,
        second,
        third,
        eye,
        eye_dist
    );

    let mut mesh = HalfEdgeMesh::new();
    let corners = [first as u32, second as u32, third as u32];
    let edges = corners.map(|i| mesh.add_edge(points[i as usize], i));
    mesh.link(edges[0], edges[1]);
    mesh.link(edges[1], edges[2]);
    mesh.link(edges[2], edges[0]);
    let base = mesh.add_face(edges[0], normal.into_inner());

    if eye_dist > 0.0 {
        mesh.invert_face(base);
    }

    let mut boundary = Vec::with_capacity(3);
    mesh.for_each_edge_reverse(base, |id, _| boundary.push(id));

    let mut faces = vec![base];
    faces.extend(create_faces_from_eye_point(
        &mut mesh,
        points[eye],
        eye as u32,
        &boundary,
    ));

    Ok(InitialSimplex {
        mesh,
        faces,
        vertices: [first as u32, second as u32, third as u32, eye as u32],
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn initial_simplex_is_closed_and_outward() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(0.1, 0.1, 0.1),
        ];
        let tolerance = GeometryTolerance::from_points(&points);
        let simplex = build_initial_simplex(&points, &tolerance).unwrap();

        assert_eq!(simplex.faces.len(), 4);
        assert_eq!(simplex.mesh.num_edges(), 12);
        assert!(simplex.mesh.has_consistent_links());
        assert!(!simplex.vertices.contains(&4));

        let inner = Point::new(0.1, 0.1, 0.1);
        for face in &simplex.faces {
            assert!(simplex.mesh.point_distance_to_face(*face, &inner) < 0.0);
        }
    }

    #[test]
    fn collinear_points_are_rejected() {
        let points: Vec<_> = (0..5).map(|i| Point::new(i as Real, 2.0 * i as Real, 0.0)).collect();
        let tolerance = GeometryTolerance::from_points(&points);
        assert_eq!(
            build_initial_simplex(&points, &tolerance).err(),
            Some(ConvexHullError::CollinearInput)
        );
    }
}
