use hullsat3d::math::{Point, Real, Vector};
use hullsat3d::shape::{ConvexCollider, FaceId, HalfEdgeTopology};
use hullsat3d::transformation::{self, check_convex_hull, ConvexHullError};
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

fn sphere_points(rng: &mut StdRng, count: usize, radius: Real) -> Vec<Point<Real>> {
    (0..count)
        .map(|_| loop {
            let v: Vector<Real> = Vector::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let norm = v.norm();

            if norm > 0.1 && norm <= 1.0 {
                break Point::from(v * (radius / norm));
            }
        })
        .collect()
}

/// Points on the surface of the cube `[-1, 1]^3`.
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

// Points closer than `visibility_epsilon` to a face are not added to the hull,
// and faces built afterwards may lean slightly further over them.
fn assert_contains_points(hull: &ConvexCollider, points: &[Point<Real>]) {
    let eps = 2.0 * hull.tolerance().visibility_epsilon;

    for face in hull.face_ids() {
        for pt in points {
            let dist = hull.point_distance_to_face(face, pt);
            assert!(dist <= eps, "{} is {} in front of {:?}", pt, dist, face);
        }
    }
}

/// Fails if two neighbor faces each have all their vertices within
/// `scaled_epsilon` of the plane of the other.
fn assert_no_coplanar_neighbors(hull: &ConvexCollider) {
    let eps = hull.tolerance().scaled_epsilon;
    let is_flat_against = |face: FaceId, other: FaceId| {
        hull.face_vertices(other)
            .iter()
            .all(|pt| hull.point_distance_to_face(face, pt).abs() <= eps)
    };

    for edge in hull.unique_edge_ids() {
        let a = hull.edge(edge).face;
        let b = hull.twin_face(edge);
        assert!(
            !(is_flat_against(a, b) && is_flat_against(b, a)),
            "coplanar faces {:?} and {:?} around {:?}",
            a,
            b,
            edge
        );
    }
}

#[test]
fn cube_hull_has_six_quads() {
    let hull = transformation::convex_hull(&cube_points(0.5)).unwrap();

    assert_eq!(hull.halfedge_faces().len(), 6);
    assert_eq!(hull.halfedges().len(), 24);
    assert_eq!(hull.vertices().len(), 8);
    assert_eq!(check_convex_hull(&hull), Ok(()));
    assert_no_coplanar_neighbors(&hull);

    for face in hull.face_ids() {
        assert_eq!(hull.face_edge_count(face), 4);
        let f = hull.face(face);
        assert_relative_eq!(f.normal.norm(), 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(f.centroid.coords, f.normal * 0.5, epsilon = 1.0e-5);
    }
}

fn hexagonal_prism_points() -> Vec<Point<Real>> {
    let mut points = Vec::new();

    for i in 0..6 {
        let angle = i as Real * std::f64::consts::FRAC_PI_3 as Real;
        let (s, c) = angle.sin_cos();
        points.push(Point::new(c, s, -1.0));
        points.push(Point::new(c, s, 1.0));
    }

    points
}

#[test]
fn hexagonal_prism() {
    let mut points = hexagonal_prism_points();
    points.push(Point::new(0.1, 0.2, 0.3));

    let hull = transformation::try_convex_hull(&points).unwrap();
    assert_eq!(hull.halfedge_faces().len(), 8);
    assert_eq!(hull.vertices().len(), 12);
    assert_eq!(check_convex_hull(&hull), Ok(()));
    assert_no_coplanar_neighbors(&hull);

    let mut hexagons = 0;
    for face in hull.face_ids() {
        match hull.face_edge_count(face) {
            6 => hexagons += 1,
            4 => {}
            n => panic!("unexpected face with {} edges", n),
        }
    }
    assert_eq!(hexagons, 2);
}

#[test]
fn degenerate_inputs_are_rejected() {
    let square = [
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
        Point::new(0.5, 0.5, 1.0),
    ];
    assert_eq!(
        transformation::try_convex_hull(&square).err(),
        Some(ConvexHullError::CoplanarInput)
    );
    assert!(transformation::convex_hull(&square).is_none());

    let line: Vec<_> = (0..6)
        .map(|i| Point::new(i as Real, i as Real * 0.5, -(i as Real)))
        .collect();
    assert_eq!(
        transformation::try_convex_hull(&line).err(),
        Some(ConvexHullError::CollinearInput)
    );

    let same = [Point::new(1.0, 2.0, 3.0); 5];
    assert!(transformation::convex_hull(&same).is_none());
}

#[test]
fn hull_of_hull_is_the_same_polyhedron() {
    let mut rng = StdRng::seed_from_u64(42);
    let clouds = [hexagonal_prism_points(), sphere_points(&mut rng, 20, 2.0)];

    for points in &clouds {
        let hull = transformation::convex_hull(points).unwrap();
        let again = transformation::convex_hull(hull.vertices()).unwrap();

        assert_eq!(hull.vertices().len(), again.vertices().len());
        assert_eq!(hull.halfedge_faces().len(), again.halfedge_faces().len());
        assert_eq!(hull.halfedges().len(), again.halfedges().len());
        assert_contains_points(&again, points);
    }
}

#[test]
fn random_clouds() {
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..20 {
        let mut points = sphere_points(&mut rng, 64, 1.0);
        let interior: Vec<_> = sphere_points(&mut rng, 64, 0.5)
            .into_iter()
            .map(|pt| pt * rng.gen_range(0.0..1.0))
            .collect();
        points.extend(interior);

        let hull = transformation::try_convex_hull(&points).unwrap();
        assert_eq!(check_convex_hull(&hull), Ok(()));
        assert_contains_points(&hull, &points);
        assert_no_coplanar_neighbors(&hull);

        // All the points on the sphere are extreme.
        assert!(hull.vertices().len() <= 64);
        assert!(hull.vertices().len() > 32);
    }
}

#[test]
fn cube_surface_clouds() {
    let mut rng = StdRng::seed_from_u64(27);

    for _ in 0..20 {
        let points = cube_surface_points(&mut rng, 150);
        let hull = transformation::try_convex_hull(&points).unwrap();

        assert_eq!(check_convex_hull(&hull), Ok(()));
        assert_contains_points(&hull, &points);
        assert_no_coplanar_neighbors(&hull);
    }
}

#[test]
fn thin_slab_clouds() {
    let mut rng = StdRng::seed_from_u64(15);

    for _ in 0..20 {
        let points: Vec<Point<Real>> = (0..100)
            .map(|_| {
                Point::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-0.05..0.05),
                )
            })
            .collect();
        let hull = transformation::try_convex_hull(&points).unwrap();

        assert_eq!(check_convex_hull(&hull), Ok(()));
        assert_contains_points(&hull, &points);
    }
}

#[test]
fn lattice_hull_is_a_cube() {
    for k in 2..6 {
        let points: Vec<_> = (0..k * k * k)
            .map(|i| Point::new((i % k) as Real, (i / k % k) as Real, (i / (k * k)) as Real))
            .collect();
        let hull = transformation::try_convex_hull(&points).unwrap();

        assert_eq!(hull.halfedge_faces().len(), 6, "lattice of side {}", k);
        assert_eq!(hull.vertices().len(), 8, "lattice of side {}", k);
        assert_eq!(check_convex_hull(&hull), Ok(()));
    }
}

#[test]
fn large_scale_cloud() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10 {
        let mut points = cube_points(5000.0);

        for _ in 0..50 {
            points.push(Point::new(
                rng.gen_range(-4900.0..4900.0),
                rng.gen_range(-4900.0..4900.0),
                rng.gen_range(-4900.0..4900.0),
            ));
        }

        let hull = transformation::try_convex_hull(&points).unwrap();
        assert_eq!(hull.halfedge_faces().len(), 6);
        assert_eq!(hull.vertices().len(), 8);
        assert_eq!(check_convex_hull(&hull), Ok(()));
        assert_contains_points(&hull, &points);
    }
}

#[test]
fn tiny_scale_cloud() {
    let hull = transformation::convex_hull(&cube_points(1.0e-3)).unwrap();
    assert_eq!(hull.halfedge_faces().len(), 6);
    assert_eq!(hull.vertices().len(), 8);
}
