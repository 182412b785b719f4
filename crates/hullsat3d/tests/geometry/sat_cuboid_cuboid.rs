use hullsat3d::math::{Isometry, Real, Vector};
use hullsat3d::query::{self, SeparatingFeature};
use hullsat3d::shape::{ConvexCollider, HalfEdgeTopology};
use hullsat3d::transformation;

fn unit_cube() -> ConvexCollider {
    ConvexCollider::cuboid(Vector::repeat(0.5))
}

#[test]
fn distant_cubes_are_separated_by_a_face() {
    let cube = unit_cube();
    let result = query::find_separating_axis(
        &cube,
        &Isometry::identity(),
        &cube,
        &Isometry::translation(3.0, 0.0, 0.0),
    );

    assert!(result.separated);
    assert_relative_eq!(result.max_separation, 2.0);
    assert_relative_eq!(result.axis, Vector::x());

    let SeparatingFeature::FaceA(face) = result.reference else {
        panic!("unexpected reference {:?}", result.reference);
    };
    assert_relative_eq!(cube.face(face).normal, Vector::x());
}

#[test]
fn overlapping_cubes() {
    let cube = unit_cube();
    let result = query::find_separating_axis(
        &cube,
        &Isometry::identity(),
        &cube,
        &Isometry::translation(0.5, 0.0, 0.0),
    );

    assert!(!result.separated);
    assert_relative_eq!(result.max_separation, -0.5);
    assert!(matches!(result.reference, SeparatingFeature::FaceA(_)));
    assert!(query::intersection_test_convex_convex(
        &cube,
        &Isometry::identity(),
        &cube,
        &Isometry::translation(0.5, 0.0, 0.0),
    ));
}

fn crossed_edges_positions() -> (Isometry<Real>, Isometry<Real>) {
    let quarter = std::f64::consts::FRAC_PI_4 as Real;
    let pos_a = Isometry::new(Vector::zeros(), Vector::z() * quarter);
    let pos_b = Isometry::new(
        Vector::new((2.0 as Real).sqrt() + 0.1, 0.0, 0.0),
        Vector::y() * quarter,
    );
    (pos_a, pos_b)
}

#[test]
fn crossed_edges_are_separated_by_an_edge_pair() {
    let (pos_a, pos_b) = crossed_edges_positions();
    let box_cube = unit_cube();
    let cube_points: Vec<_> = box_cube.vertices().to_vec();
    let hull_cube = transformation::convex_hull(&cube_points).unwrap();

    for cube in [&box_cube, &hull_cube] {
        let result = query::find_separating_axis(cube, &pos_a, cube, &pos_b);

        assert!(result.separated);
        assert!(
            matches!(result.reference, SeparatingFeature::EdgePair { .. }),
            "unexpected reference {:?}",
            result.reference
        );
        assert_relative_eq!(result.max_separation, 0.1, epsilon = 1.0e-4);
        assert_relative_eq!(result.axis, Vector::x(), epsilon = 1.0e-4);

        let SeparatingFeature::EdgePair { edge_a, edge_b } = result.reference else {
            unreachable!()
        };
        assert!(query::sat::edge_pair_builds_minkowski_face(
            cube, edge_a, &pos_a, cube, edge_b, &pos_b
        ));
    }
}

#[test]
fn crossed_edges_overlapping() {
    let (pos_a, mut pos_b) = crossed_edges_positions();
    pos_b.translation.vector.x -= 0.2;

    let cube = unit_cube();
    let result = query::find_separating_axis(&cube, &pos_a, &cube, &pos_b);

    assert!(!result.separated);
    assert!(result.max_separation < 0.0);
    assert!(matches!(result.reference, SeparatingFeature::EdgePair { .. }));
    assert_relative_eq!(result.max_separation, -0.1, epsilon = 1.0e-4);
}

#[test]
fn axis_aligned_grid_matches_interval_overlap() {
    let cube = unit_cube();
    let origin = Isometry::identity();
    let offsets = [-1.5, -0.75, 0.0, 0.75, 1.5];

    for x in offsets {
        for y in offsets {
            for z in offsets {
                let d = Vector::new(x, y, z);
                let pos_b = Isometry::translation(x, y, z);
                let result = query::find_separating_axis(&cube, &origin, &cube, &pos_b);
                let expected = d.amax() > 1.0;

                assert_eq!(result.separated, expected, "offset {}", d);
                assert_eq!(
                    query::intersection_test_convex_convex(&cube, &origin, &cube, &pos_b),
                    !expected
                );
            }
        }
    }
}
