use hullsat3d::bounding_volume::{construct_aabb, Aabb};
use hullsat3d::math::{Isometry, Point, Real, Vector};
use hullsat3d::transformation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn rotated_cube_aabb() {
    let points: Vec<_> = (0..8)
        .map(|i| {
            let sign = |bit: u32| if i & (1 << bit) != 0 { 0.5 } else { -0.5 };
            Point::new(sign(0), sign(1), sign(2))
        })
        .collect();
    let cube = transformation::convex_hull(&points).unwrap();
    let pos = Isometry::new(
        Vector::new(-2.0, 0.0, 1.0),
        Vector::y() * std::f64::consts::FRAC_PI_4 as Real,
    );
    let aabb = construct_aabb(&cube, &pos);
    let h = (2.0 as Real).sqrt() / 2.0;

    assert_relative_eq!(aabb.mins, Point::new(-2.0 - h, -0.5, 1.0 - h), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, Point::new(-2.0 + h, 0.5, 1.0 + h), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.center(), Point::new(-2.0, 0.0, 1.0), epsilon = 1.0e-5);
    assert_eq!(cube.compute_aabb(&pos), aabb);
}

#[test]
fn aabb_matches_transformed_vertices() {
    let mut rng = StdRng::seed_from_u64(3);
    let points: Vec<_> = (0..30)
        .map(|_| {
            Point::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-0.5..0.5),
            )
        })
        .collect();
    let hull = transformation::convex_hull(&points).unwrap();

    for _ in 0..10 {
        let pos = Isometry::new(
            Vector::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            ),
            Vector::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            ),
        );
        let aabb = construct_aabb(&hull, &pos);
        let world_vertices: Vec<_> = hull.vertices().iter().map(|pt| pos * pt).collect();
        let expected = Aabb::from_points(&world_vertices);

        assert_relative_eq!(aabb.mins, expected.mins, epsilon = 1.0e-4);
        assert_relative_eq!(aabb.maxs, expected.maxs, epsilon = 1.0e-4);
        // Transforming the local box bounds the tight box.
        let coarse = hull.local_aabb().transform_by(&pos);
        let coarse =
            Aabb::from_half_extents(coarse.center(), coarse.half_extents() + Vector::repeat(1.0e-4));
        assert!(coarse.contains_local_point(&aabb.mins));
        assert!(coarse.contains_local_point(&aabb.maxs));
    }
}
