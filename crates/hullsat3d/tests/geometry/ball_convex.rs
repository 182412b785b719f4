use hullsat3d::math::{Isometry, Real, Vector};
use hullsat3d::query;
use hullsat3d::shape::{Ball, ConvexCollider};

#[test]
fn ball_near_a_corner_is_rejected_along_the_centroid_axis() {
    let cube = ConvexCollider::cuboid(Vector::repeat(1.0));
    let ball = Ball::new(0.5);
    let ball_pos = Isometry::translation(2.0, 2.0, 2.0);

    let result = query::convex_ball_separation(&cube, &Isometry::identity(), &ball, &ball_pos);
    let expected = (3.0 as Real).sqrt() - 0.5;

    assert!(result.separated);
    assert_relative_eq!(result.max_separation, expected, epsilon = 1.0e-5);
    assert_relative_eq!(result.axis, Vector::repeat(1.0).normalize(), epsilon = 1.0e-5);
    assert!(!query::intersection_test_convex_ball(
        &cube,
        &Isometry::identity(),
        &ball,
        &ball_pos
    ));
}

#[test]
fn ball_at_the_centroid_overlaps() {
    let cube = ConvexCollider::cuboid(Vector::repeat(1.0));
    let ball = Ball::new(0.25);
    let pos = Isometry::translation(5.0, -1.0, 0.0);

    let result = query::convex_ball_separation(&cube, &pos, &ball, &pos);
    assert!(!result.separated);
    assert_relative_eq!(result.max_separation, -1.25);
}

#[test]
fn ball_pressed_against_a_face() {
    let cube = ConvexCollider::cuboid(Vector::repeat(1.0));
    let ball = Ball::new(0.5);
    let ball_pos = Isometry::translation(1.3, 0.0, 0.0);

    let result = query::convex_ball_separation(&cube, &Isometry::identity(), &ball, &ball_pos);
    assert!(!result.separated);
    assert_relative_eq!(result.max_separation, -0.2, epsilon = 1.0e-5);
    assert_relative_eq!(result.axis, Vector::x());
    assert!(query::intersection_test_convex_ball(
        &cube,
        &Isometry::identity(),
        &ball,
        &ball_pos
    ));
}

#[test]
fn rotated_collider() {
    let cube = ConvexCollider::cuboid(Vector::new(2.0, 0.5, 0.5));
    let pos = Isometry::new(
        Vector::zeros(),
        Vector::z() * std::f64::consts::FRAC_PI_2 as Real,
    );
    let ball = Ball::new(0.5);
    let above = Isometry::translation(0.0, 2.4, 0.0);
    let beside = Isometry::translation(2.4, 0.0, 0.0);

    // The long axis of the box is now along y.
    let touching = query::convex_ball_separation(&cube, &pos, &ball, &above);
    let apart = query::convex_ball_separation(&cube, &pos, &ball, &beside);

    assert!(!touching.separated);
    assert!(apart.separated);
    assert_relative_eq!(apart.max_separation, 1.4, epsilon = 1.0e-5);
}
