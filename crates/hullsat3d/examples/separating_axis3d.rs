use hullsat3d::bounding_volume::construct_aabb;
use hullsat3d::math::{Isometry, Real, Vector};
use hullsat3d::query;
use hullsat3d::shape::ConvexCollider;

fn main() {
    let cube = ConvexCollider::cuboid(Vector::repeat(0.5));
    let quarter = std::f64::consts::FRAC_PI_4 as Real;
    let pos_a = Isometry::new(Vector::zeros(), Vector::z() * quarter);

    for gap in [0.1, 0.0, -0.1] {
        let pos_b = Isometry::new(
            Vector::new((2.0 as Real).sqrt() + gap, 0.0, 0.0),
            Vector::y() * quarter,
        );
        let result = query::find_separating_axis(&cube, &pos_a, &cube, &pos_b);
        let aabb = construct_aabb(&cube, &pos_b);

        println!(
            "gap {:+.2}: separated = {}, separation = {:.4}, reference = {:?}, axis = {}",
            gap,
            result.separated,
            result.max_separation,
            result.reference,
            result.axis.transpose()
        );
        println!("  aabb of b: {} .. {}", aabb.mins, aabb.maxs);
    }
}
