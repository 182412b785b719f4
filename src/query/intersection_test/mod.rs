//! Intersection tests between convex colliders.

pub use self::intersection_test_convex_ball::intersection_test_convex_ball;
pub use self::intersection_test_convex_convex::intersection_test_convex_convex;

mod intersection_test_convex_ball;
mod intersection_test_convex_convex;
