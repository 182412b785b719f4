//! Non-persistent geometric queries.
//!
//! * [`find_separating_axis`] runs the separating axis test between two
//!   convex colliders and reports the reference feature.
//! * [`intersection_test_convex_convex`] and [`intersection_test_convex_ball`]
//!   only answer whether two shapes overlap, rejecting distant pairs with
//!   their AABBs first.
//!
//! The building blocks of the separating axis test are available in [`sat`].

pub use self::intersection_test::{intersection_test_convex_ball, intersection_test_convex_convex};
pub use self::sat::{
    convex_ball_separation, find_separating_axis, find_separating_axis_with_tolerance,
    BallSeparation, SeparatingFeature, SeparationResult,
};

mod intersection_test;
pub mod sat;
