//! Application of the Separating Axis Theorem (SAT) to convex colliders.
//!
//! Two convex polyhedra do not intersect iff there is an axis onto which their
//! projections do not overlap. For polyhedra it is enough to test the face
//! normals of both shapes and the cross products of one edge of each shape.
//! The edge pairs are filtered on the Gauss map (see [`is_minkowski_face`]) so
//! only the pairs building a face of the Minkowski difference are tested.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use hullsat3d::math::{Isometry, Vector};
//! use hullsat3d::query::sat::{find_separating_axis, SeparatingFeature};
//! use hullsat3d::shape::ConvexCollider;
//!
//! let cube = ConvexCollider::cuboid(Vector::repeat(0.5));
//! let result = find_separating_axis(
//!     &cube,
//!     &Isometry::identity(),
//!     &cube,
//!     &Isometry::translation(3.0, 0.0, 0.0),
//! );
//!
//! assert!(result.separated);
//! assert!(matches!(result.reference, SeparatingFeature::FaceA(_)));
//! # }
//! ```

pub use self::minkowski_face::{edge_pair_builds_minkowski_face, is_minkowski_face};
pub use self::sat_convex_ball::{convex_ball_separation, BallSeparation};
pub use self::sat_convex_convex::{
    convex_convex_find_local_separating_face, convex_convex_find_separating_edge_pair,
    find_separating_axis, find_separating_axis_with_tolerance, EdgePairSeparation,
    SeparatingFeature, SeparationResult,
};

mod minkowski_face;
mod sat_convex_ball;
mod sat_convex_convex;
