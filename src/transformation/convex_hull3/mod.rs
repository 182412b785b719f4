pub use self::convex_hull::{convex_hull, try_convex_hull, try_convex_hull_with_tolerance};
#[cfg(feature = "parallel")]
pub use self::convex_hull::convex_hulls_par;
pub use self::error::{ConvexHullError, ConvexHullValidationError};
pub use self::validation::check_convex_hull;

mod convex_hull;
mod error;
mod face_merge;
mod horizon;
mod initial_mesh;
mod outside_set;
mod validation;
