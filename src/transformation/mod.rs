//! Convex hull computation.

pub use self::convex_hull3::{
    check_convex_hull, convex_hull, try_convex_hull, try_convex_hull_with_tolerance,
    ConvexHullError, ConvexHullValidationError,
};
#[cfg(feature = "parallel")]
pub use self::convex_hull3::convex_hulls_par;

mod convex_hull3;
