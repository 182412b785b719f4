//! Runs the geometry tests of the f32 crate against the f64 build.

#[macro_use]
extern crate approx;
extern crate hullsat3d_f64 as hullsat3d;
extern crate nalgebra as na;

#[path = "../../hullsat3d/tests/geometry/aabb_rotated.rs"]
mod aabb_rotated;
#[path = "../../hullsat3d/tests/geometry/ball_convex.rs"]
mod ball_convex;
#[path = "../../hullsat3d/tests/geometry/convex_hull.rs"]
mod convex_hull;
#[path = "../../hullsat3d/tests/geometry/sat_cuboid_cuboid.rs"]
mod sat_cuboid_cuboid;
