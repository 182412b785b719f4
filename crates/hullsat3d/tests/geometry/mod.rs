#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod aabb_rotated;
mod ball_convex;
mod convex_hull;
mod sat_cuboid_cuboid;
