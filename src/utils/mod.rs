//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::newell_plane::NewellPlane;
pub use self::plane::{is_point_above_plane, line_plane_intersection, point_distance_to_plane};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id, point_cloud_support_point_with_dot,
};
pub use self::segment::{closest_point_on_line_interpolant, closest_point_on_segment};
pub use self::tolerance::{
    GeometryTolerance, DEFAULT_FACE_TO_EDGE_BIAS, DEFAULT_FACE_TO_FACE_BIAS, PARALLEL_EDGE_ANGLE,
};

mod ccw_face_normal;
mod newell_plane;
mod plane;
mod point_cloud_support_point;
mod segment;
mod tolerance;
