//! Shapes supported by hullsat.

pub use self::ball::Ball;
pub use self::convex_collider::ConvexCollider;
pub use self::half_edge::{
    EdgeId, EdgeList, FaceId, HalfEdge, HalfEdgeFace, HalfEdgeMesh, HalfEdgeTopology,
};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ball;
mod convex_collider;
mod half_edge;
mod support_map;
