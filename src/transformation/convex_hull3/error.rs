use crate::shape::{EdgeId, FaceId};

/// Errors that can occur during convex hull computation.
///
/// Degenerate inputs never produce a partial hull: the builder either returns
/// a closed convex polyhedron or one of these errors.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use hullsat3d::transformation::{try_convex_hull, ConvexHullError};
/// use hullsat3d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
/// ];
///
/// assert_eq!(try_convex_hull(&points).err(), Some(ConvexHullError::CoplanarInput));
/// # }
/// ```
#[derive(thiserror::Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum ConvexHullError {
    /// An internal error occurred during convex hull computation.
    ///
    /// This indicates that floating point inaccuracies left the hull in a state
    /// the algorithm cannot continue from.
    #[error("Internal error: {0}")]
    InternalError(&'static str),

    /// Less than four points were given.
    #[error("Less than 4 points were given to the convex-hull algorithm.")]
    IncompleteInput,

    /// All the points lie on a single line, within tolerance.
    #[error("Input points are either invalid (NaN) or are almost collinear.")]
    CollinearInput,

    /// All the points lie on a single plane, within tolerance.
    #[error("Input points are either invalid (NaN) or are almost coplanar.")]
    CoplanarInput,
}

/// Defects detected by [`check_convex_hull`](crate::transformation::check_convex_hull).
#[derive(thiserror::Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum ConvexHullValidationError {
    /// The twin of an edge does not point back to it.
    #[error("The twin of edge {0:?} does not point back to it.")]
    BrokenTwin(EdgeId),

    /// `prev(next(e))` or `next(prev(e))` is not `e`.
    #[error("The next/prev links of edge {0:?} are inconsistent.")]
    BrokenLink(EdgeId),

    /// Walking the boundary of a face does not come back to its start edge.
    #[error("The boundary of face {0:?} is not a closed loop.")]
    OpenFaceLoop(FaceId),

    /// A boundary edge of a face references another face.
    #[error("Edge {1:?} bounds face {0:?} but references another face.")]
    WrongFace(FaceId, EdgeId),

    /// A face has less than three distinct vertices.
    #[error("Face {0:?} has less than 3 distinct vertices.")]
    DegenerateFace(FaceId),

    /// Some edges do not belong to any face loop.
    #[error("Some edges are not part of any face boundary.")]
    DanglingEdges,

    /// A vertex lies in front of a face plane.
    #[error("Vertex {1} lies in front of face {0:?}.")]
    NotConvex(FaceId, usize),

    /// The Euler characteristic `V - E + F` is not 2.
    #[error("Euler characteristic mismatch: {0} vertices, {1} edges, {2} faces.")]
    EulerCharacteristic(usize, usize, usize),
}
