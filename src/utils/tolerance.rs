//! Scale-relative tolerances shared by hull construction and the separating axis tests.

use crate::math::{Point, Real};

/// Default bias added to the separation of the first face reference before another face may replace it.
pub const DEFAULT_FACE_TO_FACE_BIAS: Real = 0.005;
/// Default bias added to the best face separation before an edge pair may replace it.
pub const DEFAULT_FACE_TO_EDGE_BIAS: Real = 0.005;
/// Angle, in degrees, under which two edges are considered parallel.
pub const PARALLEL_EDGE_ANGLE: Real = 3.0;

/// Tolerances derived from the extent of a point cloud.
///
/// Raw machine epsilon is meaningless at arbitrary model scale, so every
/// comparison made while building a hull is made against one of the values
/// stored here. They are computed once per hull from the largest absolute
/// coordinates of the input cloud:
///
/// - `dimension_sum = 3 * (max|x| + max|y| + max|z|)`
/// - `scaled_epsilon = dimension_sum * sqrt(Real::EPSILON)`
/// - `visibility_epsilon = dimension_sum * Real::EPSILON^(1 / 2.5)`
///
/// The separating axis tests read the parallel-edge threshold and the
/// reference-feature biases from the same structure.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GeometryTolerance {
    /// `sqrt(Real::EPSILON)`.
    pub initial_epsilon: Real,
    /// Three times the sum of the largest absolute coordinates along each axis.
    pub dimension_sum: Real,
    /// Tolerance for plane-side classification, coplanarity and degeneracy tests.
    pub scaled_epsilon: Real,
    /// Points closer than this to a face are not worth adding to the hull.
    pub visibility_epsilon: Real,
    /// Edge pairs whose directions have an absolute cosine above this are skipped.
    pub parallel_edge_cos: Real,
    /// See [`DEFAULT_FACE_TO_FACE_BIAS`].
    pub face_to_face_bias: Real,
    /// See [`DEFAULT_FACE_TO_EDGE_BIAS`].
    pub face_to_edge_bias: Real,
}

impl Default for GeometryTolerance {
    fn default() -> Self {
        Self::from_dimension_sum(1.0)
    }
}

impl GeometryTolerance {
    /// Tolerances for a point cloud whose `dimension_sum` is known.
    pub fn from_dimension_sum(dimension_sum: Real) -> Self {
        let initial_epsilon = Real::EPSILON.sqrt();

        Self {
            initial_epsilon,
            dimension_sum,
            scaled_epsilon: dimension_sum * initial_epsilon,
            visibility_epsilon: dimension_sum * Real::EPSILON.powf(1.0 / 2.5),
            parallel_edge_cos: PARALLEL_EDGE_ANGLE.to_radians().cos(),
            face_to_face_bias: DEFAULT_FACE_TO_FACE_BIAS,
            face_to_edge_bias: DEFAULT_FACE_TO_EDGE_BIAS,
        }
    }

    /// Tolerances scaled to the extent of `points`.
    pub fn from_points(points: &[Point<Real>]) -> Self {
        let mut max_abs = [0.0 as Real; 3];

        for pt in points {
            for (m, c) in max_abs.iter_mut().zip(pt.iter()) {
                *m = m.max(c.abs());
            }
        }

        Self::from_dimension_sum(3.0 * (max_abs[0] + max_abs[1] + max_abs[2]))
    }

    /// Returns a copy using the given reference-feature biases.
    pub fn with_biases(mut self, face_to_face: Real, face_to_edge: Real) -> Self {
        self.face_to_face_bias = face_to_face;
        self.face_to_edge_bias = face_to_edge;
        self
    }
}
