use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;

/// A sphere centered on the origin of its local frame.
///
/// Balls take part in the separating axis tests against convex colliders,
/// where their support point along any axis is known in closed form.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }

    /// The world-space center of this ball placed at `pos`.
    ///
    /// The rotation of `pos` has no effect on a ball.
    #[inline]
    pub fn center(&self, pos: &Isometry<Real>) -> Point<Real> {
        Point::from(pos.translation.vector)
    }
}

impl SupportMap for Ball {
    /// The point of the sphere in the direction `dir`, or the center if `dir`
    /// is zero.
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let norm = dir.norm();

        if norm > 0.0 {
            Point::from(dir * (self.radius / norm))
        } else {
            Point::origin()
        }
    }

    #[inline]
    fn support_point(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        self.center(pos) + self.local_support_point(dir).coords
    }
}
