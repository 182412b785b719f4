use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// A plane fitted to a polygon with Newell's method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NewellPlane {
    /// The unit normal of the plane, oriented like the polygon winding.
    pub normal: UnitVector<Real>,
    /// Signed offset of the plane along its normal: `dot(normal, x) == offset` on the plane.
    pub offset: Real,
}

impl NewellPlane {
    /// Fits a plane to the closed polygon `points`.
    ///
    /// The polygon may be non-planar or contain repeated vertices. Returns `None`
    /// if it has no area.
    pub fn fit(points: &[Point<Real>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut normal = Vector::zeros();
        let mut sum = Vector::zeros();

        for (i, pi) in points.iter().enumerate() {
            let pj = &points[(i + 1) % points.len()];
            normal.x += (pi.y - pj.y) * (pi.z + pj.z);
            normal.y += (pi.z - pj.z) * (pi.x + pj.x);
            normal.z += (pi.x - pj.x) * (pi.y + pj.y);
            sum += pi.coords;
        }

        let normal = UnitVector::try_new(normal, DEFAULT_EPSILON)?;
        let offset = normal.dot(&sum) / points.len() as Real;

        Some(Self { normal, offset })
    }

    /// Signed distance from `point` to this plane.
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) - self.offset
    }
}
