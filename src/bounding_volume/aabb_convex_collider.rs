use crate::bounding_volume::{aabb_utils, Aabb};
use crate::math::{Isometry, Real};
use crate::shape::{Ball, ConvexCollider};

/// Computes the world-space AABB of `collider` placed at `pos`.
///
/// The bounds are the support points of the transformed collider along the
/// six axis directions, so the box stays tight under rotation.
pub fn construct_aabb(collider: &ConvexCollider, pos: &Isometry<Real>) -> Aabb {
    aabb_utils::support_map_aabb(pos, collider)
}

impl ConvexCollider {
    /// Computes the world-space AABB of this collider, transformed by `pos`.
    #[inline]
    pub fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        construct_aabb(self, pos)
    }

    /// Computes the local-space AABB of this collider.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        aabb_utils::local_support_map_aabb(self)
    }
}

impl Ball {
    /// Computes the world-space AABB of this ball, transformed by `pos`.
    #[inline]
    pub fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        aabb_utils::support_map_aabb(pos, self)
    }
}
