use crate::bounding_volume;
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::{Cylinder, Ellipsoid};

impl Cylinder {
    /// Computes the world-space AABB of this cylinder, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        bounding_volume::details::support_map_aabb(pos, self)
    }

    /// Computes the local-space AABB of this cylinder.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        bounding_volume::details::local_support_map_aabb(self)
    }
}

impl Ellipsoid {
    /// Computes the world-space AABB of this ellipsoid, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        bounding_volume::details::support_map_aabb(pos, self)
    }

    /// Computes the local-space AABB of this ellipsoid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        bounding_volume::details::local_support_map_aabb(self)
    }
}
