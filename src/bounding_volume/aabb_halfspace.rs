use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::HalfSpace;

impl HalfSpace {
    /// Computes the world-space AABB of this half-space.
    ///
    /// A half-space is unbounded so its AABB does not depend on `pos`.
    #[inline]
    pub fn aabb(&self, _pos: &Isometry<Real>) -> Aabb {
        self.local_aabb()
    }

    /// Computes the local-space AABB of this half-space.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new_unbounded()
    }
}
