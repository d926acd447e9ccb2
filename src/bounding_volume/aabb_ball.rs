use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Ball;

/// The AABB of a ball of the given `radius` centered at `center`.
///
/// Also used as the query box of the narrow-phase routines involving balls.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

impl Ball {
    /// The AABB of this ball placed at `pos`. Rotations do not affect it.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        ball_aabb(&Point::from(pos.translation.vector), self.radius)
    }

    /// The AABB of this ball in its own frame.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        ball_aabb(&Point::origin(), self.radius)
    }
}
