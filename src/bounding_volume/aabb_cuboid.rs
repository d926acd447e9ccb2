use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::Cuboid;
use crate::utils::IsometryOps;

impl Cuboid {
    /// The AABB of this cuboid placed at `pos`.
    ///
    /// Each world axis receives the projection of the rotated half-extents on that axis.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let center = Point::from(pos.translation.vector);
        let ws_half_extents = pos.absolute_transform_vector(&self.half_extents);

        Aabb::from_half_extents(center, ws_half_extents)
    }

    /// The AABB of this cuboid in its own frame, centered at the origin.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents)
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::Cuboid;

    #[test]
    fn rotated_cuboid_aabb() {
        let cuboid = Cuboid::new(Vector::new(1.0, 2.0, 3.0));
        let pos = Isometry::new(
            Vector::new(10.0, 0.0, 0.0),
            Vector::z() * core::f64::consts::FRAC_PI_2,
        );
        let aabb = cuboid.aabb(&pos);

        assert_relative_eq!(aabb.mins, Point::new(8.0, -1.0, -3.0), epsilon = 1.0e-12);
        assert_relative_eq!(aabb.maxs, Point::new(12.0, 1.0, 3.0), epsilon = 1.0e-12);
    }
}
