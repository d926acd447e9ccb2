use crate::math::{Isometry, Matrix, Point, Real, Translation, Vector};
use crate::shape::{Cuboid, HalfSpace};
use crate::transformation::utils;
use crate::utils::WBasis;
use na::{Rotation3, UnitQuaternion};

impl HalfSpace {
    /// Approximates this half-space by a thin square slab, as a triangle-mesh.
    ///
    /// The slab spans `extent` along the two directions tangent to the boundary plane and
    /// `thickness` along the normal. Its top face lies on the boundary plane.
    pub fn to_slab_trimesh(
        &self,
        extent: Real,
        thickness: Real,
    ) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let slab = Cuboid::new(Vector::new(extent, extent, thickness) * 0.5);
        let (vtx, idx) = slab.to_trimesh();
        (utils::transformed(vtx, self.slab_pose(thickness)), idx)
    }

    /// The pose mapping the local `z` axis to the normal of this half-space and the origin to
    /// the center of a slab of the given thickness.
    fn slab_pose(&self, thickness: Real) -> Isometry<Real> {
        let n = *self.normal;
        let [t1, _] = n.orthonormal_basis();
        let t2 = n.cross(&t1);
        let basis = Matrix::from_columns(&[t1, t2, n]);
        let rotation =
            UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis));
        let center = self.boundary_point() - n * (thickness * 0.5);

        Isometry::from_parts(Translation::from(center.coords), rotation)
    }
}
