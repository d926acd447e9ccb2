use crate::math::{Point, Real, Vector};
use crate::shape::Cylinder;
use crate::transformation::utils;

impl Cylinder {
    /// Discretize the boundary of this cylinder as a triangle-mesh.
    ///
    /// The lateral surface is swept along `z` with `nstacks` layers of `nslices` quads,
    /// and both ends are capped with a triangle fan.
    pub fn to_trimesh(&self, nslices: u32, nstacks: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let diameter = self.radius * 2.0;
        let height = self.half_height * 2.0;
        let scale = Vector::new(diameter, diameter, height);
        let (vtx, idx) = unit_cylinder(nslices, nstacks);
        (utils::scaled(vtx, scale), idx)
    }
}

fn unit_cylinder(nslices: u32, nstacks: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    assert!(nslices >= 3 && nstacks >= 1);

    let dtheta = core::f64::consts::TAU / (nslices as Real);
    let dz = 1.0 / (nstacks as Real);
    let mut coords = Vec::with_capacity((nslices * (nstacks + 1)) as usize);
    let mut indices = Vec::new();

    for k in 0..=nstacks {
        utils::push_circle(0.5, nslices, dtheta, -0.5 + dz * k as Real, &mut coords);
    }

    for k in 0..nstacks {
        utils::push_ring_indices(k * nslices, (k + 1) * nslices, nslices, &mut indices);
    }

    // Bottom cap faces `-z`.
    let bottom_start_id = indices.len();
    utils::push_filled_circle_indices(0, nslices, &mut indices);
    utils::reverse_clockwising(&mut indices[bottom_start_id..]);
    utils::push_filled_circle_indices(nstacks * nslices, nslices, &mut indices);

    (coords, indices)
}
