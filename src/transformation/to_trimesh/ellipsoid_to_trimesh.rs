use crate::math::{Point, Real};
use crate::shape::Ellipsoid;
use crate::transformation::utils;
use na::ComplexField;

impl Ellipsoid {
    /// Discretize the boundary of this ellipsoid as a triangle-mesh.
    ///
    /// This is a UV-sphere with `nlongitudes` meridians and `nbands` latitude bands,
    /// scaled along each axis by the ellipsoid radii. The two poles are explicit
    /// vertices so no degenerate triangle is generated.
    pub fn to_trimesh(&self, nlongitudes: u32, nbands: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (vtx, idx) = unit_sphere(nlongitudes, nbands);
        (utils::scaled(vtx, self.radii), idx)
    }
}

fn unit_sphere(nlongitudes: u32, nbands: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    assert!(nlongitudes >= 3 && nbands >= 2);

    let dtheta = core::f64::consts::TAU / (nlongitudes as Real);
    let dphi = core::f64::consts::PI / (nbands as Real);
    let nrings = nbands - 1;

    let mut coords = Vec::with_capacity((nlongitudes * nrings + 2) as usize);
    coords.push(Point::new(0.0, 0.0, -1.0));

    let mut curr_phi = -core::f64::consts::FRAC_PI_2;
    for _ in 0..nrings {
        curr_phi += dphi;
        utils::push_circle(
            ComplexField::cos(curr_phi),
            nlongitudes,
            dtheta,
            ComplexField::sin(curr_phi),
            &mut coords,
        );
    }

    let north_pole = coords.len() as u32;
    coords.push(Point::new(0.0, 0.0, 1.0));

    let mut idx = Vec::new();

    utils::push_degenerate_top_ring_indices(1, 0, nlongitudes, &mut idx);
    // The south cap lies below its ring.
    utils::reverse_clockwising(&mut idx);

    for k in 0..nrings - 1 {
        let bottom = 1 + k * nlongitudes;
        utils::push_ring_indices(bottom, bottom + nlongitudes, nlongitudes, &mut idx);
    }

    utils::push_degenerate_top_ring_indices(
        1 + (nrings - 1) * nlongitudes,
        north_pole,
        nlongitudes,
        &mut idx,
    );

    (coords, idx)
}
