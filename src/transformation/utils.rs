//! Low-level utilities for mesh generation.
//!
//! Circles are generated in the `xy` plane and stacked along `z`. Every index-buffer
//! helper emits triangles wound counter-clockwise when seen from outside of the
//! generated surface.

use crate::math::{Isometry, Point, Real, Vector};
use na::ComplexField;

/// Applies in-place a transformation to an array of points.
pub fn transform(points: &mut [Point<Real>], m: Isometry<Real>) {
    points.iter_mut().for_each(|p| *p = m * *p);
}

/// Returns the transformed version of a vector of points.
pub fn transformed(mut points: Vec<Point<Real>>, m: Isometry<Real>) -> Vec<Point<Real>> {
    transform(&mut points, m);
    points
}

/// Returns the transformed version of a vector of points, scaled component-wise by `scale`.
pub fn scaled(mut points: Vec<Point<Real>>, scale: Vector<Real>) -> Vec<Point<Real>> {
    points
        .iter_mut()
        .for_each(|p| p.coords.component_mul_assign(&scale));
    points
}

/// Pushes a discretized counterclockwise circle, lying on the plane `z = height`, to a buffer.
#[inline]
pub fn push_circle(
    radius: Real,
    nsubdiv: u32,
    dtheta: Real,
    height: Real,
    out: &mut Vec<Point<Real>>,
) {
    let mut curr_theta: Real = 0.0;

    for _ in 0..nsubdiv {
        out.push(Point::new(
            ComplexField::cos(curr_theta) * radius,
            ComplexField::sin(curr_theta) * radius,
            height,
        ));
        curr_theta += dtheta;
    }
}

/// Creates the faces from two circles with the same discretization.
///
/// The upper circle must lie above the lower one along `z`.
#[inline]
pub fn push_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        let bli = base_lower_circle + i;
        let bui = base_upper_circle + i;
        push_quad_indices(bli, bli + 1, bui + 1, bui, out);
    }

    // Close the ring.
    push_quad_indices(
        base_lower_circle + nsubdiv - 1,
        base_lower_circle,
        base_upper_circle,
        base_upper_circle + nsubdiv - 1,
        out,
    );
}

/// Creates the faces joining a circle to a single point placed above it along `z`.
#[inline]
pub fn push_degenerate_top_ring_indices(
    base_circle: u32,
    point: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        out.push([base_circle + i, base_circle + i + 1, point]);
    }

    out.push([base_circle + nsubdiv - 1, base_circle, point]);
}

/// Pushes the index buffer of a fan-triangulated circle, facing `+z`.
#[inline]
pub fn push_filled_circle_indices(base_circle: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    for i in base_circle + 1..base_circle + nsubdiv - 1 {
        out.push([base_circle, i, i + 1]);
    }
}

/// Given four corners of a quad in counterclockwise order, pushes the two triangles forming it.
#[inline]
pub fn push_quad_indices(a: u32, b: u32, c: u32, d: u32, out: &mut Vec<[u32; 3]>) {
    out.push([a, b, c]);
    out.push([c, d, a]);
}

/// Reverses the winding of a set of faces.
#[inline]
pub fn reverse_clockwising(indices: &mut [[u32; 3]]) {
    indices.iter_mut().for_each(|idx| idx.swap(0, 1));
}

#[cfg(test)]
mod tests {
    use super::{push_circle, push_ring_indices};
    use crate::math::{Point, Real};
    use crate::shape::Triangle;

    #[test]
    fn ring_faces_point_outward() {
        let nsubdiv = 8;
        let dtheta = core::f64::consts::TAU / nsubdiv as Real;
        let mut coords = Vec::new();
        let mut indices = Vec::new();
        push_circle(1.0, nsubdiv, dtheta, 0.0, &mut coords);
        push_circle(1.0, nsubdiv, dtheta, 1.0, &mut coords);
        push_ring_indices(0, nsubdiv, nsubdiv, &mut indices);

        assert_eq!(indices.len(), 2 * nsubdiv as usize);

        for idx in indices {
            let tri = Triangle::new(
                coords[idx[0] as usize],
                coords[idx[1] as usize],
                coords[idx[2] as usize],
            );
            let center = Point::from((tri.a.coords + tri.b.coords + tri.c.coords) / 3.0);
            let radial = center.coords.xy().push(0.0);
            assert!(tri.scaled_normal().dot(&radial) > 0.0);
        }
    }
}
