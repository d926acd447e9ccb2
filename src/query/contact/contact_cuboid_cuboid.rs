use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::{Cuboid, FeatureId, SupportMap};
use arrayvec::ArrayVec;

/// Tolerance used to decide if the vertex of a cuboid lies inside of the other cuboid.
const VERTEX_INSIDE_TOLERANCE: Real = 1.0e-7;

/// Computes the separation of two cuboids along `axis1` expressed in the local-space of
/// the first cuboid.
///
/// Returns the separation and the axis, oriented from the first cuboid toward the second.
pub fn cuboid_cuboid_compute_separation_wrt_local_line(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
    axis1: &Vector<Real>,
) -> (Real, Vector<Real>) {
    let signum = (1.0 as Real).copysign(pos12.translation.vector.dot(axis1));
    let axis1 = axis1 * signum;
    let axis2 = pos12.inverse_transform_vector(&-axis1);
    let local_pt1 = cuboid1.local_support_point(&axis1);
    let local_pt2 = cuboid2.local_support_point(&axis2);
    let pt2 = pos12 * local_pt2;
    let separation = (pt2 - local_pt1).dot(&axis1);
    (separation, axis1)
}

/// Finds the best separating axis among the cross products of the edge directions of both
/// cuboids.
pub fn cuboid_cuboid_find_local_separating_edge_twoway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    let mut axes = ArrayVec::<Vector<Real>, 9>::new();
    for i in 0..DIM {
        let edge2 = pos12 * Vector::ith(i, 1.0);
        for j in 0..DIM {
            let axis1 = Vector::<Real>::ith(j, 1.0).cross(&edge2);
            let norm1 = axis1.norm();

            // Parallel edges do not define an axis.
            if norm1 > DEFAULT_EPSILON {
                axes.push(axis1 / norm1);
            }
        }
    }

    for axis1 in &axes {
        let (separation, axis1) =
            cuboid_cuboid_compute_separation_wrt_local_line(cuboid1, cuboid2, pos12, axis1);

        if separation > best_separation {
            best_separation = separation;
            best_dir = axis1;
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating axis among the face normals of the first cuboid.
pub fn cuboid_cuboid_find_local_separating_normal_oneway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..DIM {
        let sign = (1.0 as Real).copysign(pos12.translation.vector[i]);
        let axis1 = Vector::ith(i, sign);
        let axis2 = pos12.inverse_transform_vector(&-axis1);
        let local_pt2 = cuboid2.local_support_point(&axis2);
        let pt2 = pos12 * local_pt2;
        let separation = pt2[i] * sign - cuboid1.half_extents[i];

        if separation > best_separation {
            best_separation = separation;
            best_dir = axis1;
        }
    }

    (best_separation, best_dir)
}

fn contains_local_point(cuboid: &Cuboid, pt: &Point<Real>) -> bool {
    (0..DIM).all(|i| pt[i].abs() <= cuboid.half_extents[i] + VERTEX_INSIDE_TOLERANCE)
}

/// Contacts between two cuboids, based on the separating axis theorem.
///
/// The axis of minimum penetration gives the contact normal. One contact is reported for each
/// vertex of a cuboid lying inside of the other one. If no vertex is inside (edge-edge
/// configurations), a single contact is reported between the deepest points.
pub fn contact_cuboid_cuboid(
    pos12: &Isometry<Real>,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    out: &mut ContactBuffer,
) {
    let pos21 = pos12.inverse();

    let (sep1, normal1) =
        cuboid_cuboid_find_local_separating_normal_oneway(cuboid1, cuboid2, pos12);
    if sep1 > 0.0 {
        return;
    }

    let (sep2, normal2) =
        cuboid_cuboid_find_local_separating_normal_oneway(cuboid2, cuboid1, &pos21);
    if sep2 > 0.0 {
        return;
    }

    let (sep3, normal3) = cuboid_cuboid_find_local_separating_edge_twoway(cuboid1, cuboid2, pos12);
    if sep3 > 0.0 {
        return;
    }

    // Select the axis of minimum penetration. Face normals are preferred on ties.
    let mut best_sep = sep1;
    let mut normal = normal1;

    if sep2 > best_sep {
        best_sep = sep2;
        normal = pos12 * -normal2;
    }

    if sep3 > best_sep + DEFAULT_EPSILON {
        best_sep = sep3;
        normal = normal3;
    }

    let depth = -best_sep;
    let normal2 = pos21 * -normal;
    let top1 = cuboid1.local_support_point(&normal).coords.dot(&normal);
    let bottom2 = (pos12 * cuboid2.local_support_point(&normal2)).coords.dot(&normal);
    let len_before = out.len();

    for (vertex2, fid) in cuboid2.vertices() {
        let vertex = pos12 * vertex2;
        if contains_local_point(cuboid1, &vertex) {
            let vertex_depth = (top1 - vertex.coords.dot(&normal)).clamp(0.0, depth);
            out.push(
                ContactPoint::new(vertex + normal * (vertex_depth * 0.5), normal, vertex_depth)
                    .with_features(FeatureId::Unknown, fid),
            );
        }
    }

    for (vertex, fid) in cuboid1.vertices() {
        if contains_local_point(cuboid2, &(pos21 * vertex)) {
            let vertex_depth = (vertex.coords.dot(&normal) - bottom2).clamp(0.0, depth);
            out.push(
                ContactPoint::new(vertex - normal * (vertex_depth * 0.5), normal, vertex_depth)
                    .with_features(fid, FeatureId::Unknown),
            );
        }
    }

    if out.len() == len_before {
        let pt1 = cuboid1.local_support_point(&normal);
        let pt2 = pos12 * cuboid2.local_support_point(&normal2);
        out.push(ContactPoint::new(na::center(&pt1, &pt2), normal, depth));
    }
}
