use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::{Ball, Cuboid, FeatureId};

/// Contact between a cuboid and a ball.
///
/// The normal points from the cuboid toward the center of the ball. When the center of the
/// ball is inside of the cuboid, the ball is pushed out through the closest face.
pub fn contact_cuboid_ball(
    pos12: &Isometry<Real>,
    cuboid: &Cuboid,
    ball: &Ball,
    out: &mut ContactBuffer,
) {
    let center = Point::from(pos12.translation.vector);
    let he = cuboid.half_extents;
    let clamped = Point::from(center.coords.sup(&-he).inf(&he));
    let delta = center - clamped;
    let distance_squared = delta.norm_squared();

    if distance_squared > 0.0 {
        if distance_squared > ball.radius * ball.radius {
            return;
        }

        let distance = distance_squared.sqrt();
        let normal = delta / distance;
        let depth = ball.radius - distance;
        let point = clamped - normal * (depth * 0.5);
        out.push(ContactPoint::new(point, normal, depth));
    } else {
        // The center is inside: find the closest face.
        let mut best_axis = 0;
        let mut best_gap = Real::MAX;

        for i in 0..DIM {
            let gap = he[i] - center[i].abs();
            if gap < best_gap {
                best_gap = gap;
                best_axis = i;
            }
        }

        let sign = (1.0 as Real).copysign(center[best_axis]);
        let mut normal = Vector::zeros();
        normal[best_axis] = sign;

        let mut on_face = center;
        on_face[best_axis] = he[best_axis] * sign;

        let depth = ball.radius + best_gap;
        let face_id = if sign > 0.0 { best_axis } else { best_axis + DIM };
        let point = on_face - normal * (depth * 0.5);
        out.push(
            ContactPoint::new(point, normal, depth)
                .with_features(FeatureId::Face(face_id as u32), FeatureId::Unknown),
        );
    }
}
