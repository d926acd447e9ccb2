use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::Ball;
use num::Zero;

/// Contact between balls.
///
/// The contact point is the middle of the two deepest points, expressed in the
/// local-space of the first ball.
#[inline]
pub fn contact_ball_ball(pos12: &Isometry<Real>, b1: &Ball, b2: &Ball, out: &mut ContactBuffer) {
    let r1 = b1.radius;
    let r2 = b2.radius;
    let center2_1 = pos12.translation.vector;
    let distance_squared = center2_1.norm_squared();
    let sum_radius = r1 + r2;

    if distance_squared <= sum_radius * sum_radius {
        let distance = distance_squared.sqrt();
        let normal = if !distance_squared.is_zero() {
            center2_1 / distance
        } else {
            Vector::x()
        };
        let depth = sum_radius - distance;
        let point = Point::from(normal * (r1 - depth * 0.5));

        out.push(ContactPoint::new(point, normal, depth));
    }
}
