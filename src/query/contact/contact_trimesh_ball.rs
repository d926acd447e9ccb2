use crate::bounding_volume::details::ball_aabb;
use crate::math::{Isometry, Point, Real};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::{Ball, FeatureId, TriMesh};

/// Contacts between a triangle mesh and a ball.
///
/// Reports one contact per triangle closer to the center of the ball than its radius,
/// with `FeatureId::Face(i)` identifying the triangle. The normal points from the
/// triangle toward the center of the ball.
pub fn contact_trimesh_ball(
    pos12: &Isometry<Real>,
    mesh: &TriMesh,
    ball: &Ball,
    out: &mut ContactBuffer,
) {
    let center = Point::from(pos12.translation.vector);
    let query = ball_aabb(&center, ball.radius);

    for i in mesh.triangles_intersecting_aabb(&query) {
        let tri = mesh.triangle(i);
        let (proj, _) = tri.project_local_point(&center);
        let delta = center - proj;
        let distance = delta.norm();

        if distance > ball.radius {
            continue;
        }

        let normal = if distance > Real::EPSILON {
            delta / distance
        } else if let Some(n) = tri.normal() {
            n.into_inner()
        } else {
            // Degenerate triangle containing the center.
            continue;
        };

        let depth = ball.radius - distance;
        let point = proj - normal * (depth * 0.5);
        out.push(
            ContactPoint::new(point, normal, depth)
                .with_features(FeatureId::Face(i), FeatureId::Unknown),
        );
    }
}
