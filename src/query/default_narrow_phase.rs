use crate::math::{Isometry, Real};
use crate::query::{contact, ContactBuffer, ContactRequest, NarrowPhase, Unsupported};
use crate::shape::CollisionGeometry;

/// The narrow-phase shipped with this crate.
///
/// It handles every pair of geometries, in both orders, except halfspace-halfspace:
///
/// * ball-ball, cuboid-ball and cuboid-cuboid have dedicated routines,
/// * halfspace-{cuboid, triangle mesh} have dedicated routines,
/// * halfspace-{ball, ellipsoid, cylinder} use the support map of the other shape,
/// * triangle mesh-ball has a dedicated routine,
/// * triangle mesh-{cuboid, ellipsoid, cylinder} test each triangle against the other shape,
/// * triangle mesh-triangle mesh test each pair of triangles with overlapping AABBs,
/// * every other pair of convex shapes goes through GJK and EPA.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNarrowPhase;

impl DefaultNarrowPhase {
    /// Computes the contacts between `g1` and `g2`, in the local-space of `g1`.
    fn local_contacts(
        &self,
        pos12: &Isometry<Real>,
        g1: &CollisionGeometry,
        g2: &CollisionGeometry,
        out: &mut ContactBuffer,
    ) -> Result<(), Unsupported> {
        use CollisionGeometry as G;

        match (g1, g2) {
            (G::Ball(b1), G::Ball(b2)) => contact::contact_ball_ball(pos12, b1, b2, out),
            (G::HalfSpace(_), G::HalfSpace(_)) => return Err(Unsupported),
            (G::HalfSpace(h1), G::Cuboid(c2)) => {
                contact::contact_halfspace_cuboid(pos12, h1, c2, out)
            }
            (G::HalfSpace(h1), G::TriMesh(m2)) => {
                contact::contact_halfspace_trimesh(pos12, h1, m2, out)
            }
            (G::HalfSpace(h1), _) => {
                let s2 = g2.as_support_map().ok_or(Unsupported)?;
                contact::contact_halfspace_support_map(pos12, h1, s2, out)
            }
            (G::Cuboid(c1), G::Ball(b2)) => contact::contact_cuboid_ball(pos12, c1, b2, out),
            (G::Cuboid(c1), G::Cuboid(c2)) => {
                contact::contact_cuboid_cuboid(pos12, c1, c2, out)
            }
            (G::TriMesh(m1), G::Ball(b2)) => contact::contact_trimesh_ball(pos12, m1, b2, out),
            (G::TriMesh(m1), G::TriMesh(m2)) => {
                contact::contact_trimesh_trimesh(pos12, m1, m2, out)
            }
            (G::TriMesh(m1), _) => {
                let s2 = g2.as_support_map().ok_or(Unsupported)?;
                contact::contact_trimesh_support_map(pos12, m1, s2, out)
            }
            (_, G::HalfSpace(_)) | (_, G::TriMesh(_)) | (G::Ball(_), G::Cuboid(_)) => {
                let pos21 = pos12.inverse();
                let start = out.len();
                self.local_contacts(&pos21, g2, g1, out)?;

                for c in &mut out[start..] {
                    *c = c.transformed(pos12).flipped();
                }
            }
            _ => {
                let s1 = g1.as_support_map().ok_or(Unsupported)?;
                let s2 = g2.as_support_map().ok_or(Unsupported)?;
                contact::contact_support_map_support_map(pos12, s1, s2, out)
            }
        }

        Ok(())
    }
}

impl NarrowPhase for DefaultNarrowPhase {
    fn collide(
        &self,
        g1: &CollisionGeometry,
        pos1: &Isometry<Real>,
        g2: &CollisionGeometry,
        pos2: &Isometry<Real>,
        request: &ContactRequest,
        out: &mut ContactBuffer,
    ) -> Result<bool, Unsupported> {
        let pos12 = pos1.inv_mul(pos2);
        let mut contacts = ContactBuffer::new();
        self.local_contacts(&pos12, g1, g2, &mut contacts)?;

        let colliding = !contacts.is_empty();

        if request.enable_contact {
            out.extend(
                contacts
                    .into_iter()
                    .take(request.max_contacts)
                    .map(|c| c.transformed(pos1)),
            );
        }

        Ok(colliding)
    }
}
