//! Penetration depth of two intersecting support-mapped shapes, using the Expanding Polytope
//! Algorithm.

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::gjk::{self, CSOPoint, Simplex};
use crate::shape::SupportMap;
use crate::utils::WBasis;
use core::cmp::Ordering;
use na::Unit;
use std::collections::BinaryHeap;

/// The maximum number of polytope expansions.
const MAX_ITERATIONS: usize = 100;

#[derive(Copy, Clone, PartialEq)]
struct FaceId {
    id: usize,
    neg_dist: Real,
}

impl Eq for FaceId {}

impl PartialOrd for FaceId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FaceId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.neg_dist < other.neg_dist {
            Ordering::Less
        } else if self.neg_dist > other.neg_dist {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[derive(Clone, Debug)]
struct Face {
    pts: [usize; 3],
    normal: Unit<Vector<Real>>,
    dist: Real,
    deleted: bool,
}

impl Face {
    /// Builds a face with its normal pointing away from `interior`.
    fn new(vertices: &[CSOPoint], pts: [usize; 3], interior: &Point<Real>) -> Option<Self> {
        let a = vertices[pts[0]].point;
        let b = vertices[pts[1]].point;
        let c = vertices[pts[2]].point;
        let mut normal = Unit::try_new((b - a).cross(&(c - a)), gjk::eps_tol())?;
        let mut pts = pts;

        if normal.dot(&(a - interior)) < 0.0 {
            normal = -normal;
            pts.swap(1, 2);
        }

        Some(Face {
            pts,
            normal,
            dist: normal.dot(&a.coords),
            deleted: false,
        })
    }

    fn can_be_seen_by(&self, vertices: &[CSOPoint], pt: &Point<Real>) -> bool {
        let a = vertices[self.pts[0]].point;
        self.normal.dot(&(pt - a)) > gjk::eps_tol()
    }

    /// The points of each shape whose difference is the projection of the origin on this face.
    fn closest_points(&self, vertices: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
        let [a, b, c] = self.pts.map(|i| vertices[i]);
        let proj = Point::from(*self.normal * self.dist);
        let bcoords = barycentric_coordinates(&a.point, &b.point, &c.point, &proj);

        let p1 = a.orig1.coords * bcoords[0]
            + b.orig1.coords * bcoords[1]
            + c.orig1.coords * bcoords[2];
        let p2 = a.orig2.coords * bcoords[0]
            + b.orig2.coords * bcoords[1]
            + c.orig2.coords * bcoords[2];

        (Point::from(p1), Point::from(p2))
    }
}

fn barycentric_coordinates(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    p: &Point<Real>,
) -> [Real; 3] {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;
    let d00 = ab.dot(&ab);
    let d01 = ab.dot(&ac);
    let d11 = ac.dot(&ac);
    let d20 = ap.dot(&ab);
    let d21 = ap.dot(&ac);
    let denom = d00 * d11 - d01 * d01;

    if denom.abs() <= gjk::eps_tol() {
        return [1.0 / 3.0; 3];
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    [1.0 - v - w, v, w]
}

/// The Expanding Polytope Algorithm in 3D.
///
/// Keeps its buffers between calls so that they can be reused.
#[derive(Default)]
pub struct EPA {
    vertices: Vec<CSOPoint>,
    faces: Vec<Face>,
    heap: BinaryHeap<FaceId>,
}

impl EPA {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.heap.clear();
    }

    /// Computes the penetration of two intersecting shapes.
    ///
    /// `simplex` must be the one left by [`gjk::intersection`] when it returned `true`.
    /// Returns the points of deepest penetration on `g1` and `g2`, and the direction along
    /// which `g2` must be moved to resolve the penetration, all expressed in the local-space
    /// of `g1`. Returns `None` if the algorithm fails.
    pub fn closest_points<G1, G2>(
        &mut self,
        pos12: &Isometry<Real>,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
    ) -> Option<(Point<Real>, Point<Real>, Unit<Vector<Real>>)>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.reset();
        self.vertices.extend_from_slice(simplex.points());

        if !self.inflate_to_tetrahedron(pos12, g1, g2) {
            log::debug!("EPA: failed to build the initial polytope.");
            return None;
        }

        let interior = Point::from(
            self.vertices
                .iter()
                .fold(Vector::zeros(), |acc, pt| acc + pt.point.coords)
                / 4.0,
        );

        for pts in [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]] {
            let face = Face::new(&self.vertices, pts, &interior)?;
            self.push_face(face);
        }

        let mut best = None;

        for _ in 0..MAX_ITERATIONS {
            let Some(face_id) = self.heap.pop() else {
                break;
            };

            let face = &self.faces[face_id.id];

            if face.deleted {
                continue;
            }

            best = Some(face_id.id);
            let dir = face.normal.into_inner();
            let support = CSOPoint::from_shapes(pos12, g1, g2, &dir);

            if support.point.coords.dot(&dir) - face.dist <= gjk::eps_tol().sqrt() {
                break;
            }

            let new_id = self.vertices.len();
            self.vertices.push(support);

            // Edges of the visible faces seen only once form the horizon.
            let mut horizon: Vec<[usize; 2]> = Vec::new();

            for face in &mut self.faces {
                if face.deleted || !face.can_be_seen_by(&self.vertices, &support.point) {
                    continue;
                }

                face.deleted = true;

                for k in 0..3 {
                    let edge = [face.pts[k], face.pts[(k + 1) % 3]];

                    if let Some(twin) = horizon
                        .iter()
                        .position(|e| e[0] == edge[1] && e[1] == edge[0])
                    {
                        let _ = horizon.swap_remove(twin);
                    } else {
                        horizon.push(edge);
                    }
                }
            }

            for [i, j] in horizon {
                if let Some(face) = Face::new(&self.vertices, [i, j, new_id], &interior) {
                    self.push_face(face);
                }
            }
        }

        let face = &self.faces[best?];
        let (p1, p2) = face.closest_points(&self.vertices);
        Some((p1, p2, face.normal))
    }

    fn push_face(&mut self, face: Face) {
        self.heap.push(FaceId {
            id: self.faces.len(),
            neg_dist: -face.dist,
        });
        self.faces.push(face);
    }

    /// Completes the GJK simplex into a non-degenerate tetrahedron.
    fn inflate_to_tetrahedron<G1, G2>(&mut self, pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> bool
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        if self.vertices.len() == 1 {
            let origin = self.vertices[0].point;
            let found = [Vector::x(), Vector::y(), Vector::z()]
                .into_iter()
                .flat_map(|dir| [dir, -dir])
                .map(|dir| CSOPoint::from_shapes(pos12, g1, g2, &dir))
                .find(|pt| (pt.point - origin).norm_squared() > gjk::eps_tol());

            match found {
                Some(pt) => self.vertices.push(pt),
                None => return false,
            }
        }

        if self.vertices.len() == 2 {
            let a = self.vertices[0].point;
            let Some(axis) = Unit::try_new(self.vertices[1].point - a, gjk::eps_tol()) else {
                return false;
            };
            let [b1, b2] = axis.into_inner().orthonormal_basis();
            let found = [b1, -b1, b2, -b2]
                .into_iter()
                .map(|dir| CSOPoint::from_shapes(pos12, g1, g2, &dir))
                .find(|pt| axis.cross(&(pt.point - a)).norm_squared() > gjk::eps_tol());

            match found {
                Some(pt) => self.vertices.push(pt),
                None => return false,
            }
        }

        if self.vertices.len() == 3 {
            let a = self.vertices[0].point;
            let b = self.vertices[1].point;
            let c = self.vertices[2].point;
            let Some(normal) = Unit::try_new((b - a).cross(&(c - a)), gjk::eps_tol()) else {
                return false;
            };
            let found = [*normal, -*normal]
                .into_iter()
                .map(|dir| CSOPoint::from_shapes(pos12, g1, g2, &dir))
                .find(|pt| normal.dot(&(pt.point - a)).abs() > gjk::eps_tol().sqrt());

            match found {
                Some(pt) => self.vertices.push(pt),
                None => return false,
            }
        }

        self.vertices.len() == 4
    }
}
