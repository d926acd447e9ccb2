use crate::math::{Real, Vector};
use crate::query::gjk::CSOPoint;
use arrayvec::ArrayVec;

/// Relative tolerance under which a simplex is considered flat.
const DEGENERACY_TOLERANCE: Real = 1.0e-12;

/// A simplex of at most four points of a CSO, the newest point last.
///
/// Each call to [`Simplex::reduce`] keeps the smallest sub-simplex whose Voronoi region
/// contains the origin and returns the next search direction.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: ArrayVec<CSOPoint, 4>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets this simplex to the single point `pt`.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.points.clear();
        self.points.push(pt);
    }

    /// Adds a point to this simplex.
    ///
    /// Panics if the simplex already has four points.
    pub fn push(&mut self, pt: CSOPoint) {
        self.points.push(pt);
    }

    /// The points of this simplex, the newest last.
    pub fn points(&self) -> &[CSOPoint] {
        &self.points
    }

    /// The dimension of this simplex.
    pub fn dimension(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Keeps the sub-simplex closest to the origin.
    ///
    /// Returns the direction in which the next support point must be searched, or `None`
    /// if the origin lies inside of (or on) this simplex. In the latter case the simplex
    /// is left untouched.
    pub fn reduce(&mut self) -> Option<Vector<Real>> {
        match self.points.len() {
            0 => Some(Vector::x()),
            1 => Some(-self.points[0].point.coords),
            2 => self.reduce_segment(),
            3 => self.reduce_triangle(),
            _ => self.reduce_tetrahedron(),
        }
    }

    fn set(&mut self, pts: &[CSOPoint]) {
        self.points.clear();
        self.points.extend(pts.iter().copied());
    }

    fn reduce_segment(&mut self) -> Option<Vector<Real>> {
        let (b, a) = (self.points[0], self.points[1]);
        let ab = b - a;
        let ao = -a.point.coords;

        if ab.dot(&ao) > 0.0 {
            let dir = ab.cross(&ao).cross(&ab);

            if is_flat(&dir, ab.norm_squared() * ab.norm_squared() * ao.norm_squared()) {
                // The origin lies on the segment.
                return None;
            }

            Some(dir)
        } else {
            self.set(&[a]);
            Some(ao)
        }
    }

    fn reduce_triangle(&mut self) -> Option<Vector<Real>> {
        let (c, b, a) = (self.points[0], self.points[1], self.points[2]);
        let ab = b - a;
        let ac = c - a;
        let ao = -a.point.coords;
        let abc = ab.cross(&ac);

        if is_flat(&abc, ab.norm_squared() * ac.norm_squared()) {
            self.set(&[b, a]);
            return self.reduce_segment();
        }

        if abc.cross(&ac).dot(&ao) > 0.0 {
            if ac.dot(&ao) > 0.0 {
                self.set(&[c, a]);
            } else {
                self.set(&[b, a]);
            }

            return self.reduce_segment();
        }

        if ab.cross(&abc).dot(&ao) > 0.0 {
            self.set(&[b, a]);
            return self.reduce_segment();
        }

        let side = abc.dot(&ao);

        if side * side <= DEGENERACY_TOLERANCE * abc.norm_squared() * ao.norm_squared() {
            // The origin lies on the triangle.
            return None;
        }

        Some(if side > 0.0 { abc } else { -abc })
    }

    fn reduce_tetrahedron(&mut self) -> Option<Vector<Real>> {
        let (d, c, b, a) = (
            self.points[0],
            self.points[1],
            self.points[2],
            self.points[3],
        );
        let ab = b - a;
        let ac = c - a;
        let ad = d - a;
        let volume = ab.cross(&ac).dot(&ad);

        if volume * volume
            <= DEGENERACY_TOLERANCE * ab.norm_squared() * ac.norm_squared() * ad.norm_squared()
        {
            self.set(&[c, b, a]);
            return self.reduce_triangle();
        }

        let ao = -a.point.coords;

        for (x, y, opposite) in [(b, c, d), (c, d, b), (d, b, c)] {
            let mut normal = (x - a).cross(&(y - a));

            if normal.dot(&(opposite - a)) > 0.0 {
                normal = -normal;
            }

            if normal.dot(&ao) > 0.0 {
                self.set(&[y, x, a]);
                return self.reduce_triangle();
            }
        }

        None
    }
}

fn is_flat(v: &Vector<Real>, scale: Real) -> bool {
    v.norm_squared() <= DEGENERACY_TOLERANCE * scale
}
