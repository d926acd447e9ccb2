//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{FeatureId, SupportMap};

/// Shape of a box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

// NOTE: format of the cuboid feature id:
//
// FeatureId::Vertex(id): the i-th bit of `id` is set to 1 iff. the i-th component of the vertex is negative.
// FeatureId::Face(id): if `id` lies in [0, 2] it indicates the axis (x, y, z) corresponding to the face normal.
//                      If `id` is greater than 2, then the negative axis (-x, -y, -z) is given by `id - 3`.
impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The vertex identified by `id`.
    pub fn vertex(&self, id: FeatureId) -> Point<Real> {
        let vid = id.unwrap_vertex();
        let mut res = self.half_extents;

        for i in 0..DIM {
            if vid & (1 << i) != 0 {
                res[i] = -res[i]
            }
        }

        Point::from(res)
    }

    /// The eight vertices of this cuboid, with their feature identifiers.
    pub fn vertices(&self) -> [(Point<Real>, FeatureId); 8] {
        let mut result = [(Point::origin(), FeatureId::Unknown); 8];

        for (vid, out) in result.iter_mut().enumerate() {
            let id = FeatureId::Vertex(vid as u32);
            *out = (self.vertex(id), id);
        }

        result
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::new(
            self.half_extents.x.copysign(dir.x),
            self.half_extents.y.copysign(dir.y),
            self.half_extents.z.copysign(dir.z),
        )
    }
}
