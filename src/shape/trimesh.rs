use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex} which does not exist.")]
    IndexOutOfBounds {
        /// The faulty triangle.
        triangle: u32,
        /// The missing vertex index.
        vertex: u32,
    },
}

/// A triangle mesh.
///
/// A `TriMesh` is finalized at construction: the bounding box of each triangle and of the
/// whole mesh are computed once and the mesh is never modified afterwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    triangle_aabbs: Vec<Aabb>,
    local_aabb: Aabb,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    vertex: *vertex,
                });
            }
        }

        let triangle_aabbs: Vec<_> = indices
            .iter()
            .map(|idx| Aabb::from_points(idx.iter().map(|i| &vertices[*i as usize])))
            .collect();
        let local_aabb = triangle_aabbs
            .iter()
            .fold(Aabb::new_invalid(), |acc, aabb| acc.merged(aabb));

        Ok(Self {
            vertices,
            indices,
            triangle_aabbs,
            local_aabb,
        })
    }

    /// Creates a new triangle mesh from a triangle soup.
    ///
    /// Each triangle gets its own three vertices: vertices shared by adjacent
    /// triangles are duplicated, not merged.
    pub fn from_triangle_soup<'a, I>(triangles: I) -> Result<Self, TriMeshBuilderError>
    where
        I: IntoIterator<Item = &'a Triangle>,
    {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for tri in triangles {
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&tri.vertices());
            indices.push([base, base + 1, base + 2]);
        }

        Self::new(vertices, indices)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles forming this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Get the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }

    /// The local-space bounding box of the `i`-th triangle.
    #[inline]
    pub fn triangle_aabb(&self, i: u32) -> &Aabb {
        &self.triangle_aabbs[i as usize]
    }

    /// The indices of the triangles with a bounding box intersecting `aabb`, given in the
    /// local-space of this mesh.
    pub fn triangles_intersecting_aabb<'a>(
        &'a self,
        aabb: &'a Aabb,
    ) -> impl Iterator<Item = u32> + 'a {
        self.triangle_aabbs
            .iter()
            .enumerate()
            .filter(move |(_, tri_aabb)| tri_aabb.intersects(aabb))
            .map(|(i, _)| i as u32)
    }

    /// The local-space bounding box of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The bounding box of this mesh transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb.transform_by(pos)
    }
}
