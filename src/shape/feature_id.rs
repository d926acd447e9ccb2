//! Enum identifying the feature of a shape a contact point lies on.

/// An identifier of a geometric feature (vertex, edge, or face) of a shape.
///
/// For triangle meshes, `Face(i)` is the index of the i-th triangle of the mesh. For
/// cuboids, `Vertex(id)` follows the bit convention of [`Cuboid`](crate::shape::Cuboid):
/// the i-th bit of `id` is set to 1 iff. the i-th component of the vertex is negative.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Default)]
pub enum FeatureId {
    /// Shape-dependent identifier of a vertex.
    Vertex(u32),
    /// Shape-dependent identifier of an edge.
    Edge(u32),
    /// Shape-dependent identifier of a face.
    Face(u32),
    /// Unknown identifier.
    #[default]
    Unknown,
}

impl FeatureId {
    /// Retrieves the value of the identifier if `self` is a vertex.
    pub fn unwrap_vertex(self) -> u32 {
        match self {
            FeatureId::Vertex(id) => id,
            _ => panic!("The feature id does not identify a vertex."),
        }
    }
}
