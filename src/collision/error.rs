use crate::scene::ShapeKind;
use crate::shape::TriMeshBuilderError;

/// Errors raised while building collision geometries or running collision detection.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionError {
    /// No collision geometry can be built for this kind of shape.
    #[error("no collision geometry can be built for shapes of kind {0:?}")]
    UnsupportedShapeKind(ShapeKind),
    /// A mesh shape does not contain any triangle.
    #[error("cannot build a collision geometry from a mesh without triangles")]
    EmptyMesh,
    /// A shape has an invalid dimension.
    #[error("invalid shape: {0}")]
    InvalidShape(&'static str),
    /// A shape was released from the geometry cache without a matching claim.
    #[error("released a shape that was not claimed from the geometry cache")]
    UnknownShapeRelease,
    /// A collision group belongs to another collision backend.
    #[error("the collision group belongs to the backend `{found}` instead of `{expected}`")]
    BackendMismatch {
        /// The backend of the collision detector.
        expected: &'static str,
        /// The backend of the collision group.
        found: &'static str,
    },
    /// An argument given to the collision detector is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl From<TriMeshBuilderError> for CollisionError {
    fn from(err: TriMeshBuilderError) -> Self {
        match err {
            TriMeshBuilderError::EmptyIndices => CollisionError::EmptyMesh,
            TriMeshBuilderError::IndexOutOfBounds { .. } => {
                CollisionError::InvalidShape("a mesh triangle references a missing vertex")
            }
        }
    }
}
