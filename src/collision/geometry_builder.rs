//! Construction of collision geometries from shape descriptions.

use crate::collision::{BackendCapabilities, CollisionError};
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::scene::ShapeDescription;
use crate::shape::{
    Ball, CollisionGeometry, Cuboid, Cylinder, Ellipsoid, HalfSpace, TriMesh, Triangle,
};
use std::sync::Arc;

/// The side length of the square slab approximating a plane without native half-space support.
pub const PLANE_SLAB_EXTENT: Real = 1000.0;
/// The thickness of the slab approximating a plane without native half-space support.
pub const PLANE_SLAB_THICKNESS: Real = 0.01;

/// The resolution of the triangle meshes approximating curved shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TessellationConfig {
    /// Number of subdivisions around the vertical axis of an ellipsoid. At least 3.
    pub ellipsoid_longitudes: u32,
    /// Number of latitude bands of an ellipsoid, from pole to pole. At least 2.
    pub ellipsoid_bands: u32,
    /// Number of subdivisions around the axis of a cylinder. At least 3.
    pub cylinder_slices: u32,
    /// Number of layers along the axis of a cylinder. At least 1.
    pub cylinder_stacks: u32,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            ellipsoid_longitudes: 16,
            ellipsoid_bands: 8,
            cylinder_slices: 16,
            cylinder_stacks: 16,
        }
    }
}

impl TessellationConfig {
    fn validate(&self) -> Result<(), CollisionError> {
        if self.ellipsoid_longitudes < 3 || self.ellipsoid_bands < 2 {
            return Err(CollisionError::InvalidShape(
                "ellipsoid tessellation resolution too low",
            ));
        }
        if self.cylinder_slices < 3 || self.cylinder_stacks < 1 {
            return Err(CollisionError::InvalidShape(
                "cylinder tessellation resolution too low",
            ));
        }
        Ok(())
    }
}

/// Builds the collision geometry of shape descriptions, for one collision backend.
///
/// Shapes the backend supports natively are mapped to the matching primitive. The other
/// ones are approximated by a triangle mesh, using the resolution set by the
/// [`TessellationConfig`]. Building is deterministic: equal descriptions always yield equal
/// geometries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometryBuilder {
    capabilities: BackendCapabilities,
    tessellation: TessellationConfig,
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        Self::new(BackendCapabilities::all())
    }
}

impl GeometryBuilder {
    /// A builder targeting a backend with the given capabilities.
    pub fn new(capabilities: BackendCapabilities) -> Self {
        Self {
            capabilities,
            tessellation: TessellationConfig::default(),
        }
    }

    /// Sets the resolution of the approximating meshes.
    pub fn with_tessellation(mut self, tessellation: TessellationConfig) -> Self {
        self.tessellation = tessellation;
        self
    }

    /// The capabilities of the target backend.
    pub fn capabilities(&self) -> BackendCapabilities {
        self.capabilities
    }

    /// The resolution of the approximating meshes.
    pub fn tessellation(&self) -> &TessellationConfig {
        &self.tessellation
    }

    /// Builds the collision geometry of `shape`, or `None` if it cannot participate in
    /// collision detection.
    ///
    /// The reason of a failure is logged as a warning.
    pub fn build(&self, shape: &ShapeDescription) -> Option<Arc<CollisionGeometry>> {
        match self.try_build(shape) {
            Ok(geometry) => Some(Arc::new(geometry)),
            Err(err) => {
                log::warn!(
                    "{:?} shape excluded from collision detection: {}",
                    shape.kind(),
                    err
                );
                None
            }
        }
    }

    /// Builds the collision geometry of `shape`.
    pub fn try_build(&self, shape: &ShapeDescription) -> Result<CollisionGeometry, CollisionError> {
        match shape {
            ShapeDescription::Box { size } => {
                let size = positive_vector(size, "box sizes must be positive")?;
                let cuboid = Cuboid::new(size * 0.5);

                if self.supports(BackendCapabilities::NATIVE_BOX) {
                    Ok(cuboid.into())
                } else {
                    let (vtx, idx) = cuboid.to_trimesh();
                    Ok(TriMesh::new(vtx, idx)?.into())
                }
            }
            ShapeDescription::Sphere { radius } => {
                let radius = positive(*radius, "sphere radius must be positive")?;
                Ok(Ball::new(radius).into())
            }
            ShapeDescription::Ellipsoid { radii } => {
                let radii = positive_vector(radii, "ellipsoid radii must be positive")?;

                if relative_eq!(radii.x, radii.y) && relative_eq!(radii.y, radii.z) {
                    return Ok(Ball::new(radii.x).into());
                }

                let ellipsoid = Ellipsoid::new(radii);

                if self.supports(BackendCapabilities::NATIVE_ELLIPSOID) {
                    Ok(ellipsoid.into())
                } else {
                    self.tessellation.validate()?;
                    let (vtx, idx) = ellipsoid.to_trimesh(
                        self.tessellation.ellipsoid_longitudes,
                        self.tessellation.ellipsoid_bands,
                    );
                    Ok(TriMesh::new(vtx, idx)?.into())
                }
            }
            ShapeDescription::Cylinder { radius, height } => {
                let radius = positive(*radius, "cylinder radius must be positive")?;
                let height = positive(*height, "cylinder height must be positive")?;
                let cylinder = Cylinder::new(height * 0.5, radius);

                if self.supports(BackendCapabilities::NATIVE_CYLINDER) {
                    Ok(cylinder.into())
                } else {
                    self.tessellation.validate()?;
                    let (vtx, idx) = cylinder.to_trimesh(
                        self.tessellation.cylinder_slices,
                        self.tessellation.cylinder_stacks,
                    );
                    Ok(TriMesh::new(vtx, idx)?.into())
                }
            }
            ShapeDescription::Plane { normal, offset } => {
                if !offset.is_finite() || normal.iter().any(|e| !e.is_finite()) {
                    return Err(CollisionError::InvalidShape("plane parameters must be finite"));
                }
                let normal = UnitVector::try_new(*normal, DEFAULT_EPSILON)
                    .ok_or(CollisionError::InvalidShape("plane normal must not be zero"))?;
                let halfspace = HalfSpace::new(normal, *offset);

                if self.supports(BackendCapabilities::NATIVE_HALF_SPACE) {
                    Ok(halfspace.into())
                } else {
                    log::warn!(
                        "plane approximated by a {}x{}x{} slab: contacts far from the origin are missed",
                        PLANE_SLAB_EXTENT,
                        PLANE_SLAB_EXTENT,
                        PLANE_SLAB_THICKNESS
                    );
                    let (vtx, idx) =
                        halfspace.to_slab_trimesh(PLANE_SLAB_EXTENT, PLANE_SLAB_THICKNESS);
                    Ok(TriMesh::new(vtx, idx)?.into())
                }
            }
            ShapeDescription::Mesh { triangles, scale } => {
                if scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
                    return Err(CollisionError::InvalidShape(
                        "mesh scale must be finite and non-zero",
                    ));
                }
                let scaled: Vec<_> = triangles.iter().map(|tri| tri.scaled(scale)).collect();
                mesh_from_soup(&scaled)
            }
            ShapeDescription::SoftMesh { triangles } => mesh_from_soup(triangles),
            ShapeDescription::LineSegment { .. } => {
                Err(CollisionError::UnsupportedShapeKind(shape.kind()))
            }
        }
    }

    fn supports(&self, capability: BackendCapabilities) -> bool {
        self.capabilities.contains(capability)
    }
}

fn mesh_from_soup(triangles: &[Triangle]) -> Result<CollisionGeometry, CollisionError> {
    if triangles.is_empty() {
        return Err(CollisionError::EmptyMesh);
    }

    let finite = |pt: &Point<Real>| pt.iter().all(|e| e.is_finite());
    if !triangles
        .iter()
        .all(|tri| finite(&tri.a) && finite(&tri.b) && finite(&tri.c))
    {
        return Err(CollisionError::InvalidShape("mesh vertices must be finite"));
    }

    Ok(TriMesh::from_triangle_soup(triangles)?.into())
}

fn positive(value: Real, msg: &'static str) -> Result<Real, CollisionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CollisionError::InvalidShape(msg))
    }
}

fn positive_vector(
    value: &Vector<Real>,
    msg: &'static str,
) -> Result<Vector<Real>, CollisionError> {
    for e in value.iter() {
        let _ = positive(*e, msg)?;
    }
    Ok(*value)
}
