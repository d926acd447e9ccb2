//! Scene-graph shape descriptions.

use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Enum representing the kind of a shape description.
pub enum ShapeKind {
    /// A box.
    Box = 0,
    /// A sphere.
    Sphere,
    /// An ellipsoid.
    Ellipsoid,
    /// A cylinder.
    Cylinder,
    /// An infinite plane.
    Plane,
    /// A rigid triangle mesh.
    Mesh,
    /// A deformable triangle mesh.
    SoftMesh,
    /// A set of line segments.
    LineSegment,
}

/// The description of a shape, as carried by a scene-graph frame.
///
/// All the dimensions are expressed in the local frame of the shape. Descriptions
/// are never modified once built: they are shared through a
/// [`SharedShape`](crate::scene::SharedShape).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeDescription {
    /// A box centered at the origin.
    Box {
        /// The full extent of the box along each axis.
        size: Vector<Real>,
    },
    /// A sphere centered at the origin.
    Sphere {
        /// The radius of the sphere.
        radius: Real,
    },
    /// An axis-aligned ellipsoid centered at the origin.
    Ellipsoid {
        /// The semi-axes lengths along `x`, `y` and `z`.
        radii: Vector<Real>,
    },
    /// A cylinder centered at the origin, with its axis along `z`.
    Cylinder {
        /// The radius of the cylinder.
        radius: Real,
        /// The full height of the cylinder.
        height: Real,
    },
    /// The plane of points `x` such that `normal · x = offset`.
    ///
    /// The solid side is the one opposite to `normal`.
    Plane {
        /// The plane normal. Does not need to be normalized.
        normal: Vector<Real>,
        /// The signed distance from the origin to the plane, along `normal`.
        offset: Real,
    },
    /// A rigid triangle mesh.
    Mesh {
        /// The triangles of the mesh.
        triangles: Vec<Triangle>,
        /// The scaling factor applied to each vertex, component-wise.
        scale: Vector<Real>,
    },
    /// A deformable triangle mesh.
    SoftMesh {
        /// The triangles of the mesh, in their current configuration.
        triangles: Vec<Triangle>,
    },
    /// A set of line segments with a thickness, typically used for visualization.
    LineSegment {
        /// The rendering thickness of the lines.
        thickness: Real,
        /// The segment endpoints.
        vertices: Vec<Point<Real>>,
        /// Pairs of indices into `vertices`.
        connections: Vec<[u32; 2]>,
    },
}

impl ShapeDescription {
    /// The kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDescription::Box { .. } => ShapeKind::Box,
            ShapeDescription::Sphere { .. } => ShapeKind::Sphere,
            ShapeDescription::Ellipsoid { .. } => ShapeKind::Ellipsoid,
            ShapeDescription::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeDescription::Plane { .. } => ShapeKind::Plane,
            ShapeDescription::Mesh { .. } => ShapeKind::Mesh,
            ShapeDescription::SoftMesh { .. } => ShapeKind::SoftMesh,
            ShapeDescription::LineSegment { .. } => ShapeKind::LineSegment,
        }
    }
}
