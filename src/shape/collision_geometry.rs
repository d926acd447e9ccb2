//! The closed set of geometries the collision backend operates on.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::{Ball, Cuboid, Cylinder, Ellipsoid, HalfSpace, SupportMap, TriMesh};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Enum representing the type of a collision geometry.
pub enum GeometryType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// An axis-aligned ellipsoid.
    Ellipsoid,
    /// A cylinder aligned with the local `z` axis.
    Cylinder,
    /// A shape representing a full half-space.
    HalfSpace,
    /// A triangle mesh shape.
    TriMesh,
}

/// A geometry that can be handed to the narrow-phase.
///
/// A `CollisionGeometry` is immutable once built. The geometry cache shares it,
/// behind an `Arc`, between every collision object created from the same shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CollisionGeometry {
    /// A ball.
    Ball(Ball),
    /// A box, given by its half-extents.
    Cuboid(Cuboid),
    /// An ellipsoid with three distinct semi-axes.
    Ellipsoid(Ellipsoid),
    /// A cylinder.
    Cylinder(Cylinder),
    /// An infinite half-space.
    HalfSpace(HalfSpace),
    /// A finalized triangle mesh.
    TriMesh(TriMesh),
}

impl CollisionGeometry {
    /// The type tag of this geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            CollisionGeometry::Ball(_) => GeometryType::Ball,
            CollisionGeometry::Cuboid(_) => GeometryType::Cuboid,
            CollisionGeometry::Ellipsoid(_) => GeometryType::Ellipsoid,
            CollisionGeometry::Cylinder(_) => GeometryType::Cylinder,
            CollisionGeometry::HalfSpace(_) => GeometryType::HalfSpace,
            CollisionGeometry::TriMesh(_) => GeometryType::TriMesh,
        }
    }

    /// Computes the local-space AABB of this geometry.
    pub fn local_aabb(&self) -> Aabb {
        match self {
            CollisionGeometry::Ball(s) => s.local_aabb(),
            CollisionGeometry::Cuboid(s) => s.local_aabb(),
            CollisionGeometry::Ellipsoid(s) => s.local_aabb(),
            CollisionGeometry::Cylinder(s) => s.local_aabb(),
            CollisionGeometry::HalfSpace(s) => s.local_aabb(),
            CollisionGeometry::TriMesh(s) => *s.local_aabb(),
        }
    }

    /// Computes the world-space AABB of this geometry, transformed by `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        match self {
            CollisionGeometry::Ball(s) => s.aabb(pos),
            CollisionGeometry::Cuboid(s) => s.aabb(pos),
            CollisionGeometry::Ellipsoid(s) => s.aabb(pos),
            CollisionGeometry::Cylinder(s) => s.aabb(pos),
            CollisionGeometry::HalfSpace(s) => s.aabb(pos),
            CollisionGeometry::TriMesh(s) => s.aabb(pos),
        }
    }

    /// Converts this geometry into its support mapping, if it has one.
    pub fn as_support_map(&self) -> Option<&dyn SupportMap> {
        match self {
            CollisionGeometry::Ball(s) => Some(s as &dyn SupportMap),
            CollisionGeometry::Cuboid(s) => Some(s as &dyn SupportMap),
            CollisionGeometry::Ellipsoid(s) => Some(s as &dyn SupportMap),
            CollisionGeometry::Cylinder(s) => Some(s as &dyn SupportMap),
            CollisionGeometry::HalfSpace(_) | CollisionGeometry::TriMesh(_) => None,
        }
    }

    /// Converts this geometry to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            CollisionGeometry::Ball(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this geometry to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            CollisionGeometry::Cuboid(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this geometry to an ellipsoid, if it is one.
    pub fn as_ellipsoid(&self) -> Option<&Ellipsoid> {
        match self {
            CollisionGeometry::Ellipsoid(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this geometry to a cylinder, if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            CollisionGeometry::Cylinder(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this geometry to a half-space, if it is one.
    pub fn as_halfspace(&self) -> Option<&HalfSpace> {
        match self {
            CollisionGeometry::HalfSpace(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this geometry to a triangle mesh, if it is one.
    pub fn as_trimesh(&self) -> Option<&TriMesh> {
        match self {
            CollisionGeometry::TriMesh(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_geometry(
    ($($shape: ident),*) => {$(
        impl From<$shape> for CollisionGeometry {
            fn from(shape: $shape) -> Self {
                CollisionGeometry::$shape(shape)
            }
        }
    )*}
);

impl_from_geometry!(Ball, Cuboid, Ellipsoid, Cylinder, HalfSpace, TriMesh);
