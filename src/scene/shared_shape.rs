use crate::math::{Point, Real, Vector};
use crate::scene::ShapeDescription;
use crate::shape::Triangle;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A stable key identifying one shape instance.
///
/// Two [`SharedShape`] have the same key iff. they point to the same allocation,
/// whatever the content of their descriptions. A key stays valid as long as one
/// clone of the shape is alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeKey(usize);

/// A reference-counted, shareable shape description.
///
/// Cloning a `SharedShape` only increments a reference count. Every clone shares
/// the same identity: this is what the geometry cache is keyed on.
///
/// ```
/// use clash3d::scene::SharedShape;
///
/// let shape = SharedShape::sphere(1.0);
/// let same = shape.clone();
/// let twin = SharedShape::sphere(1.0);
///
/// assert_eq!(shape.key(), same.key());
/// assert_ne!(shape.key(), twin.key());
/// ```
#[derive(Clone)]
pub struct SharedShape(pub Arc<ShapeDescription>);

impl Deref for SharedShape {
    type Target = ShapeDescription;
    fn deref(&self) -> &ShapeDescription {
        &self.0
    }
}

impl AsRef<ShapeDescription> for SharedShape {
    fn as_ref(&self) -> &ShapeDescription {
        &self.0
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedShape ( Arc<{:?}> )", self.0.kind())
    }
}

impl From<ShapeDescription> for SharedShape {
    fn from(shape: ShapeDescription) -> Self {
        Self::new(shape)
    }
}

impl SharedShape {
    /// Wraps a shape description into a `SharedShape`.
    pub fn new(shape: ShapeDescription) -> Self {
        Self(Arc::new(shape))
    }

    /// The identity key of this shape instance.
    #[inline]
    pub fn key(&self) -> ShapeKey {
        ShapeKey(Arc::as_ptr(&self.0) as usize)
    }

    /// Do `self` and `other` designate the same shape instance?
    #[inline]
    pub fn ptr_eq(&self, other: &SharedShape) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Initialize a box shape defined by its full extents along each axis.
    pub fn box_shape(size: Vector<Real>) -> Self {
        Self::new(ShapeDescription::Box { size })
    }

    /// Initialize a sphere shape defined by its radius.
    pub fn sphere(radius: Real) -> Self {
        Self::new(ShapeDescription::Sphere { radius })
    }

    /// Initialize an ellipsoid shape defined by its semi-axes lengths.
    pub fn ellipsoid(radii: Vector<Real>) -> Self {
        Self::new(ShapeDescription::Ellipsoid { radii })
    }

    /// Initialize a `z`-aligned cylinder shape defined by its radius and full height.
    pub fn cylinder(radius: Real, height: Real) -> Self {
        Self::new(ShapeDescription::Cylinder { radius, height })
    }

    /// Initialize a plane shape defined by its normal and its offset along that normal.
    pub fn plane(normal: Vector<Real>, offset: Real) -> Self {
        Self::new(ShapeDescription::Plane { normal, offset })
    }

    /// Initialize a rigid mesh shape from a triangle list and a per-axis scale.
    pub fn mesh(triangles: Vec<Triangle>, scale: Vector<Real>) -> Self {
        Self::new(ShapeDescription::Mesh { triangles, scale })
    }

    /// Initialize a soft mesh shape from a triangle list.
    pub fn soft_mesh(triangles: Vec<Triangle>) -> Self {
        Self::new(ShapeDescription::SoftMesh { triangles })
    }

    /// Initialize a line-segment shape.
    pub fn line_segment(
        thickness: Real,
        vertices: Vec<Point<Real>>,
        connections: Vec<[u32; 2]>,
    ) -> Self {
        Self::new(ShapeDescription::LineSegment {
            thickness,
            vertices,
            connections,
        })
    }
}
