use crate::bounding_volume::Aabb;
use crate::collision::detector::DetectorId;
use crate::math::{Isometry, Real};
use crate::scene::{FrameKey, ShapeFrame, SharedShape};
use crate::shape::CollisionGeometry;
use std::fmt;
use std::sync::Arc;

/// The handle of a collision object owned by a [`CollisionDetector`](crate::collision::CollisionDetector).
///
/// A handle is invalidated when its object is destroyed, that is, once its shape frame has
/// been removed from every collision group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionObjectHandle {
    pub(crate) index: usize,
    pub(crate) serial: u64,
    pub(crate) detector: DetectorId,
}

/// The collision detector's view of a shape frame.
///
/// One collision object exists per shape frame and per detector, however many groups the
/// frame has been added to. The object holds a claim on the geometry of the frame's shape
/// and caches the frame pose and world-space bounding box as of the last detection.
pub struct CollisionObject {
    frame: Arc<dyn ShapeFrame>,
    shape: SharedShape,
    geometry: Option<Arc<CollisionGeometry>>,
    world_transform: Isometry<Real>,
    world_aabb: Option<Aabb>,
    pub(crate) num_groups: usize,
    pub(crate) serial: u64,
}

impl fmt::Debug for CollisionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionObject")
            .field("frame", &self.frame_key())
            .field("shape", &self.shape)
            .field("geometry", &self.geometry)
            .field("world_transform", &self.world_transform)
            .field("world_aabb", &self.world_aabb)
            .finish()
    }
}

impl CollisionObject {
    pub(crate) fn new(
        frame: Arc<dyn ShapeFrame>,
        shape: SharedShape,
        geometry: Option<Arc<CollisionGeometry>>,
        serial: u64,
    ) -> Self {
        let mut object = Self {
            frame,
            shape,
            geometry,
            world_transform: Isometry::identity(),
            world_aabb: None,
            num_groups: 1,
            serial,
        };
        object.synchronize();
        object
    }

    /// The shape frame this object was created for.
    pub fn frame(&self) -> &Arc<dyn ShapeFrame> {
        &self.frame
    }

    /// The key of the shape frame of this object.
    pub fn frame_key(&self) -> FrameKey {
        FrameKey::of(&self.frame)
    }

    /// The shape this object holds a geometry claim on.
    pub fn shape(&self) -> &SharedShape {
        &self.shape
    }

    /// The collision geometry of this object.
    ///
    /// `None` if the shape cannot participate in collision detection.
    pub fn geometry(&self) -> Option<&Arc<CollisionGeometry>> {
        self.geometry.as_ref()
    }

    /// The world-space pose of the frame, as of the last synchronization.
    pub fn world_transform(&self) -> &Isometry<Real> {
        &self.world_transform
    }

    /// The world-space bounding box of the geometry, as of the last synchronization.
    pub fn world_aabb(&self) -> Option<&Aabb> {
        self.world_aabb.as_ref()
    }

    /// Replaces the claimed shape and its geometry, returning the previous ones.
    pub(crate) fn replace_shape(
        &mut self,
        shape: SharedShape,
        geometry: Option<Arc<CollisionGeometry>>,
    ) -> SharedShape {
        self.geometry = geometry;
        std::mem::replace(&mut self.shape, shape)
    }

    /// Reads the frame pose and updates the world-space bounding box.
    pub(crate) fn synchronize(&mut self) {
        self.world_transform = self.frame.world_transform();
        self.world_aabb = self
            .geometry
            .as_ref()
            .map(|g| g.aabb(&self.world_transform));
    }
}
