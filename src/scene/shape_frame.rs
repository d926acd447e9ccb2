//! The scene-graph frames carrying the shapes to collide.

use crate::math::{Isometry, Real};
use crate::scene::SharedShape;
use std::sync::{Arc, RwLock};

/// A scene-graph node carrying a shape at some world-space position.
pub trait ShapeFrame: Send + Sync {
    /// The shape attached to this frame.
    fn shape(&self) -> SharedShape;
    /// The current world-space pose of this frame.
    fn world_transform(&self) -> Isometry<Real>;
}

/// A stable key identifying one shape frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameKey(usize);

impl FrameKey {
    /// The key of the frame pointed to by `frame`.
    ///
    /// The key is derived from the frame allocation, so it is shared by every clone of
    /// `frame` and stays valid as long as one of them is alive.
    #[inline]
    pub fn of(frame: &Arc<dyn ShapeFrame>) -> Self {
        FrameKey(Arc::as_ptr(frame) as *const () as usize)
    }
}

/// A shape frame with a pose that can be updated from any thread.
#[derive(Debug)]
pub struct SimpleFrame {
    shape: SharedShape,
    transform: RwLock<Isometry<Real>>,
}

impl SimpleFrame {
    /// Creates a frame carrying `shape` at the pose `transform`.
    pub fn new(shape: SharedShape, transform: Isometry<Real>) -> Self {
        Self {
            shape,
            transform: RwLock::new(transform),
        }
    }

    /// Creates a frame and wraps it, ready to be added to a collision group.
    pub fn new_shared(shape: SharedShape, transform: Isometry<Real>) -> Arc<dyn ShapeFrame> {
        Arc::new(Self::new(shape, transform))
    }

    /// Moves this frame.
    pub fn set_world_transform(&self, transform: Isometry<Real>) {
        *self.transform.write().unwrap_or_else(|e| e.into_inner()) = transform;
    }
}

impl ShapeFrame for SimpleFrame {
    fn shape(&self) -> SharedShape {
        self.shape.clone()
    }

    fn world_transform(&self) -> Isometry<Real> {
        *self.transform.read().unwrap_or_else(|e| e.into_inner())
    }
}
