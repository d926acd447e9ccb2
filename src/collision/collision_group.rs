use crate::collision::detector::DetectorId;
use crate::collision::CollisionObjectHandle;
use crate::partitioning::SweepAndPrune;
use crate::scene::FrameKey;

/// The handle of a collision group owned by a [`CollisionDetector`](crate::collision::CollisionDetector).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollisionGroupHandle {
    pub(crate) index: usize,
    pub(crate) serial: u64,
    pub(crate) detector: DetectorId,
    pub(crate) backend: &'static str,
}

impl CollisionGroupHandle {
    /// The type of the backend of the detector owning this group.
    pub fn backend_type(&self) -> &'static str {
        self.backend
    }
}

/// A set of collision objects tested together.
///
/// Members are kept in insertion order, each frame at most once.
#[derive(Debug)]
pub struct CollisionGroup {
    pub(crate) serial: u64,
    pub(crate) members: Vec<(FrameKey, CollisionObjectHandle)>,
    pub(crate) broad_phase: SweepAndPrune<CollisionObjectHandle>,
}

impl CollisionGroup {
    pub(crate) fn new(serial: u64) -> Self {
        Self {
            serial,
            members: Vec::new(),
            broad_phase: SweepAndPrune::new(),
        }
    }

    /// The collision objects of this group, in insertion order.
    pub fn objects(&self) -> impl ExactSizeIterator<Item = CollisionObjectHandle> + '_ {
        self.members.iter().map(|(_, handle)| *handle)
    }

    /// The number of shape frames in this group.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Is this group empty?
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The collision object of the frame identified by `key`, if it belongs to this group.
    pub fn find(&self, key: FrameKey) -> Option<CollisionObjectHandle> {
        self.members
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, handle)| *handle)
    }

    /// The broad-phase structure, as rebuilt by the last detection.
    pub fn broad_phase(&self) -> &SweepAndPrune<CollisionObjectHandle> {
        &self.broad_phase
    }
}
