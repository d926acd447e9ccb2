use crate::collision::CollisionObject;
use crate::scene::{FrameKey, ShapeFrame};
use crate::utils::SortedPair;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Decides which pairs of collision objects are tested by the narrow-phase.
pub trait CollisionFilter {
    /// Returns `false` if the narrow-phase must not be run between `object1` and `object2`.
    fn need_collision(&self, object1: &CollisionObject, object2: &CollisionObject) -> bool;
}

impl<F> CollisionFilter for F
where
    F: Fn(&CollisionObject, &CollisionObject) -> bool,
{
    fn need_collision(&self, object1: &CollisionObject, object2: &CollisionObject) -> bool {
        self(object1, object2)
    }
}

/// A collision filter rejecting a fixed set of unordered pairs of shape frames.
///
/// The blacklisted frames are kept alive by the filter, so that the address of a dropped
/// frame can never be reused by a new frame matching a stale pair.
#[derive(Clone, Default)]
pub struct BlacklistFilter {
    pairs: HashMap<SortedPair<FrameKey>, [Arc<dyn ShapeFrame>; 2]>,
}

impl BlacklistFilter {
    /// An empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevents `frame1` and `frame2` from colliding with each other.
    ///
    /// Returns `false` if the pair was already blacklisted.
    pub fn add_pair(
        &mut self,
        frame1: &Arc<dyn ShapeFrame>,
        frame2: &Arc<dyn ShapeFrame>,
    ) -> bool {
        let key = Self::key(frame1, frame2);

        if self.pairs.contains_key(&key) {
            return false;
        }

        let _ = self.pairs.insert(key, [frame1.clone(), frame2.clone()]);
        true
    }

    /// Allows `frame1` and `frame2` to collide again.
    ///
    /// Returns `false` if the pair was not blacklisted.
    pub fn remove_pair(
        &mut self,
        frame1: &Arc<dyn ShapeFrame>,
        frame2: &Arc<dyn ShapeFrame>,
    ) -> bool {
        self.pairs.remove(&Self::key(frame1, frame2)).is_some()
    }

    /// Removes every pair from the blacklist.
    pub fn remove_all_pairs(&mut self) {
        self.pairs.clear()
    }

    /// Is the pair of `frame1` and `frame2` blacklisted?
    pub fn contains_pair(
        &self,
        frame1: &Arc<dyn ShapeFrame>,
        frame2: &Arc<dyn ShapeFrame>,
    ) -> bool {
        self.pairs.contains_key(&Self::key(frame1, frame2))
    }

    /// The number of blacklisted pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Is this blacklist empty?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(frame1: &Arc<dyn ShapeFrame>, frame2: &Arc<dyn ShapeFrame>) -> SortedPair<FrameKey> {
        SortedPair::new(FrameKey::of(frame1), FrameKey::of(frame2))
    }
}

impl fmt::Debug for BlacklistFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.pairs.keys()).finish()
    }
}

impl CollisionFilter for BlacklistFilter {
    fn need_collision(&self, object1: &CollisionObject, object2: &CollisionObject) -> bool {
        !self
            .pairs
            .contains_key(&SortedPair::new(object1.frame_key(), object2.frame_key()))
    }
}

/// The settings of one collision detection query.
#[derive(Clone)]
pub struct DetectionOption {
    /// The maximum number of contacts to report. Must be positive.
    ///
    /// Unless `enable_cost` is set, detection stops as soon as this many contacts are found.
    pub max_num_contacts: usize,
    /// If `false`, each colliding pair reports a single contact without geometric data.
    pub enable_contact: bool,
    /// If `true`, every colliding pair is tested and reports a [`CostSource`](crate::collision::CostSource).
    pub enable_cost: bool,
    /// The maximum number of cost sources to keep, the costliest first.
    pub max_num_cost_sources: usize,
    /// Pairs rejected by this filter are never tested by the narrow-phase.
    pub collision_filter: Option<Arc<dyn CollisionFilter>>,
}

impl Default for DetectionOption {
    fn default() -> Self {
        Self {
            max_num_contacts: 1000,
            enable_contact: true,
            enable_cost: false,
            max_num_cost_sources: 1,
            collision_filter: None,
        }
    }
}

impl fmt::Debug for DetectionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectionOption")
            .field("max_num_contacts", &self.max_num_contacts)
            .field("enable_contact", &self.enable_contact)
            .field("enable_cost", &self.enable_cost)
            .field("max_num_cost_sources", &self.max_num_cost_sources)
            .field("collision_filter", &self.collision_filter.is_some())
            .finish()
    }
}

impl DetectionOption {
    /// Options reporting at most `max_num_contacts` contacts.
    pub fn new(max_num_contacts: usize) -> Self {
        Self {
            max_num_contacts,
            ..Self::default()
        }
    }

    /// Sets the collision filter.
    pub fn with_filter(mut self, filter: impl CollisionFilter + 'static) -> Self {
        self.collision_filter = Some(Arc::new(filter));
        self
    }
}
