use crate::collision::{
    BackendCapabilities, BackendDescriptor, CollisionError, CollisionGroup, CollisionGroupHandle,
    CollisionObject, CollisionObjectHandle, CollisionResult, Contact, ContactFilter, CostSource,
    DetectionOption, GeometryBuilder, GeometryCache, RawContact, TessellationConfig,
};
use crate::query::{ContactBuffer, ContactRequest, DefaultNarrowPhase, NarrowPhase};
use crate::scene::{FrameKey, ShapeFrame, SharedShape};
use core::ops::ControlFlow;
use core::sync::atomic::{AtomicU64, Ordering};
use slab::Slab;
use std::collections::HashMap;
use std::sync::Arc;

static NEXT_DETECTOR_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies a collision detector, so that handles given to another detector are rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct DetectorId(u64);

impl DetectorId {
    pub(crate) fn next() -> Self {
        DetectorId(NEXT_DETECTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Detects the collisions between the shape frames of collision groups.
///
/// The detector owns its collision groups, the collision objects of the frames added to
/// these groups, and the cache of their geometries. A frame added to several groups of the
/// same detector shares one collision object, hence one geometry claim.
///
/// The exact contact computation is delegated to the narrow-phase `N`.
pub struct CollisionDetector<N = DefaultNarrowPhase> {
    id: DetectorId,
    backend: BackendDescriptor,
    narrow_phase: N,
    cache: GeometryCache,
    objects: Slab<CollisionObject>,
    groups: Slab<CollisionGroup>,
    shared_objects: HashMap<FrameKey, CollisionObjectHandle>,
    next_serial: u64,
    contact_filter: ContactFilter,
    raw_contacts: Vec<RawContact>,
    contact_points: ContactBuffer,
}

impl Default for CollisionDetector<DefaultNarrowPhase> {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionDetector<DefaultNarrowPhase> {
    /// A detector using the reference backend.
    pub fn new() -> Self {
        Self::with_backend(BackendDescriptor::REFERENCE, DefaultNarrowPhase)
    }
}

impl<N> CollisionDetector<N> {
    /// A detector for the given backend.
    pub fn with_backend(backend: BackendDescriptor, narrow_phase: N) -> Self {
        Self::with_tessellation(backend, TessellationConfig::default(), narrow_phase)
    }

    /// A detector for the given backend, approximating the shapes this backend does not
    /// support natively with the given resolution.
    pub fn with_tessellation(
        backend: BackendDescriptor,
        tessellation: TessellationConfig,
        narrow_phase: N,
    ) -> Self {
        let builder = GeometryBuilder::new(backend.capabilities).with_tessellation(tessellation);

        Self {
            id: DetectorId::next(),
            backend,
            narrow_phase,
            cache: GeometryCache::new(builder),
            objects: Slab::new(),
            groups: Slab::new(),
            shared_objects: HashMap::new(),
            next_serial: 0,
            contact_filter: ContactFilter::new(),
            raw_contacts: Vec::new(),
            contact_points: ContactBuffer::new(),
        }
    }

    /// The backend type tag of this detector.
    pub fn backend_type(&self) -> &'static str {
        self.backend.name
    }

    /// The description of the backend of this detector.
    pub fn backend(&self) -> &BackendDescriptor {
        &self.backend
    }

    /// The primitives supported natively by the backend of this detector.
    pub fn capabilities(&self) -> BackendCapabilities {
        self.backend.capabilities
    }

    /// The narrow-phase of this detector.
    pub fn narrow_phase(&self) -> &N {
        &self.narrow_phase
    }

    /// The cache of the geometries claimed by the collision objects.
    pub fn geometry_cache(&self) -> &GeometryCache {
        &self.cache
    }

    /// The number of live collision objects.
    pub fn num_collision_objects(&self) -> usize {
        self.objects.len()
    }

    /// The number of live collision groups.
    pub fn num_collision_groups(&self) -> usize {
        self.groups.len()
    }

    /// The collision object identified by `handle`.
    pub fn collision_object(&self, handle: CollisionObjectHandle) -> Option<&CollisionObject> {
        self.objects
            .get(handle.index)
            .filter(|obj| handle.detector == self.id && obj.serial == handle.serial)
    }

    /// The collision group identified by `handle`.
    pub fn collision_group(&self, handle: CollisionGroupHandle) -> Option<&CollisionGroup> {
        let index = self.check_group(handle).ok()?;
        self.groups.get(index)
    }

    /// Creates an empty collision group.
    pub fn create_group(&mut self) -> CollisionGroupHandle {
        let serial = self.next_serial();
        let index = self.groups.insert(CollisionGroup::new(serial));

        CollisionGroupHandle {
            index,
            serial,
            detector: self.id,
            backend: self.backend.name,
        }
    }

    /// Creates a collision group containing the given frames.
    pub fn create_group_with_frames<I>(&mut self, frames: I) -> CollisionGroupHandle
    where
        I: IntoIterator<Item = Arc<dyn ShapeFrame>>,
    {
        let group = self.create_group();
        let index = group.index;

        for frame in frames {
            let _ = self.add_frame_at(index, frame);
        }

        group
    }

    /// Destroys a collision group, together with the collision objects not shared with
    /// another group.
    pub fn destroy_group(&mut self, group: CollisionGroupHandle) -> Result<(), CollisionError> {
        let index = self.check_group(group)?;
        self.destroy_group_at(index);
        Ok(())
    }

    /// Adds a shape frame to a group.
    ///
    /// Adding a frame already in the group does nothing. Returns the collision object of the
    /// frame.
    pub fn add_shape_frame(
        &mut self,
        group: CollisionGroupHandle,
        frame: Arc<dyn ShapeFrame>,
    ) -> Result<CollisionObjectHandle, CollisionError> {
        let index = self.check_group(group)?;
        Ok(self.add_frame_at(index, frame))
    }

    /// Adds several shape frames to a group.
    pub fn add_shape_frames<I>(
        &mut self,
        group: CollisionGroupHandle,
        frames: I,
    ) -> Result<(), CollisionError>
    where
        I: IntoIterator<Item = Arc<dyn ShapeFrame>>,
    {
        let index = self.check_group(group)?;

        for frame in frames {
            let _ = self.add_frame_at(index, frame);
        }

        Ok(())
    }

    /// Removes a shape frame from a group.
    ///
    /// Returns `false` if the frame was not in the group.
    pub fn remove_shape_frame(
        &mut self,
        group: CollisionGroupHandle,
        frame: &Arc<dyn ShapeFrame>,
    ) -> Result<bool, CollisionError> {
        let index = self.check_group(group)?;
        let key = FrameKey::of(frame);
        let members = &mut self.groups[index].members;

        match members.iter().position(|(k, _)| *k == key) {
            Some(i) => {
                let (_, handle) = members.remove(i);
                self.release_object(handle);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every shape frame from a group.
    pub fn remove_all_shape_frames(
        &mut self,
        group: CollisionGroupHandle,
    ) -> Result<(), CollisionError> {
        let index = self.check_group(group)?;
        self.clear_group_at(index);
        Ok(())
    }

    /// Is `frame` in `group`?
    pub fn has_shape_frame(
        &self,
        group: CollisionGroupHandle,
        frame: &Arc<dyn ShapeFrame>,
    ) -> bool {
        self.collision_group(group)
            .is_some_and(|g| g.find(FrameKey::of(frame)).is_some())
    }

    /// The number of shape frames in `group`, zero if the group does not exist.
    pub fn num_shape_frames(&self, group: CollisionGroupHandle) -> usize {
        self.collision_group(group).map_or(0, |g| g.len())
    }

    fn next_serial(&mut self) -> u64 {
        self.next_serial += 1;
        self.next_serial
    }

    fn check_group(&self, group: CollisionGroupHandle) -> Result<usize, CollisionError> {
        if group.backend != self.backend.name {
            return Err(CollisionError::BackendMismatch {
                expected: self.backend.name,
                found: group.backend,
            });
        }

        match self.groups.get(group.index) {
            Some(g) if group.detector == self.id && g.serial == group.serial => Ok(group.index),
            _ => Err(CollisionError::InvalidArgument(
                "the collision group does not belong to this detector",
            )),
        }
    }

    fn add_frame_at(&mut self, index: usize, frame: Arc<dyn ShapeFrame>) -> CollisionObjectHandle {
        let key = FrameKey::of(&frame);

        if let Some(handle) = self.groups[index].find(key) {
            return handle;
        }

        let handle = self.claim_object(key, frame);
        self.groups[index].members.push((key, handle));
        handle
    }

    fn claim_object(&mut self, key: FrameKey, frame: Arc<dyn ShapeFrame>) -> CollisionObjectHandle {
        if let Some(handle) = self.shared_objects.get(&key) {
            self.objects[handle.index].num_groups += 1;
            return *handle;
        }

        let shape = frame.shape();
        let geometry = self.cache.claim(&shape);
        let serial = self.next_serial();
        let index = self
            .objects
            .insert(CollisionObject::new(frame, shape, geometry, serial));
        let handle = CollisionObjectHandle {
            index,
            serial,
            detector: self.id,
        };
        let _ = self.shared_objects.insert(key, handle);
        handle
    }

    fn release_object(&mut self, handle: CollisionObjectHandle) {
        let object = &mut self.objects[handle.index];
        object.num_groups -= 1;

        if object.num_groups == 0 {
            let object = self.objects.remove(handle.index);
            let _ = self.shared_objects.remove(&object.frame_key());
            release_shape(&mut self.cache, object.shape());
        }
    }

    fn clear_group_at(&mut self, index: usize) {
        let members = std::mem::take(&mut self.groups[index].members);

        for (_, handle) in members {
            self.release_object(handle);
        }
    }

    fn destroy_group_at(&mut self, index: usize) {
        self.clear_group_at(index);
        let _ = self.groups.remove(index);
    }

    /// Synchronizes the objects of a group with their frames, then rebuilds its broad-phase.
    fn refresh_group(&mut self, index: usize) {
        let Self {
            groups,
            objects,
            cache,
            ..
        } = self;
        let group = &mut groups[index];
        let mut proxies = Vec::with_capacity(group.members.len());

        for (_, handle) in &group.members {
            let object = &mut objects[handle.index];
            let shape = object.frame().shape();

            if !shape.ptr_eq(object.shape()) {
                let geometry = cache.claim(&shape);
                let previous = object.replace_shape(shape, geometry);
                release_shape(cache, &previous);
            }

            object.synchronize();

            if let Some(aabb) = object.world_aabb() {
                proxies.push((*handle, *aabb));
            }
        }

        group.broad_phase.clear_and_rebuild(proxies.into_iter());
    }
}

impl<N: NarrowPhase> CollisionDetector<N> {
    /// Detects the collisions between the objects of `group`.
    ///
    /// Returns whether any contact was found. Invalid arguments and backend mismatches are
    /// logged and reported as no collision; use [`Self::try_detect`] to get the error.
    pub fn detect(
        &mut self,
        group: CollisionGroupHandle,
        option: &DetectionOption,
        result: &mut CollisionResult,
    ) -> bool {
        self.try_detect(group, option, result)
            .unwrap_or_else(|err| {
                log::warn!("collision detection skipped: {}", err);
                false
            })
    }

    /// Detects the collisions between the objects of `group1` and the objects of `group2`.
    ///
    /// Returns whether any contact was found. Invalid arguments and backend mismatches are
    /// logged and reported as no collision; use [`Self::try_detect_between`] to get the error.
    pub fn detect_between(
        &mut self,
        group1: CollisionGroupHandle,
        group2: CollisionGroupHandle,
        option: &DetectionOption,
        result: &mut CollisionResult,
    ) -> bool {
        self.try_detect_between(group1, group2, option, result)
            .unwrap_or_else(|err| {
                log::warn!("collision detection skipped: {}", err);
                false
            })
    }

    /// Detects the collisions between the objects of `group`.
    ///
    /// `result` is cleared first, so it is empty on error.
    pub fn try_detect(
        &mut self,
        group: CollisionGroupHandle,
        option: &DetectionOption,
        result: &mut CollisionResult,
    ) -> Result<bool, CollisionError> {
        result.clear();
        validate(option)?;
        let index = self.check_group(group)?;

        self.refresh_group(index);

        let (groups, mut pass) = self.split_for_pass(option, result);
        let _ = groups[index]
            .broad_phase
            .self_pairs(|h1, h2| pass.collide_pair(h1, h2));

        Ok(result.is_collision())
    }

    /// Detects the collisions between the objects of `group1` and the objects of `group2`.
    ///
    /// Objects belonging to both groups are not tested against themselves. If both handles
    /// are the same, this is the same as [`Self::try_detect`]. `result` is cleared first, so
    /// it is empty on error.
    pub fn try_detect_between(
        &mut self,
        group1: CollisionGroupHandle,
        group2: CollisionGroupHandle,
        option: &DetectionOption,
        result: &mut CollisionResult,
    ) -> Result<bool, CollisionError> {
        result.clear();
        validate(option)?;
        let index1 = self.check_group(group1)?;
        let index2 = self.check_group(group2)?;

        if index1 == index2 {
            return self.try_detect(group1, option, result);
        }

        self.refresh_group(index1);
        self.refresh_group(index2);

        let (groups, mut pass) = self.split_for_pass(option, result);
        let _ = groups[index1]
            .broad_phase
            .cross_pairs(&groups[index2].broad_phase, |h1, h2| {
                pass.collide_pair(h1, h2)
            });

        Ok(result.is_collision())
    }

    fn split_for_pass<'a>(
        &'a mut self,
        option: &'a DetectionOption,
        result: &'a mut CollisionResult,
    ) -> (&'a Slab<CollisionGroup>, DetectionPass<'a, N>) {
        let pass = DetectionPass {
            objects: &self.objects,
            narrow_phase: &self.narrow_phase,
            contact_filter: &mut self.contact_filter,
            raw_contacts: &mut self.raw_contacts,
            contact_points: &mut self.contact_points,
            option,
            result,
        };

        (&self.groups, pass)
    }
}

impl<N> Drop for CollisionDetector<N> {
    fn drop(&mut self) {
        let groups: Vec<usize> = self.groups.iter().map(|(index, _)| index).collect();

        for index in groups {
            self.destroy_group_at(index);
        }

        if !std::thread::panicking() {
            debug_assert!(self.objects.is_empty());
            debug_assert!(
                self.cache.is_empty(),
                "geometries still claimed after the destruction of every collision object"
            );
        }
    }
}

fn validate(option: &DetectionOption) -> Result<(), CollisionError> {
    if option.max_num_contacts == 0 {
        Err(CollisionError::InvalidArgument(
            "the maximum number of contacts must be positive",
        ))
    } else {
        Ok(())
    }
}

fn release_shape(cache: &mut GeometryCache, shape: &SharedShape) {
    if let Err(err) = cache.release(shape) {
        log::error!("geometry cache out of sync: {}", err);
        debug_assert!(false, "geometry cache out of sync: {}", err);
    }
}

/// The state of one detection query, borrowed from the detector.
struct DetectionPass<'a, N> {
    objects: &'a Slab<CollisionObject>,
    narrow_phase: &'a N,
    contact_filter: &'a mut ContactFilter,
    raw_contacts: &'a mut Vec<RawContact>,
    contact_points: &'a mut ContactBuffer,
    option: &'a DetectionOption,
    result: &'a mut CollisionResult,
}

impl<N: NarrowPhase> DetectionPass<'_, N> {
    fn is_done(&self) -> bool {
        !self.option.enable_cost && self.result.num_contacts() >= self.option.max_num_contacts
    }

    fn collide_pair(
        &mut self,
        handle1: CollisionObjectHandle,
        handle2: CollisionObjectHandle,
    ) -> ControlFlow<()> {
        if self.is_done() {
            return ControlFlow::Break(());
        }

        let option = self.option;
        let object1 = &self.objects[handle1.index];
        let object2 = &self.objects[handle2.index];

        if let Some(filter) = &option.collision_filter {
            if !filter.need_collision(object1, object2) {
                return ControlFlow::Continue(());
            }
        }

        let (Some(geometry1), Some(geometry2)) = (object1.geometry(), object2.geometry()) else {
            return ControlFlow::Continue(());
        };

        let max_contacts = if option.enable_cost {
            option.max_num_contacts
        } else {
            option.max_num_contacts - self.result.num_contacts()
        };
        let request = ContactRequest {
            max_contacts,
            enable_contact: option.enable_contact,
        };

        self.contact_points.clear();
        let hit = match self.narrow_phase.collide(
            geometry1,
            object1.world_transform(),
            geometry2,
            object2.world_transform(),
            &request,
            self.contact_points,
        ) {
            Ok(hit) => hit,
            Err(err) => {
                log::warn!(
                    "{:?}-{:?} pair skipped: {}",
                    geometry1.geometry_type(),
                    geometry2.geometry_type(),
                    err
                );
                return ControlFlow::Continue(());
            }
        };

        if !hit {
            return ControlFlow::Continue(());
        }

        if option.enable_contact {
            self.raw_contacts.clear();
            self.raw_contacts.extend(
                self.contact_points
                    .iter()
                    .take(max_contacts)
                    .map(|c| RawContact::from_contact_point(c, handle1, handle2)),
            );
            self.contact_filter
                .filter_into(self.raw_contacts.as_slice(), &mut self.result.contacts);
        } else {
            self.result
                .contacts
                .push(Contact::without_geometry(handle1, handle2));
        }

        if option.enable_cost {
            if let (Some(aabb1), Some(aabb2)) = (object1.world_aabb(), object2.world_aabb()) {
                if let Some(overlap) = aabb1.intersection(aabb2) {
                    self.result.add_cost_source(
                        CostSource::new(overlap, CostSource::DEFAULT_DENSITY),
                        option.max_num_cost_sources,
                    );
                }
            }
        }

        if self.is_done() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
