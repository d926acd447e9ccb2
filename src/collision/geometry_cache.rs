//! Reference-counted sharing of collision geometries between shapes.

use crate::collision::{CollisionError, GeometryBuilder};
use crate::scene::{ShapeKey, SharedShape};
use crate::shape::CollisionGeometry;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug)]
struct CacheEntry {
    // Keeps the shape allocation, hence its key, alive while claimed.
    shape: SharedShape,
    geometry: Option<Arc<CollisionGeometry>>,
    count: usize,
}

/// A table mapping each shape instance to its collision geometry and its number of claims.
///
/// Shapes are identified by instance, not by value: two equal descriptions held by two
/// different [`SharedShape`] allocations get two distinct geometries. The geometry of a shape
/// is built on its first claim and dropped on its last release.
///
/// A shape that cannot be built still gets an entry with no geometry, counted the same way.
#[derive(Debug, Default)]
pub struct GeometryCache {
    builder: GeometryBuilder,
    entries: HashMap<ShapeKey, CacheEntry>,
}

impl GeometryCache {
    /// An empty cache building geometries with `builder`.
    pub fn new(builder: GeometryBuilder) -> Self {
        Self {
            builder,
            entries: HashMap::new(),
        }
    }

    /// The builder used for the geometries of newly claimed shapes.
    pub fn builder(&self) -> &GeometryBuilder {
        &self.builder
    }

    /// Claims the geometry of `shape`, building it if this is the first claim.
    ///
    /// Returns `None` if `shape` cannot participate in collision detection.
    pub fn claim(&mut self, shape: &SharedShape) -> Option<Arc<CollisionGeometry>> {
        let builder = &self.builder;
        let entry = self
            .entries
            .entry(shape.key())
            .or_insert_with(|| CacheEntry {
                shape: shape.clone(),
                geometry: builder.build(shape),
                count: 0,
            });

        entry.count += 1;
        entry.geometry.clone()
    }

    /// Releases one claim on the geometry of `shape`.
    ///
    /// The entry is removed once its last claim is released. Fails if `shape` has no
    /// outstanding claim.
    pub fn release(&mut self, shape: &SharedShape) -> Result<(), CollisionError> {
        match self.entries.entry(shape.key()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().count -= 1;

                if entry.get().count == 0 {
                    let _ = entry.remove();
                }

                Ok(())
            }
            Entry::Vacant(_) => Err(CollisionError::UnknownShapeRelease),
        }
    }

    /// The number of outstanding claims on `shape`.
    pub fn reference_count(&self, shape: &SharedShape) -> usize {
        self.entries.get(&shape.key()).map_or(0, |e| e.count)
    }

    /// Does `shape` have at least one outstanding claim?
    pub fn contains(&self, shape: &SharedShape) -> bool {
        self.entries.contains_key(&shape.key())
    }

    /// The geometry of `shape`, if it is claimed and could be built.
    ///
    /// This does not add a claim.
    pub fn geometry(&self, shape: &SharedShape) -> Option<&Arc<CollisionGeometry>> {
        self.entries
            .get(&shape.key())
            .and_then(|e| e.geometry.as_ref())
    }

    /// The number of distinct shapes with outstanding claims.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is this cache empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates through the claimed shapes.
    pub fn shapes(&self) -> impl ExactSizeIterator<Item = &SharedShape> {
        self.entries.values().map(|e| &e.shape)
    }
}
