//! Collision detection between the shape frames of a scene.
//!
//! Shape frames are gathered into collision groups owned by a [`CollisionDetector`]. Each
//! frame gets one [`CollisionObject`] per detector, holding a claim on the collision
//! geometry built from its shape by the [`GeometryBuilder`]. Geometries are shared, through
//! the [`GeometryCache`], between all the objects created from the same shape instance.
//!
//! Detection runs a sweep-and-prune broad-phase over the world-space bounding boxes of a
//! group (or of two groups), tests the candidate pairs with the narrow-phase, and filters the
//! resulting contacts with a [`ContactFilter`].

pub use self::capabilities::{BackendCapabilities, BackendDescriptor};
pub use self::collision_group::{CollisionGroup, CollisionGroupHandle};
pub use self::collision_object::{CollisionObject, CollisionObjectHandle};
pub use self::contact::{Contact, CostSource, RawContact};
pub use self::contact_filter::{
    filter_contacts, ContactFilter, COLLINEARITY_TOLERANCE, DUPLICATE_TOLERANCE,
};
pub use self::detector::CollisionDetector;
pub use self::error::CollisionError;
pub use self::geometry_builder::{
    GeometryBuilder, TessellationConfig, PLANE_SLAB_EXTENT, PLANE_SLAB_THICKNESS,
};
pub use self::geometry_cache::GeometryCache;
pub use self::option::{BlacklistFilter, CollisionFilter, DetectionOption};
pub use self::result::CollisionResult;

mod capabilities;
mod collision_group;
mod collision_object;
mod contact;
pub mod contact_filter;
mod detector;
mod error;
mod geometry_builder;
mod geometry_cache;
mod option;
mod result;
