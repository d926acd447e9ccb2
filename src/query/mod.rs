//! Narrow-phase geometric queries.
//!
//! The [`NarrowPhase`] trait is what the collision detector uses to compute the contacts
//! between two geometries. [`DefaultNarrowPhase`] dispatches to the specific routines of the
//! [`contact`] module. Those have the form `contact_[shape1]_[shape2]()`, work in the
//! local-space of the first shape, and take the pose of the second shape relative to the
//! first one.

pub use self::contact::{ContactBuffer, ContactPoint};
pub use self::default_narrow_phase::DefaultNarrowPhase;
pub use self::error::Unsupported;
pub use self::narrow_phase::{ContactRequest, NarrowPhase, NarrowPhaseChain};

pub mod contact;
pub mod epa;
pub mod gjk;
mod default_narrow_phase;
mod error;
mod narrow_phase;
