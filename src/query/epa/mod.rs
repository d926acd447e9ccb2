//! The Expanding Polytope Algorithm computing the penetration depth of support-mapped shapes.

pub use self::epa3::EPA;

mod epa3;
