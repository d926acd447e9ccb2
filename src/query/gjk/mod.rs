//! The Gilbert-Johnson-Keerthi intersection test between support-mapped shapes.
//!
//! GJK works on the Configuration-Space Obstacle (the Minkowski difference) of two convex
//! shapes: they intersect if and only if it contains the origin. It only needs the support
//! function of each shape.

pub use self::cso_point::CSOPoint;
pub use self::gjk::intersection;
pub(crate) use self::gjk::eps_tol;
pub use self::simplex::Simplex;

mod cso_point;
mod gjk;
mod simplex;
