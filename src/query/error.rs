use core::fmt;

/// Error indicating that a narrow-phase query is not supported between certain geometry
/// combinations.
///
/// Narrow-phase backends implement specialized algorithms for specific pairs of geometries.
/// When a pair has no implementation, this error is returned and the pair is treated as
/// non-colliding by the collision detector. Several backends can be combined with
/// [`NarrowPhase::chain`](crate::query::NarrowPhase::chain) so that a pair unsupported by the
/// first one is forwarded to the second.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these geometries")
    }
}

impl std::error::Error for Unsupported {}
