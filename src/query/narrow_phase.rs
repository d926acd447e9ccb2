use crate::math::{Isometry, Real};
use crate::query::{ContactBuffer, Unsupported};
use crate::shape::CollisionGeometry;

/// What a narrow-phase query should compute for one pair of geometries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    /// The maximum number of contacts to report for this pair.
    pub max_contacts: usize,
    /// If `false`, only the boolean answer matters and no contact is reported.
    pub enable_contact: bool,
}

impl Default for ContactRequest {
    fn default() -> Self {
        Self {
            max_contacts: 1,
            enable_contact: true,
        }
    }
}

/// Exact contact computation between two geometries.
///
/// This is the seam through which the collision detector performs its narrow-phase. A
/// custom backend can be plugged into the detector by implementing this trait, and combined
/// with another one through [`NarrowPhase::chain`].
pub trait NarrowPhase {
    /// Computes the contacts between `g1` at the world-space pose `pos1` and `g2` at the
    /// world-space pose `pos2`.
    ///
    /// Returns whether the two geometries are colliding. When `request.enable_contact` is
    /// `true`, at most `request.max_contacts` world-space contacts are appended to `out`, each
    /// with a normal pointing from `g1` toward `g2`. Nothing is appended otherwise.
    ///
    /// Returns `Err(Unsupported)`, without modifying `out`, if this narrow-phase does not
    /// handle this pair of geometries.
    fn collide(
        &self,
        g1: &CollisionGeometry,
        pos1: &Isometry<Real>,
        g2: &CollisionGeometry,
        pos2: &Isometry<Real>,
        request: &ContactRequest,
        out: &mut ContactBuffer,
    ) -> Result<bool, Unsupported>;

    /// Construct a `NarrowPhase` that falls back on `other` for cases not handled by `self`.
    fn chain<U: NarrowPhase>(self, other: U) -> NarrowPhaseChain<Self, U>
    where
        Self: Sized,
    {
        NarrowPhaseChain(self, other)
    }
}

/// The composition of two narrow-phases.
pub struct NarrowPhaseChain<T, U>(T, U);

impl<T, U> NarrowPhase for NarrowPhaseChain<T, U>
where
    T: NarrowPhase,
    U: NarrowPhase,
{
    fn collide(
        &self,
        g1: &CollisionGeometry,
        pos1: &Isometry<Real>,
        g2: &CollisionGeometry,
        pos2: &Isometry<Real>,
        request: &ContactRequest,
        out: &mut ContactBuffer,
    ) -> Result<bool, Unsupported> {
        (self.0)
            .collide(g1, pos1, g2, pos2, request, out)
            .or_else(|Unsupported| (self.1).collide(g1, pos1, g2, pos2, request, out))
    }
}

impl<T: NarrowPhase + ?Sized> NarrowPhase for &T {
    fn collide(
        &self,
        g1: &CollisionGeometry,
        pos1: &Isometry<Real>,
        g2: &CollisionGeometry,
        pos2: &Isometry<Real>,
        request: &ContactRequest,
        out: &mut ContactBuffer,
    ) -> Result<bool, Unsupported> {
        (**self).collide(g1, pos1, g2, pos2, request, out)
    }
}
