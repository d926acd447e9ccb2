use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::FeatureId;
use smallvec::SmallVec;
use std::mem;

/// A buffer of contact points, sized for the contacts reported by one pair of geometries.
pub type ContactBuffer = SmallVec<[ContactPoint; 8]>;

/// Geometric description of one contact point produced by a narrow-phase query.
///
/// The contact normal points from the first geometry toward the second one.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactPoint {
    /// Position of the contact.
    pub point: Point<Real>,
    /// Unit contact normal, pointing from the first geometry toward the second one.
    pub normal: Vector<Real>,
    /// Penetration depth. Non-negative for every reported contact.
    pub depth: Real,
    /// The feature of the first geometry involved in this contact.
    pub feature1: FeatureId,
    /// The feature of the second geometry involved in this contact.
    pub feature2: FeatureId,
}

impl ContactPoint {
    /// Creates a new contact point with unknown features.
    #[inline]
    pub fn new(point: Point<Real>, normal: Vector<Real>, depth: Real) -> Self {
        ContactPoint {
            point,
            normal,
            depth,
            feature1: FeatureId::Unknown,
            feature2: FeatureId::Unknown,
        }
    }

    /// Sets the features involved in this contact.
    #[inline]
    pub fn with_features(mut self, feature1: FeatureId, feature2: FeatureId) -> Self {
        self.feature1 = feature1;
        self.feature2 = feature2;
        self
    }

    /// Swaps the roles of the two geometries: the normal is negated and the features swapped.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        mem::swap(&mut self.feature1, &mut self.feature2);
    }

    /// Returns a new contact with the roles of the two geometries swapped.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Returns this contact with its point and normal transformed by `pos`.
    #[inline]
    pub fn transformed(mut self, pos: &Isometry<Real>) -> Self {
        self.point = pos * self.point;
        self.normal = pos * self.normal;
        self
    }
}
