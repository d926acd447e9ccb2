use crate::bounding_volume::Aabb;
use crate::collision::CollisionObjectHandle;
use crate::math::{Point, Real, Vector};
use crate::query::ContactPoint;
use crate::shape::FeatureId;

/// A contact as reported by the narrow-phase, in world-space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawContact {
    /// Position of the contact.
    pub point: Point<Real>,
    /// Contact normal, pointing from `object1` toward `object2`.
    pub normal: Vector<Real>,
    /// Penetration depth.
    pub penetration_depth: Real,
    /// The feature of the first geometry involved in this contact.
    pub feature1: FeatureId,
    /// The feature of the second geometry involved in this contact.
    pub feature2: FeatureId,
    /// The first collision object.
    pub object1: CollisionObjectHandle,
    /// The second collision object.
    pub object2: CollisionObjectHandle,
}

impl RawContact {
    /// Attaches the two collision objects to a narrow-phase contact point.
    pub fn from_contact_point(
        contact: &ContactPoint,
        object1: CollisionObjectHandle,
        object2: CollisionObjectHandle,
    ) -> Self {
        Self {
            point: contact.point,
            normal: contact.normal,
            penetration_depth: contact.depth,
            feature1: contact.feature1,
            feature2: contact.feature2,
            object1,
            object2,
        }
    }
}

/// A contact between two collision objects.
///
/// The normal points from `collision_object2` toward `collision_object1`, that is, it is the
/// opposite of the narrow-phase normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Position of the contact, in world-space.
    pub point: Point<Real>,
    /// Contact normal, pointing from `collision_object2` toward `collision_object1`.
    pub normal: Vector<Real>,
    /// Penetration depth.
    pub penetration_depth: Real,
    /// The feature of the first geometry involved in this contact.
    pub feature1: FeatureId,
    /// The feature of the second geometry involved in this contact.
    pub feature2: FeatureId,
    /// The first collision object.
    pub collision_object1: CollisionObjectHandle,
    /// The second collision object.
    pub collision_object2: CollisionObjectHandle,
}

impl Contact {
    /// A contact only telling that two objects collide, without any geometric data.
    pub fn without_geometry(
        collision_object1: CollisionObjectHandle,
        collision_object2: CollisionObjectHandle,
    ) -> Self {
        Self {
            point: Point::origin(),
            normal: Vector::zeros(),
            penetration_depth: 0.0,
            feature1: FeatureId::Unknown,
            feature2: FeatureId::Unknown,
            collision_object1,
            collision_object2,
        }
    }

    /// Does this contact carry geometric data?
    pub fn has_geometry(&self) -> bool {
        self.normal != Vector::zeros()
    }
}

impl From<&RawContact> for Contact {
    fn from(raw: &RawContact) -> Self {
        Self {
            point: raw.point,
            normal: -raw.normal,
            penetration_depth: raw.penetration_depth,
            feature1: raw.feature1,
            feature2: raw.feature2,
            collision_object1: raw.object1,
            collision_object2: raw.object2,
        }
    }
}

impl From<&Contact> for RawContact {
    fn from(contact: &Contact) -> Self {
        Self {
            point: contact.point,
            normal: -contact.normal,
            penetration_depth: contact.penetration_depth,
            feature1: contact.feature1,
            feature2: contact.feature2,
            object1: contact.collision_object1,
            object2: contact.collision_object2,
        }
    }
}

/// A region where two collision objects overlap, weighted by a cost density.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostSource {
    /// The overlap of the world-space bounding boxes of the two objects.
    pub aabb: Aabb,
    /// The cost per unit volume.
    pub cost_density: Real,
    /// The volume of `aabb` multiplied by `cost_density`.
    pub total_cost: Real,
}

impl CostSource {
    /// The cost density used by the collision detector.
    pub const DEFAULT_DENSITY: Real = 1.0;

    /// A cost source covering `aabb`.
    pub fn new(aabb: Aabb, cost_density: Real) -> Self {
        Self {
            aabb,
            cost_density,
            total_cost: aabb.volume() * cost_density,
        }
    }
}
