//! Description of what a collision backend supports natively.

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// The set of primitives a collision backend handles natively.
///
/// The geometry builder approximates every primitive missing from this set by a triangle mesh.
pub struct BackendCapabilities(u32);

bitflags::bitflags! {
    impl BackendCapabilities: u32 {
        /// Boxes are represented as cuboids.
        const NATIVE_BOX = 1 << 0;
        /// Ellipsoids with distinct semi-axes are represented as ellipsoids.
        const NATIVE_ELLIPSOID = 1 << 1;
        /// Cylinders are represented as cylinders.
        const NATIVE_CYLINDER = 1 << 2;
        /// Planes are represented as half-spaces.
        ///
        /// Without this capability, planes are approximated by a large thin slab.
        const NATIVE_HALF_SPACE = 1 << 3;
    }
}

/// The identity and the capabilities of a collision backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BackendDescriptor {
    /// The backend type tag.
    ///
    /// Collision groups can only be tested by a detector of the same backend type.
    pub name: &'static str,
    /// The primitives this backend supports natively.
    pub capabilities: BackendCapabilities,
}

impl BackendDescriptor {
    /// The reference backend, supporting every primitive natively.
    pub const REFERENCE: Self = Self::new("reference", BackendCapabilities::all());

    /// A backend that only knows balls and triangle meshes.
    ///
    /// Boxes, ellipsoids, cylinders and planes are all tessellated.
    pub const MESH_ONLY: Self = Self::new("reference-mesh", BackendCapabilities::empty());

    /// Describes a new backend.
    pub const fn new(name: &'static str, capabilities: BackendCapabilities) -> Self {
        Self { name, capabilities }
    }

    /// Does this backend support all the given capabilities?
    #[inline]
    pub fn supports(&self, capabilities: BackendCapabilities) -> bool {
        self.capabilities.contains(capabilities)
    }
}

impl Default for BackendDescriptor {
    fn default() -> Self {
        Self::REFERENCE
    }
}
