#[macro_use]
extern crate approx;

use clash3d::math::{Isometry, Real};
use clash3d::query::{
    ContactBuffer, ContactRequest, DefaultNarrowPhase, NarrowPhase, Unsupported,
};
use clash3d::shape::CollisionGeometry;
use std::cell::Cell;

mod contact_filter;
mod detection_option;
mod geometry_builder;
mod geometry_cache;
mod plane_contacts;
mod shared_objects;

/// The reference narrow-phase, counting how many times it is invoked.
#[derive(Default)]
pub struct CountingNarrowPhase {
    pub calls: Cell<usize>,
}

impl NarrowPhase for CountingNarrowPhase {
    fn collide(
        &self,
        g1: &CollisionGeometry,
        pos1: &Isometry<Real>,
        g2: &CollisionGeometry,
        pos2: &Isometry<Real>,
        request: &ContactRequest,
        out: &mut ContactBuffer,
    ) -> Result<bool, Unsupported> {
        self.calls.set(self.calls.get() + 1);
        DefaultNarrowPhase.collide(g1, pos1, g2, pos2, request, out)
    }
}
