//! A single-axis sweep-and-prune broad-phase.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, Vector, DIM};
use core::cmp::Ordering;
use core::ops::ControlFlow;

/// Trait used for generating the content of the leaves of the sweep-and-prune structure.
pub trait SapDataGenerator<LeafData> {
    /// Gives an idea of the number of elements this generator contains.
    ///
    /// This is primarily used for pre-allocating some arrays for performance purposes.
    fn size_hint(&self) -> usize;
    /// Iterate through all the elements of this generator.
    fn for_each(&mut self, f: impl FnMut(LeafData, Aabb));
}

impl<LeafData, F> SapDataGenerator<LeafData> for F
where
    F: ExactSizeIterator<Item = (LeafData, Aabb)>,
{
    fn size_hint(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn for_each(&mut self, mut f: impl FnMut(LeafData, Aabb)) {
        for (elt, aabb) in self {
            f(elt, aabb)
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct SapProxy<LeafData> {
    data: LeafData,
    aabb: Aabb,
}

/// A broad-phase that sorts bounding boxes along one axis and only tests the boxes whose
/// projections on that axis overlap.
///
/// The structure is rebuilt from scratch by [`SweepAndPrune::clear_and_rebuild`]. The sweep
/// axis is the one along which the box centers have the largest variance. Pair enumeration
/// order only depends on the inserted data and boxes, and on their insertion order.
#[derive(Clone, Debug)]
pub struct SweepAndPrune<LeafData> {
    axis: usize,
    proxies: Vec<SapProxy<LeafData>>,
}

impl<LeafData> Default for SweepAndPrune<LeafData> {
    fn default() -> Self {
        Self::new()
    }
}

impl<LeafData> SweepAndPrune<LeafData> {
    /// Initialize an empty sweep-and-prune structure.
    pub fn new() -> Self {
        Self {
            axis: 0,
            proxies: Vec::new(),
        }
    }

    /// The number of boxes in this structure.
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    /// Is this structure empty?
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// The axis along which the boxes are currently sorted.
    pub fn sweep_axis(&self) -> usize {
        self.axis
    }
}

impl<LeafData: Copy + PartialEq> SweepAndPrune<LeafData> {
    /// Clears this structure and rebuilds it from a new set of data and boxes.
    pub fn clear_and_rebuild(&mut self, mut data_gen: impl SapDataGenerator<LeafData>) {
        self.proxies.clear();
        self.proxies.reserve(data_gen.size_hint());
        data_gen.for_each(|data, aabb| self.proxies.push(SapProxy { data, aabb }));

        self.axis = sweep_axis(self.proxies.iter().map(|p| &p.aabb));

        let axis = self.axis;
        // Stable sort: ties keep their insertion order.
        self.proxies
            .sort_by(|a, b| cmp_reals(a.aabb.mins[axis], b.aabb.mins[axis]));
    }

    /// Calls `f` on each pair of overlapping boxes of this structure.
    ///
    /// Stops as soon as `f` returns `ControlFlow::Break`.
    pub fn self_pairs(
        &self,
        mut f: impl FnMut(LeafData, LeafData) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let axis = self.axis;

        for (i, p1) in self.proxies.iter().enumerate() {
            for p2 in &self.proxies[i + 1..] {
                if p2.aabb.mins[axis] > p1.aabb.maxs[axis] {
                    break;
                }

                if p1.aabb.intersects(&p2.aabb) {
                    f(p1.data, p2.data)?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Calls `f` on each pair of overlapping boxes with one box from `self` and one from `other`.
    ///
    /// The first argument given to `f` always comes from `self`. Pairs where both sides carry
    /// the same data are skipped. Stops as soon as `f` returns `ControlFlow::Break`.
    pub fn cross_pairs(
        &self,
        other: &Self,
        mut f: impl FnMut(LeafData, LeafData) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let axis = self.axis;
        let mut merged: Vec<(&SapProxy<LeafData>, bool)> = self
            .proxies
            .iter()
            .map(|p| (p, true))
            .chain(other.proxies.iter().map(|p| (p, false)))
            .collect();
        merged.sort_by(|a, b| cmp_reals(a.0.aabb.mins[axis], b.0.aabb.mins[axis]));

        for (i, (p1, from_self1)) in merged.iter().enumerate() {
            for (p2, from_self2) in &merged[i + 1..] {
                if p2.aabb.mins[axis] > p1.aabb.maxs[axis] {
                    break;
                }

                if from_self1 == from_self2 || p1.data == p2.data {
                    continue;
                }

                if p1.aabb.intersects(&p2.aabb) {
                    if *from_self1 {
                        f(p1.data, p2.data)?;
                    } else {
                        f(p2.data, p1.data)?;
                    }
                }
            }
        }

        ControlFlow::Continue(())
    }
}

fn cmp_reals(a: Real, b: Real) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// The axis along which the centers of `aabbs` have the largest variance.
fn sweep_axis<'a>(aabbs: impl Iterator<Item = &'a Aabb> + Clone) -> usize {
    let mut count = 0.0;
    let mut mean = na::zero::<Vector<Real>>();

    for aabb in aabbs.clone() {
        mean += aabb.center().coords;
        count += 1.0;
    }

    if count == 0.0 {
        return 0;
    }

    mean /= count;

    let mut variance = na::zero::<Vector<Real>>();
    for aabb in aabbs {
        let delta = aabb.center().coords - mean;
        variance += delta.component_mul(&delta);
    }

    let mut axis = 0;
    for i in 1..DIM {
        if variance[i] > variance[axis] {
            axis = i;
        }
    }

    axis
}
