//! Removal of redundant contacts.
//!
//! The narrow-phase tends to report the same contact several times when it is found through
//! different pairs of features, and to report several contacts along a single edge. Both are
//! removed here, before the contacts are handed to the caller:
//!
//! 1. for each pair of contacts `i < j` closer than [`DUPLICATE_TOLERANCE`], `i` is removed;
//! 2. for each triple of remaining contacts `i < j < k` such that
//!    `‖(pᵢ - pⱼ) × (pᵢ - pₖ)‖ < COLLINEARITY_TOLERANCE`, `i` is removed.
//!
//! The remaining contacts are kept in their original order, with their normal negated (see
//! [`Contact`]). Filtering a filtered set does not change it.

use crate::collision::{Contact, RawContact};
use crate::math::Real;

/// The distance below which two contacts are considered identical.
pub const DUPLICATE_TOLERANCE: Real = 1.0e-3;
/// The norm of `(pᵢ - pⱼ) × (pᵢ - pₖ)` below which three contacts are considered collinear.
pub const COLLINEARITY_TOLERANCE: Real = DUPLICATE_TOLERANCE * DUPLICATE_TOLERANCE;

/// Removes the duplicate and collinear contacts of `raw` and converts the others.
pub fn filter_contacts(raw: &[RawContact]) -> Vec<Contact> {
    let mut out = Vec::new();
    ContactFilter::new().filter_into(raw, &mut out);
    out
}

/// A contact filter reusing its internal buffer across calls.
#[derive(Clone, Debug, Default)]
pub struct ContactFilter {
    removed: Vec<bool>,
}

impl ContactFilter {
    /// Creates a new filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the duplicate and collinear contacts of `raw` and appends the others to `out`.
    pub fn filter_into(&mut self, raw: &[RawContact], out: &mut Vec<Contact>) {
        if raw.len() <= 1 {
            out.extend(raw.iter().map(Contact::from));
            return;
        }

        self.removed.clear();
        self.removed.resize(raw.len(), false);

        mark_duplicates(raw, &mut self.removed);
        mark_collinear(raw, &mut self.removed);

        out.extend(
            raw.iter()
                .zip(&self.removed)
                .filter(|(_, removed)| !**removed)
                .map(|(contact, _)| Contact::from(contact)),
        );
    }
}

fn mark_duplicates(raw: &[RawContact], removed: &mut [bool]) {
    let tol2 = DUPLICATE_TOLERANCE * DUPLICATE_TOLERANCE;

    for i in 0..raw.len() - 1 {
        let pi = raw[i].point;

        if raw[i + 1..]
            .iter()
            .any(|cj| na::distance_squared(&pi, &cj.point) < tol2)
        {
            removed[i] = true;
        }
    }
}

fn mark_collinear(raw: &[RawContact], removed: &mut [bool]) {
    let tol2 = COLLINEARITY_TOLERANCE * COLLINEARITY_TOLERANCE;
    let n = raw.len();

    'next_i: for i in 0..n {
        if removed[i] {
            continue;
        }

        let pi = raw[i].point;

        for j in i + 1..n {
            if removed[j] {
                continue;
            }

            let vj = pi - raw[j].point;

            for k in j + 1..n {
                if removed[k] {
                    continue;
                }

                let vk = pi - raw[k].point;

                if vj.cross(&vk).norm_squared() < tol2 {
                    removed[i] = true;
                    continue 'next_i;
                }
            }
        }
    }
}
