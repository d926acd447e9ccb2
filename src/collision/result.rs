use crate::collision::{Contact, CostSource};
use core::cmp::Ordering;

/// The output of a collision detection query.
#[derive(Clone, Debug, Default)]
pub struct CollisionResult {
    pub(crate) contacts: Vec<Contact>,
    cost_sources: Vec<CostSource>,
}

impl CollisionResult {
    /// An empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all the contacts and cost sources.
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.cost_sources.clear();
    }

    /// Was any contact found?
    pub fn is_collision(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// The number of contacts found.
    pub fn num_contacts(&self) -> usize {
        self.contacts.len()
    }

    /// The `i`-th contact.
    pub fn contact(&self, i: usize) -> Option<&Contact> {
        self.contacts.get(i)
    }

    /// All the contacts found.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The number of cost sources.
    pub fn num_cost_sources(&self) -> usize {
        self.cost_sources.len()
    }

    /// The cost sources, sorted by decreasing total cost.
    pub fn cost_sources(&self) -> &[CostSource] {
        &self.cost_sources
    }

    /// Inserts `source` and drops the cheapest sources beyond `max_num_cost_sources`.
    pub(crate) fn add_cost_source(&mut self, source: CostSource, max_num_cost_sources: usize) {
        let at = self
            .cost_sources
            .partition_point(|s| cmp_cost(s, &source) != Ordering::Less);
        if at < max_num_cost_sources {
            self.cost_sources.insert(at, source);
            self.cost_sources.truncate(max_num_cost_sources);
        }
    }
}

fn cmp_cost(a: &CostSource, b: &CostSource) -> Ordering {
    a.total_cost
        .partial_cmp(&b.total_cost)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::CollisionResult;
    use crate::bounding_volume::Aabb;
    use crate::collision::CostSource;
    use crate::math::Point;

    fn source(side: f64) -> CostSource {
        CostSource::new(
            Aabb::new(Point::origin(), Point::new(side, side, side)),
            CostSource::DEFAULT_DENSITY,
        )
    }

    #[test]
    fn keeps_the_costliest_sources() {
        let mut result = CollisionResult::new();
        for side in [1.0, 3.0, 2.0, 0.5] {
            result.add_cost_source(source(side), 2);
        }

        let costs: Vec<_> = result.cost_sources().iter().map(|s| s.total_cost).collect();
        assert_eq!(costs, vec![27.0, 8.0]);

        result.clear();
        result.add_cost_source(source(1.0), 0);
        assert_eq!(result.num_cost_sources(), 0);
        assert!(!result.is_collision());
    }
}
