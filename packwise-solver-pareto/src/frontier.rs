//! Pareto frontiers of cumulative (weight, cost) combinations.

use packwise_core::{Item, Weight};

/// One cumulative combination on a frontier.
///
/// `item_id` records the last item whose inclusion produced this pair. It is
/// carried for backtracking only; dominance is decided on weight and cost
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Combined weight of the underlying item subset.
    pub weight: Weight,
    /// Combined cost of the underlying item subset.
    pub cost: u32,
    /// Identity of the most recently included item.
    pub item_id: u32,
}

impl Entry {
    /// Construct an entry.
    #[must_use]
    pub const fn new(weight: Weight, cost: u32, item_id: u32) -> Self {
        Self {
            weight,
            cost,
            item_id,
        }
    }
}

/// The non-dominated (weight, cost) combinations reachable from a prefix of
/// the items, bounded by the problem capacity.
///
/// Invariant: entries are strictly ascending in weight and strictly
/// ascending in cost, so no entry is dominated by an earlier one and the
/// final entry always carries the maximum cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    entries: Vec<Entry>,
    capacity: Weight,
}

impl Frontier {
    /// The frontier for the empty prefix: the single (0, 0) combination.
    #[must_use]
    pub fn seed(capacity: Weight) -> Self {
        Self {
            entries: vec![Entry::new(Weight::ZERO, 0, 0)],
            capacity,
        }
    }

    /// Wrap an already merged, dominance-free entry sequence.
    #[must_use]
    pub const fn from_entries(entries: Vec<Entry>, capacity: Weight) -> Self {
        Self { entries, capacity }
    }

    /// The entries, ascending in weight and cost.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The bounding capacity for this solve.
    #[must_use]
    pub const fn capacity(&self) -> Weight {
        self.capacity
    }

    /// The highest-cost combination, `None` only for an empty frontier.
    #[must_use]
    pub fn best(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Add the item's weight and cost to every combination, dropping any
    /// result over capacity.
    ///
    /// The frontier itself is never mutated and the output preserves its
    /// ascending order, since every entry receives the same offset. An empty
    /// result means the item cannot join any existing combination.
    #[must_use]
    pub fn extend_with(&self, item: &Item) -> Vec<Entry> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let weight = entry.weight + item.weight;
                (weight <= self.capacity)
                    .then(|| Entry::new(weight, entry.cost + item.cost, item.id))
            })
            .collect()
    }

    /// Whether the exact (weight, cost) pair appears on this frontier.
    ///
    /// Scans from the heavy end and stops early once entry weights fall
    /// below the target, which the ascending-weight invariant permits. Used
    /// by backtracking to decide whether a combination already existed
    /// before an item was considered.
    #[must_use]
    pub fn contains_pair(&self, weight: Weight, cost: u32) -> bool {
        for entry in self.entries.iter().rev() {
            if entry.weight == weight && entry.cost == cost {
                return true;
            }
            if entry.weight < weight {
                break;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(weight_hundredths: u32, cost: u32) -> Entry {
        Entry::new(Weight::from_hundredths(weight_hundredths), cost, 0)
    }

    #[rstest]
    fn seed_holds_the_zero_combination() {
        let frontier = Frontier::seed(Weight::from_units(10));
        assert_eq!(frontier.entries(), &[Entry::new(Weight::ZERO, 0, 0)]);
        assert_eq!(frontier.best(), Some(&Entry::new(Weight::ZERO, 0, 0)));
    }

    #[rstest]
    fn extend_offsets_every_entry_and_tags_the_item() {
        let frontier = Frontier::from_entries(
            vec![entry(0, 0), entry(300, 5)],
            Weight::from_units(10),
        );
        let item = Item::new(7, Weight::from_hundredths(200), 4);

        let extended = frontier.extend_with(&item);

        assert_eq!(
            extended,
            vec![
                Entry::new(Weight::from_hundredths(200), 4, 7),
                Entry::new(Weight::from_hundredths(500), 9, 7),
            ]
        );
    }

    #[rstest]
    fn extend_drops_combinations_over_capacity() {
        let frontier = Frontier::from_entries(
            vec![entry(0, 0), entry(900, 5)],
            Weight::from_units(10),
        );
        let item = Item::new(3, Weight::from_hundredths(200), 4);

        let extended = frontier.extend_with(&item);

        assert_eq!(extended, vec![Entry::new(Weight::from_hundredths(200), 4, 3)]);
    }

    #[rstest]
    fn extend_of_empty_frontier_is_empty() {
        let frontier = Frontier::from_entries(Vec::new(), Weight::from_units(10));
        let item = Item::new(1, Weight::from_hundredths(100), 1);
        assert!(frontier.extend_with(&item).is_empty());
    }

    #[rstest]
    #[case(300, 5, true)]
    #[case(300, 6, false)]
    #[case(200, 5, false)]
    #[case(700, 9, true)]
    fn contains_pair_requires_an_exact_match(
        #[case] weight_hundredths: u32,
        #[case] cost: u32,
        #[case] expected: bool,
    ) {
        let frontier = Frontier::from_entries(
            vec![entry(0, 0), entry(300, 5), entry(700, 9)],
            Weight::from_units(10),
        );
        assert_eq!(
            frontier.contains_pair(Weight::from_hundredths(weight_hundredths), cost),
            expected
        );
    }
}
