//! [`ParetoSolver`] implementation: ordering, frontier construction, and
//! backtracking.

use std::cmp::Ordering;

use packwise_core::{Item, Problem, Selection, SolveError, Solver, Weight};

use crate::frontier::Frontier;
use crate::merge::merge;

/// Solver building the full sequence of Pareto frontiers for a problem and
/// backtracking through it to recover the optimal item subset.
///
/// The solver owns a working copy of the item list for each call; the
/// caller's [`Problem`] is never touched. One instance can be reused across
/// any number of problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParetoSolver;

impl ParetoSolver {
    /// Construct a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Solver for ParetoSolver {
    fn solve(&self, problem: &Problem) -> Result<Selection, SolveError> {
        problem.validate()?;
        let order = processing_order(problem);
        let frontiers = build_frontiers(problem.capacity, &order);
        Ok(backtrack(&order, &frontiers))
    }
}

/// The items the frontier loop will consider, in order: the zero sentinel
/// first, then the real items sorted by descending cost/weight ratio.
///
/// Items individually heavier than the capacity can never join a feasible
/// combination and are dropped up front. The sentinel is prepended after
/// sorting because a zero-weight item has no finite ratio.
fn processing_order(problem: &Problem) -> Vec<Item> {
    let mut items: Vec<Item> = problem
        .items
        .iter()
        .copied()
        .filter(|item| item.weight <= problem.capacity)
        .collect();
    items.sort_by(compare_by_ratio);

    let mut order = Vec::with_capacity(items.len() + 1);
    order.push(Item::new(0, Weight::ZERO, 0));
    order.extend(items);
    order
}

/// Descending cost/weight ratio, ties broken by ascending id so the order
/// is deterministic. Ratios are compared by cross-multiplication, keeping
/// the ordering exact; validated weights are never zero.
fn compare_by_ratio(a: &Item, b: &Item) -> Ordering {
    let lhs = u64::from(a.cost) * u64::from(b.weight.hundredths());
    let rhs = u64::from(b.cost) * u64::from(a.weight.hundredths());
    rhs.cmp(&lhs).then_with(|| a.id.cmp(&b.id))
}

/// One frontier per prefix of `order`, starting from the sentinel-only seed.
///
/// Every frontier is retained: backtracking needs the whole sequence, not
/// just the final result.
fn build_frontiers(capacity: Weight, order: &[Item]) -> Vec<Frontier> {
    let mut current = Frontier::seed(capacity);
    let mut frontiers = Vec::with_capacity(order.len());
    frontiers.push(current.clone());

    for item in order.iter().skip(1) {
        let extended = current.extend_with(item);
        let merged = merge(current.entries(), &extended);
        log::trace!(
            "item {}: frontier grows to {} entries",
            item.id,
            merged.len()
        );
        current = Frontier::from_entries(merged, capacity);
        frontiers.push(current.clone());
    }
    frontiers
}

/// Recover the chosen items from the retained frontier sequence.
///
/// The final frontier's last entry is the optimal cumulative pair. Walking
/// the sequence backwards, an item was included exactly when the current
/// pair is absent from the frontier that preceded it; included items have
/// their weight and cost subtracted from the pair before the walk continues.
/// Items are reported most-recently-decided first.
fn backtrack(order: &[Item], frontiers: &[Frontier]) -> Selection {
    let Some(best) = frontiers.last().and_then(Frontier::best).copied() else {
        return Selection::empty();
    };

    let mut target_weight = best.weight;
    let mut target_cost = best.cost;
    let mut chosen = Vec::new();
    for (position, item) in order.iter().enumerate().skip(1).rev() {
        let Some(earlier) = frontiers.get(position - 1) else {
            break;
        };
        if earlier.contains_pair(target_weight, target_cost) {
            // The same pair was reachable without this item.
            continue;
        }
        chosen.push(*item);
        target_weight = subtract_weight(target_weight, item.weight);
        target_cost = target_cost.saturating_sub(item.cost);
    }
    Selection::new(chosen, best.weight, best.cost)
}

fn subtract_weight(total: Weight, part: Weight) -> Weight {
    total.checked_sub(part).unwrap_or_else(|| {
        log::warn!("backtracking underflow: subtracting {part} from {total}");
        debug_assert!(false, "backtracking underflow: {part} from {total}");
        Weight::ZERO
    })
}
