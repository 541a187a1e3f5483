//! The solving boundary: solvers, selections, and their errors.

use thiserror::Error;

use crate::{Item, Problem, ValidationError, Weight};

/// The outcome of a successful solve: the chosen items and their totals.
///
/// Items are ordered most-recently-decided first, the reverse of the order
/// in which the solver considered them. An empty selection is a normal,
/// successful result meaning no item fits.
///
/// # Examples
/// ```
/// use packwise_core::Selection;
///
/// let selection = Selection::empty();
/// assert!(selection.is_empty());
/// assert_eq!(selection.total_cost, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// The chosen items.
    pub items: Vec<Item>,
    /// Combined weight of the chosen items.
    pub total_weight: Weight,
    /// Combined cost of the chosen items.
    pub total_cost: u32,
}

impl Selection {
    /// Construct a selection from chosen items and their totals.
    #[must_use]
    pub const fn new(items: Vec<Item>, total_weight: Weight, total_cost: u32) -> Self {
        Self {
            items,
            total_weight,
            total_cost,
        }
    }

    /// Construct the empty selection.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Weight::ZERO, 0)
    }

    /// Whether no item was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The ids of the chosen items, in selection order.
    #[must_use]
    pub fn item_ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id).collect()
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The problem failed validation before the solver ran.
    #[error("invalid problem: {0}")]
    InvalidProblem(#[from] ValidationError),
}

/// Find a maximum-cost item subset within a problem's capacity.
///
/// Implementations must treat each call independently: no cross-call state,
/// no mutation of the caller's [`Problem`]. Among equal-cost subsets the
/// one with the lower total weight wins. Solvers must be `Send + Sync` so
/// independent problems can be solved across threads.
pub trait Solver: Send + Sync {
    /// Solve one problem, producing the optimal selection or an error.
    fn solve(&self, problem: &Problem) -> Result<Selection, SolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct TakeAllSolver;

    impl Solver for TakeAllSolver {
        fn solve(&self, problem: &Problem) -> Result<Selection, SolveError> {
            problem.validate()?;
            let total_weight = problem
                .items
                .iter()
                .fold(Weight::ZERO, |acc, item| acc + item.weight);
            let total_cost = problem.items.iter().map(|item| item.cost).sum();
            Ok(Selection::new(problem.items.clone(), total_weight, total_cost))
        }
    }

    #[rstest]
    fn solver_reports_selection_for_valid_problem() {
        let items = vec![
            Item::new(1, Weight::from_hundredths(1_000), 20),
            Item::new(2, Weight::from_hundredths(2_000), 30),
        ];
        let problem = Problem::new(Weight::from_units(100), items);

        let selection = TakeAllSolver.solve(&problem).expect("valid problem");
        assert_eq!(selection.item_ids(), vec![1, 2]);
        assert_eq!(selection.total_weight, Weight::from_units(30));
        assert_eq!(selection.total_cost, 50);
    }

    #[rstest]
    fn solver_surfaces_validation_failures() {
        let problem = Problem::new(
            Weight::from_units(10),
            vec![Item::new(1, Weight::from_units(110), 99)],
        );

        let err = TakeAllSolver.solve(&problem).expect_err("invalid weight");
        assert!(matches!(
            err,
            SolveError::InvalidProblem(ValidationError::WeightOutOfRange { id: 1, .. })
        ));
    }

    #[rstest]
    fn empty_selection_has_zero_totals() {
        let selection = Selection::empty();
        assert!(selection.is_empty());
        assert_eq!(selection.total_weight, Weight::ZERO);
        assert_eq!(selection.item_ids(), Vec::<u32>::new());
    }
}
