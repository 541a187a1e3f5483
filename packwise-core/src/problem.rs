//! Problem instances and their validation bounds.

use thiserror::Error;

use crate::{Item, Weight};

/// Largest weight an individual item may declare, in whole units.
pub const MAX_ITEM_WEIGHT: Weight = Weight::from_units(100);

/// Largest cost an individual item may declare.
pub const MAX_ITEM_COST: u32 = 100;

/// Largest number of items a single problem may contain.
pub const MAX_ITEMS: usize = 15;

/// One independent packing problem: a capacity and the candidate items.
///
/// Problems are built once from input and never mutated by a solver; solvers
/// work on their own copy of the item list.
///
/// # Examples
/// ```
/// use packwise_core::{Item, Problem, Weight};
///
/// let problem = Problem::new(
///     Weight::from_units(81),
///     vec![Item::new(1, Weight::from_hundredths(5338), 45)],
/// );
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    /// Weight capacity the chosen items must not exceed.
    pub capacity: Weight,
    /// Candidate items, in input order.
    pub items: Vec<Item>,
}

/// Errors returned by [`Problem::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An item weight was zero or above [`MAX_ITEM_WEIGHT`].
    #[error("item {id}: weight {weight} must be greater than 0 and at most 100")]
    WeightOutOfRange {
        /// Identity of the offending item.
        id: u32,
        /// The declared weight.
        weight: Weight,
    },
    /// An item cost was zero or above [`MAX_ITEM_COST`].
    #[error("item {id}: cost {cost} must be between 1 and 100")]
    CostOutOfRange {
        /// Identity of the offending item.
        id: u32,
        /// The declared cost.
        cost: u32,
    },
    /// The problem declared more than [`MAX_ITEMS`] items.
    #[error("a problem may contain at most {MAX_ITEMS} items, got {count}")]
    TooManyItems {
        /// Number of items declared.
        count: usize,
    },
}

impl Problem {
    /// Construct a problem from a capacity and its candidate items.
    ///
    /// The item list may be empty; solving an empty problem yields an empty
    /// selection.
    #[must_use]
    pub const fn new(capacity: Weight, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Check every item against the declared bounds.
    ///
    /// Costs are checked before weights, and the item count last, matching
    /// the order failures are reported in. A failure is fatal to this
    /// problem only; other problems in a batch are unaffected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.items {
            if item.cost == 0 || item.cost > MAX_ITEM_COST {
                return Err(ValidationError::CostOutOfRange {
                    id: item.id,
                    cost: item.cost,
                });
            }
        }
        for item in &self.items {
            if item.weight.is_zero() || item.weight > MAX_ITEM_WEIGHT {
                return Err(ValidationError::WeightOutOfRange {
                    id: item.id,
                    weight: item.weight,
                });
            }
        }
        if self.items.len() > MAX_ITEMS {
            return Err(ValidationError::TooManyItems {
                count: self.items.len(),
            });
        }
        Ok(())
    }
}
