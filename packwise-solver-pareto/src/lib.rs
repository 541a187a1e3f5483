//! Pareto-frontier 0/1 knapsack solver for packwise.
//!
//! This crate provides [`ParetoSolver`], the default implementation of the
//! [`Solver`](packwise_core::Solver) trait. It follows the Nemhauser-Ullmann
//! method: items are considered one at a time in descending cost/weight
//! ratio, and for each prefix the solver keeps the [`Frontier`] of
//! non-dominated cumulative (weight, cost) combinations. Each step extends
//! the previous frontier with the new item and merges the two sequences with
//! dominance pruning; a backward pass over the retained frontiers then
//! recovers the chosen item subset.
//!
//! The solver is synchronous and holds no cross-call state, so one instance
//! may serve many independent problems, concurrently if desired.

#![forbid(unsafe_code)]

mod frontier;
mod merge;
mod solver;

pub use frontier::{Entry, Frontier};
pub use merge::merge;
pub use solver::ParetoSolver;
