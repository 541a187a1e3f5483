//! Facade crate for the packwise knapsack engine.
//!
//! This crate re-exports the core domain types and exposes the Pareto-frontier
//! solver implementation behind a feature flag.

#![forbid(unsafe_code)]

pub use packwise_core::{
    Item, Problem, Selection, SolveError, Solver, ValidationError, Weight, MAX_ITEMS,
    MAX_ITEM_COST, MAX_ITEM_WEIGHT,
};

#[cfg(feature = "solver-pareto")]
pub use packwise_solver_pareto::ParetoSolver;
