//! Core domain types for the packwise knapsack engine.
//!
//! These models provide basic validation to keep downstream components
//! honest: a [`Problem`] carries the declared capacity and item list, and
//! [`Problem::validate`] surfaces out-of-bounds input early. Solvers consume
//! a validated problem through the [`Solver`] trait and report the chosen
//! items as a [`Selection`].

#![forbid(unsafe_code)]

mod item;
mod problem;
mod solver;

pub use item::{Item, Weight};
pub use problem::{Problem, ValidationError, MAX_ITEMS, MAX_ITEM_COST, MAX_ITEM_WEIGHT};
pub use solver::{Selection, SolveError, Solver};
