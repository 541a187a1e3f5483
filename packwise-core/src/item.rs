//! Items and their exact fixed-point weights.

use std::fmt;
use std::ops::Add;

/// An exact item weight counted in hundredths of a weight unit.
///
/// Input weights carry at most two decimal places, so a scaled integer
/// represents them exactly. This keeps dominance comparisons and the
/// backtracking existence search free of rounding error.
///
/// # Examples
/// ```
/// use packwise_core::Weight;
///
/// let weight = Weight::from_hundredths(5338);
/// assert_eq!(weight.to_string(), "53.38");
/// assert!(weight < Weight::from_units(54));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weight(u32);

impl Weight {
    /// The zero weight.
    pub const ZERO: Self = Self(0);

    /// Construct a weight from hundredths of a unit.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Construct a weight from whole units.
    #[must_use]
    pub const fn from_units(units: u32) -> Self {
        Self(units * 100)
    }

    /// The weight in hundredths of a unit.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Whether this weight is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract another weight, returning `None` on underflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(hundredths) => Some(Self(hundredths)),
            None => None,
        }
    }
}

impl Add for Weight {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A single packable item: an opaque identity plus a weight and a cost.
///
/// The identity is used only for reporting the chosen items; dominance and
/// optimality are decided on weight and cost alone. Items are immutable
/// value types.
///
/// # Examples
/// ```
/// use packwise_core::{Item, Weight};
///
/// let item = Item::new(1, Weight::from_hundredths(5338), 45);
/// assert_eq!(item.id, 1);
/// assert_eq!(item.cost, 45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Opaque identity, reported back to the caller.
    pub id: u32,
    /// Weight in exact hundredths of a unit.
    pub weight: Weight,
    /// Cost (value) of including the item.
    pub cost: u32,
}

impl Item {
    /// Construct an item.
    #[must_use]
    pub const fn new(id: u32, weight: Weight, cost: u32) -> Self {
        Self { id, weight, cost }
    }
}
