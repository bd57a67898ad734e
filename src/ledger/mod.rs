//! Expense ledger and category registry.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use category::{
    CategoryRegistry, CategorySelection, PickerEffect, SelectionOutcome, DEFAULT_CATEGORIES,
};
pub use ledger::ExpenseLedger;
