//! Domain type representing a single recorded expense.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable expense entry. Fields are only reachable through accessors so a
/// record cannot change after it has been appended to a ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    id: Uuid,
    amount: f64,
    description: String,
    category: String,
}

impl ExpenseRecord {
    pub fn new(amount: f64, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category: category.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
