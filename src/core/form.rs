use std::str::FromStr;

use crate::{errors::ValidationError, ledger::CategorySelection};

/// Raw field values of the expense entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub category: CategorySelection,
}

/// Field values that passed validation and are ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub amount: f64,
    pub description: String,
    pub category: String,
}

/// Parses an amount the way the form does: the whole text must be a finite number.
pub fn parse_amount(raw: &str) -> Option<f64> {
    f64::from_str(raw).ok().filter(|value| value.is_finite())
}

impl ExpenseForm {
    /// Whether the amount field should be drawn as valid. Empty text is not flagged.
    pub fn amount_is_valid(&self) -> bool {
        self.amount.is_empty() || parse_amount(&self.amount).is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<ValidatedExpense, ValidationError> {
        if self.amount.is_empty() {
            return Err(ValidationError::EmptyAmount);
        }
        let amount = parse_amount(&self.amount).ok_or(ValidationError::InvalidAmount)?;
        if self.description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let category = self
            .category
            .selected()
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingCategory)?;
        Ok(ValidatedExpense {
            amount,
            description: self.description.clone(),
            category: category.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.amount.clear();
        self.description.clear();
        self.category.clear();
    }
}
