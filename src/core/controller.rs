use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::{
    currency::format_currency,
    domain::{ExpenseRecord, FormVariant},
    errors::{Result, ValidationError},
    ledger::{CategoryRegistry, ExpenseLedger, PickerEffect},
    storage::PreferencesStore,
};

use super::form::ExpenseForm;

/// Which part of the screen needs to be redrawn after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Form,
    Ledger,
    Categories,
}

/// One rendered line of the expense list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub description: String,
    pub category: String,
    pub amount: String,
}

/// Read-only projection of the ledger for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub rows: Vec<ExpenseRow>,
    pub total: String,
}

type Listener = Box<dyn FnMut(Change)>;

/// Owns the ledger, the category registry and the form state of the expense
/// screen. Every mutating call notifies subscribers explicitly.
pub struct ExpenseFormController {
    variant: FormVariant,
    ledger: ExpenseLedger,
    registry: CategoryRegistry,
    form: ExpenseForm,
    managing: bool,
    listeners: Vec<Listener>,
}

impl ExpenseFormController {
    pub fn new(variant: FormVariant, store: Box<dyn PreferencesStore>) -> Self {
        Self::with_ledger(variant, ExpenseLedger::new(store))
    }

    pub fn with_ledger(variant: FormVariant, ledger: ExpenseLedger) -> Self {
        Self {
            variant,
            ledger,
            registry: CategoryRegistry::new(variant),
            form: ExpenseForm::default(),
            managing: false,
            listeners: Vec::new(),
        }
    }

    /// Loads persisted expenses and resets categories to their defaults.
    pub fn activate(&mut self) {
        self.ledger.load();
        self.registry = CategoryRegistry::new(self.variant);
        self.form.clear();
        self.managing = false;
        info!(variant = %self.variant, expenses = self.ledger.len(), "expense form activated");
        self.notify(Change::Ledger);
        self.notify(Change::Categories);
        self.notify(Change::Form);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    pub fn is_managing(&self) -> bool {
        self.managing
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.form.amount = text.into();
        self.notify(Change::Form);
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.form.description = text.into();
        self.notify(Change::Form);
    }

    /// Picks an entry from the category list, including the reserved entry.
    pub fn choose_category(&mut self, name: &str) -> PickerEffect {
        let effect = self
            .form
            .category
            .choose(&self.registry, self.variant, name);
        if effect == PickerEffect::OpenManagement {
            self.managing = true;
        }
        self.notify(Change::Form);
        effect
    }

    pub fn set_new_category_draft(&mut self, text: impl Into<String>) {
        self.form.category.set_draft(text);
        self.notify(Change::Form);
    }

    pub fn confirm_new_category(&mut self, name: &str) -> PickerEffect {
        let effect = self.form.category.confirm(&mut self.registry, name);
        if effect == PickerEffect::CategoryAdded {
            self.notify(Change::Categories);
        }
        self.notify(Change::Form);
        effect
    }

    pub fn cancel_new_category(&mut self) {
        self.form.category.cancel();
        self.notify(Change::Form);
    }

    /// Records the form as an expense and clears it. Nothing is recorded when
    /// validation fails or the selection is the picker's reserved entry.
    pub fn submit(&mut self) -> std::result::Result<ExpenseRecord, ValidationError> {
        let checked = self.form.validate().and_then(|expense| {
            if self.registry.is_sentinel(&expense.category) {
                Err(ValidationError::MissingCategory)
            } else {
                Ok(expense)
            }
        });
        let expense = match checked {
            Ok(expense) => expense,
            Err(reason) => {
                debug!(%reason, "submission refused");
                return Err(reason);
            }
        };
        let record = self
            .ledger
            .append(expense.amount, expense.description, expense.category);
        self.form.clear();
        self.notify(Change::Ledger);
        self.notify(Change::Form);
        Ok(record)
    }

    pub fn open_management(&mut self) {
        self.managing = true;
        self.form.category.clear();
        self.notify(Change::Form);
    }

    pub fn add_category(&mut self, name: &str) -> bool {
        let added = self.registry.add(name);
        if added {
            self.notify(Change::Categories);
        }
        added
    }

    pub fn rename_category(&mut self, index: usize, new_name: &str) -> Result<()> {
        self.registry.rename(index, new_name)?;
        self.after_registry_edit();
        Ok(())
    }

    pub fn delete_categories(&mut self, indices: &BTreeSet<usize>) -> usize {
        let removed = self.registry.delete(indices);
        if removed > 0 {
            self.after_registry_edit();
        }
        removed
    }

    pub fn close_management(&mut self) {
        self.managing = false;
        self.notify(Change::Form);
    }

    pub fn view(&self) -> LedgerView {
        let rows = self
            .ledger
            .records()
            .iter()
            .map(|record| ExpenseRow {
                description: record.description().to_string(),
                category: record.category().to_string(),
                amount: format_currency(record.amount()),
            })
            .collect();
        LedgerView {
            rows,
            total: format_currency(self.ledger.total()),
        }
    }

    fn after_registry_edit(&mut self) {
        self.notify(Change::Categories);
        if self.form.category.reconcile(&self.registry) {
            self.notify(Change::Form);
        }
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}
