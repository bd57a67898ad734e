pub mod controller;
pub mod form;
pub mod utils;

pub use controller::{Change, ExpenseFormController, ExpenseRow, LedgerView};
pub use form::{parse_amount, ExpenseForm, ValidatedExpense};
