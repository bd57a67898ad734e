pub mod expense;
pub mod variant;

pub use expense::ExpenseRecord;
pub use variant::FormVariant;
