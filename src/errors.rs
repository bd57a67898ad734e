use thiserror::Error;

/// Error type that captures expense ledger and category registry failures.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("No category at position {index} (registry holds {len})")]
    CategoryIndex { index: usize, len: usize },
    #[error("`{0}` is reserved for the category picker")]
    ReservedCategory(String),
}

pub type Result<T> = std::result::Result<T, FormError>;

/// Reasons a form submission is refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount is required")]
    EmptyAmount,
    #[error("Amount must be a number")]
    InvalidAmount,
    #[error("Description is required")]
    EmptyDescription,
    #[error("Choose a category")]
    MissingCategory,
}
