use std::fmt;

use serde::{Deserialize, Serialize};

/// Iterations of the expense form. They share the ledger and differ in how
/// the category picker's reserved entry behaves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// "Manage Categories" opens a separate add/rename/delete screen.
    #[default]
    ManagedCategories,
    /// "Add New Category" opens an inline text entry below the picker.
    InlineCategory,
}

impl FormVariant {
    pub const ALL: [FormVariant; 2] = [FormVariant::ManagedCategories, FormVariant::InlineCategory];

    /// Label of the reserved picker entry that triggers a flow instead of selecting.
    pub fn sentinel_label(self) -> &'static str {
        match self {
            FormVariant::ManagedCategories => "Manage Categories",
            FormVariant::InlineCategory => "Add New Category",
        }
    }

    pub fn uses_inline_entry(self) -> bool {
        matches!(self, FormVariant::InlineCategory)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "managed" | "modal" | "managed_categories" => Some(FormVariant::ManagedCategories),
            "inline" | "inline_category" => Some(FormVariant::InlineCategory),
            _ => None,
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormVariant::ManagedCategories => "managed_categories",
            FormVariant::InlineCategory => "inline_category",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_display_names_and_short_forms() {
        for variant in FormVariant::ALL {
            assert_eq!(FormVariant::parse(&variant.to_string()), Some(variant));
        }
        assert_eq!(FormVariant::parse("Inline"), Some(FormVariant::InlineCategory));
        assert_eq!(FormVariant::parse("managed-categories"), Some(FormVariant::ManagedCategories));
        assert_eq!(FormVariant::parse("modal"), Some(FormVariant::ManagedCategories));
        assert_eq!(FormVariant::parse("basic"), None);
    }

    #[test]
    fn only_inline_variant_uses_add_new_label() {
        assert_eq!(FormVariant::ManagedCategories.sentinel_label(), "Manage Categories");
        assert_eq!(FormVariant::InlineCategory.sentinel_label(), "Add New Category");
        assert!(FormVariant::InlineCategory.uses_inline_entry());
        assert!(!FormVariant::ManagedCategories.uses_inline_entry());
    }
}
