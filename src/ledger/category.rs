use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    domain::FormVariant,
    errors::{FormError, Result},
};

pub const DEFAULT_CATEGORIES: [&str; 5] = ["Food", "Socializing", "Transport", "Shopping", "Other"];

/// Ordered list of category labels offered by the form.
///
/// Categories live only for the session: every new registry starts from
/// [`DEFAULT_CATEGORIES`]. Duplicate names are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
    sentinel: &'static str,
}

/// Result of picking an entry from the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected(String),
    /// The reserved entry was picked; the caller clears its selection and
    /// opens the category flow.
    OpenManagementFlow,
    NoMatch,
}

impl CategoryRegistry {
    pub fn new(variant: FormVariant) -> Self {
        Self::with_names(variant, DEFAULT_CATEGORIES)
    }

    pub fn with_names<I, S>(variant: FormVariant, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            sentinel: variant.sentinel_label(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn sentinel(&self) -> &'static str {
        self.sentinel
    }

    pub fn is_sentinel(&self, name: &str) -> bool {
        name == self.sentinel
    }

    /// Category labels followed by the reserved entry, as rendered by a picker.
    pub fn options(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.sentinel))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Appends `name`; returns `false` and changes nothing when it is empty or
    /// the reserved entry's label.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.is_sentinel(&name) {
            return false;
        }
        debug!(category = %name, "category added");
        self.names.push(name);
        true
    }

    pub fn rename(&mut self, index: usize, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if self.is_sentinel(&new_name) {
            return Err(FormError::ReservedCategory(new_name));
        }
        let len = self.names.len();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(FormError::CategoryIndex { index, len })?;
        debug!(from = %slot, to = %new_name, "category renamed");
        *slot = new_name;
        Ok(())
    }

    /// Removes every listed position. Positions past the end are ignored.
    pub fn delete(&mut self, indices: &BTreeSet<usize>) -> usize {
        let before = self.names.len();
        let mut position = 0;
        self.names.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
        let removed = before - self.names.len();
        debug!(removed, remaining = self.names.len(), "categories deleted");
        removed
    }

    pub fn select(&self, name: &str) -> SelectionOutcome {
        if self.is_sentinel(name) {
            SelectionOutcome::OpenManagementFlow
        } else if self.contains(name) {
            SelectionOutcome::Selected(name.to_string())
        } else {
            SelectionOutcome::NoMatch
        }
    }
}

/// What the category picker currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    Idle,
    Selected(String),
    /// Inline text entry for a new category is open.
    AddingNew { draft: String },
}

/// Side effect a picker transition asks the caller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEffect {
    None,
    /// The modal management screen must be shown.
    OpenManagement,
    /// The registry gained an entry.
    CategoryAdded,
}

impl CategorySelection {
    pub fn selected(&self) -> Option<&str> {
        match self {
            CategorySelection::Selected(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, CategorySelection::AddingNew { .. })
    }

    /// Handles a pick from the list. The reserved entry never becomes a selection.
    pub fn choose(
        &mut self,
        registry: &CategoryRegistry,
        variant: FormVariant,
        name: &str,
    ) -> PickerEffect {
        match registry.select(name) {
            SelectionOutcome::OpenManagementFlow if variant.uses_inline_entry() => {
                *self = CategorySelection::AddingNew {
                    draft: String::new(),
                };
                PickerEffect::None
            }
            SelectionOutcome::OpenManagementFlow => {
                *self = CategorySelection::Idle;
                PickerEffect::OpenManagement
            }
            SelectionOutcome::Selected(name) => {
                *self = CategorySelection::Selected(name);
                PickerEffect::None
            }
            SelectionOutcome::NoMatch => PickerEffect::None,
        }
    }

    /// Text typed into the inline entry, if it is open.
    pub fn draft(&self) -> Option<&str> {
        match self {
            CategorySelection::AddingNew { draft } => Some(draft.as_str()),
            _ => None,
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let CategorySelection::AddingNew { draft } = self {
            *draft = text.into();
        }
    }

    /// Confirms the inline entry. An empty name or the reserved label keeps the
    /// entry open.
    pub fn confirm(&mut self, registry: &mut CategoryRegistry, name: &str) -> PickerEffect {
        if !self.is_adding() || !registry.add(name) {
            return PickerEffect::None;
        }
        *self = CategorySelection::Selected(name.to_string());
        PickerEffect::CategoryAdded
    }

    pub fn cancel(&mut self) {
        if self.is_adding() {
            *self = CategorySelection::Idle;
        }
    }

    /// Drops a selection that no longer names a registry entry.
    pub fn reconcile(&mut self, registry: &CategoryRegistry) -> bool {
        let stale = matches!(self, CategorySelection::Selected(name) if !registry.contains(name));
        if stale {
            *self = CategorySelection::Idle;
        }
        stale
    }

    pub fn clear(&mut self) {
        *self = CategorySelection::Idle;
    }
}
