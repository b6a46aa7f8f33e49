//! Additional-ingredient editor: a committed list plus one draft row.
//!
//! The draft only commits when both name and dosage are non-blank; a
//! successful add resets the draft to its defaults, dropping the unit back
//! to `mg`. Dosage and daily value stay raw text throughout.

use crate::label::{AdditionalIngredient, Unit};

#[derive(Debug, Clone, Default)]
pub struct IngredientEditor {
    items: Vec<AdditionalIngredient>,
    draft: AdditionalIngredient,
}

impl IngredientEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from stored rows; the draft starts fresh.
    pub fn seed(items: Vec<AdditionalIngredient>) -> Self {
        Self { items, draft: AdditionalIngredient::default() }
    }

    pub fn items(&self) -> &[AdditionalIngredient] {
        &self.items
    }

    pub fn draft(&self) -> &AdditionalIngredient {
        &self.draft
    }

    pub fn set_draft_name(&mut self, value: impl Into<String>) -> &AdditionalIngredient {
        self.draft.name = value.into();
        &self.draft
    }

    pub fn set_draft_dosage(&mut self, value: impl Into<String>) -> &AdditionalIngredient {
        self.draft.dosage = value.into();
        &self.draft
    }

    pub fn set_draft_unit(&mut self, unit: Unit) -> &AdditionalIngredient {
        self.draft.unit = unit;
        &self.draft
    }

    pub fn set_draft_daily_value(&mut self, value: impl Into<String>) -> &AdditionalIngredient {
        self.draft.daily_value = value.into();
        &self.draft
    }

    /// Whether the draft is committable: name and dosage both non-blank.
    pub fn can_add(&self) -> bool {
        !self.draft.name.trim().is_empty() && !self.draft.dosage.trim().is_empty()
    }

    /// Append the draft and reset it. No-op (returns false) while the
    /// draft is incomplete; the draft is kept untouched in that case.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        let committed = std::mem::take(&mut self.draft);
        self.items.push(committed);
        true
    }

    pub fn set_name(&mut self, index: usize, value: impl Into<String>) -> &[AdditionalIngredient] {
        if let Some(item) = self.items.get_mut(index) {
            item.name = value.into();
        }
        &self.items
    }

    pub fn set_dosage(&mut self, index: usize, value: impl Into<String>) -> &[AdditionalIngredient] {
        if let Some(item) = self.items.get_mut(index) {
            item.dosage = value.into();
        }
        &self.items
    }

    pub fn set_unit(&mut self, index: usize, unit: Unit) -> &[AdditionalIngredient] {
        if let Some(item) = self.items.get_mut(index) {
            item.unit = unit;
        }
        &self.items
    }

    pub fn set_daily_value(&mut self, index: usize, value: impl Into<String>) -> &[AdditionalIngredient] {
        if let Some(item) = self.items.get_mut(index) {
            item.daily_value = value.into();
        }
        &self.items
    }

    /// Delete by position, keeping the order of the rest. Out-of-range is
    /// a no-op.
    pub fn remove(&mut self, index: usize) -> &[AdditionalIngredient] {
        if index < self.items.len() {
            self.items.remove(index);
        }
        &self.items
    }
}
