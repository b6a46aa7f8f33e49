//! Mandatory-nutrient editor.
//!
//! Holds exactly the 14 catalog rows from construction on, whatever subset
//! the caller seeds it with. Amount and daily-value edits take raw field
//! text and coerce it before storing; name and unit edits store as given.

use crate::label::{coerce_text, materialize, MandatoryNutrient, Unit};

#[derive(Debug, Clone)]
pub struct NutrientEditor {
    nutrients: Vec<MandatoryNutrient>,
}

impl Default for NutrientEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NutrientEditor {
    /// All 14 rows at their data-entry defaults.
    pub fn new() -> Self {
        Self { nutrients: materialize(&[]) }
    }

    /// Resume from stored rows; missing catalog entries are filled in.
    pub fn seed(partial: &[MandatoryNutrient]) -> Self {
        Self { nutrients: materialize(partial) }
    }

    /// The full catalog, always 14 rows in catalog order.
    pub fn nutrients(&self) -> &[MandatoryNutrient] {
        &self.nutrients
    }

    /// Coerces the raw field text. Out-of-range index is a no-op.
    pub fn set_amount(&mut self, index: usize, raw: &str) -> &[MandatoryNutrient] {
        if let Some(n) = self.nutrients.get_mut(index) {
            n.amount = coerce_text(raw);
        }
        &self.nutrients
    }

    /// Coerces the raw field text. Out-of-range index is a no-op.
    pub fn set_daily_value(&mut self, index: usize, raw: &str) -> &[MandatoryNutrient] {
        if let Some(n) = self.nutrients.get_mut(index) {
            n.daily_value = coerce_text(raw);
        }
        &self.nutrients
    }

    pub fn set_unit(&mut self, index: usize, unit: Unit) -> &[MandatoryNutrient] {
        if let Some(n) = self.nutrients.get_mut(index) {
            n.unit = unit;
        }
        &self.nutrients
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> &[MandatoryNutrient] {
        if let Some(n) = self.nutrients.get_mut(index) {
            n.name = name.into();
        }
        &self.nutrients
    }
}
