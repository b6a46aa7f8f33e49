//! The mandatory-nutrient catalog.
//!
//! FDA labels carry a fixed set of nutrient rows in a fixed order. The
//! editor never lets that set shrink or reorder: whatever subset of values
//! a caller supplies, [`materialize`] always produces the full catalog.

use super::{MandatoryNutrient, Unit};

/// The 14 mandatory nutrient names, in label order.
pub const NUTRIENT_CATALOG: [&str; 14] = [
    "Total Fat",
    "Saturated Fat",
    "Trans Fat",
    "Cholesterol",
    "Sodium",
    "Total Carbohydrate",
    "Dietary Fiber",
    "Total Sugars",
    "Added Sugars",
    "Protein",
    "Vitamin D",
    "Calcium",
    "Iron",
    "Potassium",
];

impl MandatoryNutrient {
    /// The data-entry default for a catalog row: zero amount (the unset
    /// marker), the first dropdown unit, zero daily value.
    pub fn catalog_default(name: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: 0.0,
            unit: Unit::Mg,
            daily_value: 0.0,
        }
    }
}

/// Expand any partial nutrient list to exactly the 14 catalog entries, in
/// catalog order. Caller-supplied values win by name (first match); missing
/// names get [`MandatoryNutrient::catalog_default`]. Entries whose name is
/// not in the catalog are discarded. Idempotent.
pub fn materialize(partial: &[MandatoryNutrient]) -> Vec<MandatoryNutrient> {
    NUTRIENT_CATALOG
        .iter()
        .map(|name| {
            partial
                .iter()
                .find(|n| n.name == *name)
                .cloned()
                .unwrap_or_else(|| MandatoryNutrient::catalog_default(name))
        })
        .collect()
}
