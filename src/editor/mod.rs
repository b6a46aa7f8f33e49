//! # Form Editors
//!
//! One editor per form section of the composer. Each editor owns its slice
//! of state and mutates in place; every mutator returns the full updated
//! value so the owner always sees the complete record after any change,
//! never a delta.
//!
//! The contracts that matter live here: the nutrient editor always holds
//! the full materialized catalog, numeric text is coerced before it is
//! stored, the ingredient add button is a no-op until name and dosage are
//! filled in, and the section editor stages a draft with edit-by-index.

mod ingredients;
mod nutrients;
mod sections;
mod serving;

pub use ingredients::IngredientEditor;
pub use nutrients::NutrientEditor;
pub use sections::SectionEditor;
pub use serving::ServingEditor;
