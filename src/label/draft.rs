//! Wire-facing draft schema for the label API.
//!
//! The editor posts its form state as a draft: fields may be missing,
//! nutrient lists may be partial, and numeric fields may still be raw text
//! or `null`. Resolving a draft materializes the catalog and coerces every
//! numeric field, so nothing downstream ever sees a partial or textual
//! value.

use serde::Deserialize;
use uuid::Uuid;

use super::numeric::NumericInput;
use super::{
    catalog, AdditionalIngredient, LabelView, MandatoryNutrient, ServingInfo, Unit,
};

/// A label as posted by the editor: optional id, everything else optional
/// form state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDraft {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub product_title: String,
    #[serde(default, rename = "servingInfo")]
    pub serving: ServingInfo,
    #[serde(default, rename = "mandatoryIngredients")]
    pub nutrients: Vec<NutrientDraft>,
    #[serde(default, rename = "additionalIngredients")]
    pub extras: Vec<AdditionalIngredient>,
}

/// One nutrient row as posted: amount and daily value still in form shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientDraft {
    pub name: String,
    #[serde(default)]
    pub amount: NumericInput,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub daily_value: NumericInput,
}

impl NutrientDraft {
    fn resolve(&self) -> MandatoryNutrient {
        MandatoryNutrient {
            name: self.name.clone(),
            amount: self.amount.coerce(),
            unit: self.unit,
            daily_value: self.daily_value.coerce(),
        }
    }
}

impl LabelDraft {
    /// Coerce the nutrient rows and expand them to the full catalog.
    pub fn resolved_nutrients(&self) -> Vec<MandatoryNutrient> {
        let resolved: Vec<MandatoryNutrient> =
            self.nutrients.iter().map(NutrientDraft::resolve).collect();
        catalog::materialize(&resolved)
    }

    /// The renderable view of this draft, ready for the panel.
    pub fn view(&self) -> LabelView {
        LabelView {
            serving: self.serving.clone(),
            nutrients: self.resolved_nutrients(),
            extras: self.extras.clone(),
        }
    }
}
