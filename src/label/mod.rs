//! # Label Data Model
//!
//! Core types for a Nutrition Facts label. All types derive
//! `Serialize + Deserialize` so the same structs work for Rust API
//! construction, the JSON HTTP API, and the persisted blob. Wire field
//! names are camelCase to stay compatible with blobs written by earlier
//! versions of the editor.
//!
//! The mandatory-nutrient catalog (the fixed 14 FDA rows) lives in
//! [`catalog`], numeric form-input coercion in [`numeric`], and the
//! wire-facing draft schema in [`draft`].

pub mod catalog;
pub mod draft;
pub mod numeric;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use catalog::{materialize, NUTRIENT_CATALOG};
pub use draft::LabelDraft;
pub use numeric::{coerce_text, NumericInput};

/// Measurement unit for nutrient amounts and ingredient dosages.
///
/// The variants are ordered as the editor's unit dropdown presents them;
/// [`Unit::default`] is the first entry (`mg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "mcg")]
    Mcg,
    #[serde(rename = "IU")]
    Iu,
}

impl Unit {
    /// All units in dropdown order.
    pub const ALL: [Unit; 4] = [Unit::Mg, Unit::G, Unit::Mcg, Unit::Iu];

    /// The wire/display form (`"mg"`, `"g"`, `"mcg"`, `"IU"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Mg => "mg",
            Unit::G => "g",
            Unit::Mcg => "mcg",
            Unit::Iu => "IU",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mg" => Ok(Unit::Mg),
            "g" => Ok(Unit::G),
            "mcg" => Ok(Unit::Mcg),
            "IU" | "iu" => Ok(Unit::Iu),
            other => Err(format!("unknown unit: {other}")),
        }
    }
}

/// The serving block at the top of the label. All three fields are free
/// text and are rendered verbatim; nothing here is ever parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServingInfo {
    #[serde(default)]
    pub servings_per_container: String,
    #[serde(default)]
    pub serving_size: String,
    #[serde(default)]
    pub calories: String,
}

/// One of the 14 mandatory nutrient rows.
///
/// `amount` and `daily_value` are numbers by the time they reach this
/// struct; the editors coerce raw form text through [`numeric::coerce_text`]
/// before storing. An amount of `0` is the unset marker and renders as the
/// placeholder on the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryNutrient {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub daily_value: f64,
}

impl MandatoryNutrient {
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit, daily_value: f64) -> Self {
        Self { name: name.into(), amount, unit, daily_value }
    }
}

/// A user-added ingredient row below the mandatory block.
///
/// Unlike [`MandatoryNutrient`], the dosage and daily value stay raw text:
/// the add form never coerces them, and the panel renders them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub daily_value: String,
}

impl Default for AdditionalIngredient {
    fn default() -> Self {
        Self {
            name: String::new(),
            dosage: String::new(),
            unit: Unit::Mg,
            daily_value: String::new(),
        }
    }
}

impl AdditionalIngredient {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        unit: Unit,
        daily_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            unit,
            daily_value: daily_value.into(),
        }
    }
}

/// A free-form titled text section composed in the editor.
///
/// Held locally by its editor; not part of the saved label record and not
/// rendered on the panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

/// A complete saved label record, one entry of the persisted collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLabel {
    pub id: Uuid,
    #[serde(default)]
    pub product_title: String,
    #[serde(default, rename = "servingInfo")]
    pub serving: ServingInfo,
    #[serde(default, rename = "mandatoryIngredients")]
    pub nutrients: Vec<MandatoryNutrient>,
    #[serde(default, rename = "additionalIngredients")]
    pub extras: Vec<AdditionalIngredient>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NutritionLabel {
    /// Fresh label with a new id, the full materialized nutrient catalog,
    /// and both timestamps set to now.
    pub fn new(product_title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            product_title: product_title.into(),
            serving: ServingInfo::default(),
            nutrients: materialize(&[]),
            extras: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Read view of everything the panel renders.
    pub fn view(&self) -> LabelView {
        LabelView {
            serving: self.serving.clone(),
            nutrients: materialize(&self.nutrients),
            extras: self.extras.clone(),
        }
    }
}

/// What the preview/export pipeline consumes: the renderable subset of a
/// label, with the nutrient list already materialized to the full catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelView {
    pub serving: ServingInfo,
    pub nutrients: Vec<MandatoryNutrient>,
    pub extras: Vec<AdditionalIngredient>,
}

/// Dashboard line item for a saved label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSummary {
    pub id: Uuid,
    pub product_title: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&NutritionLabel> for LabelSummary {
    fn from(label: &NutritionLabel) -> Self {
        Self {
            id: label.id,
            product_title: label.product_title.clone(),
            updated_at: label.updated_at,
        }
    }
}

/// Replace the entry with the same id, or append when the id is new.
/// Replacement keeps the entry's position in the collection.
pub fn upsert(labels: &mut Vec<NutritionLabel>, label: NutritionLabel) {
    match labels.iter_mut().find(|l| l.id == label.id) {
        Some(slot) => *slot = label,
        None => labels.push(label),
    }
}

/// Remove the entry with the given id. Returns whether anything was removed.
pub fn remove(labels: &mut Vec<NutritionLabel>, id: Uuid) -> bool {
    let before = labels.len();
    labels.retain(|l| l.id != id);
    labels.len() != before
}
