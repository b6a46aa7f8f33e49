//! # Composition Session
//!
//! [`LabelSession`] is the single source of truth while one label is being
//! composed. It owns the four form editors plus the record identity (the
//! id and the original creation time) and turns the combined editor state
//! into a saved record.
//!
//! Saving is an upsert: a session without an id gets a fresh one and
//! inserts; a session with an id replaces the stored record in place. The
//! stored creation time survives updates; only `updated_at` is restamped.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::editor::{IngredientEditor, NutrientEditor, SectionEditor, ServingEditor};
use crate::error::EtiquetaError;
use crate::label::{self, LabelDraft, LabelView, NutritionLabel};
use crate::store::LabelStore;

#[derive(Debug, Clone, Default)]
pub struct LabelSession {
    id: Option<Uuid>,
    created_at: Option<DateTime<Utc>>,
    product_title: String,
    serving: ServingEditor,
    nutrients: NutrientEditor,
    ingredients: IngredientEditor,
    sections: SectionEditor,
}

impl LabelSession {
    /// Blank session: no id, empty title, the full default nutrient
    /// catalog, no extras.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopen a stored record for editing.
    pub fn resume(label: NutritionLabel) -> Self {
        Self {
            id: Some(label.id),
            created_at: Some(label.created_at),
            product_title: label.product_title,
            serving: ServingEditor::seed(label.serving),
            nutrients: NutrientEditor::seed(&label.nutrients),
            ingredients: IngredientEditor::seed(label.extras),
            sections: SectionEditor::new(),
        }
    }

    /// Build a session from a posted draft. The creation time is unknown
    /// here; [`LabelSession::save`] recovers it from the store when the
    /// draft id matches an existing record.
    pub fn from_draft(draft: LabelDraft) -> Self {
        let nutrients = draft.resolved_nutrients();
        Self {
            id: draft.id,
            created_at: None,
            product_title: draft.product_title,
            serving: ServingEditor::seed(draft.serving),
            nutrients: NutrientEditor::seed(&nutrients),
            ingredients: IngredientEditor::seed(draft.extras),
            sections: SectionEditor::new(),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn product_title(&self) -> &str {
        &self.product_title
    }

    pub fn set_product_title(&mut self, title: impl Into<String>) {
        self.product_title = title.into();
    }

    pub fn serving(&self) -> &ServingEditor {
        &self.serving
    }

    pub fn serving_mut(&mut self) -> &mut ServingEditor {
        &mut self.serving
    }

    pub fn nutrients(&self) -> &NutrientEditor {
        &self.nutrients
    }

    pub fn nutrients_mut(&mut self) -> &mut NutrientEditor {
        &mut self.nutrients
    }

    pub fn ingredients(&self) -> &IngredientEditor {
        &self.ingredients
    }

    pub fn ingredients_mut(&mut self) -> &mut IngredientEditor {
        &mut self.ingredients
    }

    pub fn sections(&self) -> &SectionEditor {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionEditor {
        &mut self.sections
    }

    /// The renderable view of the current editor state.
    pub fn view(&self) -> LabelView {
        LabelView {
            serving: self.serving.serving().clone(),
            nutrients: self.nutrients.nutrients().to_vec(),
            extras: self.ingredients.items().to_vec(),
        }
    }

    /// Freeze the current state into a record, assigning a fresh id on
    /// first call and stamping `updated_at` with `now`.
    pub fn snapshot(&mut self, now: DateTime<Utc>) -> NutritionLabel {
        let id = *self.id.get_or_insert_with(Uuid::new_v4);
        let created_at = *self.created_at.get_or_insert(now);
        NutritionLabel {
            id,
            product_title: self.product_title.clone(),
            serving: self.serving.serving().clone(),
            nutrients: self.nutrients.nutrients().to_vec(),
            extras: self.ingredients.items().to_vec(),
            created_at,
            updated_at: now,
        }
    }

    /// Snapshot and upsert into the store. When a record with this id is
    /// already stored its creation time wins, so updates never rewrite it.
    pub fn save(
        &mut self,
        store: &dyn LabelStore,
        now: DateTime<Utc>,
    ) -> Result<NutritionLabel, EtiquetaError> {
        let mut snapshot = self.snapshot(now);
        let mut labels = store.load()?;
        if let Some(existing) = labels.iter().find(|l| l.id == snapshot.id) {
            snapshot.created_at = existing.created_at;
        }
        label::upsert(&mut labels, snapshot.clone());
        store.save(&labels)?;
        self.created_at = Some(snapshot.created_at);
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn first_save_inserts_with_fresh_id_and_timestamps() {
        let store = MemoryStore::new();
        let mut session = LabelSession::new();
        session.set_product_title("Granola Bar");

        let saved = session.save(&store, at(9)).expect("save");
        assert_eq!(saved.created_at, at(9));
        assert_eq!(saved.updated_at, at(9));
        assert_eq!(session.id(), Some(saved.id));

        let stored = store.load().expect("load");
        assert_eq!(stored, vec![saved]);
    }

    #[test]
    fn second_save_updates_in_place() {
        let store = MemoryStore::new();
        let mut session = LabelSession::new();
        session.set_product_title("v1");
        let first = session.save(&store, at(9)).expect("save");

        session.set_product_title("v2");
        let second = session.save(&store, at(10)).expect("save");

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, at(9));
        assert_eq!(second.updated_at, at(10));

        let stored = store.load().expect("load");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].product_title, "v2");
    }

    #[test]
    fn draft_save_recovers_creation_time_from_store() {
        let store = MemoryStore::new();
        let mut original = LabelSession::new();
        original.set_product_title("stored");
        let stored = original.save(&store, at(8)).expect("save");

        let draft = LabelDraft { id: Some(stored.id), product_title: "edited".into(), ..Default::default() };
        let mut session = LabelSession::from_draft(draft);
        let saved = session.save(&store, at(11)).expect("save");

        assert_eq!(saved.id, stored.id);
        assert_eq!(saved.created_at, at(8));
        assert_eq!(saved.updated_at, at(11));
        assert_eq!(store.load().expect("load").len(), 1);
    }

    #[test]
    fn editing_one_field_leaves_the_rest_untouched() {
        let store = MemoryStore::new();
        let mut session = LabelSession::new();
        session.set_product_title("Granola Bar");
        session.serving_mut().set_serving_size("1 bar (40g)");
        session.serving_mut().set_calories("190");
        session.nutrients_mut().set_amount(0, "8");
        let first = session.save(&store, at(9)).expect("save");

        let mut reopened = LabelSession::resume(first.clone());
        reopened.serving_mut().set_serving_size("2 bars (80g)");
        let second = reopened.save(&store, at(12)).expect("save");

        assert_eq!(second.id, first.id);
        assert_eq!(second.serving.serving_size, "2 bars (80g)");
        assert_eq!(second.serving.calories, first.serving.calories);
        assert_eq!(second.nutrients, first.nutrients);
        assert_eq!(second.extras, first.extras);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at > first.updated_at);
    }

    #[test]
    fn view_reflects_editor_state() {
        let mut session = LabelSession::new();
        session.nutrients_mut().set_amount(9, "12");
        session.ingredients_mut().set_draft_name("Vitamin C");
        session.ingredients_mut().set_draft_dosage("60");
        assert!(session.ingredients_mut().add());

        let view = session.view();
        assert_eq!(view.nutrients.len(), 14);
        assert_eq!(view.nutrients[9].amount, 12.0);
        assert_eq!(view.extras.len(), 1);
    }
}
