//! # Saved-Label Dashboard
//!
//! The operations behind the home screen: list what is saved, open a
//! record for editing, and the two-step delete. Deleting stages an id
//! first; only an explicit confirm touches the store, and cancel leaves
//! the collection exactly as it was.

use uuid::Uuid;

use crate::error::EtiquetaError;
use crate::label::{self, LabelSummary, NutritionLabel};
use crate::session::LabelSession;
use crate::store::LabelStore;

pub struct Dashboard<'a> {
    store: &'a dyn LabelStore,
    pending_delete: Option<Uuid>,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a dyn LabelStore) -> Self {
        Self { store, pending_delete: None }
    }

    /// All saved records, in stored order.
    pub fn labels(&self) -> Result<Vec<NutritionLabel>, EtiquetaError> {
        self.store.load()
    }

    /// Line items for the list view.
    pub fn summaries(&self) -> Result<Vec<LabelSummary>, EtiquetaError> {
        Ok(self.labels()?.iter().map(LabelSummary::from).collect())
    }

    /// Open a record for editing. `None` when the id is not stored.
    pub fn open(&self, id: Uuid) -> Result<Option<LabelSession>, EtiquetaError> {
        Ok(self
            .labels()?
            .into_iter()
            .find(|l| l.id == id)
            .map(LabelSession::resume))
    }

    /// Stage a record for deletion. Nothing is removed yet.
    pub fn stage_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    /// Drop the staged id without touching the store.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Remove exactly the staged record. Returns whether a record was
    /// removed; with nothing staged (or a stale id) this is a no-op.
    pub fn confirm_delete(&mut self) -> Result<bool, EtiquetaError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(false);
        };
        let mut labels = self.store.load()?;
        if !label::remove(&mut labels, id) {
            return Ok(false);
        }
        self.store.save(&labels)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn seeded_store() -> (MemoryStore, Vec<NutritionLabel>) {
        let store = MemoryStore::new();
        let labels = vec![
            NutritionLabel::new("Granola Bar"),
            NutritionLabel::new("Yogurt"),
        ];
        store.save(&labels).expect("seed");
        (store, labels)
    }

    #[test]
    fn summaries_list_every_record() {
        let (store, labels) = seeded_store();
        let dashboard = Dashboard::new(&store);
        let summaries = dashboard.summaries().expect("summaries");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, labels[0].id);
        assert_eq!(summaries[1].product_title, "Yogurt");
    }

    #[test]
    fn open_resumes_the_matching_record() {
        let (store, labels) = seeded_store();
        let dashboard = Dashboard::new(&store);
        let session = dashboard.open(labels[1].id).expect("open").expect("found");
        assert_eq!(session.id(), Some(labels[1].id));
        assert_eq!(session.product_title(), "Yogurt");

        assert!(dashboard.open(Uuid::new_v4()).expect("open").is_none());
    }

    #[test]
    fn confirm_removes_exactly_the_staged_record() {
        let (store, labels) = seeded_store();
        let mut dashboard = Dashboard::new(&store);
        dashboard.stage_delete(labels[0].id);
        assert_eq!(dashboard.pending_delete(), Some(labels[0].id));

        assert!(dashboard.confirm_delete().expect("confirm"));
        assert_eq!(dashboard.pending_delete(), None);

        let remaining = store.load().expect("load");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, labels[1].id);
    }

    #[test]
    fn cancel_leaves_the_collection_unchanged() {
        let (store, labels) = seeded_store();
        let mut dashboard = Dashboard::new(&store);
        dashboard.stage_delete(labels[0].id);
        dashboard.cancel_delete();
        assert_eq!(dashboard.pending_delete(), None);
        assert_eq!(store.load().expect("load"), labels);

        // confirm after cancel is a no-op
        assert!(!dashboard.confirm_delete().expect("confirm"));
        assert_eq!(store.load().expect("load"), labels);
    }
}
