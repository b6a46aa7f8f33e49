//! Custom-section editor: staged draft with edit-by-index.
//!
//! The committed list is held locally for the editor's lifetime; it is not
//! part of the saved label record and the panel does not render it.

use crate::label::CustomSection;

#[derive(Debug, Clone, Default)]
pub struct SectionEditor {
    sections: Vec<CustomSection>,
    draft: CustomSection,
    editing: Option<usize>,
}

impl SectionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[CustomSection] {
        &self.sections
    }

    pub fn draft(&self) -> &CustomSection {
        &self.draft
    }

    /// The index being edited, if the draft was loaded from an entry.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn set_draft_title(&mut self, value: impl Into<String>) -> &CustomSection {
        self.draft.title = value.into();
        &self.draft
    }

    pub fn set_draft_content(&mut self, value: impl Into<String>) -> &CustomSection {
        self.draft.content = value.into();
        &self.draft
    }

    /// Whether the draft is committable: title and content both non-blank.
    pub fn can_commit(&self) -> bool {
        !self.draft.title.trim().is_empty() && !self.draft.content.trim().is_empty()
    }

    /// Commit the draft: replaces the edited entry when in edit mode, else
    /// appends. Clears the draft and edit mode. No-op (returns false)
    /// while the draft is incomplete.
    pub fn commit(&mut self) -> bool {
        if !self.can_commit() {
            return false;
        }
        let entry = std::mem::take(&mut self.draft);
        match self.editing.take() {
            Some(index) => match self.sections.get_mut(index) {
                Some(slot) => *slot = entry,
                None => self.sections.push(entry),
            },
            None => self.sections.push(entry),
        }
        true
    }

    /// Load an entry into the draft for editing. Out-of-range returns
    /// false and changes nothing.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        match self.sections.get(index) {
            Some(entry) => {
                self.draft = entry.clone();
                self.editing = Some(index);
                true
            }
            None => false,
        }
    }

    /// Delete by position. Removing the entry being edited invalidates
    /// edit mode (the draft text is kept, a later commit appends);
    /// removing an earlier entry shifts the edit index so it still points
    /// at the same entry.
    pub fn remove(&mut self, index: usize) -> &[CustomSection] {
        if index < self.sections.len() {
            self.sections.remove(index);
            self.editing = match self.editing {
                Some(e) if e == index => None,
                Some(e) if e > index => Some(e - 1),
                other => other,
            };
        }
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(title: &str, content: &str) -> CustomSection {
        CustomSection { title: title.into(), content: content.into() }
    }

    #[test]
    fn commit_is_gated_on_both_fields() {
        let mut editor = SectionEditor::new();
        assert!(!editor.commit());
        editor.set_draft_title("Allergens");
        assert!(!editor.commit());
        editor.set_draft_content("  ");
        assert!(!editor.commit());
        editor.set_draft_content("Contains peanuts.");
        assert!(editor.commit());
        assert_eq!(editor.sections(), &[section("Allergens", "Contains peanuts.")]);
        assert_eq!(editor.draft(), &CustomSection::default());
    }

    #[test]
    fn edit_replaces_in_place_and_clears_edit_mode() {
        let mut editor = SectionEditor::new();
        editor.set_draft_title("Storage");
        editor.set_draft_content("Keep cool.");
        editor.commit();
        editor.set_draft_title("Notes");
        editor.set_draft_content("Shake well.");
        editor.commit();

        assert!(editor.begin_edit(0));
        assert_eq!(editor.draft().title, "Storage");
        editor.set_draft_content("Keep cool and dry.");
        assert!(editor.commit());

        assert_eq!(editor.editing(), None);
        assert_eq!(
            editor.sections(),
            &[section("Storage", "Keep cool and dry."), section("Notes", "Shake well.")]
        );
    }

    #[test]
    fn begin_edit_out_of_range_is_refused() {
        let mut editor = SectionEditor::new();
        assert!(!editor.begin_edit(0));
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn removing_the_edited_entry_invalidates_edit_mode() {
        let mut editor = SectionEditor::new();
        editor.set_draft_title("A");
        editor.set_draft_content("a");
        editor.commit();
        editor.begin_edit(0);
        editor.remove(0);

        assert_eq!(editor.editing(), None);
        assert_eq!(editor.draft().title, "A");

        // a later commit appends as a fresh entry
        assert!(editor.commit());
        assert_eq!(editor.sections().len(), 1);
    }

    #[test]
    fn removing_an_earlier_entry_shifts_the_edit_index() {
        let mut editor = SectionEditor::new();
        for (t, c) in [("A", "a"), ("B", "b"), ("C", "c")] {
            editor.set_draft_title(t);
            editor.set_draft_content(c);
            editor.commit();
        }
        editor.begin_edit(2);
        editor.remove(0);
        assert_eq!(editor.editing(), Some(1));

        editor.set_draft_content("c2");
        editor.commit();
        assert_eq!(editor.sections()[1], section("C", "c2"));
    }
}
