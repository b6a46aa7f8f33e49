//! Serving-block editor: three verbatim text fields.

use crate::label::ServingInfo;

#[derive(Debug, Clone, Default)]
pub struct ServingEditor {
    serving: ServingInfo,
}

impl ServingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a stored serving block.
    pub fn seed(serving: ServingInfo) -> Self {
        Self { serving }
    }

    pub fn serving(&self) -> &ServingInfo {
        &self.serving
    }

    pub fn set_servings_per_container(&mut self, value: impl Into<String>) -> &ServingInfo {
        self.serving.servings_per_container = value.into();
        &self.serving
    }

    pub fn set_serving_size(&mut self, value: impl Into<String>) -> &ServingInfo {
        self.serving.serving_size = value.into();
        &self.serving
    }

    pub fn set_calories(&mut self, value: impl Into<String>) -> &ServingInfo {
        self.serving.calories = value.into();
        &self.serving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_store_text_verbatim() {
        let mut editor = ServingEditor::new();
        editor.set_servings_per_container("about 6");
        editor.set_serving_size("1 bar (40g)");
        let serving = editor.set_calories(" 190 ");
        assert_eq!(serving.servings_per_container, "about 6");
        assert_eq!(serving.serving_size, "1 bar (40g)");
        assert_eq!(serving.calories, " 190 ");
    }
}
