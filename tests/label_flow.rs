//! # Label Flow Tests
//!
//! End-to-end scenarios through the public crate surface: compose a label
//! with the editors, persist it, reopen it, and render it for export.
//!
//! ## Test Coverage
//!
//! - **Editing**: catalog materialization, numeric coercion, the add and
//!   delete rules of the ingredient form
//! - **Persistence**: upsert-by-id save semantics, the two-step delete,
//!   recovery from a malformed blob
//! - **Rendering**: panel layout rules, placeholder policy, export magic
//!   bytes, scale behavior

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

use etiqueta::dashboard::Dashboard;
use etiqueta::export::{self, ExportFormat, EXPORT_SCALE};
use etiqueta::label::{LabelDraft, NutritionLabel, Unit, NUTRIENT_CATALOG};
use etiqueta::panel::{Panel, PanelRow, RuleWeight};
use etiqueta::render::{self, PREVIEW_SCALE};
use etiqueta::store::{JsonFileStore, LabelStore, MemoryStore};
use etiqueta::LabelSession;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
}

/// The granola bar from the sample command: serving block filled in, two
/// nutrients set, one added ingredient.
fn granola_session() -> LabelSession {
    let mut session = LabelSession::new();
    session.set_product_title("Granola Bar");

    let serving = session.serving_mut();
    serving.set_servings_per_container("6");
    serving.set_serving_size("1 bar (40g)");
    serving.set_calories("190");

    let nutrients = session.nutrients_mut();
    nutrients.set_amount(0, "8");
    nutrients.set_unit(0, Unit::G);
    nutrients.set_daily_value(0, "10");

    let ingredients = session.ingredients_mut();
    ingredients.set_draft_name("Vitamin C");
    ingredients.set_draft_dosage("60");
    ingredients.set_draft_unit(Unit::Mg);
    ingredients.set_draft_daily_value("100");
    assert!(ingredients.add());

    session
}

/// Row text flattened for containment checks, segments joined by a space.
fn row_text(row: &PanelRow) -> String {
    match row {
        PanelRow::Split { left, right, .. } => {
            let mut parts: Vec<&str> = left.iter().map(|s| s.text.as_str()).collect();
            if let Some(r) = right {
                parts.push(&r.text);
            }
            parts.join(" ")
        }
        PanelRow::Centered(s) => s.text.clone(),
        PanelRow::Footnote(text) => text.clone(),
        PanelRow::Rule(_) => String::new(),
    }
}

fn panel_texts(panel: &Panel) -> Vec<String> {
    panel.iter().map(row_text).collect()
}

// ============================================================================
// EDITING
// ============================================================================

#[test]
fn partial_draft_materializes_the_full_catalog_in_order() {
    let json = r#"{
        "productTitle": "Cereal",
        "mandatoryIngredients": [
            { "name": "Sodium", "amount": "160", "dailyValue": "7" },
            { "name": "Protein", "amount": 3, "unit": "g", "dailyValue": null }
        ]
    }"#;
    let draft: LabelDraft = serde_json::from_str(json).expect("draft");
    let view = draft.view();

    let names: Vec<&str> = view.nutrients.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, NUTRIENT_CATALOG.to_vec());

    let sodium = &view.nutrients[4];
    assert_eq!(sodium.amount, 160.0);
    assert_eq!(sodium.daily_value, 7.0);
    assert_eq!(sodium.unit, Unit::Mg);

    let protein = &view.nutrients[9];
    assert_eq!(protein.amount, 3.0);
    assert_eq!(protein.unit, Unit::G);
    assert_eq!(protein.daily_value, 0.0);

    // untouched rows default to zero amounts with the first catalog unit
    let trans_fat = &view.nutrients[2];
    assert_eq!(trans_fat.amount, 0.0);
    assert_eq!(trans_fat.unit, Unit::Mg);
}

#[test]
fn textual_numbers_coerce_before_they_reach_the_model() {
    let mut session = LabelSession::new();
    let nutrients = session.nutrients_mut();

    nutrients.set_amount(0, "12.5");
    nutrients.set_amount(1, "");
    nutrients.set_amount(2, "not a number");
    nutrients.set_daily_value(0, "15");

    let rows = session.nutrients().nutrients();
    assert_eq!(rows[0].amount, 12.5);
    assert_eq!(rows[0].daily_value, 15.0);
    assert_eq!(rows[1].amount, 0.0);
    assert_eq!(rows[2].amount, 0.0);
}

#[test]
fn ingredient_add_is_gated_until_name_and_dosage_are_set() {
    let mut session = LabelSession::new();
    let ingredients = session.ingredients_mut();

    ingredients.set_draft_name("Zinc");
    assert!(!ingredients.can_add());
    assert!(!ingredients.add());
    assert!(ingredients.items().is_empty());
    assert_eq!(ingredients.draft().name, "Zinc");

    ingredients.set_draft_dosage("11");
    assert!(ingredients.can_add());
    assert!(ingredients.add());
    assert_eq!(ingredients.items().len(), 1);
    assert_eq!(ingredients.items()[0].name, "Zinc");

    // committed draft resets to the blank form with the default unit
    assert_eq!(ingredients.draft().name, "");
    assert_eq!(ingredients.draft().unit, Unit::Mg);
}

#[test]
fn ingredient_delete_removes_exactly_the_given_position() {
    let mut session = LabelSession::new();
    let ingredients = session.ingredients_mut();
    for name in ["Zinc", "Magnesium", "Biotin"] {
        ingredients.set_draft_name(name);
        ingredients.set_draft_dosage("1");
        assert!(ingredients.add());
    }

    ingredients.remove(1);
    let names: Vec<&str> = ingredients.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Zinc", "Biotin"]);
}

// ============================================================================
// PERSISTENCE
// ============================================================================

#[test]
fn save_inserts_new_ids_and_replaces_existing_ones_in_place() {
    let store = MemoryStore::new();

    let first = granola_session().save(&store, at(10)).expect("first save");
    let second = LabelSession::new().save(&store, at(10)).expect("second save");
    assert_ne!(first.id, second.id);
    assert_eq!(store.load().expect("load").len(), 2);

    // editing the first record keeps its position and id
    let dashboard = Dashboard::new(&store);
    let mut session = dashboard.open(first.id).expect("open").expect("stored");
    session.set_product_title("Granola Bar Deluxe");
    let updated = session.save(&store, at(12)).expect("resave");

    let stored = store.load().expect("load");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[0].product_title, "Granola Bar Deluxe");
    assert_eq!(stored[1].id, second.id);
    assert_eq!(updated.created_at, at(10));
    assert_eq!(updated.updated_at, at(12));
}

#[test]
fn delete_needs_a_stage_and_a_confirm() {
    let store = MemoryStore::new();
    let kept = granola_session().save(&store, at(10)).expect("save");
    let doomed = LabelSession::new().save(&store, at(10)).expect("save");

    let mut dashboard = Dashboard::new(&store);

    // staging alone changes nothing
    dashboard.stage_delete(doomed.id);
    assert_eq!(store.load().expect("load").len(), 2);

    // cancel clears the stage, so confirm afterwards is a no-op
    dashboard.cancel_delete();
    assert!(!dashboard.confirm_delete().expect("confirm"));
    assert_eq!(store.load().expect("load").len(), 2);

    // stage again and confirm for real
    dashboard.stage_delete(doomed.id);
    assert!(dashboard.confirm_delete().expect("confirm"));
    let remaining = store.load().expect("load");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

#[test]
fn malformed_blob_reads_as_empty_and_the_next_save_recovers() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let store = JsonFileStore::new(dir.path());
    std::fs::write(store.path(), "{ \"corrupt\": [").expect("write garbage");

    assert!(store.load().expect("load").is_empty());

    let saved = granola_session().save(&store, at(10)).expect("save");
    let reloaded = store.load().expect("reload");
    assert_eq!(reloaded, vec![saved]);
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn granola_bar_composes_saves_and_exports() {
    let store = MemoryStore::new();
    let saved = granola_session().save(&store, at(9)).expect("save");

    // the record carries the full catalog with the two set rows
    assert_eq!(saved.product_title, "Granola Bar");
    assert_eq!(saved.nutrients.len(), 14);
    assert_eq!(saved.nutrients[0].amount, 8.0);
    assert_eq!(saved.nutrients[0].unit, Unit::G);
    assert_eq!(saved.extras.len(), 1);

    // the panel shows the set values, the rest as placeholders
    let reopened = Dashboard::new(&store).open(saved.id).expect("open").expect("stored");
    let panel = Panel::project(&reopened.view());
    let texts = panel_texts(&panel);
    assert_eq!(texts[0], "Nutrition Facts");
    assert!(texts.contains(&"6 servings per container".to_string()));
    assert!(texts.contains(&"Serving size 1 bar (40g)".to_string()));
    assert!(texts.contains(&"Calories 190".to_string()));
    assert!(texts.contains(&"Total Fat 8g 10%".to_string()));
    assert!(texts.contains(&"Includes Added Sugars -- --".to_string()));
    assert!(texts.contains(&"Vitamin C 60mg 100%".to_string()));

    // exports carry their format magic and fixed filenames
    let view = reopened.view();
    let pdf = export::export(&view, ExportFormat::Pdf).expect("pdf");
    assert!(pdf.bytes.starts_with(b"%PDF"));
    assert_eq!(pdf.filename, "nutrition-facts.pdf");

    let jpeg = export::export(&view, ExportFormat::Jpeg).expect("jpeg");
    assert_eq!(&jpeg.bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(jpeg.filename, "nutrition-facts.jpeg");

    let png = export::export(&view, ExportFormat::Png).expect("png");
    assert_eq!(&png.bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn editing_only_the_serving_size_changes_nothing_else() {
    let store = MemoryStore::new();
    let original = granola_session().save(&store, at(9)).expect("save");

    let mut session = Dashboard::new(&store).open(original.id).expect("open").expect("stored");
    session.serving_mut().set_serving_size("2 bars (80g)");
    let updated = session.save(&store, at(11)).expect("resave");

    let mut expected = original.clone();
    expected.serving.serving_size = "2 bars (80g)".into();
    expected.updated_at = at(11);
    assert_eq!(updated, expected);

    let stored = store.load().expect("load");
    assert_eq!(stored, vec![expected]);
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn panel_rules_place_the_bars_where_the_label_format_says() {
    let panel = Panel::project(&granola_session().view());
    let rows: Vec<&PanelRow> = panel.iter().collect();

    let after = |name: &str| -> &PanelRow {
        let idx = rows
            .iter()
            .position(|r| row_text(r).starts_with(name))
            .unwrap_or_else(|| panic!("missing row {name}"));
        rows[idx + 1]
    };

    assert_eq!(after("Serving size"), &PanelRow::Rule(RuleWeight::Heavy));
    assert_eq!(after("Calories"), &PanelRow::Rule(RuleWeight::Thick));
    assert_eq!(after("Protein"), &PanelRow::Rule(RuleWeight::Heavy));
    assert_eq!(after("Total Fat"), &PanelRow::Rule(RuleWeight::Light));

    assert!(rows.iter().any(|r| row_text(r) == "% Daily Value*"));
    assert!(matches!(rows[rows.len() - 1], PanelRow::Footnote(_)));
}

#[test]
fn export_scale_doubles_the_preview_raster_exactly() {
    let view = granola_session().view();
    let preview = render::render_image(&view, PREVIEW_SCALE);
    let full = render::render_image(&view, EXPORT_SCALE);
    assert_eq!(full.width(), preview.width() * 2);
    assert_eq!(full.height(), preview.height() * 2);
}

#[test]
fn stored_record_renders_identically_to_its_draft() {
    // what the editor previews (draft path) and what a reopened record
    // renders (store path) must be the same pixels
    let store = MemoryStore::new();
    let saved = granola_session().save(&store, at(9)).expect("save");

    let draft_json = serde_json::to_string(&saved).expect("serialize");
    let draft: LabelDraft = serde_json::from_str(&draft_json).expect("draft parse");

    let from_draft = render::render_image(&draft.view(), PREVIEW_SCALE);
    let from_record: NutritionLabel =
        store.load().expect("load").into_iter().next().expect("stored");
    let from_store = render::render_image(&from_record.view(), PREVIEW_SCALE);

    assert_eq!(from_draft.as_raw(), from_store.as_raw());
}
