//! # Panel Projection
//!
//! The panel is the typed layout program between the label model and the
//! rasterizer:
//!
//! ```text
//! ┌────────────────┐     ┌────────────────┐     ┌───────────────┐
//! │ NutritionLabel │ ──► │     Panel      │ ──► │ PanelRenderer │
//! │    (model)     │     │ (Vec<PanelRow>)│     │   (pixels)    │
//! └────────────────┘     └────────────────┘     └───────────────┘
//! ```
//!
//! [`Panel::project`] encodes every layout decision of the standard FDA
//! vertical label: which names are emphasized, which indent, where each
//! rule weight goes, and how missing values read. The renderer maps rows
//! to pixels and decides nothing.
//!
//! ## Missing values
//!
//! The editors materialize every nutrient with amount `0`, so `0` is the
//! unset marker throughout: a zero amount or daily value renders as the
//! `--` placeholder, as does a blank dosage or daily value on an added
//! ingredient. The calories figure is the one exception and falls back to
//! a literal `0`.

mod rows;

pub use rows::{Panel, PanelRow, RuleWeight, Segment, TextSize};

use crate::label::{AdditionalIngredient, LabelView, MandatoryNutrient};

/// What an unset value reads as.
pub const VALUE_PLACEHOLDER: &str = "--";

/// The regulatory small print at the bottom of every label.
pub const FOOTNOTE: &str = "* The % Daily Value (DV) tells you how much a nutrient \
in a serving of food contributes to a daily diet. 2,000 calories a day is used for \
general nutrition advice.";

/// Names set in the heavy weight.
const BOLD_NAMES: [&str; 5] = [
    "Total Fat",
    "Cholesterol",
    "Sodium",
    "Total Carbohydrate",
    "Protein",
];

/// Names indented one step under their group.
const INDENTED_NAMES: [&str; 4] = ["Saturated Fat", "Trans Fat", "Dietary Fiber", "Total Sugars"];

/// Names followed by the light gray in-group separator.
const LIGHT_RULE_AFTER: [&str; 4] = ["Total Fat", "Trans Fat", "Total Carbohydrate", "Total Sugars"];

fn name_weight(name: &str) -> bool {
    BOLD_NAMES.contains(&name)
}

fn name_indent(name: &str) -> u8 {
    if name == "Added Sugars" {
        2
    } else if INDENTED_NAMES.contains(&name) {
        1
    } else {
        0
    }
}

fn rule_after(name: &str) -> RuleWeight {
    if name == "Protein" {
        RuleWeight::Heavy
    } else if LIGHT_RULE_AFTER.contains(&name) {
        RuleWeight::Light
    } else {
        RuleWeight::Thin
    }
}

fn display_name(name: &str) -> String {
    if name == "Added Sugars" {
        format!("Includes {name}")
    } else {
        name.to_string()
    }
}

fn amount_text(n: &MandatoryNutrient) -> String {
    if n.amount == 0.0 {
        VALUE_PLACEHOLDER.to_string()
    } else {
        format!("{}{}", n.amount, n.unit)
    }
}

fn daily_value_text(n: &MandatoryNutrient) -> String {
    if n.daily_value == 0.0 {
        VALUE_PLACEHOLDER.to_string()
    } else {
        format!("{}%", n.daily_value)
    }
}

fn dosage_text(extra: &AdditionalIngredient) -> String {
    if extra.dosage.trim().is_empty() {
        VALUE_PLACEHOLDER.to_string()
    } else {
        format!("{}{}", extra.dosage, extra.unit)
    }
}

fn extra_daily_value_text(extra: &AdditionalIngredient) -> String {
    if extra.daily_value.trim().is_empty() {
        VALUE_PLACEHOLDER.to_string()
    } else {
        format!("{}%", extra.daily_value)
    }
}

fn nutrient_row(n: &MandatoryNutrient) -> PanelRow {
    let name = Segment {
        text: display_name(&n.name),
        size: TextSize::Small,
        bold: name_weight(&n.name),
    };
    PanelRow::Split {
        indent: name_indent(&n.name),
        left: vec![name, Segment::regular(amount_text(n), TextSize::Small)],
        right: Some(Segment::bold(daily_value_text(n), TextSize::Small)),
    }
}

fn extra_row(extra: &AdditionalIngredient) -> PanelRow {
    PanelRow::Split {
        indent: 0,
        left: vec![
            Segment::regular(&extra.name, TextSize::Small),
            Segment::regular(dosage_text(extra), TextSize::Small),
        ],
        right: Some(Segment::bold(extra_daily_value_text(extra), TextSize::Small)),
    }
}

impl Panel {
    /// Project a label view into the full row program.
    ///
    /// Styling is keyed by row name, so a renamed nutrient keeps its
    /// position but falls back to the default weight, indent, and rule.
    pub fn project(view: &LabelView) -> Panel {
        let mut panel = Panel::new();

        // title block
        panel.push(PanelRow::Centered(Segment::bold("Nutrition Facts", TextSize::Display)));
        panel.push(PanelRow::Rule(RuleWeight::Hairline));

        // serving block
        let servings = view.serving.servings_per_container.trim();
        let servings_line = if servings.is_empty() {
            "X servings per container".to_string()
        } else {
            format!("{servings} servings per container")
        };
        panel.push(PanelRow::Split {
            indent: 0,
            left: vec![Segment::regular(servings_line, TextSize::Body)],
            right: None,
        });
        let serving_size = view.serving.serving_size.trim();
        let serving_size_text = if serving_size.is_empty() {
            VALUE_PLACEHOLDER.to_string()
        } else {
            serving_size.to_string()
        };
        panel.push(PanelRow::Split {
            indent: 0,
            left: vec![Segment::bold("Serving size", TextSize::Body)],
            right: Some(Segment::bold(serving_size_text, TextSize::Body)),
        });
        panel.push(PanelRow::Rule(RuleWeight::Heavy));

        // calories block
        panel.push(PanelRow::Split {
            indent: 0,
            left: vec![Segment::bold("Amount per serving", TextSize::Small)],
            right: None,
        });
        let calories = view.serving.calories.trim();
        let calories_text = if calories.is_empty() { "0".to_string() } else { calories.to_string() };
        panel.push(PanelRow::Split {
            indent: 0,
            left: vec![Segment::bold("Calories", TextSize::Heading)],
            right: Some(Segment::bold(calories_text, TextSize::Display)),
        });
        panel.push(PanelRow::Rule(RuleWeight::Thick));

        // daily value header
        panel.push(PanelRow::Split {
            indent: 0,
            left: Vec::new(),
            right: Some(Segment::bold("% Daily Value*", TextSize::Small)),
        });
        panel.push(PanelRow::Rule(RuleWeight::Thin));

        // nutrient rows
        let last = view.nutrients.len().saturating_sub(1);
        for (i, nutrient) in view.nutrients.iter().enumerate() {
            panel.push(nutrient_row(nutrient));
            if i == last && view.extras.is_empty() {
                break;
            }
            panel.push(PanelRow::Rule(rule_after(&nutrient.name)));
        }

        // added ingredients
        let last_extra = view.extras.len().saturating_sub(1);
        for (i, extra) in view.extras.iter().enumerate() {
            panel.push(extra_row(extra));
            if i != last_extra {
                panel.push(PanelRow::Rule(RuleWeight::Thin));
            }
        }

        // footnote
        panel.push(PanelRow::Rule(RuleWeight::Medium));
        panel.push(PanelRow::Footnote(FOOTNOTE.to_string()));

        panel
    }
}
