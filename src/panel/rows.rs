//! # Panel Rows
//!
//! The row types that make up a projected panel. Each row is one
//! horizontal band of the label. Rows carry typed layout intent only
//! (emphasis, size, indent level, rule weight); pixel values belong to
//! the renderer.

/// Text size step. The renderer maps each step to a bitmap font and
/// scale; the projection only picks the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextSize {
    /// Nutrient rows, headers like `% Daily Value*`, the footnote.
    Small,
    /// The serving block lines.
    #[default]
    Body,
    /// The `Calories` word.
    Heading,
    /// The title and the calories figure.
    Display,
}

/// Horizontal rule weight, from the hairline under the title to the heavy
/// bars that close the serving block and the Protein row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleWeight {
    /// 1px gray: under the title.
    Hairline,
    /// 2px gray: the in-group nutrient separators.
    Light,
    /// 1px black: the default row separator.
    Thin,
    /// 5px black: above the footnote.
    Medium,
    /// 6px black: below the calories block.
    Thick,
    /// 10px black: below the serving block and after Protein.
    Heavy,
}

/// One styled piece of row text.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub size: TextSize,
    pub bold: bool,
}

impl Segment {
    pub fn regular(text: impl Into<String>, size: TextSize) -> Self {
        Self { text: text.into(), size, bold: false }
    }

    pub fn bold(text: impl Into<String>, size: TextSize) -> Self {
        Self { text: text.into(), size, bold: true }
    }
}

/// One horizontal band of the label.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRow {
    /// Centered text spanning the full width.
    Centered(Segment),
    /// Left-aligned segments drawn in order with a word gap, plus an
    /// optional right-aligned segment on the same baseline. `indent` is
    /// in steps, not pixels.
    Split {
        indent: u8,
        left: Vec<Segment>,
        right: Option<Segment>,
    },
    /// Full-width horizontal rule.
    Rule(RuleWeight),
    /// Word-wrapped justified small print.
    Footnote(String),
}

/// A projected panel: the full row program for one label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    pub rows: Vec<PanelRow>,
}

impl Panel {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn push(&mut self, row: PanelRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelRow> {
        self.rows.iter()
    }
}

impl FromIterator<PanelRow> for Panel {
    fn from_iter<T: IntoIterator<Item = PanelRow>>(iter: T) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

impl IntoIterator for Panel {
    type Item = PanelRow;
    type IntoIter = std::vec::IntoIter<PanelRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Panel {
    type Item = &'a PanelRow;
    type IntoIter = std::slice::Iter<'a, PanelRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_collects_rows() {
        let panel: Panel = [
            PanelRow::Centered(Segment::bold("Nutrition Facts", TextSize::Display)),
            PanelRow::Rule(RuleWeight::Hairline),
        ]
        .into_iter()
        .collect();
        assert_eq!(panel.len(), 2);
        assert!(!panel.is_empty());
        assert!(matches!(panel.rows[1], PanelRow::Rule(RuleWeight::Hairline)));
    }

    #[test]
    fn segment_constructors_set_weight() {
        assert!(Segment::bold("x", TextSize::Small).bold);
        assert!(!Segment::regular("x", TextSize::Small).bold);
    }
}
