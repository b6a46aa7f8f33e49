//! Numeric form-input coercion.
//!
//! Amount and daily-value fields arrive from forms as raw text (or as an
//! already-numeric JSON value). Every path into the model funnels through
//! the one coercion routine here: blank, null, or unparseable input becomes
//! `0`, never `NaN` and never an error.

use serde::{Deserialize, Serialize};

/// A numeric form field as it appears on the wire: a number, raw text,
/// or JSON `null` for a cleared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Empty,
}

impl Default for NumericInput {
    fn default() -> Self {
        NumericInput::Empty
    }
}

impl NumericInput {
    /// Collapse to a plain number per the coercion rules.
    pub fn coerce(&self) -> f64 {
        match self {
            NumericInput::Number(n) if n.is_nan() => 0.0,
            NumericInput::Number(n) => *n,
            NumericInput::Text(raw) => coerce_text(raw),
            NumericInput::Empty => 0.0,
        }
    }
}

/// Coerce raw field text to a number: trimmed-empty and unparseable input
/// both map to `0.0`.
pub fn coerce_text(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_nan() => 0.0,
        Ok(n) => n,
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_invalid_text_coerce_to_zero() {
        assert_eq!(coerce_text(""), 0.0);
        assert_eq!(coerce_text("   "), 0.0);
        assert_eq!(coerce_text("abc"), 0.0);
        assert_eq!(coerce_text("12abc"), 0.0);
        assert_eq!(coerce_text("NaN"), 0.0);
    }

    #[test]
    fn valid_text_parses() {
        assert_eq!(coerce_text("42"), 42.0);
        assert_eq!(coerce_text("42.5"), 42.5);
        assert_eq!(coerce_text(" 7 "), 7.0);
        assert_eq!(coerce_text("-3"), -3.0);
        assert_eq!(coerce_text("1e3"), 1000.0);
    }

    #[test]
    fn union_coerces_all_shapes() {
        assert_eq!(NumericInput::Number(2.5).coerce(), 2.5);
        assert_eq!(NumericInput::Number(f64::NAN).coerce(), 0.0);
        assert_eq!(NumericInput::Text("19".into()).coerce(), 19.0);
        assert_eq!(NumericInput::Text("".into()).coerce(), 0.0);
        assert_eq!(NumericInput::Empty.coerce(), 0.0);
    }

    #[test]
    fn union_deserializes_number_text_and_null() {
        let n: NumericInput = serde_json::from_str("8").unwrap();
        assert_eq!(n.coerce(), 8.0);
        let t: NumericInput = serde_json::from_str("\"8.5\"").unwrap();
        assert_eq!(t.coerce(), 8.5);
        let e: NumericInput = serde_json::from_str("null").unwrap();
        assert_eq!(e, NumericInput::Empty);
        assert_eq!(e.coerce(), 0.0);
    }
}
