//! Position (Front/Rear/Upper/Lower) and side (Left/Right) extraction.
//!
//! The two fields are independent: "דסקיות קדמי ימין" carries both a
//! position and a side, and either may appear alone.

use smallvec::SmallVec;

use crate::extract::text::{contains_any, TextIndex};
use crate::extract::types::PlacementExtraction;
use crate::lexicon::{Axis, Lexicon};

const MARKER_CONFIDENCE: f64 = 0.6;
const BOUNDARY_BOOST: f64 = 0.2;
const CONTEXT_BOOST: f64 = 0.2;
const MARKER_CAP: f64 = 0.95;
const MULTI_MARKER_BONUS: f64 = 0.05;
const FIELD_CAP: f64 = 0.95;

/// Parts where front/rear actually distinguishes the product.
const POSITION_CONTEXT: &[&str] = &["דסקיות", "צלחות", "בולם", "משולש"];
/// Parts where left/right actually distinguishes the product.
const SIDE_CONTEXT: &[&str] = &["משולש", "בולם", "ת.מנוע", "קצה הגה"];

pub fn extract_position(
    text: &str,
    index: &TextIndex,
    lexicon: &Lexicon,
) -> Option<PlacementExtraction> {
    extract_markers(text, index, lexicon, Axis::Position, POSITION_CONTEXT)
}

pub fn extract_side(
    text: &str,
    index: &TextIndex,
    lexicon: &Lexicon,
) -> Option<PlacementExtraction> {
    extract_markers(text, index, lexicon, Axis::Side, SIDE_CONTEXT)
}

fn extract_markers(
    text: &str,
    index: &TextIndex,
    lexicon: &Lexicon,
    axis: Axis,
    context: &[&str],
) -> Option<PlacementExtraction> {
    let has_context = contains_any(text, context);

    // Four position markers exist in total, so this never spills.
    let mut labels: SmallVec<[&str; 4]> = SmallVec::new();
    let mut scores: SmallVec<[f64; 4]> = SmallVec::new();
    for m in lexicon.find(axis, text, index) {
        if labels.contains(&m.label) {
            continue;
        }
        let mut confidence = MARKER_CONFIDENCE;
        if index.is_word(m.span.start, m.span.end) {
            confidence += BOUNDARY_BOOST;
        }
        if has_context {
            confidence += CONTEXT_BOOST;
        }
        labels.push(m.label);
        scores.push(confidence.min(MARKER_CAP));
    }

    if labels.is_empty() {
        return None;
    }

    let mut confidence = scores.iter().sum::<f64>() / scores.len() as f64;
    if labels.len() > 1 {
        confidence += MULTI_MARKER_BONUS;
    }

    Some(PlacementExtraction {
        value: labels.join("/"),
        confidence: confidence.min(FIELD_CAP),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(text: &str) -> Option<PlacementExtraction> {
        let lexicon = Lexicon::builtin().unwrap();
        let index = TextIndex::new(text);
        extract_position(text, &index, &lexicon)
    }

    fn side(text: &str) -> Option<PlacementExtraction> {
        let lexicon = Lexicon::builtin().unwrap();
        let index = TextIndex::new(text);
        extract_side(text, &index, &lexicon)
    }

    #[test]
    fn position_with_brake_context() {
        let got = position("דסקיות קדמי אוקטביה").unwrap();
        assert_eq!(got.value, "Front");
        // 0.6 + 0.2 boundary + 0.2 context, capped at 0.95
        assert!((got.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn position_without_context() {
        let got = position("קדמי משהו").unwrap();
        assert_eq!(got.value, "Front");
        assert!((got.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn multiple_markers_joined() {
        let got = position("בולם קדמי אחורי").unwrap();
        assert_eq!(got.value, "Front/Rear");
        // both markers 0.95, average 0.95 + 0.05 capped back to 0.95
        assert!((got.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn side_is_independent_of_position() {
        let got = side("משולש קדמי ימין").unwrap();
        assert_eq!(got.value, "Right");
        let pos = position("משולש קדמי ימין").unwrap();
        assert_eq!(pos.value, "Front");
    }

    #[test]
    fn no_marker_yields_none() {
        assert!(position("פ.אויר קורולה").is_none());
        assert!(side("פ.אויר קורולה").is_none());
    }
}
