//! Drive-type extraction (`4x4` / `4x2`).

use partlex_core::types::DriveType;

use crate::extract::text::{contains_any, TextIndex};
use crate::extract::types::DriveExtraction;
use crate::lexicon::{Axis, Lexicon};

const STANDALONE_CONFIDENCE: f64 = 0.9;
const EMBEDDED_CONFIDENCE: f64 = 0.7;
const CONTEXT_BOOST: f64 = 0.1;

/// Models that overwhelmingly ship as 4x4 in this catalog. Their presence
/// backs up a drive marker found elsewhere in the line.
const FOUR_WHEEL_CONTEXT: &[&str] = &["היילקס", "ויגו", "דימקס", "ראב 4", "לנדקרוזר"];

pub fn extract_drive(text: &str, index: &TextIndex, lexicon: &Lexicon) -> Option<DriveExtraction> {
    let mut best: Option<DriveExtraction> = None;
    for m in lexicon.find(Axis::Drive, text, index) {
        let drive = match m.label {
            "Four-wheel drive" => DriveType::FourWheel,
            _ => DriveType::TwoWheel,
        };
        let mut confidence = if index.is_word(m.span.start, m.span.end) {
            STANDALONE_CONFIDENCE
        } else {
            EMBEDDED_CONFIDENCE
        };
        if contains_any(text, FOUR_WHEEL_CONTEXT) {
            confidence = (confidence + CONTEXT_BOOST).min(1.0);
        }
        let better = match &best {
            Some(current) => confidence > current.confidence,
            None => true,
        };
        if better {
            best = Some(DriveExtraction {
                drive,
                confidence,
                span: m.span,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<DriveExtraction> {
        let lexicon = Lexicon::builtin().unwrap();
        let index = TextIndex::new(text);
        extract_drive(text, &index, &lexicon)
    }

    #[test]
    fn standalone_marker() {
        let got = extract("ציריה 4x4 היילקס").unwrap();
        assert_eq!(got.drive, DriveType::FourWheel);
        // 0.9 standalone + 0.1 Hilux context
        assert!((got.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn embedded_marker_scores_lower() {
        let got = extract("גל הינע A4x4B").unwrap();
        assert_eq!(got.drive, DriveType::FourWheel);
        assert!((got.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn two_wheel_marker() {
        let got = extract("ציריה 4x2 ויגו").unwrap();
        assert_eq!(got.drive, DriveType::TwoWheel);
    }

    #[test]
    fn no_marker_no_drive() {
        assert!(extract("פ.אויר קורולה").is_none());
    }
}
