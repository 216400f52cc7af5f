//! Part-category extraction.

use crate::extract::patterns::CompiledPatterns;
use crate::extract::text::TextIndex;
use crate::extract::types::{CategoryExtraction, Span};
use crate::lexicon::{Axis, Lexicon};

const PK_BELT_CONFIDENCE: f64 = 0.95;
const BASE_CONFIDENCE: f64 = 0.7;
const POSITION_PENALTY: f64 = 0.2;
const LONG_TERM_BOOST: f64 = 0.1;
const EARLY_MATCH_BOOST: f64 = 0.1;
const EARLY_MATCH_CHARS: usize = 5;
const LONG_TERM_CHARS: usize = 4;
const MAX_CONFIDENCE: f64 = 0.95;

/// Finds the part category. A `N PK <length>` belt marker wins outright;
/// otherwise the highest-confidence lexicon term wins, favoring terms near
/// the start of the line where catalog entries put the part name.
pub fn extract_category(
    text: &str,
    index: &TextIndex,
    lexicon: &Lexicon,
    patterns: &CompiledPatterns,
) -> Option<CategoryExtraction> {
    if let Some(caps) = patterns.pk_belt.captures(text) {
        let whole = caps.get(0)?;
        let ribs = caps.get(1)?.as_str();
        return Some(CategoryExtraction {
            category: format!("{ribs}-Rib V-Belt"),
            term: whole.as_str().to_string(),
            confidence: PK_BELT_CONFIDENCE,
            span: Span {
                start: index.char_at(whole.start()),
                end: index.char_at(whole.end()),
            },
        });
    }

    let total = index.len().max(1) as f64;
    let mut best: Option<CategoryExtraction> = None;
    for m in lexicon.find(Axis::Category, text, index) {
        let relative = m.span.start as f64 / total;
        let mut confidence = BASE_CONFIDENCE - relative * POSITION_PENALTY;
        if m.span.end - m.span.start > LONG_TERM_CHARS {
            confidence += LONG_TERM_BOOST;
        }
        if m.span.start < EARLY_MATCH_CHARS {
            confidence += EARLY_MATCH_BOOST;
        }
        let confidence = confidence.min(MAX_CONFIDENCE).max(0.0);

        let better = match &best {
            Some(current) => confidence > current.confidence,
            None => true,
        };
        if better {
            best = Some(CategoryExtraction {
                category: m.label.to_string(),
                term: m.term.to_string(),
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

    fn setup() -> (Lexicon, CompiledPatterns) {
        (Lexicon::builtin().unwrap(), CompiledPatterns::new().unwrap())
    }

    #[test]
    fn category_at_line_start_gets_both_boosts() {
        let (lexicon, patterns) = setup();
        let text = "פ.אויר מזדה 3";
        let index = TextIndex::new(text);
        let got = extract_category(text, &index, &lexicon, &patterns).unwrap();
        assert_eq!(got.category, "Air Filter");
        assert_eq!(got.term, "פ.אויר");
        // 0.7 - 0.0 + 0.1 (6 chars) + 0.1 (starts at 0)
        assert!((got.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn pk_belt_outranks_lexicon_terms() {
        let (lexicon, patterns) = setup();
        let text = "רצועת 6PK 1230";
        let index = TextIndex::new(text);
        let got = extract_category(text, &index, &lexicon, &patterns).unwrap();
        assert_eq!(got.category, "6-Rib V-Belt");
        assert!((got.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn no_category_term_yields_none() {
        let (lexicon, patterns) = setup();
        let text = "מזדה 3 מ13";
        let index = TextIndex::new(text);
        assert!(extract_category(text, &index, &lexicon, &patterns).is_none());
    }
}
