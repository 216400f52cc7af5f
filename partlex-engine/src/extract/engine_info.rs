//! Engine code, displacement, and fuel-type extraction.

use partlex_core::config::EngineConfig;
use partlex_core::types::EngineType;

use crate::extract::patterns::CompiledPatterns;
use crate::extract::text::{contains_any, TextIndex};
use crate::extract::types::{DisplacementMatch, EngineCodeMatch, EngineExtraction, Span};
use crate::lexicon::{Axis, Lexicon};

const KNOWN_CODE_CONFIDENCE: f64 = 0.9;
const DISPLACEMENT_ADJACENT_CONFIDENCE: f64 = 0.95;
const AMBIGUOUS_CODE_CONFIDENCE: f64 = 0.7;
const GENERIC_CODE_CONFIDENCE: f64 = 0.6;
const GENERIC_NEAR_DISPLACEMENT_CONFIDENCE: f64 = 0.8;

const DISPLACEMENT_CONFIDENCE: f64 = 0.6;
const ENGINE_CONTEXT_BOOST: f64 = 0.2;
const NEAR_CODE_BOOST: f64 = 0.3;
const COMMON_DISPLACEMENT_BOOST: f64 = 0.1;

/// Words that make a bare decimal an engine displacement rather than a
/// measurement.
const ENGINE_CONTEXT_TERMS: &[&str] = &["נפח", "מנוע", "ליטר"];

/// Displacements that actually occur in the catalog. Anything else in range
/// is still accepted, just scored lower.
const COMMON_DISPLACEMENTS: &[f64] = &[
    1.0, 1.2, 1.3, 1.4, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.5, 2.7, 3.0, 3.5, 4.0, 5.0, 6.0,
];

/// Uppercase tokens that fit the generic code shape but never are one.
const GENERIC_CODE_BLOCKLIST: &[&str] = &[
    "ABS", "VRS", "GMT", "LED", "SX4", "I20", "I30", "I35", "I10", "I25", "CX5",
];

pub fn extract_engine(
    text: &str,
    index: &TextIndex,
    lexicon: &Lexicon,
    patterns: &CompiledPatterns,
    config: &EngineConfig,
) -> EngineExtraction {
    let displacements = displacement_candidates(text, index, patterns, config);

    let code = known_code(text, index, lexicon, &displacements, config)
        .or_else(|| generic_code(text, index, patterns, &displacements, config));

    let displacement = best_displacement(text, &displacements, code.as_ref(), config);
    let engine_type = engine_type(text, code.as_ref());

    EngineExtraction {
        code,
        displacement,
        engine_type,
    }
}

fn displacement_candidates(
    text: &str,
    index: &TextIndex,
    patterns: &CompiledPatterns,
    config: &EngineConfig,
) -> Vec<(f64, Span)> {
    let mut out = Vec::new();
    for m in patterns.displacement.find_iter(text) {
        let span = Span {
            start: index.char_at(m.start()),
            end: index.char_at(m.end()),
        };
        // Reject "1.6" glued to more digits, as in part numbers like 11.65.
        let digit_before =
            span.start > 0 && index.char(span.start - 1).is_some_and(|c| c.is_ascii_digit());
        let digit_after = index.char(span.end).is_some_and(|c| c.is_ascii_digit());
        if digit_before || digit_after {
            continue;
        }
        let Ok(liters) = m.as_str().parse::<f64>() else {
            continue;
        };
        if liters >= config.displacement_min && liters <= config.displacement_max {
            out.push((liters, span));
        }
    }
    out
}

fn known_code(
    text: &str,
    index: &TextIndex,
    lexicon: &Lexicon,
    displacements: &[(f64, Span)],
    config: &EngineConfig,
) -> Option<EngineCodeMatch> {
    let mut best: Option<EngineCodeMatch> = None;
    for m in lexicon.find(Axis::EngineCode, text, index) {
        if !index.is_word(m.span.start, m.span.end) {
            continue;
        }
        let near_displacement = displacements
            .iter()
            .any(|(_, span)| span.distance(&m.span) <= config.proximity_window_chars);
        let confidence = if near_displacement {
            DISPLACEMENT_ADJACENT_CONFIDENCE
        } else if lexicon.is_ambiguous_model(m.term) {
            AMBIGUOUS_CODE_CONFIDENCE
        } else {
            KNOWN_CODE_CONFIDENCE
        };
        let better = match &best {
            Some(current) => confidence > current.confidence,
            None => true,
        };
        if better {
            best = Some(EngineCodeMatch {
                code: m.term.to_ascii_uppercase(),
                confidence,
                span: m.span,
                generic: false,
            });
        }
    }
    best
}

fn generic_code(
    text: &str,
    index: &TextIndex,
    patterns: &CompiledPatterns,
    displacements: &[(f64, Span)],
    config: &EngineConfig,
) -> Option<EngineCodeMatch> {
    for m in patterns.generic_code.find_iter(text) {
        let span = Span {
            start: index.char_at(m.start()),
            end: index.char_at(m.end()),
        };
        if !index.is_word(span.start, span.end) {
            continue;
        }
        let token = m.as_str();
        if GENERIC_CODE_BLOCKLIST.contains(&token) {
            continue;
        }
        let near_displacement = displacements
            .iter()
            .any(|(_, dspan)| dspan.distance(&span) <= config.proximity_window_chars);
        let confidence = if near_displacement {
            GENERIC_NEAR_DISPLACEMENT_CONFIDENCE
        } else {
            GENERIC_CODE_CONFIDENCE
        };
        return Some(EngineCodeMatch {
            code: token.to_string(),
            confidence,
            span,
            generic: true,
        });
    }
    None
}

fn best_displacement(
    text: &str,
    candidates: &[(f64, Span)],
    code: Option<&EngineCodeMatch>,
    config: &EngineConfig,
) -> Option<DisplacementMatch> {
    let has_engine_context = contains_any(text, ENGINE_CONTEXT_TERMS);
    let mut best: Option<DisplacementMatch> = None;
    for &(liters, span) in candidates {
        let mut confidence = DISPLACEMENT_CONFIDENCE;
        if has_engine_context {
            confidence += ENGINE_CONTEXT_BOOST;
        }
        if code.is_some_and(|c| c.span.distance(&span) <= config.proximity_window_chars) {
            confidence += NEAR_CODE_BOOST;
        }
        if COMMON_DISPLACEMENTS.iter().any(|d| (d - liters).abs() < 1e-9) {
            confidence += COMMON_DISPLACEMENT_BOOST;
        }
        let confidence = confidence.min(1.0);
        let better = match &best {
            Some(current) => confidence > current.confidence,
            None => true,
        };
        if better {
            best = Some(DisplacementMatch {
                liters,
                confidence,
                span,
            });
        }
    }
    best
}

fn engine_type(text: &str, code: Option<&EngineCodeMatch>) -> Option<EngineType> {
    if text.contains("היברידי") {
        return Some(EngineType::Hybrid);
    }
    if text.contains("דיזל") {
        return Some(EngineType::Diesel);
    }
    if text.contains("בנזין") {
        return Some(EngineType::Gasoline);
    }
    // TDI/CDI designations imply diesel even without the word.
    if code.is_some_and(|c| matches!(c.code.as_str(), "TDI" | "CDI" | "CRM")) {
        return Some(EngineType::Diesel);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> EngineExtraction {
        let lexicon = Lexicon::builtin().unwrap();
        let index = TextIndex::new(text);
        let patterns = CompiledPatterns::new().unwrap();
        extract_engine(text, &index, &lexicon, &patterns, &EngineConfig::default())
    }

    #[test]
    fn known_code_with_adjacent_displacement() {
        let got = extract("אטם ראש CBZ 1.2");
        let code = got.code.unwrap();
        assert_eq!(code.code, "CBZ");
        assert!((code.confidence - 0.95).abs() < 1e-9);
        let disp = got.displacement.unwrap();
        assert!((disp.liters - 1.2).abs() < 1e-9);
        // 0.6 + 0.3 near code + 0.1 common
        assert!((disp.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn known_code_without_displacement() {
        let got = extract("סט טיימינג BSE");
        let code = got.code.unwrap();
        assert_eq!(code.code, "BSE");
        assert!((code.confidence - 0.9).abs() < 1e-9);
        assert!(got.displacement.is_none());
    }

    #[test]
    fn generic_code_fallback_respects_blocklist() {
        let got = extract("חיישן ABS קדמי");
        assert!(got.code.is_none());

        let fallback = extract("אטם מכסה DKR");
        let code = fallback.code.unwrap();
        assert_eq!(code.code, "DKR");
        assert!(code.generic);
        assert!((code.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn displacement_with_engine_context() {
        let got = extract("מנוע נפח 1.6");
        let disp = got.displacement.unwrap();
        // 0.6 + 0.2 context + 0.1 common
        assert!((disp.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_decimal_is_not_displacement() {
        let got = extract("בולם 9.9 קדמי");
        assert!(got.displacement.is_none());
    }

    #[test]
    fn diesel_marker_sets_engine_type() {
        assert_eq!(extract("פ.סולר דיזל").engine_type, Some(EngineType::Diesel));
        assert_eq!(extract("אטם TDI").engine_type, Some(EngineType::Diesel));
        assert_eq!(extract("פ.אויר קורולה").engine_type, None);
    }
}
