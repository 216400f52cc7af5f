//! Brand and model extraction.
//!
//! Two passes: brands first, then only the matched brands' model terms.
//! Scanning the whole model axis would let "ויטרה" in a Suzuki-free line
//! fabricate a brand, so models never introduce brands on their own (brand
//! terms already include the model names that do imply a brand).

use rustc_hash::FxHashSet;

use crate::extract::text::{contains_any, TextIndex};
use crate::extract::types::{BrandMatch, ModelMatch, VehicleExtraction};
use crate::lexicon::defaults::SUBARU_CONTEXT_TERMS;
use crate::lexicon::{Axis, Lexicon};

const BRAND_CONFIDENCE: f64 = 0.8;
const BRAND_WITH_DIGIT_CONFIDENCE: f64 = 0.95;
const MODEL_CONFIDENCE: f64 = 0.75;
const ALNUM_MODEL_CONFIDENCE: f64 = 0.8;
const BRAND_COOCCURRENCE_CONFIDENCE: f64 = 0.9;
const AMBIGUOUS_WITH_CONTEXT: f64 = 0.9;
const AMBIGUOUS_WITHOUT_CONTEXT: f64 = 0.6;

pub fn extract_vehicle(text: &str, index: &TextIndex, lexicon: &Lexicon) -> VehicleExtraction {
    let mut brands: Vec<BrandMatch> = Vec::new();
    let mut seen_brands: FxHashSet<String> = FxHashSet::default();
    let mut brand_spans = Vec::new();

    for m in lexicon.find(Axis::Brand, text, index) {
        // "רפיד" inside "רפידות" is a brake pad, not a Skoda.
        if !index.on_token_boundary(m.span.start, m.span.end) {
            continue;
        }
        brand_spans.push((m.label.to_string(), m.span));
        if !seen_brands.insert(m.label.to_string()) {
            continue;
        }
        let followed_by_digit = index
            .next_non_space(m.span.end)
            .is_some_and(|c| c.is_ascii_digit());
        let confidence = if followed_by_digit {
            BRAND_WITH_DIGIT_CONFIDENCE
        } else {
            BRAND_CONFIDENCE
        };
        brands.push(BrandMatch {
            brand: m.label.to_string(),
            confidence,
            span: m.span,
        });
    }

    let mut models: Vec<ModelMatch> = Vec::new();
    let mut seen_models: FxHashSet<(String, String)> = FxHashSet::default();
    for m in lexicon.find(Axis::Model, text, index) {
        if !index.on_token_boundary(m.span.start, m.span.end) {
            continue;
        }
        let Some(brand) = m.parent else { continue };
        if !seen_brands.contains(brand) {
            continue;
        }
        if !seen_models.insert((brand.to_string(), m.label.to_string())) {
            continue;
        }

        let alphanumeric = m.term.chars().any(|c| c.is_ascii_digit());
        // The brand name itself, somewhere other than this very token.
        let brand_named_elsewhere = brand_spans
            .iter()
            .any(|(b, span)| b == brand && span.distance(&m.span) > 0);

        let mut confidence = MODEL_CONFIDENCE;
        if alphanumeric {
            confidence = confidence.max(ALNUM_MODEL_CONFIDENCE);
        }
        if brand_named_elsewhere {
            confidence = confidence.max(BRAND_COOCCURRENCE_CONFIDENCE);
        }

        let mut ambiguous_without_context = false;
        if lexicon.is_ambiguous_model(m.term) {
            if contains_any(text, SUBARU_CONTEXT_TERMS) {
                confidence = AMBIGUOUS_WITH_CONTEXT;
            } else {
                confidence = AMBIGUOUS_WITHOUT_CONTEXT;
                ambiguous_without_context = true;
            }
        }

        models.push(ModelMatch {
            brand: brand.to_string(),
            model: m.label.to_string(),
            term: m.term.to_string(),
            confidence,
            span: m.span,
            ambiguous_without_context,
        });
    }

    VehicleExtraction { brands, models }
}
