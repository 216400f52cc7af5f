//! Year extraction.
//!
//! Catalog convention: two-digit years in the 2000s. "מ13" reads "from
//! 2013", "עד 05" reads "until 2005", a bare "08-13" is a range. Every
//! mention keeps its char span so the resolver can attach it to the nearest
//! model; this module only builds the pre-association general range.

use partlex_core::config::EngineConfig;
use partlex_core::types::YearRange;

use crate::extract::patterns::CompiledPatterns;
use crate::extract::text::{is_word_char, TextIndex};
use crate::extract::types::{Span, YearExtraction, YearKind, YearMention};

const FROM_WEIGHT: f64 = 0.4;
const UNTIL_WEIGHT: f64 = 0.4;
const RANGE_WEIGHT: f64 = 0.3;
const FUTURE_PENALTY: f64 = 0.2;
const ORDERED_BONUS: f64 = 0.1;
const INVERTED_PENALTY: f64 = 0.3;

const CENTURY: i32 = 2000;

pub fn extract_years(
    text: &str,
    index: &TextIndex,
    patterns: &CompiledPatterns,
    config: &EngineConfig,
) -> YearExtraction {
    let mut mentions: Vec<YearMention> = Vec::new();

    for caps in patterns.from_year.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let span = to_span(index, whole.start(), whole.end());
        // "מ" must start a word and the digits must end one, otherwise this
        // is the tail of a longer token like "מ.מים" or a 3-digit number.
        if !starts_word(index, span.start) || !ends_number(index, span.end) {
            continue;
        }
        if let Some(year) = parse_two_digit(&caps[1]) {
            mentions.push(YearMention {
                kind: YearKind::From,
                from: Some(year),
                to: None,
                span,
            });
        }
    }

    for caps in patterns.until_year.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let span = to_span(index, whole.start(), whole.end());
        if !starts_word(index, span.start) || !ends_number(index, span.end) {
            continue;
        }
        if let Some(year) = parse_two_digit(&caps[1]) {
            mentions.push(YearMention {
                kind: YearKind::Until,
                from: None,
                to: Some(year),
                span,
            });
        }
    }

    let has_specific = !mentions.is_empty();
    for caps in patterns.year_range.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let span = to_span(index, whole.start(), whole.end());
        if !starts_word(index, span.start) || !ends_number(index, span.end) {
            continue;
        }
        if let (Some(from), Some(to)) = (parse_two_digit(&caps[1]), parse_two_digit(&caps[2])) {
            mentions.push(YearMention {
                kind: YearKind::Range,
                from: Some(from),
                to: Some(to),
                span,
            });
        }
    }

    mentions.sort_by_key(|m| m.span.start);

    let mut range = YearRange::default();
    for mention in &mentions {
        match mention.kind {
            YearKind::From => {
                if range.from.is_none() {
                    range.from = mention.from;
                }
            }
            YearKind::Until => {
                if range.to.is_none() {
                    range.to = mention.to;
                }
            }
            // A bare range never overwrites the explicit markers.
            YearKind::Range if !has_specific => {
                if range.is_empty() {
                    range.from = mention.from;
                    range.to = mention.to;
                }
            }
            YearKind::Range => {}
        }
    }

    let confidence = score(&mentions, &range, has_specific, config);

    YearExtraction {
        mentions,
        range,
        confidence,
    }
}

fn score(
    mentions: &[YearMention],
    range: &YearRange,
    has_specific: bool,
    config: &EngineConfig,
) -> f64 {
    if mentions.is_empty() {
        return 0.0;
    }
    let mut confidence = 0.0;
    if range.from.is_some() && has_specific {
        confidence += FROM_WEIGHT;
    }
    if range.to.is_some() && has_specific {
        confidence += UNTIL_WEIGHT;
    }
    if !has_specific && !range.is_empty() {
        confidence += RANGE_WEIGHT;
    }
    for year in [range.from, range.to].into_iter().flatten() {
        if year > config.year_ceiling {
            confidence -= FUTURE_PENALTY;
        }
    }
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from <= to {
            confidence += ORDERED_BONUS;
        } else {
            confidence -= INVERTED_PENALTY;
        }
    }
    confidence.clamp(0.0, 1.0)
}

fn parse_two_digit(digits: &str) -> Option<i32> {
    digits.parse::<i32>().ok().map(|n| CENTURY + n)
}

fn to_span(index: &TextIndex, start: usize, end: usize) -> Span {
    Span {
        start: index.char_at(start),
        end: index.char_at(end),
    }
}

fn starts_word(index: &TextIndex, at: usize) -> bool {
    at == 0 || !index.char(at - 1).is_some_and(is_word_char)
}

fn ends_number(index: &TextIndex, end: usize) -> bool {
    !index.char(end).is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> YearExtraction {
        let index = TextIndex::new(text);
        let patterns = CompiledPatterns::new().unwrap();
        extract_years(text, &index, &patterns, &EngineConfig::default())
    }

    #[test]
    fn from_year_expands_to_2000s() {
        let got = extract("מזדה 3 מ13");
        assert_eq!(got.range.from, Some(2013));
        assert_eq!(got.range.to, None);
        assert!((got.confidence - 0.4).abs() < 1e-9);
        assert_eq!(got.mentions.len(), 1);
        assert_eq!(got.mentions[0].kind, YearKind::From);
    }

    #[test]
    fn from_and_until_with_order_bonus() {
        let got = extract("אוקטביה מ08 עד 13");
        assert_eq!(got.range.from, Some(2008));
        assert_eq!(got.range.to, Some(2013));
        // 0.4 + 0.4 + 0.1 ordered
        assert!((got.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn inverted_range_is_stored_but_penalized() {
        let got = extract("מ15 עד 08");
        assert_eq!(got.range.from, Some(2015));
        assert_eq!(got.range.to, Some(2008));
        assert!(got.range.is_inverted());
        // 0.4 + 0.4 - 0.3 inverted
        assert!((got.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn bare_range_does_not_override_specific() {
        let got = extract("קורולה 08-13");
        assert_eq!(got.range.from, Some(2008));
        assert_eq!(got.range.to, Some(2013));
        assert!((got.confidence - 0.3 - 0.1).abs() < 1e-9);

        let specific = extract("מ10 וגם 08-13");
        assert_eq!(specific.range.from, Some(2010));
        assert_eq!(specific.range.to, None);
    }

    #[test]
    fn future_year_is_penalized() {
        let got = extract("מ77");
        assert_eq!(got.range.from, Some(2077));
        assert!((got.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn hebrew_words_starting_with_mem_are_not_years() {
        let got = extract("מ.מים קורולה");
        assert!(got.mentions.is_empty());
        // A digit run glued to the prefix is a part number, not a year.
        let embedded = extract("רק45מ13");
        assert!(embedded.mentions.is_empty());
    }
}
