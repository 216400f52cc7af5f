//! The lexicon store and its per-axis matchers.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use rustc_hash::{FxHashMap, FxHashSet};

use partlex_core::errors::LexiconError;

use crate::extract::text::TextIndex;
use crate::extract::types::Span;
use crate::lexicon::defaults;
use crate::lexicon::types::{Axis, LexiconEntry};

/// A term occurrence inside an input text. Offsets are char-based.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatch<'a> {
    pub term: &'a str,
    pub label: &'a str,
    pub parent: Option<&'a str>,
    pub span: Span,
}

/// One axis worth of entries plus its compiled automaton.
#[derive(Debug)]
struct AxisTable {
    entries: Vec<LexiconEntry>,
    matcher: AhoCorasick,
}

impl AxisTable {
    fn build(axis: Axis, mut entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
        let mut seen = FxHashSet::default();
        for entry in &entries {
            if entry.term.trim().is_empty() {
                return Err(LexiconError::EmptyTerm { axis: axis.name() });
            }
            if !seen.insert(entry.term.clone()) {
                return Err(LexiconError::DuplicateTerm {
                    axis: axis.name(),
                    term: entry.term.clone(),
                });
            }
        }

        // Longest term first. Equal lengths keep declaration order, so the
        // table stays deterministic across builds.
        entries.sort_by_key(|e| std::cmp::Reverse(e.term_chars()));

        let matcher = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .ascii_case_insensitive(true)
            .build(entries.iter().map(|e| e.term.as_str()))
            .map_err(|err| LexiconError::MatcherBuild {
                axis: axis.name(),
                message: err.to_string(),
            })?;

        Ok(Self { entries, matcher })
    }
}

/// The read-only term store backing every extractor.
///
/// Built once, then shared freely across threads. Matching is
/// leftmost-longest: "סנטה פה" wins over any shorter term starting at the
/// same position, and ASCII terms match case-insensitively so "i20" and
/// "I20" are the same token.
#[derive(Debug)]
pub struct Lexicon {
    tables: FxHashMap<Axis, AxisTable>,
    ambiguous_models: FxHashSet<String>,
}

impl Lexicon {
    /// The built-in production tables.
    pub fn builtin() -> Result<Self, LexiconError> {
        let mut entries: Vec<(Axis, LexiconEntry)> = Vec::new();
        for (term, label) in defaults::CATEGORY_TERMS {
            entries.push((Axis::Category, LexiconEntry::new(*term, *label)));
        }
        for (term, label) in defaults::BRAND_TERMS {
            entries.push((Axis::Brand, LexiconEntry::new(*term, *label)));
        }
        for (term, model, brand) in defaults::MODEL_TERMS {
            entries.push((Axis::Model, LexiconEntry::with_parent(*term, *model, *brand)));
        }
        for (term, label) in defaults::POSITION_TERMS {
            entries.push((Axis::Position, LexiconEntry::new(*term, *label)));
        }
        for (term, label) in defaults::SIDE_TERMS {
            entries.push((Axis::Side, LexiconEntry::new(*term, *label)));
        }
        for (term, label) in defaults::ENGINE_CODES {
            entries.push((Axis::EngineCode, LexiconEntry::new(*term, *label)));
        }
        for (term, label) in defaults::DRIVE_TERMS {
            entries.push((Axis::Drive, LexiconEntry::new(*term, *label)));
        }
        Self::from_entries(entries)
    }

    /// Builds a lexicon from explicit entries. Validation is strict: empty
    /// terms, duplicate terms within an axis, and model entries whose parent
    /// is not a known brand label are all rejected.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Axis, LexiconEntry)>,
    ) -> Result<Self, LexiconError> {
        let mut per_axis: FxHashMap<Axis, Vec<LexiconEntry>> = FxHashMap::default();
        for (axis, entry) in entries {
            per_axis.entry(axis).or_default().push(entry);
        }

        let brand_labels: FxHashSet<String> = per_axis
            .get(&Axis::Brand)
            .map(|brands| brands.iter().map(|e| e.label.clone()).collect())
            .unwrap_or_default();

        if let Some(models) = per_axis.get(&Axis::Model) {
            for entry in models {
                match &entry.parent {
                    Some(brand) if brand_labels.contains(brand) => {}
                    Some(brand) => {
                        return Err(LexiconError::UnknownBrand {
                            term: entry.term.clone(),
                            brand: brand.clone(),
                        });
                    }
                    None => {
                        return Err(LexiconError::UnknownBrand {
                            term: entry.term.clone(),
                            brand: String::new(),
                        });
                    }
                }
            }
        }

        let mut tables = FxHashMap::default();
        for (axis, axis_entries) in per_axis {
            tables.insert(axis, AxisTable::build(axis, axis_entries)?);
        }

        let ambiguous_models = defaults::AMBIGUOUS_MODEL_CODES
            .iter()
            .map(|code| code.to_string())
            .collect();

        Ok(Self {
            tables,
            ambiguous_models,
        })
    }

    /// All occurrences of this axis' terms in `text`, leftmost-longest,
    /// left to right. Spans are char offsets into `text`.
    pub fn find<'a>(&'a self, axis: Axis, text: &str, index: &TextIndex) -> Vec<TermMatch<'a>> {
        let Some(table) = self.tables.get(&axis) else {
            return Vec::new();
        };
        table
            .matcher
            .find_iter(text)
            .map(|m| {
                let entry = &table.entries[m.pattern().as_usize()];
                TermMatch {
                    term: &entry.term,
                    label: &entry.label,
                    parent: entry.parent.as_deref(),
                    span: Span {
                        start: index.char_at(m.start()),
                        end: index.char_at(m.end()),
                    },
                }
            })
            .collect()
    }

    /// The entries registered on an axis, longest term first.
    pub fn entries(&self, axis: Axis) -> &[LexiconEntry] {
        self.tables
            .get(&axis)
            .map(|t| t.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Whether this model token also looks like an engine code and needs
    /// contextual support before it counts as a model.
    pub fn is_ambiguous_model(&self, term: &str) -> bool {
        self.ambiguous_models.contains(&term.to_ascii_uppercase())
    }

    /// The owning brand of a model label, if registered.
    pub fn brand_of_model(&self, model: &str) -> Option<&str> {
        self.entries(Axis::Model)
            .iter()
            .find(|e| e.label == model)
            .and_then(|e| e.parent.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        let lexicon = Lexicon::builtin().unwrap();
        assert!(!lexicon.entries(Axis::Category).is_empty());
        assert!(!lexicon.entries(Axis::Brand).is_empty());
        assert!(!lexicon.entries(Axis::Model).is_empty());
    }

    #[test]
    fn duplicate_term_is_rejected() {
        let err = Lexicon::from_entries([
            (Axis::Category, LexiconEntry::new("בולם", "Shock Absorber")),
            (Axis::Category, LexiconEntry::new("בולם", "Damper")),
        ])
        .unwrap_err();
        assert!(matches!(err, LexiconError::DuplicateTerm { axis: "category", .. }));
    }

    #[test]
    fn empty_term_is_rejected() {
        let err = Lexicon::from_entries([(Axis::Brand, LexiconEntry::new("  ", "Mazda"))])
            .unwrap_err();
        assert!(matches!(err, LexiconError::EmptyTerm { axis: "brand" }));
    }

    #[test]
    fn model_with_unknown_brand_is_rejected() {
        let err = Lexicon::from_entries([(
            Axis::Model,
            LexiconEntry::with_parent("קורולה", "Corolla", "Toyota"),
        )])
        .unwrap_err();
        assert!(matches!(err, LexiconError::UnknownBrand { .. }));
    }

    #[test]
    fn find_prefers_longest_match() {
        let lexicon = Lexicon::builtin().unwrap();
        let text = "ג.ויטרה 07";
        let index = TextIndex::new(text);
        let matches = lexicon.find(Axis::Model, text, &index);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].label, "Grand Vitara");
        assert_eq!(matches[0].span, Span { start: 0, end: 7 });
    }

    #[test]
    fn find_reports_char_offsets() {
        let lexicon = Lexicon::builtin().unwrap();
        let text = "פ.אויר קורולה";
        let index = TextIndex::new(text);
        let matches = lexicon.find(Axis::Model, text, &index);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Span { start: 7, end: 13 });
    }

    #[test]
    fn ascii_terms_match_case_insensitively() {
        let lexicon = Lexicon::builtin().unwrap();
        let text = "דסקיות i20";
        let index = TextIndex::new(text);
        let matches = lexicon.find(Axis::Brand, text, &index);
        assert!(matches.iter().any(|m| m.label == "Hyundai"));
    }

    #[test]
    fn ambiguous_model_codes_are_flagged() {
        let lexicon = Lexicon::builtin().unwrap();
        assert!(lexicon.is_ambiguous_model("XV"));
        assert!(lexicon.is_ambiguous_model("b3"));
        assert!(!lexicon.is_ambiguous_model("Corolla"));
    }
}
