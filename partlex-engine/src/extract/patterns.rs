//! Pre-compiled regex patterns, built once per classifier.

use regex::Regex;

use partlex_core::errors::LexiconError;

/// The numeric and code patterns the extractors share.
///
/// Year digits are deliberately two-digit: the catalog writes "מ13" for
/// "from 2013". Expansion to 20NN happens in the year extractor.
pub struct CompiledPatterns {
    /// `מNN` from-year prefix.
    pub from_year: Regex,
    /// `עד NN` until-year.
    pub until_year: Regex,
    /// Bare `NN-NN` range.
    pub year_range: Regex,
    /// `D.D` engine displacement in liters.
    pub displacement: Regex,
    /// `N PK LLLL` ribbed-belt marker with length.
    pub pk_belt: Regex,
    /// Explicit millimeter mention.
    pub millimeters: Regex,
    /// `קוטר NNN` disc diameter.
    pub diameter: Regex,
    /// Generic uppercase engine-code shape.
    pub generic_code: Regex,
}

impl CompiledPatterns {
    pub fn new() -> Result<Self, LexiconError> {
        Ok(Self {
            from_year: compile(r"מ(\d{2})")?,
            until_year: compile(r"עד\s*(\d{2})")?,
            year_range: compile(r"(\d{2})-(\d{2})")?,
            displacement: compile(r"(\d\.\d)")?,
            pk_belt: compile(r"(?i)(\d+)\s*PK\s*(\d+)")?,
            millimeters: compile(r#"(?i)(\d{2,4})\s*(?:מ"מ|ממ|mm)"#)?,
            diameter: compile(r"קוטר\s*(\d{2,4})")?,
            generic_code: compile(r"([A-Z]{2,4}[0-9]?)")?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, LexiconError> {
    Regex::new(pattern).map_err(|err| LexiconError::MatcherBuild {
        axis: "patterns",
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        let patterns = CompiledPatterns::new().unwrap();
        assert!(patterns.from_year.is_match("מ13"));
        assert!(patterns.until_year.is_match("עד 05"));
        assert!(patterns.year_range.is_match("08-13"));
        assert!(patterns.displacement.is_match("1.6"));
        assert!(patterns.pk_belt.is_match("6PK 1230"));
        assert!(patterns.millimeters.is_match("280 ממ"));
        assert!(patterns.diameter.is_match("קוטר 280"));
        assert!(patterns.generic_code.is_match("CBZ"));
    }
}
