//! Cross-field disambiguation and year-model association.
//!
//! Extractors are pure and independent; every rule that needs two fields at
//! once lives here. The resolver only ever downgrades, drops, or attaches —
//! it never invents a match the extractors did not produce.

use rustc_hash::FxHashSet;
use tracing::debug;

use partlex_core::config::EngineConfig;
use partlex_core::types::{ModelYearRange, YearRange};

use crate::extract::types::{
    EngineCodeMatch, EngineExtraction, ModelMatch, Span, VehicleExtraction, YearExtraction,
    YearKind, YearMention,
};

const REASSIGNED_CODE_CONFIDENCE: f64 = 0.95;
const YEAR_AFTER_MODEL_CONFIDENCE: f64 = 0.9;
const YEAR_BEFORE_MODEL_CONFIDENCE: f64 = 0.85;

/// The resolver's output: the surviving models with their year
/// associations, plus the general range left over.
#[derive(Debug, Default)]
pub struct Resolution {
    pub models: Vec<ModelMatch>,
    pub model_years: Vec<ModelYearRange>,
    pub general_years: YearRange,
    pub years_confidence: f64,
}

pub fn resolve(
    mut vehicle: VehicleExtraction,
    years: YearExtraction,
    engine: &mut EngineExtraction,
    config: &EngineConfig,
) -> Resolution {
    reassign_ambiguous_models(&mut vehicle.models, engine, config);
    dedup_models(&mut vehicle.models);

    let (model_years, general_years) = associate_years(&vehicle.models, &years, config);

    Resolution {
        models: vehicle.models,
        model_years,
        general_years,
        years_confidence: years.confidence,
    }
}

/// A token like "XV" or "B4" can be a Subaru model or an engine code. With
/// a displacement next to it, it is an engine designation; with neither
/// displacement nor brand context it is dropped outright, trading recall
/// for precision.
fn reassign_ambiguous_models(
    models: &mut Vec<ModelMatch>,
    engine: &mut EngineExtraction,
    config: &EngineConfig,
) {
    models.retain(|m| {
        if !m.ambiguous_without_context {
            return true;
        }
        let displacement_adjacent = engine
            .displacement
            .is_some_and(|d| d.span.distance(&m.span) <= config.proximity_window_chars);
        if displacement_adjacent {
            debug!(token = %m.term, "ambiguous token reassigned to engine code");
            let replace = match &engine.code {
                Some(code) => REASSIGNED_CODE_CONFIDENCE > code.confidence,
                None => true,
            };
            if replace {
                engine.code = Some(EngineCodeMatch {
                    code: m.term.to_ascii_uppercase(),
                    confidence: REASSIGNED_CODE_CONFIDENCE,
                    span: m.span,
                    generic: false,
                });
            }
        } else {
            debug!(token = %m.term, "ambiguous token dropped, no supporting context");
        }
        false
    });
}

/// One entry per (brand, model), keeping the highest-confidence instance.
fn dedup_models(models: &mut Vec<ModelMatch>) {
    let mut best: Vec<ModelMatch> = Vec::with_capacity(models.len());
    for m in models.drain(..) {
        match best
            .iter_mut()
            .find(|b| b.brand == m.brand && b.model == m.model)
        {
            Some(existing) => {
                if m.confidence > existing.confidence {
                    *existing = m;
                }
            }
            None => best.push(m),
        }
    }
    *models = best;
}

/// Attaches each year mention to the nearest model mention within the
/// proximity window. A mention following its model is the catalog's usual
/// word order and scores higher than one preceding it; ties go to the
/// smaller char distance. Mentions that reach no model stay general.
fn associate_years(
    models: &[ModelMatch],
    years: &YearExtraction,
    config: &EngineConfig,
) -> (Vec<ModelYearRange>, YearRange) {
    let mut ranges: Vec<ModelYearRange> = Vec::new();
    let mut associated: FxHashSet<usize> = FxHashSet::default();

    for model in models {
        let mut from = None;
        let mut to = None;
        let mut confidence = model.confidence;
        for (i, mention) in years.mentions.iter().enumerate() {
            if associated.contains(&i) {
                continue;
            }
            if nearest_model(models, &mention.span, config) != Some(model.span) {
                continue;
            }
            associated.insert(i);
            apply_mention(mention, &mut from, &mut to);
            let assoc_confidence = if model.span.precedes(&mention.span) {
                YEAR_AFTER_MODEL_CONFIDENCE
            } else {
                YEAR_BEFORE_MODEL_CONFIDENCE
            };
            confidence = confidence.max(assoc_confidence);
        }
        ranges.push(ModelYearRange {
            brand: model.brand.clone(),
            model: model.model.clone(),
            years: YearRange { from, to },
            confidence,
        });
    }

    let mut general = YearRange::default();
    let mut has_specific = false;
    for (i, mention) in years.mentions.iter().enumerate() {
        if associated.contains(&i) {
            continue;
        }
        if matches!(mention.kind, YearKind::From | YearKind::Until) {
            has_specific = true;
        }
    }
    for (i, mention) in years.mentions.iter().enumerate() {
        if associated.contains(&i) {
            continue;
        }
        match mention.kind {
            YearKind::From => {
                if general.from.is_none() {
                    general.from = mention.from;
                }
            }
            YearKind::Until => {
                if general.to.is_none() {
                    general.to = mention.to;
                }
            }
            YearKind::Range if !has_specific => {
                if general.is_empty() {
                    general.from = mention.from;
                    general.to = mention.to;
                }
            }
            YearKind::Range => {}
        }
    }

    (ranges, general)
}

fn apply_mention(mention: &YearMention, from: &mut Option<i32>, to: &mut Option<i32>) {
    match mention.kind {
        YearKind::From => {
            if from.is_none() {
                *from = mention.from;
            }
        }
        YearKind::Until => {
            if to.is_none() {
                *to = mention.to;
            }
        }
        YearKind::Range => {
            if from.is_none() && to.is_none() {
                *from = mention.from;
                *to = mention.to;
            }
        }
    }
}

/// The span of the model this mention belongs to, if any model is inside
/// the window. Models preceding the mention win over models following it.
fn nearest_model(models: &[ModelMatch], mention: &Span, config: &EngineConfig) -> Option<Span> {
    let in_window = |m: &ModelMatch| m.span.distance(mention) <= config.proximity_window_chars;

    let before = models
        .iter()
        .filter(|m| in_window(m) && m.span.precedes(mention))
        .min_by_key(|m| m.span.distance(mention));
    if let Some(m) = before {
        return Some(m.span);
    }
    models
        .iter()
        .filter(|m| in_window(m))
        .min_by_key(|m| m.span.distance(mention))
        .map(|m| m.span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::patterns::CompiledPatterns;
    use crate::extract::text::TextIndex;
    use crate::extract::{engine_info, vehicle, years};
    use crate::lexicon::Lexicon;

    fn run(text: &str) -> Resolution {
        let lexicon = Lexicon::builtin().unwrap();
        let patterns = CompiledPatterns::new().unwrap();
        let config = EngineConfig::default();
        let index = TextIndex::new(text);
        let v = vehicle::extract_vehicle(text, &index, &lexicon);
        let y = years::extract_years(text, &index, &patterns, &config);
        let mut e = engine_info::extract_engine(text, &index, &lexicon, &patterns, &config);
        resolve(v, y, &mut e, &config)
    }

    #[test]
    fn year_attaches_to_its_model() {
        let got = run("מזדה 3 מ13");
        assert_eq!(got.model_years.len(), 1);
        assert_eq!(got.model_years[0].years.from, Some(2013));
        assert!((got.model_years[0].confidence - 0.9).abs() < 1e-9);
        assert!(got.general_years.is_empty());
    }

    #[test]
    fn two_models_two_years_two_associations() {
        let got = run("בולם קורולה מ08 יאריס מ13");
        assert_eq!(got.model_years.len(), 2);
        let corolla = got
            .model_years
            .iter()
            .find(|r| r.model == "Corolla")
            .unwrap();
        let yaris = got.model_years.iter().find(|r| r.model == "Yaris").unwrap();
        assert_eq!(corolla.years.from, Some(2008));
        assert_eq!(yaris.years.from, Some(2013));
    }

    #[test]
    fn distant_year_stays_general() {
        let got = run("קורולה סט טיימינג מלא עם הכל מ13");
        assert_eq!(got.model_years.len(), 1);
        assert!(got.model_years[0].years.is_empty());
        assert_eq!(got.general_years.from, Some(2013));
    }

    #[test]
    fn ambiguous_model_with_displacement_becomes_engine_code() {
        let lexicon = Lexicon::builtin().unwrap();
        let patterns = CompiledPatterns::new().unwrap();
        let config = EngineConfig::default();
        let text = "אטם ראש XV 2.0";
        let index = TextIndex::new(text);
        let v = vehicle::extract_vehicle(text, &index, &lexicon);
        let y = years::extract_years(text, &index, &patterns, &config);
        let mut e = engine_info::extract_engine(text, &index, &lexicon, &patterns, &config);
        let got = resolve(v, y, &mut e, &config);
        assert!(got.models.is_empty());
        assert_eq!(e.code.as_ref().map(|c| c.code.as_str()), Some("XV"));
    }

    #[test]
    fn ambiguous_model_without_anything_is_dropped() {
        let got = run("משהו XV כלשהו");
        assert!(got.models.is_empty());
        assert!(got.model_years.is_empty());
    }

    #[test]
    fn subaru_context_keeps_the_model() {
        let got = run("סובארו XV בולם");
        assert!(got.models.iter().any(|m| m.model == "XV"));
    }
}
