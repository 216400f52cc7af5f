//! Folds extractor and resolver output into the final record and scores it.

use partlex_core::config::EngineConfig;
use partlex_core::types::{FieldConfidences, ModelRef, ModelYearRange, PartRecord};

use crate::extract::types::{
    CategoryExtraction, DimensionExtraction, DriveExtraction, EngineExtraction,
    PlacementExtraction, VehicleExtraction,
};
use crate::resolve::Resolution;

const DEFAULT_CATEGORY: &str = "Other Parts";
const DEFAULT_BRAND: &str = "Other";
const GENERIC_MODEL: &str = "Generic Model";

/// Confidence carried by the "Generic Model" placeholder.
const PLACEHOLDER_MODEL_CONFIDENCE: f64 = 0.5;

pub struct Extractions {
    pub category: Option<CategoryExtraction>,
    pub vehicle: VehicleExtraction,
    pub resolution: Resolution,
    pub drive: Option<DriveExtraction>,
    pub position: Option<PlacementExtraction>,
    pub side: Option<PlacementExtraction>,
    pub engine: EngineExtraction,
    pub dimension: Option<DimensionExtraction>,
}

/// Builds the record, materializing the default labels for fields that
/// found nothing, and computes the weighted overall accuracy.
pub fn aggregate(raw_text: String, ex: Extractions, config: &EngineConfig) -> PartRecord {
    let mut brands: Vec<String> = ex.vehicle.brands.iter().map(|b| b.brand.clone()).collect();
    if brands.is_empty() {
        brands.push(DEFAULT_BRAND.to_string());
    }

    let mut models: Vec<ModelRef> = ex
        .resolution
        .models
        .iter()
        .map(|m| ModelRef {
            brand: m.brand.clone(),
            model: m.model.clone(),
        })
        .collect();
    let mut model_years = ex.resolution.model_years;
    if models.is_empty() {
        // A brand without any model still identifies a product line.
        let brand = brands[0].clone();
        models.push(ModelRef {
            brand: brand.clone(),
            model: GENERIC_MODEL.to_string(),
        });
        model_years.push(ModelYearRange {
            brand,
            model: GENERIC_MODEL.to_string(),
            years: ex.resolution.general_years,
            confidence: PLACEHOLDER_MODEL_CONFIDENCE,
        });
    }

    let category_confidence = ex.category.as_ref().map_or(0.0, |c| c.confidence);
    let models_confidence = models_confidence(&model_years, &ex.vehicle);
    let position_confidence = ex.position.as_ref().map_or(0.0, |p| p.confidence);
    let side_confidence = ex.side.as_ref().map_or(0.0, |s| s.confidence);
    let drive_confidence = ex.drive.as_ref().map_or(0.0, |d| d.confidence);
    let dimension_confidence = ex.dimension.as_ref().map_or(0.0, |d| d.confidence);
    let engine_confidence = ex
        .engine
        .code
        .as_ref()
        .map(|c| c.confidence)
        .into_iter()
        .chain(ex.engine.displacement.map(|d| d.confidence))
        .fold(0.0_f64, f64::max);

    let confidences = FieldConfidences {
        category: category_confidence,
        models: models_confidence,
        position: position_confidence,
        drive_type: drive_confidence,
        years: ex.resolution.years_confidence,
        dimensions: dimension_confidence,
        engine: engine_confidence,
        side: side_confidence,
    };

    let accuracy = accuracy(&confidences, config);

    let (category, category_term) = match ex.category {
        Some(c) => (c.category, Some(c.term)),
        None => (DEFAULT_CATEGORY.to_string(), None),
    };

    PartRecord {
        raw_text,
        category: Some(category),
        category_term,
        brands,
        models,
        model_years,
        general_years: ex.resolution.general_years,
        drive_type: ex.drive.map(|d| d.drive),
        position: ex.position.map(|p| p.value),
        side: ex.side.map(|s| s.value),
        engine_code: ex.engine.code.map(|c| c.code),
        engine_displacement: ex.engine.displacement.map(|d| d.liters),
        engine_type: ex.engine.engine_type,
        dimension: ex.dimension.map(|d| d.dimension),
        confidences,
        accuracy,
    }
}

fn models_confidence(model_years: &[ModelYearRange], vehicle: &VehicleExtraction) -> f64 {
    let from_models = model_years
        .iter()
        .map(|m| m.confidence)
        .fold(0.0_f64, f64::max);
    if from_models > 0.0 {
        return from_models;
    }
    // No model at all: an identified brand still counts for something.
    vehicle
        .brands
        .iter()
        .map(|b| b.confidence)
        .fold(0.0_f64, f64::max)
}

/// Weighted sum of the seven scored fields plus a coverage bonus for
/// records where most fields found something credible.
fn accuracy(confidences: &FieldConfidences, config: &EngineConfig) -> f64 {
    let weights = config.weights.as_array();
    let values = confidences.weighted();

    let weighted: f64 = weights.iter().zip(values.iter()).map(|(w, v)| w * v).sum();

    let covered = values
        .iter()
        .filter(|v| **v > config.coverage_threshold)
        .count();
    let coverage = covered as f64 / values.len() as f64;
    let bonus = config.coverage_bonus_max * coverage;

    (weighted + bonus).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_extractions() -> Extractions {
        Extractions {
            category: None,
            vehicle: VehicleExtraction::default(),
            resolution: Resolution::default(),
            drive: None,
            position: None,
            side: None,
            engine: EngineExtraction::default(),
            dimension: None,
        }
    }

    #[test]
    fn defaults_are_materialized() {
        let rec = aggregate(
            "משהו".to_string(),
            empty_extractions(),
            &EngineConfig::default(),
        );
        assert_eq!(rec.category.as_deref(), Some("Other Parts"));
        assert_eq!(rec.brands, vec!["Other"]);
        assert_eq!(rec.models.len(), 1);
        assert_eq!(rec.models[0].model, "Generic Model");
        assert_eq!(rec.models[0].brand, "Other");
    }

    #[test]
    fn accuracy_is_bounded() {
        let rec = aggregate("x".to_string(), empty_extractions(), &EngineConfig::default());
        assert!(rec.accuracy >= 0.0 && rec.accuracy <= 1.0);
    }

    #[test]
    fn placeholder_model_carries_general_years() {
        let mut ex = empty_extractions();
        ex.resolution.general_years.from = Some(2010);
        let rec = aggregate("x".to_string(), ex, &EngineConfig::default());
        assert_eq!(rec.model_years.len(), 1);
        assert_eq!(rec.model_years[0].years.from, Some(2010));
    }
}
