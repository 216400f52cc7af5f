//! Dimension extraction: belt lengths, millimeter mentions, disc
//! diameters, and the bare-decimal displacement fallback.

use partlex_core::config::EngineConfig;
use partlex_core::types::{Dimension, DimensionKind};

use crate::extract::patterns::CompiledPatterns;
use crate::extract::text::{contains_any, TextIndex};
use crate::extract::types::DimensionExtraction;

const PK_CONFIDENCE: f64 = 0.95;
const MM_CONFIDENCE: f64 = 0.9;
const DIAMETER_CONFIDENCE: f64 = 0.9;
const DECIMAL_CONFIDENCE: f64 = 0.7;
const DECIMAL_COMMON_CONFIDENCE: f64 = 0.85;
const DECIMAL_CONTEXT_CONFIDENCE: f64 = 0.95;

const ENGINE_CONTEXT_TERMS: &[&str] = &["נפח", "מנוע", "ליטר"];
const COMMON_DISPLACEMENTS: &[f64] = &[
    1.0, 1.2, 1.3, 1.4, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.5, 2.7, 3.0, 3.5, 4.0, 5.0, 6.0,
];

/// Most specific pattern wins: PK belt length, then an explicit mm
/// mention, then a disc diameter, and only then a bare decimal read as
/// engine displacement.
pub fn extract_dimension(
    text: &str,
    index: &TextIndex,
    patterns: &CompiledPatterns,
    config: &EngineConfig,
) -> Option<DimensionExtraction> {
    if let Some(caps) = patterns.pk_belt.captures(text) {
        if let Some(length) = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()) {
            return Some(DimensionExtraction {
                dimension: Dimension {
                    value: length,
                    kind: DimensionKind::BeltLength,
                },
                confidence: PK_CONFIDENCE,
            });
        }
    }

    if let Some(caps) = patterns.millimeters.captures(text) {
        if let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) {
            return Some(DimensionExtraction {
                dimension: Dimension {
                    value,
                    kind: DimensionKind::Millimeters,
                },
                confidence: MM_CONFIDENCE,
            });
        }
    }

    if let Some(caps) = patterns.diameter.captures(text) {
        if let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) {
            return Some(DimensionExtraction {
                dimension: Dimension {
                    value,
                    kind: DimensionKind::Diameter,
                },
                confidence: DIAMETER_CONFIDENCE,
            });
        }
    }

    for m in patterns.displacement.find_iter(text) {
        let start = index.char_at(m.start());
        let end = index.char_at(m.end());
        let digit_before = start > 0 && index.char(start - 1).is_some_and(|c| c.is_ascii_digit());
        let digit_after = index.char(end).is_some_and(|c| c.is_ascii_digit());
        if digit_before || digit_after {
            continue;
        }
        let Ok(liters) = m.as_str().parse::<f64>() else {
            continue;
        };
        if liters < config.displacement_min || liters > config.displacement_max {
            continue;
        }
        let confidence = if contains_any(text, ENGINE_CONTEXT_TERMS) {
            DECIMAL_CONTEXT_CONFIDENCE
        } else if COMMON_DISPLACEMENTS.iter().any(|d| (d - liters).abs() < 1e-9) {
            DECIMAL_COMMON_CONFIDENCE
        } else {
            DECIMAL_CONFIDENCE
        };
        return Some(DimensionExtraction {
            dimension: Dimension {
                value: liters,
                kind: DimensionKind::Displacement,
            },
            confidence,
        });
    }

    None
}
