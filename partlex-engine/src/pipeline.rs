//! The classification pipeline.

use rayon::prelude::*;
use tracing::{debug, instrument};

use partlex_core::config::EngineConfig;
use partlex_core::errors::LexiconError;
use partlex_core::types::PartRecord;

use crate::aggregate::{aggregate, Extractions};
use crate::extract::{
    category, dimension, drive, engine_info, placement, vehicle, years, CompiledPatterns,
    TextIndex,
};
use crate::lexicon::Lexicon;
use crate::resolve::resolve;

/// The classification engine. Construction compiles the lexicon automata
/// and the shared regex patterns; classification itself allocates nothing
/// shared and is safe to call from any number of threads.
pub struct Classifier {
    lexicon: Lexicon,
    patterns: CompiledPatterns,
    config: EngineConfig,
}

impl Classifier {
    /// Built-in lexicon, default tunables.
    pub fn with_defaults() -> Result<Self, LexiconError> {
        Self::new(EngineConfig::default())
    }

    /// Built-in lexicon, caller-provided tunables.
    pub fn new(config: EngineConfig) -> Result<Self, LexiconError> {
        Self::with_lexicon(Lexicon::builtin()?, config)
    }

    /// Caller-provided lexicon, for catalogs with their own term tables.
    pub fn with_lexicon(lexicon: Lexicon, config: EngineConfig) -> Result<Self, LexiconError> {
        Ok(Self {
            lexicon,
            patterns: CompiledPatterns::new()?,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classifies one free-text description. Total: every input produces a
    /// record, empty or whitespace-only input produces the all-default
    /// record with accuracy 0.0.
    #[instrument(level = "debug", skip_all)]
    pub fn classify(&self, text: &str) -> PartRecord {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return PartRecord::empty(trimmed);
        }

        let index = TextIndex::new(trimmed);

        let category = category::extract_category(trimmed, &index, &self.lexicon, &self.patterns);
        let vehicle = vehicle::extract_vehicle(trimmed, &index, &self.lexicon);
        let years = years::extract_years(trimmed, &index, &self.patterns, &self.config);
        let drive = drive::extract_drive(trimmed, &index, &self.lexicon);
        let position = placement::extract_position(trimmed, &index, &self.lexicon);
        let side = placement::extract_side(trimmed, &index, &self.lexicon);
        let mut engine =
            engine_info::extract_engine(trimmed, &index, &self.lexicon, &self.patterns, &self.config);
        let dimension = dimension::extract_dimension(trimmed, &index, &self.patterns, &self.config);

        let resolution = resolve(vehicle.clone(), years, &mut engine, &self.config);

        let record = aggregate(
            trimmed.to_string(),
            Extractions {
                category,
                vehicle,
                resolution,
                drive,
                position,
                side,
                engine,
                dimension,
            },
            &self.config,
        );

        debug!(
            category = record.category.as_deref().unwrap_or("-"),
            models = record.models.len(),
            accuracy = record.accuracy,
            "classified"
        );
        record
    }

    /// Classifies a batch in parallel, preserving input order. Honors
    /// `config.threads` when set, otherwise uses rayon's global pool.
    pub fn classify_batch(&self, texts: &[String]) -> Vec<PartRecord> {
        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build();
                match pool {
                    Ok(pool) => pool.install(|| self.classify_all(texts)),
                    // Pool creation only fails on resource exhaustion;
                    // classification still has to answer.
                    Err(_) => self.classify_all(texts),
                }
            }
            None => self.classify_all(texts),
        }
    }

    fn classify_all(&self, texts: &[String]) -> Vec<PartRecord> {
        texts.par_iter().map(|t| self.classify(t)).collect()
    }
}
