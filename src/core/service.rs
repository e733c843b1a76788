use std::sync::Arc;

use tracing::debug;

use super::config::ScreenerConfig;
use super::document_parser::DocumentTextExtractor;
use super::errors::ScreenError;
use super::models::{JobRequirements, ScreeningOutcome};
use super::ner::{EntityRecognizer, HeuristicEntityRecognizer};
use super::normalizer::normalize;
use super::processor::ResumeProcessor;
use super::scorer::ResumeScorer;

/// The full screening pipeline: bytes to text, text to structured record,
/// record to score. Holds no per-call state, so one instance can serve any
/// number of threads, and independent instances share the same read-only
/// configuration.
pub struct ScreeningPipeline {
    extractor: DocumentTextExtractor,
    processor: ResumeProcessor,
    scorer: ResumeScorer,
}

impl ScreeningPipeline {
    pub fn new(
        config: Arc<ScreenerConfig>,
        recognizer: Option<Arc<dyn EntityRecognizer>>,
    ) -> Self {
        Self {
            extractor: DocumentTextExtractor::new(),
            processor: ResumeProcessor::new(Arc::clone(&config), recognizer),
            scorer: ResumeScorer::new(config),
        }
    }

    /// Default wiring: fresh configuration plus the heuristic recognizer.
    pub fn with_defaults() -> Result<Self, ScreenError> {
        let config = Arc::new(ScreenerConfig::new()?);
        Ok(Self::new(config, Some(Arc::new(HeuristicEntityRecognizer))))
    }

    /// Screen one document. The only error is an unsupported format; every
    /// extraction problem inside a supported format degrades to an empty
    /// record with a correspondingly low score.
    pub fn screen(
        &self,
        file_name: &str,
        data: &[u8],
        requirements: &JobRequirements,
    ) -> Result<ScreeningOutcome, ScreenError> {
        let raw_text = self.extractor.extract_text(file_name, data)?;
        let normalized = normalize(&raw_text);
        debug!(
            file_name,
            raw_len = raw_text.len(),
            normalized_len = normalized.len(),
            "extracted document text"
        );

        let resume = self.processor.process(&normalized);
        let score = self.scorer.score(&resume, requirements);

        Ok(ScreeningOutcome {
            file_name: file_name.to_string(),
            resume,
            score,
        })
    }
}
