//! Resume screening core: document-to-text extraction, rule-based
//! information extraction, and weighted fit scoring against a job profile.
//!
//! The pipeline is strictly one-way — raw bytes become text, text becomes a
//! structured record, the record becomes a score — and every stage is a pure
//! function of its input plus fixed configuration. Presentation concerns
//! (dashboards, downloads, styling) live outside this crate and consume
//! [`ScreeningOutcome`], [`CandidateRow`], and [`DetailedReport`] as-is.

pub mod core;

pub use crate::core::config::{ScoringWeights, ScreenerConfig};
pub use crate::core::errors::ScreenError;
pub use crate::core::models::{
    ComponentScores, ContactInfo, DegreeLevel, EducationRecord, ExperienceRecord,
    JobRequirements, ProcessedResume, Recommendation, ScoreResult, ScreeningOutcome,
    SkillCategory, SkillRecord,
};
pub use crate::core::ner::{EntityRecognizer, HeuristicEntityRecognizer};
pub use crate::core::report::{CandidateRow, DetailedReport};
pub use crate::core::service::ScreeningPipeline;
