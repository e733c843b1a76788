use std::sync::Arc;

use super::config::ScreenerConfig;
use super::contact::extract_contact_info;
use super::education::extract_education;
use super::experience::extract_experience;
use super::models::ProcessedResume;
use super::ner::EntityRecognizer;
use super::skills::extract_skills;

/// Turns normalized text into the structured resume record. Deterministic
/// for a given config; never fails — too little text short-circuits to the
/// all-empty record.
pub struct ResumeProcessor {
    config: Arc<ScreenerConfig>,
    recognizer: Option<Arc<dyn EntityRecognizer>>,
}

impl ResumeProcessor {
    pub fn new(config: Arc<ScreenerConfig>, recognizer: Option<Arc<dyn EntityRecognizer>>) -> Self {
        Self { config, recognizer }
    }

    pub fn process(&self, text: &str) -> ProcessedResume {
        if text.trim().chars().count() < self.config.min_parse_length {
            return ProcessedResume::empty();
        }

        let recognizer = self.recognizer.as_deref();

        ProcessedResume {
            contact_info: extract_contact_info(text),
            skills: extract_skills(&self.config, text),
            experience: extract_experience(text, recognizer),
            education: extract_education(text, recognizer),
            text_length: text.chars().count(),
            word_count: text.split_whitespace().count(),
        }
    }
}
