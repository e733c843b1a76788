use std::collections::BTreeSet;

use super::models::{DegreeLevel, EducationRecord};
use super::ner::EntityRecognizer;

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "degree",
    "diploma",
    "university",
    "college",
    "institute",
    "school",
];

const EDUCATION_INDICATORS: &[&str] = &["university", "college", "institute", "school"];

pub fn extract_education(
    text: &str,
    recognizer: Option<&dyn EntityRecognizer>,
) -> EducationRecord {
    let lowered = text.to_lowercase();

    let has_degree = DEGREE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword));

    let institutions = match recognizer {
        Some(recognizer) => recognizer
            .organizations(text)
            .into_iter()
            .filter(|org| {
                let lowered_org = org.to_lowercase();
                EDUCATION_INDICATORS
                    .iter()
                    .any(|word| lowered_org.contains(word))
            })
            .collect(),
        None => BTreeSet::new(),
    };

    EducationRecord {
        has_degree,
        level: detect_level(&lowered),
        institutions,
    }
}

/// Highest level mentioned wins: PhD > Masters > Bachelors > Associates.
fn detect_level(lowered: &str) -> Option<DegreeLevel> {
    if ["phd", "ph.d", "doctorate"]
        .iter()
        .any(|k| lowered.contains(k))
    {
        Some(DegreeLevel::PhD)
    } else if ["master", "mba", "m.s", "m.a"]
        .iter()
        .any(|k| lowered.contains(k))
    {
        Some(DegreeLevel::Masters)
    } else if ["bachelor", "b.s", "b.a", "b.tech"]
        .iter()
        .any(|k| lowered.contains(k))
    {
        Some(DegreeLevel::Bachelors)
    } else if lowered.contains("associate") {
        Some(DegreeLevel::Associates)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ner::HeuristicEntityRecognizer;

    #[test]
    fn phd_outranks_other_mentions() {
        let record = extract_education("PhD in CS, also holds a Bachelors", None);
        assert!(record.has_degree);
        assert_eq!(record.level, Some(DegreeLevel::PhD));
    }

    #[test]
    fn abbreviated_degrees_resolve() {
        assert_eq!(
            extract_education("B.Tech in electronics", None).level,
            Some(DegreeLevel::Bachelors)
        );
        assert_eq!(
            extract_education("completed an MBA program", None).level,
            Some(DegreeLevel::Masters)
        );
        assert_eq!(
            extract_education("Associate of Arts", None).level,
            Some(DegreeLevel::Associates)
        );
    }

    #[test]
    fn degree_detected_without_level() {
        let record = extract_education("diploma from a trade program", None);
        assert!(record.has_degree);
        assert_eq!(record.level, None);
    }

    #[test]
    fn no_education_signal_at_all() {
        let record = extract_education("ten summers of sailing", None);
        assert!(!record.has_degree);
        assert_eq!(record.level, None);
        assert!(record.institutions.is_empty());
    }

    #[test]
    fn institutions_come_from_the_recognizer() {
        let record = extract_education(
            "B.S. from Stanford University, worked at Initech Technologies",
            Some(&HeuristicEntityRecognizer),
        );

        assert!(record.institutions.contains("Stanford University"));
        assert!(!record.institutions.contains("Initech Technologies"));
    }

    #[test]
    fn without_recognizer_institutions_are_empty() {
        let record = extract_education("B.S. from Stanford University", None);
        assert!(record.has_degree);
        assert!(record.institutions.is_empty());
    }
}
