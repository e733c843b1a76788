use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::config::{ScoringWeights, ScreenerConfig};
use super::models::{
    ComponentScores, DegreeLevel, EducationRecord, JobRequirements, ProcessedResume,
    Recommendation, ScoreResult, SkillRecord,
};

/// Weighted scoring of a processed resume against a job profile. Pure: the
/// same inputs always produce the same result, and neither input is mutated.
pub struct ResumeScorer {
    config: Arc<ScreenerConfig>,
}

impl ResumeScorer {
    pub fn new(config: Arc<ScreenerConfig>) -> Self {
        Self { config }
    }

    pub fn score(&self, resume: &ProcessedResume, requirements: &JobRequirements) -> ScoreResult {
        let component_scores = ComponentScores {
            skills_match: score_skills_match(
                &resume.skills,
                &requirements.required_skills,
                &requirements.nice_to_have_skills,
            ),
            experience_years: score_experience(
                resume.experience.total_years,
                requirements.min_experience,
                requirements.effective_preferred_experience(),
            ),
            education: score_education(
                &resume.education,
                requirements.education_level,
                requirements.effective_preferred_education(),
            ),
            resume_quality: self.score_resume_quality(resume),
        };

        let overall_score = weighted_overall(&component_scores, &self.config.weights);

        ScoreResult {
            overall_score,
            component_scores,
            score_percentage: (overall_score * 1000.0).round() / 10.0,
            feedback: generate_feedback(&component_scores, resume, requirements),
            recommendation: Recommendation::from_overall_score(overall_score),
        }
    }

    /// Completeness heuristics over the extracted record. Too little text is
    /// a veto: nothing else can lift the score past 0.1.
    fn score_resume_quality(&self, resume: &ProcessedResume) -> f64 {
        if resume.text_length < self.config.min_text_length
            || resume.word_count < self.config.min_word_count
        {
            return 0.1;
        }

        let mut quality: f64 = 0.0;

        if resume.contact_info.email.is_some() {
            quality += 0.25;
        }
        if resume.contact_info.phone.is_some() {
            quality += 0.15;
        }
        if resume.contact_info.linkedin.is_some() {
            quality += 0.10;
        }

        let total_skills: usize = resume.skills.values().map(Vec::len).sum();
        if total_skills > 0 {
            quality += 0.15;
            if resume.skills.len() > 2 {
                quality += 0.10;
            }
        }

        if resume.experience.total_years > 0 {
            quality += 0.15;
        }
        if !resume.experience.organizations.is_empty() {
            quality += 0.10;
        }

        quality.min(1.0)
    }
}

pub(crate) fn weighted_overall(scores: &ComponentScores, weights: &ScoringWeights) -> f64 {
    scores.skills_match * weights.skills_match
        + scores.experience_years * weights.experience_years
        + scores.education * weights.education
        + scores.resume_quality * weights.resume_quality
}

/// Required matches dominate (0.8/0.2 split) when both lists are given;
/// with nothing to match against, the score stays neutral.
fn score_skills_match(resume_skills: &SkillRecord, required: &[String], nice_to_have: &[String]) -> f64 {
    if required.is_empty() && nice_to_have.is_empty() {
        return 0.5;
    }

    let resume_set: BTreeSet<String> = resume_skills
        .values()
        .flatten()
        .map(|skill| skill.trim().to_lowercase())
        .collect();
    let required_set: BTreeSet<String> = required
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect();
    let nice_set: BTreeSet<String> = nice_to_have
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect();

    let required_score = if required_set.is_empty() {
        0.0
    } else {
        resume_set.intersection(&required_set).count() as f64 / required_set.len() as f64
    };
    let nice_score = if nice_set.is_empty() {
        0.0
    } else {
        resume_set.intersection(&nice_set).count() as f64 / nice_set.len() as f64
    };

    let final_score = if !required_set.is_empty() && !nice_set.is_empty() {
        required_score * 0.8 + nice_score * 0.2
    } else if !required_set.is_empty() {
        required_score
    } else {
        nice_score
    };

    final_score.min(1.0)
}

/// Meets-minimum earns the 0.7 base; preferred years bump to 1.0; anything
/// between earns a diminishing 0.05-per-year bonus capped at 0.3. Below
/// minimum the score is pro-rated into the 0..0.6 band.
fn score_experience(total_years: u32, min_experience: f64, preferred: Option<f64>) -> f64 {
    let years = total_years as f64;

    if min_experience == 0.0 && preferred.is_none() {
        return 0.5;
    }

    if years >= min_experience {
        let mut base: f64 = 0.7;

        if preferred.is_some_and(|preferred_years| years >= preferred_years) {
            base = 1.0;
        } else if years > min_experience {
            let bonus = ((years - min_experience) * 0.05).min(0.3);
            base = (base + bonus).min(1.0);
        }

        base
    } else if min_experience > 0.0 {
        years / min_experience * 0.6
    } else {
        0.5
    }
}

/// Same meets/exceeds/below shape as experience, on the degree ordinal
/// hierarchy, with a 0.15-per-level bonus step.
fn score_education(
    education: &EducationRecord,
    required: Option<DegreeLevel>,
    preferred: Option<DegreeLevel>,
) -> f64 {
    if !education.has_degree {
        return if required.is_some() { 0.2 } else { 0.6 };
    }

    let Some(level) = education.level else {
        return 0.5;
    };
    let current = level.ordinal() as f64;

    if required.is_none() && preferred.is_none() {
        return (current / 4.0).min(1.0);
    }

    let required_ordinal = required.map(|l| l.ordinal() as f64).unwrap_or(0.0);
    let preferred_ordinal = preferred.map(|l| l.ordinal() as f64).unwrap_or(0.0);

    if current >= required_ordinal {
        let mut base: f64 = 0.7;

        if preferred_ordinal > 0.0 && current >= preferred_ordinal {
            base = 1.0;
        } else if current > required_ordinal {
            let bonus = ((current - required_ordinal) * 0.15).min(0.3);
            base = (base + bonus).min(1.0);
        }

        base
    } else {
        current / required_ordinal.max(1.0) * 0.6
    }
}

/// Three-tier advisory message per component; experience and education
/// interpolate the extracted values so the reader sees what was measured.
fn generate_feedback(
    scores: &ComponentScores,
    resume: &ProcessedResume,
    requirements: &JobRequirements,
) -> BTreeMap<String, String> {
    let mut feedback = BTreeMap::new();

    let skills_message = if scores.skills_match < 0.5 {
        "Consider adding more relevant technical skills mentioned in the job description."
            .to_string()
    } else if scores.skills_match < 0.8 {
        "Good skill match, but could be improved by learning additional required skills."
            .to_string()
    } else {
        "Excellent skill match with job requirements.".to_string()
    };
    feedback.insert("skills".to_string(), skills_message);

    let years = resume.experience.total_years;
    let required_years = requirements.min_experience;
    let experience_message = if scores.experience_years < 0.5 {
        format!("Experience ({years} years) is below the required {required_years} years.")
    } else if scores.experience_years < 0.8 {
        format!("Experience ({years} years) meets basic requirements.")
    } else {
        format!("Excellent experience level ({years} years) for this role.")
    };
    feedback.insert("experience".to_string(), experience_message);

    let level = resume
        .education
        .level
        .map(|l| l.as_str())
        .unwrap_or("None");
    let education_message = if scores.education < 0.5 {
        format!("Education level ({level}) may not meet job requirements.")
    } else {
        format!("Education level ({level}) is appropriate for this role.")
    };
    feedback.insert("education".to_string(), education_message);

    let quality_message = if scores.resume_quality < 0.5 {
        "Resume could be improved with more complete contact information and better formatting."
            .to_string()
    } else if scores.resume_quality < 0.8 {
        "Resume quality is good but could be enhanced.".to_string()
    } else {
        "Excellent resume quality and completeness.".to_string()
    };
    feedback.insert("quality".to_string(), quality_message);

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ContactInfo, ExperienceRecord, SkillCategory};

    fn scorer() -> ResumeScorer {
        ResumeScorer::new(Arc::new(ScreenerConfig::new().unwrap()))
    }

    fn resume_with_skills(skills: &[(&str, SkillCategory)]) -> ProcessedResume {
        let mut record = SkillRecord::new();
        for (skill, category) in skills {
            record
                .entry(*category)
                .or_default()
                .push(skill.to_string());
        }

        ProcessedResume {
            skills: record,
            text_length: 500,
            word_count: 80,
            ..ProcessedResume::default()
        }
    }

    #[test]
    fn weighted_overall_hits_the_extremes() {
        let weights = ScoringWeights::default();
        let perfect = ComponentScores {
            skills_match: 1.0,
            experience_years: 1.0,
            education: 1.0,
            resume_quality: 1.0,
        };
        assert!((weighted_overall(&perfect, &weights) - 1.0).abs() < 1e-12);

        let zero = ComponentScores::default();
        assert_eq!(weighted_overall(&zero, &weights), 0.0);
    }

    #[test]
    fn no_skill_requirements_is_neutral() {
        assert_eq!(score_skills_match(&SkillRecord::new(), &[], &[]), 0.5);
    }

    #[test]
    fn case_mismatched_required_skill_still_counts() {
        let resume = resume_with_skills(&[("python", SkillCategory::Programming)]);
        let required = vec!["Python".to_string(), "SQL".to_string()];
        let score = score_skills_match(&resume.skills, &required, &[]);
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn adding_a_required_skill_never_decreases_the_score() {
        let required = vec!["python".to_string(), "sql".to_string(), "docker".to_string()];

        let before = resume_with_skills(&[("python", SkillCategory::Programming)]);
        let after = resume_with_skills(&[
            ("python", SkillCategory::Programming),
            ("sql", SkillCategory::Programming),
        ]);

        let score_before = score_skills_match(&before.skills, &required, &[]);
        let score_after = score_skills_match(&after.skills, &required, &[]);
        assert!(score_after >= score_before);
    }

    #[test]
    fn required_and_nice_to_have_blend_80_20() {
        let resume = resume_with_skills(&[
            ("python", SkillCategory::Programming),
            ("docker", SkillCategory::Tools),
        ]);
        let required = vec!["python".to_string()];
        let nice = vec!["docker".to_string(), "kubernetes".to_string()];

        let score = score_skills_match(&resume.skills, &required, &nice);
        assert!((score - (1.0 * 0.8 + 0.5 * 0.2)).abs() < 1e-12);
    }

    #[test]
    fn experience_boundaries_are_exact() {
        // Meeting the minimum exactly, no preferred threshold.
        assert!((score_experience(5, 5.0, None) - 0.7).abs() < 1e-12);
        // Meeting the preferred threshold exactly.
        assert!((score_experience(8, 5.0, Some(8.0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn experience_bonus_is_capped() {
        // 3 extra years: 0.7 + 3 * 0.05 = 0.85.
        assert!((score_experience(8, 5.0, None) - 0.85).abs() < 1e-12);
        // 20 extra years: bonus saturates at 0.3.
        assert!((score_experience(25, 5.0, None) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn below_minimum_is_pro_rated() {
        assert!((score_experience(2, 4.0, None) - 0.3).abs() < 1e-12);
        assert_eq!(score_experience(0, 0.0, None), 0.5);
    }

    #[test]
    fn education_score_follows_the_hierarchy() {
        let phd = EducationRecord {
            has_degree: true,
            level: Some(DegreeLevel::PhD),
            ..EducationRecord::default()
        };
        let bachelors = EducationRecord {
            has_degree: true,
            level: Some(DegreeLevel::Bachelors),
            ..EducationRecord::default()
        };
        let no_degree = EducationRecord::default();

        // No requirements: ordinal / 4.
        assert!((score_education(&phd, None, None) - 1.0).abs() < 1e-12);
        assert!((score_education(&bachelors, None, None) - 0.5).abs() < 1e-12);

        // Degree missing entirely.
        assert_eq!(score_education(&no_degree, Some(DegreeLevel::Bachelors), None), 0.2);
        assert_eq!(score_education(&no_degree, None, None), 0.6);

        // Exceeding the requirement earns the stepped bonus: 0.7 + 2 * 0.15.
        let vs_bachelors = score_education(&phd, Some(DegreeLevel::Bachelors), None);
        assert!((vs_bachelors - 1.0).abs() < 1e-12);

        // One level above: 0.7 + 0.15.
        let masters = EducationRecord {
            has_degree: true,
            level: Some(DegreeLevel::Masters),
            ..EducationRecord::default()
        };
        let vs_bachelors = score_education(&masters, Some(DegreeLevel::Bachelors), None);
        assert!((vs_bachelors - 0.85).abs() < 1e-12);

        // Below requirement: 2 / 4 * 0.6.
        let vs_phd = score_education(&bachelors, Some(DegreeLevel::PhD), None);
        assert!((vs_phd - 0.3).abs() < 1e-12);
    }

    #[test]
    fn degree_without_level_is_neutral() {
        let record = EducationRecord {
            has_degree: true,
            level: None,
            ..EducationRecord::default()
        };
        assert_eq!(score_education(&record, Some(DegreeLevel::Bachelors), None), 0.5);
    }

    #[test]
    fn insufficient_text_vetoes_quality() {
        let resume = ProcessedResume {
            contact_info: ContactInfo {
                email: Some("jane@example.com".to_string()),
                phone: Some("(415) 555-2671".to_string()),
                linkedin: Some("https://linkedin.com/in/jane".to_string()),
            },
            text_length: 50,
            word_count: 10,
            ..ProcessedResume::default()
        };

        assert_eq!(scorer().score_resume_quality(&resume), 0.1);
    }

    #[test]
    fn quality_accumulates_completeness_signals() {
        let mut skills = SkillRecord::new();
        skills.insert(SkillCategory::Programming, vec!["python".to_string()]);
        skills.insert(SkillCategory::Tools, vec!["docker".to_string()]);
        skills.insert(SkillCategory::Cloud, vec!["aws".to_string()]);

        let resume = ProcessedResume {
            contact_info: ContactInfo {
                email: Some("jane@example.com".to_string()),
                phone: Some("(415) 555-2671".to_string()),
                linkedin: None,
            },
            skills,
            experience: ExperienceRecord {
                total_years: 4,
                organizations: ["Initech Inc".to_string()].into(),
                job_titles: Default::default(),
            },
            text_length: 900,
            word_count: 150,
            ..ProcessedResume::default()
        };

        // 0.25 + 0.15 + 0.15 + 0.10 + 0.15 + 0.10 = 0.90
        assert!((scorer().score_resume_quality(&resume) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn empty_document_scores_the_literal_boundary_value() {
        let result = scorer().score(&ProcessedResume::empty(), &JobRequirements::default());

        assert_eq!(result.component_scores.skills_match, 0.5);
        assert_eq!(result.component_scores.experience_years, 0.5);
        assert_eq!(result.component_scores.education, 0.6);
        assert_eq!(result.component_scores.resume_quality, 0.1);
        // 0.5*0.4 + 0.5*0.25 + 0.6*0.20 + 0.1*0.15 = 0.46: moderate, not weak.
        assert!((result.overall_score - 0.46).abs() < 1e-9);
        assert_eq!(result.score_percentage, 46.0);
        assert_eq!(result.recommendation, Recommendation::Moderate);
    }

    #[test]
    fn feedback_interpolates_extracted_values() {
        let resume = ProcessedResume {
            experience: ExperienceRecord {
                total_years: 2,
                ..ExperienceRecord::default()
            },
            education: EducationRecord {
                has_degree: true,
                level: Some(DegreeLevel::Bachelors),
                ..EducationRecord::default()
            },
            text_length: 500,
            word_count: 100,
            ..ProcessedResume::default()
        };
        let requirements = JobRequirements {
            min_experience: 6.0,
            ..JobRequirements::default()
        };

        let result = scorer().score(&resume, &requirements);
        assert_eq!(
            result.feedback.get("experience").unwrap(),
            "Experience (2 years) is below the required 6 years."
        );
        assert!(result
            .feedback
            .get("education")
            .unwrap()
            .contains("Bachelors"));
        assert_eq!(result.feedback.len(), 4);
    }
}
