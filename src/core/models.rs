use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Skill catalog categories, ordered as the catalog lists them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Frameworks,
    Tools,
    Databases,
    Cloud,
    SoftSkills,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
            SkillCategory::SoftSkills => "soft_skills",
        }
    }
}

/// Matched skills per category. Categories with no matches are absent; term
/// order within a category follows the catalog.
pub type SkillRecord = BTreeMap<SkillCategory, Vec<String>>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum DegreeLevel {
    Associates,
    Bachelors,
    Masters,
    PhD,
}

impl DegreeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeLevel::Associates => "Associates",
            DegreeLevel::Bachelors => "Bachelors",
            DegreeLevel::Masters => "Masters",
            DegreeLevel::PhD => "PhD",
        }
    }

    /// Ordinal rank used for meets/exceeds comparisons. MBA text folds into
    /// `Masters` during extraction, so four variants cover the hierarchy.
    pub fn ordinal(&self) -> u32 {
        match self {
            DegreeLevel::Associates => 1,
            DegreeLevel::Bachelors => 2,
            DegreeLevel::Masters => 3,
            DegreeLevel::PhD => 4,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub total_years: u32,
    pub organizations: BTreeSet<String>,
    pub job_titles: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub has_degree: bool,
    pub level: Option<DegreeLevel>,
    pub institutions: BTreeSet<String>,
}

/// Structured facts extracted from one resume, plus the two text-size facts
/// the quality score keys on. Both are measured on the exact normalized text
/// handed to the extractors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedResume {
    pub contact_info: ContactInfo,
    pub skills: SkillRecord,
    pub experience: ExperienceRecord,
    pub education: EducationRecord,
    pub text_length: usize,
    pub word_count: usize,
}

impl ProcessedResume {
    /// The terminal low-confidence record used when extraction yields too
    /// little text to work with.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Job profile the resume is scored against. Never mutated; the discard
/// rules for preferred values live in the `effective_*` accessors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub min_experience: f64,
    pub preferred_experience: Option<f64>,
    pub education_level: Option<DegreeLevel>,
    pub preferred_education_level: Option<DegreeLevel>,
}

impl JobRequirements {
    /// Preferred years count only when they exceed the minimum.
    pub fn effective_preferred_experience(&self) -> Option<f64> {
        self.preferred_experience
            .filter(|preferred| *preferred > self.min_experience)
    }

    /// A preferred level equal to the required level adds nothing.
    pub fn effective_preferred_education(&self) -> Option<DegreeLevel> {
        self.preferred_education_level
            .filter(|preferred| Some(*preferred) != self.education_level)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recommendation {
    #[serde(rename = "Strong Candidate - Recommend for Interview")]
    Strong,
    #[serde(rename = "Good Candidate - Consider for Interview")]
    Good,
    #[serde(rename = "Moderate Candidate - Review Carefully")]
    Moderate,
    #[serde(rename = "Weak Candidate - Consider Rejection")]
    Weak,
    #[serde(rename = "Unable to Evaluate")]
    UnableToEvaluate,
}

impl Recommendation {
    pub fn from_overall_score(overall_score: f64) -> Self {
        if overall_score >= 0.8 {
            Recommendation::Strong
        } else if overall_score >= 0.6 {
            Recommendation::Good
        } else if overall_score >= 0.4 {
            Recommendation::Moderate
        } else {
            Recommendation::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Strong => "Strong Candidate - Recommend for Interview",
            Recommendation::Good => "Good Candidate - Consider for Interview",
            Recommendation::Moderate => "Moderate Candidate - Review Carefully",
            Recommendation::Weak => "Weak Candidate - Consider Rejection",
            Recommendation::UnableToEvaluate => "Unable to Evaluate",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four component scores, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub skills_match: f64,
    pub experience_years: f64,
    pub education: f64,
    pub resume_quality: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_score: f64,
    pub component_scores: ComponentScores,
    pub score_percentage: f64,
    pub feedback: BTreeMap<String, String>,
    pub recommendation: Recommendation,
}

impl ScoreResult {
    /// Error-path result: all zeros, the fixed error feedback entry, and the
    /// "Unable to Evaluate" recommendation the presentation layer keys on.
    pub fn unable_to_evaluate() -> Self {
        let mut feedback = BTreeMap::new();
        feedback.insert("error".to_string(), "Could not process resume".to_string());

        Self {
            overall_score: 0.0,
            component_scores: ComponentScores::default(),
            score_percentage: 0.0,
            feedback,
            recommendation: Recommendation::UnableToEvaluate,
        }
    }
}

/// Everything one screening run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningOutcome {
    pub file_name: String,
    pub resume: ProcessedResume,
    pub score: ScoreResult,
}
