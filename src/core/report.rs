use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::{
    ComponentScores, ContactInfo, EducationRecord, ExperienceRecord, JobRequirements,
    ScreeningOutcome, SkillRecord,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One flattened row per screened document, shaped for tabular export. The
/// field names are part of the external contract and must not drift.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRow {
    #[serde(rename = "File_Name")]
    pub file_name: String,
    #[serde(rename = "Overall_Score")]
    pub overall_score: f64,
    #[serde(rename = "Skills_Score")]
    pub skills_score: f64,
    #[serde(rename = "Experience_Score")]
    pub experience_score: f64,
    #[serde(rename = "Education_Score")]
    pub education_score: f64,
    #[serde(rename = "Quality_Score")]
    pub quality_score: f64,
    #[serde(rename = "Total_Experience")]
    pub total_experience: u32,
    #[serde(rename = "Education_Level")]
    pub education_level: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Recommendation")]
    pub recommendation: String,
    #[serde(rename = "Processing_Date")]
    pub processing_date: String,
}

impl CandidateRow {
    pub fn new(outcome: &ScreeningOutcome, processed_at: DateTime<Utc>) -> Self {
        let scores = &outcome.score.component_scores;

        Self {
            file_name: outcome.file_name.clone(),
            overall_score: outcome.score.score_percentage,
            skills_score: scores.skills_match * 100.0,
            experience_score: scores.experience_years * 100.0,
            education_score: scores.education * 100.0,
            quality_score: scores.resume_quality * 100.0,
            total_experience: outcome.resume.experience.total_years,
            education_level: outcome
                .resume
                .education
                .level
                .map(|level| level.as_str().to_string()),
            email: outcome.resume.contact_info.email.clone(),
            phone: outcome.resume.contact_info.phone.clone(),
            recommendation: outcome.score.recommendation.as_str().to_string(),
            processing_date: processed_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateInfo {
    #[serde(rename = "File_Name")]
    pub file_name: String,
    #[serde(rename = "Processing_Date")]
    pub processing_date: String,
    #[serde(rename = "Overall_Score")]
    pub overall_score: f64,
    #[serde(rename = "Recommendation")]
    pub recommendation: String,
}

/// The full nested analysis, serialized human-readably for the detailed
/// download. Mirrors the score and resume structures key for key.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedReport {
    #[serde(rename = "Candidate_Info")]
    pub candidate_info: CandidateInfo,
    #[serde(rename = "Contact_Info")]
    pub contact_info: ContactInfo,
    #[serde(rename = "Skills")]
    pub skills: SkillRecord,
    #[serde(rename = "Experience")]
    pub experience: ExperienceRecord,
    #[serde(rename = "Education")]
    pub education: EducationRecord,
    #[serde(rename = "Component_Scores")]
    pub component_scores: ComponentScores,
    #[serde(rename = "Job_Requirements")]
    pub job_requirements: JobRequirements,
}

impl DetailedReport {
    pub fn new(
        outcome: &ScreeningOutcome,
        requirements: &JobRequirements,
        processed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            candidate_info: CandidateInfo {
                file_name: outcome.file_name.clone(),
                processing_date: processed_at.format(TIMESTAMP_FORMAT).to_string(),
                overall_score: outcome.score.score_percentage,
                recommendation: outcome.score.recommendation.as_str().to_string(),
            },
            contact_info: outcome.resume.contact_info.clone(),
            skills: outcome.resume.skills.clone(),
            experience: outcome.resume.experience.clone(),
            education: outcome.resume.education.clone(),
            component_scores: outcome.score.component_scores,
            job_requirements: requirements.clone(),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
