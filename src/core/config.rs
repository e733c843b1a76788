use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ScreenError;
use super::models::SkillCategory;

/// Patterns shared by the normalizer and the contact extractor. Protected
/// spans and extracted fields must come from the same tables or the
/// protect-strip-restore invariant breaks.
pub(crate) static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());

pub(crate) static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

pub(crate) static LINKEDIN_FULL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://(?:www\.)?linkedin\.com/(?:in|pub)/[\w\-]+").unwrap());

pub(crate) static LINKEDIN_BARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:www\.)?linkedin\.com/(?:in|pub)/[\w\-]+").unwrap());

pub(crate) static LINKEDIN_USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/([\w\-]+)").unwrap());

/// Phone patterns in priority order: international with country code,
/// parenthesized US, dotted, dashed, bare 10 digit, Indian split, Indian
/// compact. The first pattern that matches anywhere in the text supplies
/// every phone candidate; later patterns are never consulted.
pub(crate) static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\+\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}")
            .unwrap(),
        Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
        Regex::new(r"\d{3}\.\d{3}\.\d{4}").unwrap(),
        Regex::new(r"\d{3}-\d{3}-\d{4}").unwrap(),
        Regex::new(r"\b\d{10}\b").unwrap(),
        Regex::new(r"\+91[-.\s]?\d{5}[-.\s]?\d{5}").unwrap(),
        Regex::new(r"\+91[-.\s]?\d{10}").unwrap(),
    ]
});

/// Component weights for the overall score. Must sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills_match: f64,
    pub experience_years: f64,
    pub education: f64,
    pub resume_quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills_match: 0.40,
            experience_years: 0.25,
            education: 0.20,
            resume_quality: 0.15,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills_match + self.experience_years + self.education + self.resume_quality
    }

    pub fn validate(&self) -> Result<(), ScreenError> {
        if (self.sum() - 1.0).abs() > 1e-9 {
            return Err(ScreenError::InvalidConfiguration(format!(
                "scoring weights sum to {}, expected 1.0",
                self.sum()
            )));
        }

        Ok(())
    }
}

/// One catalog skill with its precompiled whole-word matcher.
pub struct SkillTerm {
    pub name: &'static str,
    matcher: Regex,
}

impl SkillTerm {
    fn new(name: &'static str) -> Self {
        Self {
            matcher: Regex::new(&whole_word_pattern(name)).unwrap(),
            name,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Word boundaries only apply on edges that are word characters, so terms
/// like `c++` and `c#` stay matchable.
fn whole_word_pattern(term: &str) -> String {
    let escaped = regex::escape(term);
    let lead = if term.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
        r"\b"
    } else {
        r"(?:^|[^\w])"
    };
    let trail = if term.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
        r"\b"
    } else {
        r"(?:[^\w]|$)"
    };

    format!("(?i){lead}{escaped}{trail}")
}

/// Immutable process-wide configuration: skill catalog, scoring weights, and
/// length thresholds. Built once at startup and shared read-only between
/// pipeline instances.
pub struct ScreenerConfig {
    pub weights: ScoringWeights,
    /// Quality veto thresholds on the normalized text.
    pub min_text_length: usize,
    pub min_word_count: usize,
    /// Below this the Information Extractor short-circuits to an empty record.
    pub min_parse_length: usize,
    skill_catalog: Vec<(SkillCategory, Vec<SkillTerm>)>,
}

impl ScreenerConfig {
    pub fn new() -> Result<Self, ScreenError> {
        let weights = ScoringWeights::default();
        weights.validate()?;

        Ok(Self {
            weights,
            min_text_length: 100,
            min_word_count: 20,
            min_parse_length: 50,
            skill_catalog: build_skill_catalog(),
        })
    }

    pub fn skill_catalog(&self) -> &[(SkillCategory, Vec<SkillTerm>)] {
        &self.skill_catalog
    }
}

fn build_skill_catalog() -> Vec<(SkillCategory, Vec<SkillTerm>)> {
    let programming = [
        "python",
        "java",
        "javascript",
        "c++",
        "c#",
        "php",
        "ruby",
        "go",
        "swift",
        "kotlin",
        "scala",
        "r",
        "matlab",
        "sql",
        "html",
        "css",
        "typescript",
        "perl",
        "shell",
        "bash",
        "powershell",
    ];
    let frameworks = [
        "react",
        "angular",
        "vue",
        "django",
        "flask",
        "spring",
        "nodejs",
        "express",
        "laravel",
        "rails",
        "tensorflow",
        "pytorch",
        "keras",
        "scikit-learn",
        "pandas",
        "numpy",
        "bootstrap",
        "jquery",
    ];
    let tools = [
        "git",
        "docker",
        "kubernetes",
        "jenkins",
        "ansible",
        "terraform",
        "vagrant",
        "maven",
        "gradle",
        "npm",
        "yarn",
        "webpack",
        "jira",
        "confluence",
        "slack",
        "trello",
    ];
    let databases = [
        "mysql",
        "postgresql",
        "mongodb",
        "oracle",
        "redis",
        "elasticsearch",
        "sqlite",
        "cassandra",
        "dynamodb",
        "neo4j",
        "influxdb",
    ];
    let cloud = [
        "aws",
        "azure",
        "gcp",
        "heroku",
        "digital ocean",
        "linode",
        "s3",
        "ec2",
        "lambda",
        "cloudformation",
        "terraform",
    ];
    let soft_skills = [
        "leadership",
        "communication",
        "teamwork",
        "problem solving",
        "project management",
        "agile",
        "scrum",
        "kanban",
        "analytical",
        "creative",
        "innovative",
        "collaborative",
    ];

    vec![
        (SkillCategory::Programming, compile_terms(&programming)),
        (SkillCategory::Frameworks, compile_terms(&frameworks)),
        (SkillCategory::Tools, compile_terms(&tools)),
        (SkillCategory::Databases, compile_terms(&databases)),
        (SkillCategory::Cloud, compile_terms(&cloud)),
        (SkillCategory::SoftSkills, compile_terms(&soft_skills)),
    ]
}

fn compile_terms(terms: &[&'static str]) -> Vec<SkillTerm> {
    terms.iter().map(|term| SkillTerm::new(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-12);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn unbalanced_weights_are_rejected() {
        let weights = ScoringWeights {
            skills_match: 0.5,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn whole_word_matching_handles_symbol_terms() {
        let cpp = SkillTerm::new("c++");
        assert!(cpp.is_match("proficient in c++ and java"));
        assert!(cpp.is_match("C++"));
        assert!(!cpp.is_match("abc++ is not a language"));

        let sharp = SkillTerm::new("c#");
        assert!(sharp.is_match("built services in C# since 2019"));

        let r_lang = SkillTerm::new("r");
        assert!(r_lang.is_match("statistics in R"));
        assert!(!r_lang.is_match("river rafting"));
    }

    #[test]
    fn catalog_covers_all_six_categories() {
        let config = ScreenerConfig::new().unwrap();
        let categories: Vec<SkillCategory> = config
            .skill_catalog()
            .iter()
            .map(|(category, _)| *category)
            .collect();

        assert_eq!(
            categories,
            vec![
                SkillCategory::Programming,
                SkillCategory::Frameworks,
                SkillCategory::Tools,
                SkillCategory::Databases,
                SkillCategory::Cloud,
                SkillCategory::SoftSkills,
            ]
        );
    }
}
