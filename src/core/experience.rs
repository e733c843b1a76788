use std::collections::BTreeSet;

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::models::ExperienceRecord;
use super::ner::EntityRecognizer;

/// Explicit "N years of experience" phrasings, tried over the whole text.
/// The maximum across every match of every pattern wins.
static YEARS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+)[\s\-]*(?:years?|yrs?)[\s\-]*(?:of\s+)?(?:experience|exp)").unwrap(),
        Regex::new(r"(?:experience|exp)[\s\-]*(?:of\s+)?(\d+)[\s\-]*(?:years?|yrs?)").unwrap(),
        Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)").unwrap(),
    ]
});

static BARE_YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)[\s-]*(?:years?|yrs?)").unwrap());

static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-–]\s*(\d{4})").unwrap());

static YEAR_TO_PRESENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-–]\s*(?:present|current)").unwrap());

static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+(\d{4})\s*[-–]\s*(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+(\d{4})",
    )
    .unwrap()
});

/// Organization mentions that are really education institutions get filtered
/// out here; the education extractor picks them up instead.
const EDUCATION_NOISE: &[&str] = &["university", "college", "school", "degree"];

pub fn extract_experience(
    text: &str,
    recognizer: Option<&dyn EntityRecognizer>,
) -> ExperienceRecord {
    let Some(recognizer) = recognizer else {
        return extract_experience_fallback(text);
    };

    let lowered = text.to_lowercase();

    let organizations: BTreeSet<String> = recognizer
        .organizations(text)
        .into_iter()
        .filter(|org| {
            let lowered_org = org.to_lowercase();
            !EDUCATION_NOISE
                .iter()
                .any(|word| lowered_org.contains(word))
        })
        .collect();

    let mut total_years = explicit_years(&lowered);
    if total_years == 0 {
        total_years = infer_years_from_dates(&lowered);
    }

    ExperienceRecord {
        total_years,
        organizations,
        job_titles: BTreeSet::new(),
    }
}

/// Regex-only degradation used when no recognizer is wired in: a years
/// estimate from the bare phrasing, no organizations.
fn extract_experience_fallback(text: &str) -> ExperienceRecord {
    let lowered = text.to_lowercase();
    let total_years = BARE_YEARS_RE
        .captures_iter(&lowered)
        .filter_map(|captures| captures.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    ExperienceRecord {
        total_years,
        ..ExperienceRecord::default()
    }
}

fn explicit_years(lowered: &str) -> u32 {
    YEARS_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(lowered))
        .filter_map(|captures| captures.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Date-range inference: the widest span wins. "present"/"current" count as
/// the current calendar year.
fn infer_years_from_dates(lowered: &str) -> u32 {
    let current_year = Utc::now().year() as i64;
    let mut spans: Vec<i64> = Vec::new();

    for captures in YEAR_RANGE_RE.captures_iter(lowered) {
        let (Some(start), Some(end)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        if let (Ok(start), Ok(end)) = (start.as_str().parse::<i64>(), end.as_str().parse::<i64>())
        {
            spans.push(end - start);
        }
    }

    for captures in YEAR_TO_PRESENT_RE.captures_iter(lowered) {
        if let Some(start) = captures.get(1) {
            if let Ok(start) = start.as_str().parse::<i64>() {
                spans.push(current_year - start);
            }
        }
    }

    for captures in MONTH_RANGE_RE.captures_iter(lowered) {
        let (Some(start), Some(end)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        if let (Ok(start), Ok(end)) = (start.as_str().parse::<i64>(), end.as_str().parse::<i64>())
        {
            spans.push(end - start);
        }
    }

    spans.into_iter().max().unwrap_or(0).max(0) as u32
}
