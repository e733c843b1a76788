use once_cell::sync::Lazy;
use regex::Regex;

use super::config::{EMAIL_RE, LINKEDIN_BARE_RE, PHONE_PATTERNS, URL_RE};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s@.\-_+()]").unwrap());
static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Clean extracted text while keeping URLs, emails, and phone numbers intact.
///
/// Protect-strip-restore: every structured span is swapped for a unique
/// placeholder before the destructive steps run, then restored verbatim at
/// the end. The slash in `linkedin.com/in/...` would not survive stripping
/// on its own, which is exactly why protection has to come first.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut working = text.to_string();
    let mut protected: Vec<(String, String)> = Vec::new();
    let mut counter = 0usize;

    let urls = find_all(&URL_RE, &working);
    protect_spans(text, &mut working, &mut protected, &mut counter, urls);

    let profile_paths = find_all(&LINKEDIN_BARE_RE, &working);
    protect_spans(text, &mut working, &mut protected, &mut counter, profile_paths);

    let emails = find_all(&EMAIL_RE, &working);
    protect_spans(text, &mut working, &mut protected, &mut counter, emails);

    // First phone pattern that matches anywhere supplies all phone spans;
    // matches from different patterns are never mixed.
    for pattern in PHONE_PATTERNS.iter() {
        let phones = find_all(pattern, &working);
        if !phones.is_empty() {
            protect_spans(text, &mut working, &mut protected, &mut counter, phones);
            break;
        }
    }

    let mut cleaned = WHITESPACE_RE.replace_all(&working, " ").into_owned();
    cleaned = STRIP_RE.replace_all(&cleaned, " ").into_owned();
    cleaned = MULTI_SPACE_RE.replace_all(&cleaned, " ").into_owned();

    for (placeholder, span) in &protected {
        cleaned = cleaned.replace(placeholder, span);
    }

    cleaned.trim().to_string()
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn protect_spans(
    original: &str,
    working: &mut String,
    protected: &mut Vec<(String, String)>,
    counter: &mut usize,
    spans: Vec<String>,
) {
    for span in spans {
        // Duplicate occurrences collapse into the first span's placeholder.
        if !working.contains(&span) {
            continue;
        }

        let placeholder = next_placeholder(original, counter);
        *working = working.replace(&span, &placeholder);
        protected.push((placeholder, span));
    }
}

/// Placeholders are built from characters the stripping step keeps, and are
/// verified absent from the input text so restoration can never touch
/// anything but the placeholder itself.
fn next_placeholder(original: &str, counter: &mut usize) -> String {
    loop {
        let candidate = format!("@@SPAN{}@@", *counter);
        *counter += 1;
        if !original.contains(&candidate) {
            return candidate;
        }
    }
}
