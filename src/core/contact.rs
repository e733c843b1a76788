use super::config::{EMAIL_RE, LINKEDIN_BARE_RE, LINKEDIN_FULL_RE, LINKEDIN_USERNAME_RE, PHONE_PATTERNS};
use super::models::ContactInfo;

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
    }
}

/// First well-formed address wins.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Walk the phone patterns in priority order and take the first candidate of
/// the first pattern that matches anything. Candidates from later patterns
/// are never considered, even when the winning pattern's match looks worse.
pub fn extract_phone(text: &str) -> Option<String> {
    for pattern in PHONE_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            let phone = m
                .as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            return Some(phone.trim().to_string());
        }
    }

    None
}

/// Three tiers, first hit wins: full URL, protocol-less URL (prefix
/// synthesized), bare username path (full URL synthesized).
pub fn extract_linkedin(text: &str) -> Option<String> {
    if let Some(m) = LINKEDIN_FULL_RE.find(text) {
        return Some(m.as_str().to_string());
    }

    if let Some(m) = LINKEDIN_BARE_RE.find(text) {
        return Some(format!("https://{}", m.as_str()));
    }

    if let Some(captures) = LINKEDIN_USERNAME_RE.captures(text) {
        if let Some(username) = captures.get(1) {
            return Some(format!("https://linkedin.com/in/{}", username.as_str()));
        }
    }

    None
}
