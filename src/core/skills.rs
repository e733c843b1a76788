use super::config::ScreenerConfig;
use super::models::SkillRecord;

/// Whole-word matching of every catalog term against the text. A category
/// shows up in the record only when at least one of its terms matched;
/// matched terms keep the catalog's order.
pub fn extract_skills(config: &ScreenerConfig, text: &str) -> SkillRecord {
    let mut record = SkillRecord::new();

    for (category, terms) in config.skill_catalog() {
        let matched: Vec<String> = terms
            .iter()
            .filter(|term| term.is_match(text))
            .map(|term| term.name.to_string())
            .collect();

        if !matched.is_empty() {
            record.insert(*category, matched);
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SkillCategory;

    fn config() -> ScreenerConfig {
        ScreenerConfig::new().unwrap()
    }

    #[test]
    fn matching_is_case_insensitive_and_whole_word() {
        let record = extract_skills(
            &config(),
            "Senior developer fluent in Python and JavaScript, some Java on the side",
        );

        let programming = record.get(&SkillCategory::Programming).unwrap();
        assert_eq!(programming, &vec!["python", "java", "javascript"]);
    }

    #[test]
    fn java_does_not_match_inside_javascript() {
        let record = extract_skills(&config(), "JavaScript only, promise");
        let programming = record.get(&SkillCategory::Programming).unwrap();
        assert_eq!(programming, &vec!["javascript"]);
    }

    #[test]
    fn empty_categories_are_omitted() {
        let record = extract_skills(&config(), "Python developer with PostgreSQL experience");

        assert!(record.contains_key(&SkillCategory::Programming));
        assert!(record.contains_key(&SkillCategory::Databases));
        assert!(!record.contains_key(&SkillCategory::Cloud));
        assert!(!record.contains_key(&SkillCategory::SoftSkills));
    }

    #[test]
    fn multi_word_and_symbol_terms_match() {
        let record = extract_skills(
            &config(),
            "Strengths: problem solving, project management, C++ and C#",
        );

        let soft = record.get(&SkillCategory::SoftSkills).unwrap();
        assert!(soft.contains(&"problem solving".to_string()));
        assert!(soft.contains(&"project management".to_string()));

        let programming = record.get(&SkillCategory::Programming).unwrap();
        assert!(programming.contains(&"c++".to_string()));
        assert!(programming.contains(&"c#".to_string()));
    }

    #[test]
    fn no_matches_yields_empty_record() {
        let record = extract_skills(&config(), "fine dining and travel writing");
        assert!(record.is_empty());
    }
}
