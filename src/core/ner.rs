/// Named-entity recognition capability.
///
/// The extractors consume this as `Option<&dyn EntityRecognizer>`: a
/// deployment may wire in a real recognizer or none at all, and every
/// consumer must keep working (with reduced output) when it is absent.
pub trait EntityRecognizer: Send + Sync {
    /// Organization mentions found in the text, deduplicated, in order of
    /// first appearance.
    fn organizations(&self, text: &str) -> Vec<String>;
}

/// A run of capitalized words is an organization only when it ends in one of
/// these, so job titles like "Software Engineer" fall through.
const ORG_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "corporation",
    "company",
    "technologies",
    "labs",
    "systems",
    "solutions",
    "software",
    "consulting",
    "group",
    "university",
    "college",
    "institute",
    "school",
    "academy",
];

/// Leading education words also qualify a run ("University of Texas").
const EDU_LEADS: &[&str] = &["university", "college", "institute", "school", "academy"];

/// Lowercase words allowed inside a run between capitalized words.
const CONNECTORS: &[&str] = &["of", "for", "de"];

/// Rule-based recognizer over capitalized-word runs, gated by an
/// organization-suffix gazetteer. Precision-biased: person names and
/// headings fall through rather than polluting the organization set.
pub struct HeuristicEntityRecognizer;

impl EntityRecognizer for HeuristicEntityRecognizer {
    fn organizations(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        let mut run: Vec<&str> = Vec::new();

        for token in text.split_whitespace() {
            let word = token.trim_matches(|c: char| "().,;:".contains(c));
            if word.is_empty() {
                flush_run(&mut run, &mut found);
                continue;
            }

            if is_capitalized(word) {
                run.push(word);
            } else if !run.is_empty() && CONNECTORS.contains(&word) {
                run.push(word);
            } else {
                flush_run(&mut run, &mut found);
            }
        }

        flush_run(&mut run, &mut found);
        found
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

fn flush_run(run: &mut Vec<&str>, found: &mut Vec<String>) {
    // Connectors only count between capitalized words.
    while run
        .last()
        .is_some_and(|word| CONNECTORS.contains(&word.to_lowercase().as_str()))
    {
        run.pop();
    }

    if run.len() >= 2 {
        let last = clean_word(run[run.len() - 1]);
        let first = clean_word(run[0]);

        // Normalized text has few separators left, so capitalized runs can
        // absorb unrelated neighbors. Education leads keep the whole run
        // ("University of Texas"); suffix hits keep only name + suffix.
        let candidate = if EDU_LEADS.contains(&first.as_str()) {
            Some(run.join(" "))
        } else if ORG_SUFFIXES.contains(&last.as_str()) {
            Some(run[run.len() - 2..].join(" "))
        } else {
            None
        };

        if let Some(candidate) = candidate {
            if candidate.len() > 2 && !found.contains(&candidate) {
                found.push(candidate);
            }
        }
    }

    run.clear();
}

fn clean_word(word: &str) -> String {
    word.trim_end_matches('.').to_lowercase()
}
