use std::collections::HashSet;

/// Related terms implied by a skill. Keys are matched exactly after
/// lowercasing and trimming.
pub const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("react", &["frontend", "javascript", "web", "ui"]),
    ("node", &["backend", "javascript", "server", "api"]),
    ("python", &["data science", "backend", "ai", "ml"]),
    ("design", &["ui", "ux", "product", "figma"]),
    ("management", &["leadership", "strategy", "product", "agile"]),
    ("aws", &["cloud", "devops", "infrastructure"]),
    ("javascript", &["frontend", "web", "logic"]),
];

/// Look up the related terms for an already normalized skill
#[inline]
pub fn related_skills(skill: &str) -> Option<&'static [&'static str]> {
    SKILL_SYNONYMS
        .iter()
        .find(|(key, _)| *key == skill)
        .map(|(_, related)| *related)
}

/// Expand a raw skill list into its semantic set
///
/// Every skill is lowercased and trimmed. A skill that is a synonym key also
/// contributes all of its related terms. Absent lists yield an empty set.
pub fn semantic_skills(skills: Option<&[String]>) -> HashSet<String> {
    let mut semantic = HashSet::new();

    for skill in skills.unwrap_or_default() {
        let normalized = skill.to_lowercase().trim().to_string();

        if let Some(related) = related_skills(&normalized) {
            semantic.extend(related.iter().map(|term| term.to_string()));
        }

        semantic.insert(normalized);
    }

    semantic
}
