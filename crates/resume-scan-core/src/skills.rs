//! Fixed technical-skill vocabulary and case-insensitive matching.

/// A literal skill keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillKeyword {
    /// Keyword as it is reported.
    pub keyword: &'static str,
}

impl SkillKeyword {
    const fn new(keyword: &'static str) -> Self {
        Self { keyword }
    }

    /// Whether this keyword occurs in `lowered_text`, which must already be
    /// lowercased.
    fn occurs_in(&self, lowered_text: &str) -> bool {
        lowered_text.contains(&self.keyword.to_lowercase())
    }
}

/// The skill vocabulary, in reporting order.
pub const SKILL_KEYWORDS: &[SkillKeyword] = &[
    SkillKeyword::new("Python"),
    SkillKeyword::new("JavaScript"),
    SkillKeyword::new("Java"),
    SkillKeyword::new("C++"),
    SkillKeyword::new("React"),
    SkillKeyword::new("Node.js"),
    SkillKeyword::new("AWS"),
    SkillKeyword::new("Docker"),
    SkillKeyword::new("SQL"),
    SkillKeyword::new("Machine Learning"),
    SkillKeyword::new("AI"),
    SkillKeyword::new("Data Science"),
];

/// Keywords from [`SKILL_KEYWORDS`] found anywhere in `text`.
///
/// Matching is plain substring containment after lowercasing both sides, so
/// `"JavaScript"` in the text also yields `"Java"`, and `"AI"` matches inside
/// words like `"email"`. The result follows vocabulary order, not text order.
pub fn detect_skills(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .filter(|skill| skill.occurs_in(&lowered))
        .map(|skill| skill.keyword)
        .collect()
}
