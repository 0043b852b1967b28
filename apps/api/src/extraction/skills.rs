//! Controlled skill vocabulary and whole-word skill matching.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered skill vocabulary. Extraction results follow this order, not the order
/// skills appear in the document.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "golang",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    // Frameworks
    "react",
    "angular",
    "vue",
    "node",
    "django",
    "flask",
    "spring",
    "rails",
    "laravel",
    // Data stores
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "sqlite",
    "oracle",
    // Cloud and devops
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "terraform",
    "ansible",
    "git",
    "linux",
    // Machine learning
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "nlp",
    // Web
    "html",
    "css",
    "graphql",
    "rest api",
    "redux",
    // Soft skills
    "leadership",
    "communication",
    "teamwork",
    "agile",
    "scrum",
    "problem solving",
];

/// A vocabulary label paired with its compiled case-insensitive matcher.
pub struct SkillMatcher {
    pub label: &'static str,
    pattern: Regex,
}

impl SkillMatcher {
    fn new(label: &'static str) -> Result<Self, regex::Error> {
        // `\b` needs a word character on one side, which labels like "c++" do not
        // end with, so boundaries are spelled out as non-word-or-edge.
        let pattern = Regex::new(&format!(
            r"(?i)(?:^|\W){}(?:\W|$)",
            regex::escape(label)
        ))?;
        Ok(Self { label, pattern })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Built once on first use and never mutated afterwards.
static SKILL_MATCHERS: LazyLock<Vec<SkillMatcher>> = LazyLock::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|&label| SkillMatcher::new(label).expect("skill labels are escaped"))
        .collect()
});

pub fn skill_matchers() -> &'static [SkillMatcher] {
    &SKILL_MATCHERS
}

/// Vocabulary skills mentioned in `text`, deduplicated, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    skill_matchers()
        .iter()
        .filter(|matcher| matcher.is_match(text))
        .map(|matcher| matcher.label.to_string())
        .collect()
}
