//! Requirements excerpt from a job description.
//!
//! The excerpt is appended to the description before weighting, so it adds
//! emphasis to the requirement terms without introducing new text.

use std::sync::LazyLock;

use regex::Regex;

/// Section headers in priority order.
const REQUIREMENT_HEADERS: &[&str] = &["requirements", "qualifications", "required skills"];

/// Characters of the raw description used when no section header is found.
const FALLBACK_EXCERPT_CHARS: usize = 500;

static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REQUIREMENT_HEADERS
        .iter()
        .map(|header| {
            Regex::new(&format!(r"(?i)\b{}\s*:", regex::escape(header)))
                .expect("valid header pattern")
        })
        .collect()
});

static ANY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:requirements|qualifications|required skills)\s*:")
        .expect("valid header pattern")
});

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\r?\n").expect("valid blank line pattern"));

/// Concatenates every requirements-like section, in header priority order,
/// separated by a blank line. Falls back to the first 500 characters of the
/// description when no section with content is found.
pub fn extract_requirements(description: &str) -> String {
    let sections: Vec<&str> = HEADER_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(description))
        .map(|header| section_body(description, header.end()))
        .filter(|body| !body.is_empty())
        .collect();

    if sections.is_empty() {
        return description.chars().take(FALLBACK_EXCERPT_CHARS).collect();
    }
    sections.join("\n\n")
}

/// Text after a header up to the next blank line, the next recognized header,
/// or the end of the description.
fn section_body(description: &str, start: usize) -> &str {
    let blank_line = BLANK_LINE
        .find_at(description, start)
        .map(|m| m.start())
        .unwrap_or(description.len());
    let next_header = ANY_HEADER
        .find_at(description, start)
        .map(|m| m.start())
        .unwrap_or(description.len());

    description[start..blank_line.min(next_header)].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_requirements_section_stops_at_blank_line() {
        let jd = "Backend Engineer\n\nRequirements:\n- 5 years Rust\n- Tokio\n\nBenefits: remote";
        assert_eq!(extract_requirements(jd), "- 5 years Rust\n- Tokio");
    }

    #[test]
    fn test_header_is_case_insensitive() {
        let jd = "REQUIRED SKILLS: Kubernetes, Terraform";
        assert_eq!(extract_requirements(jd), "Kubernetes, Terraform");
    }

    #[test]
    fn test_sections_stop_at_next_header() {
        let jd = "Requirements: Rust and Go\nQualifications: BSc in CS";
        assert_eq!(extract_requirements(jd), "Rust and Go\n\nBSc in CS");
    }

    #[test]
    fn test_sections_concatenated_in_priority_order() {
        // "required skills" appears first in the text but has the lowest priority.
        let jd = "Required skills: Docker\n\nQualifications: BSc\n\nRequirements: Rust";
        assert_eq!(extract_requirements(jd), "Rust\n\nBSc\n\nDocker");
    }

    #[test]
    fn test_repeated_header_collects_every_section() {
        let jd = "Requirements: Rust\n\nAbout us\n\nRequirements: Postgres";
        assert_eq!(extract_requirements(jd), "Rust\n\nPostgres");
    }

    #[test]
    fn test_header_without_colon_is_ignored() {
        let jd = "These requirements are flexible.";
        assert_eq!(extract_requirements(jd), jd);
    }

    #[test]
    fn test_fallback_to_first_500_characters() {
        let jd = "x".repeat(800);
        let excerpt = extract_requirements(&jd);
        assert_eq!(excerpt.chars().count(), 500);
    }

    #[test]
    fn test_fallback_counts_characters_not_bytes() {
        let jd = "é".repeat(600);
        assert_eq!(extract_requirements(&jd), "é".repeat(500));
    }

    #[test]
    fn test_empty_section_falls_back() {
        let jd = "Requirements:\n\nWe value curiosity.";
        assert_eq!(extract_requirements(jd), jd);
    }
}
