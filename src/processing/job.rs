//! Job requirement: the strictly typed input of the resume matcher

use serde::{Deserialize, Serialize};

/// What a resume is scored against.
///
/// Skills are stored case-folded, trimmed, de-duplicated and in the order they
/// were first listed. The order matters only for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    required_skills: Vec<String>,
    minimum_experience_years: u32,
}

impl JobRequirement {
    /// Build from a comma separated skill list and a validated year count.
    pub fn new(skills_csv: &str, minimum_experience_years: u32) -> Self {
        Self {
            required_skills: parse_skill_list(skills_csv),
            minimum_experience_years,
        }
    }

    /// Build from loosely typed form input. The experience field is coerced
    /// with [`coerce_years`], so garbage becomes "no requirement".
    pub fn from_form(skills_csv: &str, experience: &str) -> Self {
        Self::new(skills_csv, coerce_years(experience))
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    pub fn minimum_experience_years(&self) -> u32 {
        self.minimum_experience_years
    }

    /// False when neither skills nor a minimum tenure were given, in which
    /// case every resume scores 100 and ranking is meaningless.
    pub fn has_criteria(&self) -> bool {
        !self.required_skills.is_empty() || self.minimum_experience_years > 0
    }
}

/// Split on commas, trim, drop empties, lowercase, keep first occurrence.
pub fn parse_skill_list(skills_csv: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in skills_csv.split(',') {
        let skill = skill.trim().to_lowercase();
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

/// Read a year count the way a number form field would: optional leading
/// `+`, then leading ASCII digits. Anything else, including negatives, is 0.
/// Values past `u32::MAX` saturate.
pub fn coerce_years(text: &str) -> u32 {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits: &str = match text.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &text[..end],
        None => text,
    };

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_list_normalization() {
        let skills = parse_skill_list("  React, node.js ,, SQL,react ,  ");
        assert_eq!(skills, vec!["react", "node.js", "sql"]);
    }

    #[test]
    fn test_empty_skill_list() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , ,").is_empty());
    }

    #[test]
    fn test_coerce_years() {
        assert_eq!(coerce_years("5"), 5);
        assert_eq!(coerce_years(" 12 "), 12);
        assert_eq!(coerce_years("+3"), 3);
        assert_eq!(coerce_years("7 years"), 7);
        assert_eq!(coerce_years("3.5"), 3);
        assert_eq!(coerce_years(""), 0);
        assert_eq!(coerce_years("abc"), 0);
        assert_eq!(coerce_years("-4"), 0);
        assert_eq!(coerce_years("99999999999"), u32::MAX);
    }

    #[test]
    fn test_has_criteria() {
        assert!(!JobRequirement::new("", 0).has_criteria());
        assert!(JobRequirement::new("rust", 0).has_criteria());
        assert!(JobRequirement::from_form(" ", "2").has_criteria());
        assert!(!JobRequirement::from_form(",", "n/a").has_criteria());
    }
}
