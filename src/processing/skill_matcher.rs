//! Required-skill matching against resume text
//!
//! Matching is plain substring containment on lowercased text: no stemming,
//! tokenization or word boundaries. A short skill such as `go` therefore also
//! hits inside `going` or `google`. That false-positive surface is part of the
//! scoring contract and is covered by tests.

use aho_corasick::AhoCorasick;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Required skills found in the text, in the order they were required.
    pub matched_skills: Vec<String>,
    /// `matched / required`, or 1.0 when nothing is required.
    pub fraction: f64,
}

/// Match normalized (lowercased) resume text against normalized skills.
pub fn match_skills(normalized_text: &str, required_skills: &[String]) -> SkillMatch {
    if required_skills.is_empty() {
        return SkillMatch {
            matched_skills: Vec::new(),
            fraction: 1.0,
        };
    }

    let present = find_present(normalized_text, required_skills);
    let matched_skills: Vec<String> = required_skills
        .iter()
        .zip(present)
        .filter(|(_, hit)| *hit)
        .map(|(skill, _)| skill.clone())
        .collect();

    let fraction = matched_skills.len() as f64 / required_skills.len() as f64;

    SkillMatch {
        matched_skills,
        fraction,
    }
}

/// One flag per skill: does it occur anywhere in `text`?
fn find_present(text: &str, skills: &[String]) -> Vec<bool> {
    let mut present = vec![false; skills.len()];

    match AhoCorasick::new(skills) {
        Ok(automaton) => {
            // Overlapping search so "java" is still seen inside "javascript"
            for mat in automaton.find_overlapping_iter(text) {
                present[mat.pattern().as_usize()] = true;
            }
        }
        Err(e) => {
            warn!("Skill automaton unavailable ({}), scanning skills one by one", e);
            for (flag, skill) in present.iter_mut().zip(skills) {
                *flag = text.contains(skill.as_str());
            }
        }
    }

    present
}
