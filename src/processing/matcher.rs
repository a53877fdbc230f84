//! Resume matcher: scores one resume text against one job requirement
//!
//! Stages run in a fixed order (text acquired, skills matched, experience
//! extracted, scored). A resume whose text could not be acquired skips every
//! stage and yields a result carrying `parse_error` with a score of 0.

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::processing::experience::extract_max_years;
use crate::processing::job::JobRequirement;
use crate::processing::score::{ScoreBreakdown, ScoreCombiner};
use crate::processing::skill_matcher::match_skills;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Set by the caller; the scorer itself never sees file names.
    pub file_name: String,
    pub total_score: u8,
    pub matched_skills: Vec<String>,
    pub detected_experience_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl MatchResult {
    /// Row for a resume whose text could not be obtained.
    pub fn failed(file_name: impl Into<String>, error: impl Display) -> Self {
        Self {
            file_name: file_name.into(),
            total_score: 0,
            matched_skills: Vec::new(),
            detected_experience_years: 0,
            breakdown: None,
            parse_error: Some(error.to_string()),
        }
    }

    pub fn with_file_name(self, file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..self
        }
    }

    pub fn is_scored(&self) -> bool {
        self.parse_error.is_none()
    }
}

/// Stateless scorer; share freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeMatcher {
    combiner: ScoreCombiner,
}

impl ResumeMatcher {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            combiner: ScoreCombiner::new(scoring),
        }
    }

    /// Score extracted resume text. The returned result has an empty file name.
    pub fn score(&self, resume_text: &str, job: &JobRequirement) -> MatchResult {
        let text = resume_text.trim().to_lowercase();
        debug!("Text acquired ({} chars)", text.len());

        let skills = match_skills(&text, job.required_skills());
        debug!(
            "Skills matched: {}/{}",
            skills.matched_skills.len(),
            job.required_skills().len()
        );

        let detected_years = extract_max_years(&text);
        debug!("Experience extracted: {} years", detected_years);

        let breakdown = self.combiner.combine(
            skills.fraction,
            job.minimum_experience_years(),
            detected_years,
        );
        debug!(
            "Scored: {} (skills {:.2} + experience {:.2})",
            breakdown.total_score, breakdown.skill_points, breakdown.experience_points
        );

        MatchResult {
            file_name: String::new(),
            total_score: breakdown.total_score,
            matched_skills: skills.matched_skills,
            detected_experience_years: detected_years,
            breakdown: Some(breakdown),
            parse_error: None,
        }
    }

    /// Score the outcome of the text-extraction step for one named file.
    pub fn score_extracted(
        &self,
        file_name: &str,
        extracted: Result<String>,
        job: &JobRequirement,
    ) -> MatchResult {
        match extracted {
            Ok(text) => self.score(&text, job).with_file_name(file_name),
            Err(e) => {
                debug!("No text for {}, skipping scoring: {}", file_name, e);
                MatchResult::failed(file_name, e)
            }
        }
    }
}
