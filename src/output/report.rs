//! Ranking report: the rendered view of a scored batch

use crate::config::ScoringConfig;
use crate::processing::job::JobRequirement;
use crate::processing::matcher::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub job: JobSummary,
    pub weights: ScoringConfig,
    pub summary: BatchSummary,
    pub entries: Vec<RankedEntry>,
    pub ranker_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub required_skills: Vec<String>,
    pub minimum_experience_years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub scored: usize,
    pub failed: usize,
    /// Mean over scored resumes only; `None` when nothing was scored.
    pub average_score: Option<f64>,
    pub best_score: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub band: ScoreBand,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Colour band of a score. Presentation only, this is not a fit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Strong,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "STRONG",
            ScoreBand::Moderate => "MODERATE",
            ScoreBand::Weak => "WEAK",
        }
    }
}

impl RankingReport {
    /// `results` are expected ranked already; rank numbers follow their order.
    pub fn new(
        job: &JobRequirement,
        weights: ScoringConfig,
        results: Vec<MatchResult>,
        processing_time_ms: u64,
    ) -> Self {
        let summary = BatchSummary::from_results(&results);
        let entries = results
            .into_iter()
            .enumerate()
            .map(|(i, result)| RankedEntry {
                rank: i + 1,
                band: ScoreBand::from_score(result.total_score),
                result,
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            processing_time_ms,
            job: JobSummary {
                required_skills: job.required_skills().to_vec(),
                minimum_experience_years: job.minimum_experience_years(),
            },
            weights,
            summary,
            entries,
            ranker_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl BatchSummary {
    fn from_results(results: &[MatchResult]) -> Self {
        let scores: Vec<u8> = results
            .iter()
            .filter(|r| r.is_scored())
            .map(|r| r.total_score)
            .collect();

        let average_score = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64)
        };

        Self {
            total: results.len(),
            scored: scores.len(),
            failed: results.len() - scores.len(),
            average_score,
            best_score: scores.iter().copied().max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::matcher::ResumeMatcher;

    fn sample_report() -> RankingReport {
        let job = JobRequirement::new("react, node.js, sql", 5);
        let matcher = ResumeMatcher::default();
        let results = vec![
            matcher
                .score("Experienced engineer with react and sql background, 6 years in the industry.", &job)
                .with_file_name("senior.pdf"),
            matcher
                .score("Junior developer, 2 years experience, knows react.", &job)
                .with_file_name("junior.pdf"),
            MatchResult::failed("broken.pdf", "Failed to parse PDF."),
        ];
        RankingReport::new(&job, ScoringConfig::default(), results, 12)
    }

    #[test]
    fn test_summary_ignores_failed_rows() {
        let report = sample_report();
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.scored, 2);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.best_score, Some(77));
        assert_eq!(report.summary.average_score, Some(53.0));
    }

    #[test]
    fn test_ranks_and_bands() {
        let report = sample_report();
        let ranks: Vec<_> = report.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(report.entries[0].band, ScoreBand::Moderate);
        assert_eq!(report.entries[1].band, ScoreBand::Weak);
    }

    #[test]
    fn test_empty_batch() {
        let job = JobRequirement::new("rust", 0);
        let report = RankingReport::new(&job, ScoringConfig::default(), vec![], 0);
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.average_score, None);
        assert_eq!(report.summary.best_score, None);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Weak);
    }
}
