//! Batch scoring: fan out one task per resume, fan in, rank

use crate::config::Config;
use crate::error::{Result, ResumeRankerError};
use crate::input::InputManager;
use crate::processing::job::JobRequirement;
use crate::processing::matcher::{MatchResult, ResumeMatcher};
use indicatif::ProgressBar;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Scores many resumes against one job.
///
/// Extraction runs concurrently but never more than
/// `batch.max_concurrent_extractions` files at once. The output always has
/// one row per input path.
pub struct BatchScorer {
    matcher: ResumeMatcher,
    input: InputManager,
    limit: Arc<Semaphore>,
    progress: Option<ProgressBar>,
}

impl BatchScorer {
    pub fn new(config: &Config) -> Self {
        Self {
            matcher: ResumeMatcher::new(config.scoring),
            input: InputManager::new(),
            limit: Arc::new(Semaphore::new(config.batch.max_concurrent_extractions.max(1))),
            progress: None,
        }
    }

    /// Tick `progress` once per finished resume.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Extract and score every file, then rank by score.
    pub async fn score_files(&self, paths: &[PathBuf], job: &JobRequirement) -> Vec<MatchResult> {
        info!("Scoring {} resume(s)", paths.len());
        let job = Arc::new(job.clone());

        let handles: Vec<_> = paths
            .iter()
            .map(|path| {
                let path = path.clone();
                let job = Arc::clone(&job);
                let limit = Arc::clone(&self.limit);
                let input = self.input.clone();
                let matcher = self.matcher;
                let progress = self.progress.clone();

                tokio::spawn(async move {
                    let name = display_name(&path);
                    let extracted = extract_with_limit(&input, &limit, &path).await;
                    if let Err(e) = &extracted {
                        warn!("Could not read {}: {}", path.display(), e);
                    }

                    let result = matcher.score_extracted(&name, extracted, &job);
                    if let Some(progress) = &progress {
                        progress.inc(1);
                    }
                    result
                })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (path, handle) in paths.iter().zip(handles) {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    warn!("Worker for {} failed: {}", path.display(), e);
                    MatchResult::failed(display_name(path), ResumeRankerError::from(e))
                }
            };
            results.push(result);
        }

        rank_results(&mut results);
        results
    }

    /// Score texts that were extracted elsewhere, then rank by score.
    pub fn score_extracted(
        &self,
        extracted: Vec<(String, Result<String>)>,
        job: &JobRequirement,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = extracted
            .into_iter()
            .map(|(name, text)| self.matcher.score_extracted(&name, text, job))
            .collect();

        rank_results(&mut results);
        results
    }
}

async fn extract_with_limit(
    input: &InputManager,
    limit: &Semaphore,
    path: &Path,
) -> Result<String> {
    let _permit = limit
        .acquire()
        .await
        .map_err(|e| ResumeRankerError::Task(e.to_string()))?;
    input.extract_text(path).await
}

/// Sort by score, best first. Stable, so ties keep their input order.
pub fn rank_results(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.total_score.cmp(&a.total_score));
}

/// File name shown for a resume path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_failure_does_not_block_the_batch() {
        let scorer = BatchScorer::new(&Config::default());
        let job = JobRequirement::new("react, node.js, sql", 5);

        let results = scorer.score_extracted(
            vec![
                (
                    "junior.pdf".to_string(),
                    Ok("Junior developer, 2 years experience, knows react.".to_string()),
                ),
                (
                    "broken.pdf".to_string(),
                    Err(ResumeRankerError::PdfExtraction("encrypted".to_string())),
                ),
                (
                    "senior.pdf".to_string(),
                    Ok(
                        "Experienced engineer with react and sql background, 6 years in the industry."
                            .to_string(),
                    ),
                ),
            ],
            &job,
        );

        assert_eq!(results.len(), 3);
        let names: Vec<_> = results.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["senior.pdf", "junior.pdf", "broken.pdf"]);

        let scores: Vec<_> = results.iter().map(|r| r.total_score).collect();
        assert_eq!(scores, vec![77, 29, 0]);

        let failed = &results[2];
        assert!(failed.parse_error.is_some());
        assert!(failed.matched_skills.is_empty());
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let mut results = vec![
            MatchResult::failed("a", "x"),
            MatchResult::failed("b", "y"),
            ResumeMatcher::default()
                .score("rust", &JobRequirement::new("rust", 0))
                .with_file_name("c"),
        ];
        rank_results(&mut results);

        let names: Vec<_> = results.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/resumes/jane.pdf")), "jane.pdf");
        assert_eq!(display_name(Path::new("cv.txt")), "cv.txt");
    }
}
