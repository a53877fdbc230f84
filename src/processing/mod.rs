//! Resume scoring: skill matching, experience extraction, score combination

pub mod job;
pub mod skill_matcher;
pub mod experience;
pub mod score;
pub mod matcher;
pub mod batch;

pub use batch::{rank_results, BatchScorer};
pub use job::JobRequirement;
pub use matcher::{MatchResult, ResumeMatcher};
