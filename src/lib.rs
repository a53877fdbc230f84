//! Resume ranker library
//!
//! Deterministic resume screening: each resume is scored on required-skill
//! coverage (up to 70 points) and stated years of experience (up to 30).

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeRankerError};
pub use processing::{rank_results, BatchScorer, JobRequirement, MatchResult, ResumeMatcher};
