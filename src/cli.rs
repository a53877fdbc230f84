//! CLI interface for the resume ranker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Rank resumes against required skills and experience")]
#[command(long_about = "Score each resume by required-skill coverage and stated years of experience, then rank them. Fully deterministic, no network access.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank resumes against a job requirement
    Rank {
        /// Resume files (PDF, TXT, MD); repeat or pass several
        #[arg(short, long, num_args = 1.., required = true)]
        resume: Vec<PathBuf>,

        /// Required skills, comma separated (e.g. "react, typescript, node.js")
        #[arg(short, long, default_value = "")]
        skills: String,

        /// Minimum years of experience; non-numeric input counts as 0
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        experience: String,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Show score breakdowns and weights
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file (a directory gets a generated file name)
        #[arg(long)]
        save: Option<PathBuf>,

        /// Maximum number of files read at once
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.skill_weight")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.trim().to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rank_arguments() {
        let cli = Cli::try_parse_from([
            "resume-ranker", "rank", "-r", "a.pdf", "b.txt", "--skills", "rust, sql", "-e", "5+",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank { resume, skills, experience, .. } => {
                assert_eq!(resume.len(), 2);
                assert_eq!(skills, "rust, sql");
                assert_eq!(experience, "5+");
            }
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }
}
