//! Resume ranker: score and rank resumes against a job requirement

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::{Config, OutputFormat};
use resume_ranker::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_ranker::output::report::RankingReport;
use resume_ranker::{BatchScorer, JobRequirement};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Err(e) = run_command(cli.command, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<Config> {
    Config::load_from(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
}

async fn run_command(command: Commands, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Rank {
            resume,
            skills,
            experience,
            output,
            detailed,
            save,
            concurrency,
        } => {
            let mut config = load_config(config_path)?;
            let job = JobRequirement::from_form(&skills, &experience);
            if !job.has_criteria() {
                bail!("Please specify required skills or minimum experience.");
            }

            if let Some(format) = output {
                config.output.format = cli::parse_output_format(&format)
                    .map_err(anyhow::Error::msg)?;
            }
            if let Some(limit) = concurrency {
                config.batch.max_concurrent_extractions = limit;
            }
            config.output.detailed |= detailed;
            config.validate().context("Invalid rank options")?;

            info!(
                "Ranking {} resume(s) against {} skill(s), minimum {} year(s)",
                resume.len(),
                job.required_skills().len(),
                job.minimum_experience_years()
            );

            let started = Instant::now();
            let progress = progress_bar(resume.len() as u64);
            let scorer = BatchScorer::new(&config).with_progress(progress.clone());
            let results = scorer.score_files(&resume, &job).await;
            progress.finish_and_clear();

            let report = RankingReport::new(
                &job,
                config.scoring,
                results,
                started.elapsed().as_millis() as u64,
            );

            let format = config.output.format;
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, config.output.detailed);
            let rendered = generator.generate_report(&report, &format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(target, &format);
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let config = load_config(config_path)?;
                let content =
                    toml::to_string_pretty(&config).context("Failed to render configuration")?;
                println!("# {}", config_path.display());
                println!("{}", content);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = load_config(config_path)?;
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("{} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    let template = "{spinner} [{bar:30}] {pos}/{len} resumes {msg}";
    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

/// A directory target gets a generated file name for the chosen format.
fn resolve_save_path(target: PathBuf, format: &OutputFormat) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, true))
    } else {
        target
    }
}
