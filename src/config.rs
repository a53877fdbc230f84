//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub batch: BatchConfig,
    pub output: OutputConfig,
}

/// Point budget for the two scoring components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub experience_weight: f64,
    /// Extra discount applied on top of the prorate when detected experience
    /// is below the minimum.
    pub partial_experience_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub max_concurrent_extractions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 70.0,
            experience_weight: 30.0,
            partial_experience_factor: 0.5,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_extractions: 8,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            batch: BatchConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Parse the file at `config_path`, writing defaults on first run.
    ///
    /// Values are not validated here, so a file with out-of-range values still
    /// loads and can be inspected, fixed with `set_value`, or reset.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeRankerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("scoring.skill_weight", self.scoring.skill_weight),
            ("scoring.experience_weight", self.scoring.experience_weight),
        ];
        for (key, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ResumeRankerError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        let factor = self.scoring.partial_experience_factor;
        if !(0.0..=1.0).contains(&factor) {
            return Err(ResumeRankerError::Configuration(format!(
                "scoring.partial_experience_factor must be within [0, 1], got {}",
                factor
            )));
        }

        if self.batch.max_concurrent_extractions == 0 {
            return Err(ResumeRankerError::Configuration(
                "batch.max_concurrent_extractions must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Set a single value addressed by its dotted key, e.g. `scoring.skill_weight`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
            value.trim().parse().map_err(|_| {
                ResumeRankerError::Configuration(format!("Invalid value for {}: {}", key, value))
            })
        }

        match key {
            "scoring.skill_weight" => self.scoring.skill_weight = parse(key, value)?,
            "scoring.experience_weight" => self.scoring.experience_weight = parse(key, value)?,
            "scoring.partial_experience_factor" => {
                self.scoring.partial_experience_factor = parse(key, value)?
            }
            "batch.max_concurrent_extractions" => {
                self.batch.max_concurrent_extractions = parse(key, value)?
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeRankerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse(key, value)?,
            "output.color_output" => self.output.color_output = parse(key, value)?,
            _ => {
                return Err(ResumeRankerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        self.validate()
    }
}
