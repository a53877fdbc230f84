//! Output formatters for ranking reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeRankerError};
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Ranking Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; }
        .score-badge {
            display: inline-block;
            padding: 2px 10px;
            border-radius: 12px;
            font-weight: bold;
            color: white;
        }
        .band-strong { background: #28a745; }
        .band-moderate { background: #ffc107; color: #000; }
        .band-weak { background: #dc3545; }
        .error { color: #dc3545; font-style: italic; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Ranking Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <h2>Job Requirement</h2>
        <p><strong>Required skills:</strong> {{ required_skills }}</p>
        <p><strong>Minimum experience:</strong> {{ minimum_experience }}</p>

        <h2>Summary</h2>
        <p>{{ scored }} of {{ total }} resume(s) scored, {{ failed }} failed. Average: {{ average_score }} | Best: {{ best_score }}</p>

        <h2>Ranking</h2>
        <table>
            <tr><th>#</th><th>File</th><th>Score</th><th>Matched skills</th><th>Experience</th></tr>
            {% for row in rows %}
            <tr>
                <td>{{ row.rank }}</td>
                <td>{{ row.file_name }}</td>
                <td><span class="score-badge {{ row.band_class }}">{{ row.score }}%</span></td>
                {% if row.has_error %}
                <td colspan="2" class="error">{{ row.error }}</td>
                {% else %}
                <td>{{ row.skills }}</td>
                <td>{{ row.experience }}</td>
                {% endif %}
            </tr>
            {% endfor %}
        </table>

        <div class="metadata">
            <p><strong>Generated by Resume Ranker v{{ version }}</strong></p>
            <p>Weights: skills {{ skill_weight }} / experience {{ experience_weight }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    required_skills: String,
    minimum_experience: String,
    total: usize,
    scored: usize,
    failed: usize,
    average_score: String,
    best_score: String,
    rows: Vec<HtmlRow>,
    version: String,
    skill_weight: String,
    experience_weight: String,
}

struct HtmlRow {
    rank: usize,
    file_name: String,
    score: u8,
    band_class: &'static str,
    skills: String,
    experience: String,
    has_error: bool,
    error: String,
}

fn format_timestamp(report: &RankingReport) -> String {
    report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn format_skills(skills: &[String]) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.join(", ")
    }
}

fn format_experience(years: u32) -> String {
    if years > 0 {
        format!("{} years", years)
    } else {
        "Not specified".to_string()
    }
}

fn format_minimum(years: u32) -> String {
    if years > 0 {
        format!("{} years", years)
    } else {
        "No requirement".to_string()
    }
}

fn format_average(summary: &BatchSummary) -> String {
    summary
        .average_score
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "-".to_string())
}

fn format_best(summary: &BatchSummary) -> String {
    summary
        .best_score
        .map(|best| best.to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME RANKING", 1));
        output.push_str(&format!("Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.processing_time_ms
        ));

        output.push_str(&self.format_header("Job Requirement", 2));
        output.push_str(&format!("Required skills: {}\n", format_skills(&report.job.required_skills)));
        output.push_str(&format!("Minimum experience: {}\n", format_minimum(report.job.minimum_experience_years)));
        if self.detailed {
            output.push_str(&format!("Weights: skills {:.0} / experience {:.0} (partial experience x{})\n",
                report.weights.skill_weight,
                report.weights.experience_weight,
                report.weights.partial_experience_factor
            ));
        }

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("Resumes: {} | Scored: {} | Failed: {} | Average: {} | Best: {}\n",
            report.summary.total,
            report.summary.scored,
            self.colorize(&report.summary.failed.to_string(),
                if report.summary.failed > 0 { Color::Red } else { Color::White }),
            format_average(&report.summary),
            format_best(&report.summary)
        ));

        output.push_str(&self.format_header("Ranking", 2));
        if report.entries.is_empty() {
            output.push_str("No resumes were provided.\n");
        }

        for entry in &report.entries {
            let result = &entry.result;
            output.push_str(&format!("#{} {} {}% {}\n",
                entry.rank,
                self.colorize(&result.file_name, Color::Cyan),
                result.total_score,
                self.format_score_badge(entry.band)
            ));

            if let Some(error) = &result.parse_error {
                output.push_str(&format!("   ⚠️  {}\n\n", self.colorize(error, Color::Red)));
                continue;
            }

            let skills = if result.matched_skills.is_empty() {
                self.colorize("No matching skills found.", Color::BrightBlack)
            } else {
                self.colorize(&result.matched_skills.join(", "), Color::Green)
            };
            output.push_str(&format!("   Matched skills: {}\n", skills));
            output.push_str(&format!("   Experience detected: {}\n",
                format_experience(result.detected_experience_years)));

            if self.detailed {
                if let Some(breakdown) = &result.breakdown {
                    output.push_str(&format!("   Breakdown: skills {:.2} ({:.0}% matched) + experience {:.2}\n",
                        breakdown.skill_points,
                        breakdown.skill_fraction * 100.0,
                        breakdown.experience_points
                    ));
                }
            }
            output.push('\n');
        }

        output.push_str(&format!("{} Generated by Resume Ranker v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.ranker_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Strong => "🟢 Strong",
            ScoreBand::Moderate => "🟡 Moderate",
            ScoreBand::Weak => "🔴 Weak",
        }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Resume Ranking Report\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {} | **Processing Time:** {}ms\n\n",
                format_timestamp(report),
                report.processing_time_ms
            ));
        }

        output.push_str("## Job Requirement\n\n");
        output.push_str(&format!("- **Required skills:** {}\n", format_skills(&report.job.required_skills)));
        output.push_str(&format!("- **Minimum experience:** {}\n\n", format_minimum(report.job.minimum_experience_years)));

        output.push_str("## Summary\n\n");
        output.push_str(&format!("{} of {} resume(s) scored, {} failed. **Average:** {} | **Best:** {}\n\n",
            report.summary.scored,
            report.summary.total,
            report.summary.failed,
            format_average(&report.summary),
            format_best(&report.summary)
        ));

        output.push_str("## Ranking\n\n");
        output.push_str("| # | File | Score | Band | Matched Skills | Experience |\n");
        output.push_str("|---|------|-------|------|----------------|------------|\n");
        for entry in &report.entries {
            let result = &entry.result;
            let (skills, experience) = match &result.parse_error {
                Some(error) => (format!("⚠️ {}", error), "-".to_string()),
                None => (
                    format_skills(&result.matched_skills),
                    format_experience(result.detected_experience_years),
                ),
            };
            output.push_str(&format!("| {} | {} | {}% | {} | {} | {} |\n",
                entry.rank,
                Self::escape_cell(&result.file_name),
                result.total_score,
                Self::markdown_score_badge(entry.band),
                Self::escape_cell(&skills),
                experience
            ));
        }
        output.push('\n');

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by Resume Ranker v{} (skills {:.0} / experience {:.0})*\n",
                report.ranker_version,
                report.weights.skill_weight,
                report.weights.experience_weight
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &RankingReport) -> HtmlTemplate {
        let rows = report
            .entries
            .iter()
            .map(|entry| {
                let result = &entry.result;
                HtmlRow {
                    rank: entry.rank,
                    file_name: result.file_name.clone(),
                    score: result.total_score,
                    band_class: match entry.band {
                        ScoreBand::Strong => "band-strong",
                        ScoreBand::Moderate => "band-moderate",
                        ScoreBand::Weak => "band-weak",
                    },
                    skills: format_skills(&result.matched_skills),
                    experience: format_experience(result.detected_experience_years),
                    has_error: result.parse_error.is_some(),
                    error: result.parse_error.clone().unwrap_or_default(),
                }
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            processing_time: report.processing_time_ms,
            required_skills: format_skills(&report.job.required_skills),
            minimum_experience: format_minimum(report.job.minimum_experience_years),
            total: report.summary.total,
            scored: report.summary.scored,
            failed: report.summary.failed,
            average_score: format_average(&report.summary),
            best_score: format_best(&report.summary),
            rows,
            version: report.ranker_version.clone(),
            skill_weight: format!("{:.0}", report.weights.skill_weight),
            experience_weight: format!("{:.0}", report.weights.experience_weight),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeRankerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), *format);
        formatter.format_report(report)
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("resume_ranking{}.txt", timestamp_suffix),
        OutputFormat::Json => format!("resume_ranking{}.json", timestamp_suffix),
        OutputFormat::Markdown => format!("resume_ranking{}.md", timestamp_suffix),
        OutputFormat::Html => format!("resume_ranking{}.html", timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::processing::job::JobRequirement;
    use crate::processing::matcher::{MatchResult, ResumeMatcher};

    fn sample_report() -> RankingReport {
        let job = JobRequirement::new("react, node.js, sql", 5);
        let matcher = ResumeMatcher::default();
        let results = vec![
            matcher
                .score("Experienced engineer with react and sql background, 6 years in the industry.", &job)
                .with_file_name("senior.pdf"),
            MatchResult::failed("broken.pdf", "Failed to parse PDF."),
        ];
        RankingReport::new(&job, ScoringConfig::default(), results, 5)
    }

    #[test]
    fn test_console_output_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();
        assert!(output.contains("#1 senior.pdf 77% [MODERATE]"));
        assert!(output.contains("Matched skills: react, sql"));
        assert!(output.contains("Experience detected: 6 years"));
        assert!(output.contains("#2 broken.pdf 0% [WEAK]"));
        assert!(output.contains("Failed to parse PDF."));
        assert!(output.contains("Breakdown: skills 46.67"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["file_name"], "senior.pdf");
        assert_eq!(entries[0]["total_score"], 77);
        assert_eq!(entries[0]["rank"], 1);
        assert!(entries[0].get("parse_error").is_none());
        assert_eq!(entries[1]["parse_error"], "Failed to parse PDF.");
    }

    #[test]
    fn test_markdown_table() {
        let output = MarkdownFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.contains("| 1 | senior.pdf | 77% | 🟡 Moderate | react, sql | 6 years |"));
        assert!(output.contains("| 2 | broken.pdf | 0% | 🔴 Weak | ⚠️ Failed to parse PDF. | - |"));
        assert!(!output.contains("Generated by"));
    }

    #[test]
    fn test_html_escapes_file_names() {
        let job = JobRequirement::new("rust", 0);
        let results = vec![ResumeMatcher::default()
            .score("rust", &job)
            .with_file_name("<script>.txt")];
        let report = RankingReport::new(&job, ScoringConfig::default(), results, 0);

        let output = HtmlFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains("&#60;script&#62;.txt"));
        assert!(!output.contains("<script>.txt"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_generator_routes_formats() {
        let generator = ReportGenerator::with_options(false, false);
        let report = sample_report();
        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# 📊 Resume Ranking Report"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, false), "resume_ranking.json");
        assert_eq!(suggest_filename(&OutputFormat::Console, false), "resume_ranking.txt");
        assert!(suggest_filename(&OutputFormat::Html, true).ends_with(".html"));
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}
