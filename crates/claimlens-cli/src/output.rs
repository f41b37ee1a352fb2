//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use claimlens_domain::{FactCheckReport, FactualStatus};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const CLAIM_COLUMN_CHARS: usize = 70;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a fact-check report.
    pub fn format_report(&self, report: &FactCheckReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(Self::format_report_quiet(report)),
        }
    }

    fn format_report_table(&self, report: &FactCheckReport) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} — {}\n",
            self.colorize(&report.video_title, "bold"),
            report.channel_name
        ));
        out.push_str(&format!(
            "{} claims: {} true, {} false, {} partial, {} unverified ({} ms)\n\n",
            report.counts.total_claims,
            self.status_text(&report.counts.true_claims.to_string(), FactualStatus::True),
            self.status_text(&report.counts.false_claims.to_string(), FactualStatus::False),
            self.status_text(&report.counts.partial_claims.to_string(), FactualStatus::Partial),
            self.status_text(
                &report.counts.unverified_claims.to_string(),
                FactualStatus::Unverified
            ),
            report.processing_time_ms,
        ));

        if report.claims.is_empty() {
            out.push_str("No claims extracted.\n");
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Status", "Conf", "Claim", "Sources"]);

        for (idx, claim) in report.claims.iter().enumerate() {
            builder.push_record([
                &(idx + 1).to_string(),
                &self.status_text(claim.status.as_str(), claim.status),
                &format!("{:.2}", claim.confidence),
                &truncate(&claim.text, CLAIM_COLUMN_CHARS),
                &claim.sources.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        out.push_str(&table.to_string());
        out.push('\n');
        out
    }

    fn format_report_quiet(report: &FactCheckReport) -> String {
        report
            .claims
            .iter()
            .map(|c| format!("{}\t{:.2}\t{}", c.status, c.confidence, c.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn status_text(&self, text: &str, status: FactualStatus) -> String {
        let color = match status {
            FactualStatus::True => "green",
            FactualStatus::False => "red",
            FactualStatus::Partial => "yellow",
            FactualStatus::Unverified => "dimmed",
        };
        self.colorize(text, color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "dimmed" => text.dimmed().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
