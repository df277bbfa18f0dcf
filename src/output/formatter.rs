use anyhow::Result;

use crate::cli::OutputFormat;

use super::{ResolutionReport, ResolutionStatus};

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &ResolutionReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(Self::format_text(report)),
        }
    }

    fn format_text(report: &ResolutionReport) -> String {
        let mut out = format!(
            "{} ({} containers): {} resolved, {} deferred, {} failed\n",
            report.symbol_source,
            report.containers_loaded,
            report.resolved,
            report.deferred,
            report.failed
        );

        for entry in &report.selectors {
            let status = match entry.status {
                ResolutionStatus::Resolved => "ok",
                ResolutionStatus::Deferred => "--",
                ResolutionStatus::Failed => "!!",
            };
            out.push_str(&format!("[{status}] {:<18} {}", entry.kind.as_str(), entry.input));
            if let Some(symbol) = &entry.symbol {
                out.push_str(&format!(" -> {symbol}"));
            }
            if let Some(declared_in) = &entry.declared_in {
                out.push_str(&format!(" (declared in {declared_in})"));
            }
            if let Some(error) = &entry.error {
                out.push_str(&format!(": {error}"));
            }
            out.push('\n');
        }
        out
    }
}
