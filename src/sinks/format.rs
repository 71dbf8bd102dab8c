use std::io::IsTerminal;

use chrono::{Local, LocalResult, TimeZone};
use crossterm::style::{Color, Stylize};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::{ProbeResult, VerboseReport};

const TABLE_HEADER: &str =
    "| Request | Status | Limit | Remain | Reset Time           | Period | Retry | Response |";
const TABLE_SEPARATOR: &str =
    "|---------|--------|-------|--------|---------------------|--------|-------|----------|";

/// Verbose response bodies are cut off past this many bytes.
const VERBOSE_BODY_LIMIT: usize = 2048;

/// Serializes console output for a run. Owned by the collector task
/// while requests stream; table and CSV rows print as requests
/// complete, JSON accumulates and prints once at the end.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    format: OutputFormat,
    color: bool,
}

impl Presenter {
    /// Color is only applied when stdout is an interactive terminal
    /// and `--no-color` was not given.
    #[must_use]
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        let color = !no_color && std::io::stdout().is_terminal();
        Self { format, color }
    }

    pub fn print_run_header(&self, url: &str, requests: u64, delay_secs: f64, concurrency: usize) {
        self.print_colored(
            &format!("Rate Limiter Test Results for {}", url),
            Color::Yellow,
        );
        self.print_colored(
            &format!(
                "Requests: {}, Delay: {} seconds, Concurrency: {}",
                requests, delay_secs, concurrency
            ),
            Color::Yellow,
        );
        if matches!(self.format, OutputFormat::Table) {
            println!("{}", TABLE_HEADER);
            println!("{}", TABLE_SEPARATOR);
        }
    }

    /// Prints the streaming view of one completed request, plus the
    /// verbose details block when captured.
    pub fn stream_result(&self, result: &ProbeResult, verbose: Option<&VerboseReport>) {
        match self.format {
            OutputFormat::Table => {
                let color = if result.is_rate_limited() {
                    Color::Red
                } else {
                    Color::Green
                };
                self.print_colored(&table_row(result), color);
            }
            OutputFormat::Csv => println!("{}", csv_row(result)),
            OutputFormat::Json => {}
        }
        if let Some(report) = verbose {
            self.print_verbose(result.sequence, report);
        }
    }

    /// Prints the accumulated JSON array; a no-op for other formats.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn print_results(&self, results: &[ProbeResult]) -> AppResult<()> {
        if !matches!(self.format, OutputFormat::Json) {
            return Ok(());
        }
        let entries: Vec<JsonRow<'_>> = results.iter().map(json_entry).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        Ok(())
    }

    /// Prints a blank line, a colored section title, and its lines.
    pub fn print_section(&self, title: &str, lines: &[String]) {
        println!();
        self.print_colored(title, Color::Blue);
        for line in lines {
            println!("{}", line);
        }
    }

    pub fn print_completion(&self) {
        println!();
        self.print_colored("Test completed.", Color::Green);
    }

    fn print_verbose(&self, sequence: u64, report: &VerboseReport) {
        println!();
        self.print_colored(&format!("Request {} Details:", sequence), Color::Blue);
        self.print_colored("All Headers:", Color::Yellow);
        for (name, value) in &report.headers {
            println!("{}: {}", name, value);
        }
        self.print_colored("Response Body:", Color::Yellow);
        println!("{}", render_body(report));
        self.print_colored("------------------------", Color::Blue);
    }

    fn print_colored(&self, text: &str, color: Color) {
        if self.color {
            println!("{}", text.with(color));
        } else {
            println!("{}", text);
        }
    }
}

#[derive(Serialize)]
pub(super) struct JsonRow<'entry> {
    request_num: u64,
    status_code: u16,
    limit: &'entry str,
    remaining: &'entry str,
    reset: String,
    period: &'entry str,
    retry_after: &'entry str,
    response_time: String,
}

pub(super) fn json_entry(result: &ProbeResult) -> JsonRow<'_> {
    let rate_limit = &result.rate_limit;
    JsonRow {
        request_num: result.sequence,
        status_code: result.status,
        limit: field_or_na(rate_limit.limit.as_deref()),
        remaining: field_or_na(rate_limit.remaining.as_deref()),
        reset: format_reset_time(rate_limit.reset.as_deref()),
        period: field_or_na(rate_limit.period.as_deref()),
        retry_after: field_or_na(rate_limit.retry_after.as_deref()),
        response_time: format!("{:.0}ms", result.latency_ms),
    }
}

pub(super) fn table_row(result: &ProbeResult) -> String {
    let rate_limit = &result.rate_limit;
    format!(
        "| {:<7} | {:<6} | {:<5} | {:<6} | {:<19} | {:<6} | {:<5} | {:.0}ms |",
        result.sequence,
        result.status,
        field_or_na(rate_limit.limit.as_deref()),
        field_or_na(rate_limit.remaining.as_deref()),
        format_reset_time(rate_limit.reset.as_deref()),
        field_or_na(rate_limit.period.as_deref()),
        field_or_na(rate_limit.retry_after.as_deref()),
        result.latency_ms,
    )
}

pub(super) fn csv_row(result: &ProbeResult) -> String {
    let rate_limit = &result.rate_limit;
    format!(
        "{},{},{},{},{},{},{},{:.0}",
        result.sequence,
        result.status,
        field_or_na(rate_limit.limit.as_deref()),
        field_or_na(rate_limit.remaining.as_deref()),
        format_reset_time(rate_limit.reset.as_deref()),
        field_or_na(rate_limit.period.as_deref()),
        field_or_na(rate_limit.retry_after.as_deref()),
        result.latency_ms,
    )
}

fn field_or_na(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        Some(_) | None => "N/A",
    }
}

/// Formats a rate-limit reset timestamp as local time. Absent, empty,
/// and literal `"null"` values render `N/A`; unparseable values render
/// `Invalid date`.
pub(crate) fn format_reset_time(reset: Option<&str>) -> String {
    let Some(value) = reset else {
        return "N/A".to_owned();
    };
    if value.is_empty() || value == "null" {
        return "N/A".to_owned();
    }
    let Ok(timestamp) = value.parse::<f64>() else {
        return "Invalid date".to_owned();
    };
    if !timestamp.is_finite() {
        return "Invalid date".to_owned();
    }
    match Local.timestamp_opt(timestamp as i64, 0) {
        LocalResult::Single(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        LocalResult::Ambiguous(earliest, _) => earliest.format("%Y-%m-%d %H:%M:%S").to_string(),
        LocalResult::None => "Invalid date".to_owned(),
    }
}

pub(super) fn render_body(report: &VerboseReport) -> String {
    let rendered = if report.body_is_json {
        serde_json::from_str::<serde_json::Value>(&report.body)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| report.body.clone())
    } else {
        report.body.clone()
    };
    truncate_body(&rendered)
}

fn truncate_body(body: &str) -> String {
    if body.len() <= VERBOSE_BODY_LIMIT {
        return body.to_owned();
    }
    let mut end = VERBOSE_BODY_LIMIT;
    while end > 0 && !body.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    let head = body.get(..end).unwrap_or("");
    format!("{}... (truncated, {} bytes)", head, body.len())
}
