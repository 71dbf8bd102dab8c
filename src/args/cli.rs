use clap::Parser;
use std::time::Duration;

use super::parsers::{
    parse_delay_arg, parse_duration_arg, parse_header, parse_positive_u64, parse_positive_usize,
};
use super::types::{OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP rate-limit probe in Rust - bounded worker dispatch, latency statistics, colorized reports, and optional chart exports for API throttling analysis."
)]
pub struct ProbeArgs {
    /// Target URL to probe
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of requests to send
    #[arg(
        long = "requests",
        short = 'n',
        default_value = "20",
        value_parser = parse_positive_u64
    )]
    pub requests: PositiveU64,

    /// Delay between submitting requests (supports ms/s/m/h; 0 disables)
    #[arg(
        long = "delay",
        short = 'd',
        default_value = "0",
        value_parser = parse_delay_arg
    )]
    pub delay: Duration,

    /// Output format for per-request rows and the final report
    #[arg(
        long = "format",
        short = 'f',
        default_value = "table",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show response bodies and rate-limit headers for every request
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        short = 't',
        default_value = "30s",
        value_parser = parse_duration_arg
    )]
    pub timeout: Duration,

    /// Follow HTTP redirects instead of recording the 3xx response
    #[arg(long = "follow-redirects", short = 'L')]
    pub follow_redirects: bool,

    /// Max number of in-flight requests
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Print a glossary of rate-limit response headers and exit
    #[arg(long = "help-tags")]
    pub help_tags: bool,

    /// Export results to a JSON file
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Export results to a CSV file
    #[arg(long = "export-csv")]
    pub export_csv: Option<String>,

    /// Directory to save PNG charts to (charts are skipped when unset)
    #[arg(long = "charts-path")]
    pub charts_path: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./rlprobe.toml or ./rlprobe.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
