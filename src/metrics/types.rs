use serde::Serialize;

/// Rate-limit headers extracted from a single response, kept verbatim.
/// A missing header is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    pub limit: Option<String>,
    pub remaining: Option<String>,
    pub reset: Option<String>,
    pub period: Option<String>,
    pub retry_after: Option<String>,
}

/// Outcome of one completed request. Transport failures never produce
/// a record; they are counted separately.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub sequence: u64,
    pub status: u16,
    #[serde(flatten)]
    pub rate_limit: RateLimitInfo,
    pub latency_ms: f64,
    pub bytes: u64,
}

impl ProbeResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Full header set and body captured for verbose output.
#[derive(Debug, Clone)]
pub struct VerboseReport {
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub body_is_json: bool,
}

/// Event shipped from request workers to the collector.
#[derive(Debug)]
pub enum ProbeEvent {
    Completed {
        result: ProbeResult,
        verbose: Option<Box<VerboseReport>>,
    },
    Failed {
        sequence: u64,
        error: String,
    },
}

/// Everything the collector hands back once the event channel closes.
#[derive(Debug, Default)]
pub struct ProbeLog {
    pub results: Vec<ProbeResult>,
    pub failed: u64,
}
