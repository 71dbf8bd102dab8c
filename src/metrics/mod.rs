//! Result records, latency aggregation, and the collector task.
mod collector;
mod stats;
mod types;


pub use collector::setup_collector;
pub use stats::{LatencyStats, Percentiles, compute_stats};
pub use types::{ProbeEvent, ProbeLog, ProbeResult, RateLimitInfo, VerboseReport};
