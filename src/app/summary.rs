use crate::metrics::LatencyStats;

/// The Statistical Analysis block printed after every run.
pub(super) fn summary_lines(stats: &LatencyStats, failed: u64) -> Vec<String> {
    vec![
        format!("Total Requests: {}", stats.total),
        format!("Failed Requests: {}", failed),
        format!("Success Rate: {:.2}%", stats.success_rate),
        format!("Average Response Time: {:.2}ms", stats.mean_ms),
        format!("Median Response Time: {:.2}ms", stats.median_ms),
        format!("Standard Deviation: {:.2}ms", stats.std_dev_ms),
        format!(
            "Percentiles: p50={:.2}ms p75={:.2}ms p90={:.2}ms p95={:.2}ms p99={:.2}ms",
            stats.percentiles.p50,
            stats.percentiles.p75,
            stats.percentiles.p90,
            stats.percentiles.p95,
            stats.percentiles.p99
        ),
    ]
}
