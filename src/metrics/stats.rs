//! Latency aggregation over the recorded results.

use super::ProbeResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct Percentiles {
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

#[derive(Debug, Clone, Default)]
pub struct LatencyStats {
    pub total: u64,
    pub success_rate: f64,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub std_dev_ms: f64,
    pub percentiles: Percentiles,
}

/// Aggregates the recorded results. An empty slice yields all-zero
/// statistics instead of an error.
#[must_use]
pub fn compute_stats(results: &[ProbeResult]) -> LatencyStats {
    if results.is_empty() {
        return LatencyStats::default();
    }

    let success_count = results.iter().filter(|result| result.is_success()).count();
    let success_rate = success_count as f64 / results.len() as f64 * 100.0;

    let mut latencies: Vec<f64> = results.iter().map(|result| result.latency_ms).collect();
    latencies.sort_by(f64::total_cmp);

    let mean_ms = latencies.iter().sum::<f64>() / latencies.len() as f64;

    LatencyStats {
        total: results.len() as u64,
        success_rate,
        mean_ms,
        median_ms: percentile(&latencies, 50.0),
        std_dev_ms: sample_std_dev(&latencies, mean_ms),
        percentiles: Percentiles {
            p50: percentile(&latencies, 50.0),
            p75: percentile(&latencies, 75.0),
            p90: percentile(&latencies, 90.0),
            p95: percentile(&latencies, 95.0),
            p99: percentile(&latencies, 99.0),
        },
    }
}

/// Linear interpolation between order statistics: rank = p/100 * (n-1),
/// interpolated between the two surrounding sorted samples.
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };
    let rank = p / 100.0 * last as f64;
    let lower = rank.floor();
    let fraction = rank - lower;
    let lower_idx = (lower.max(0.0) as usize).min(last);
    let upper_idx = lower_idx.saturating_add(1).min(last);
    let low = sorted.get(lower_idx).copied().unwrap_or(0.0);
    let high = sorted.get(upper_idx).copied().unwrap_or(low);
    low + (high - low) * fraction
}

/// Sample standard deviation (N-1 divisor); defined as 0 for fewer
/// than two samples.
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum();
    (sum_sq / values.len().saturating_sub(1) as f64).sqrt()
}
