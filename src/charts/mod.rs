//! Optional PNG chart generation plus the terminal latency chart.
mod histogram;
mod naming;
mod status;
mod terminal;


use std::path::Path;

use tokio::fs;
use tracing::{error, info};

use crate::metrics::{LatencyStats, ProbeResult};

pub use terminal::render_terminal_chart;

/// Writes the PNG charts under a per-run directory inside
/// `charts_path`. Callers treat failures as non-fatal.
///
/// # Errors
///
/// Returns an error when the output directory cannot be created or a
/// chart fails to render.
pub async fn plot_charts(
    results: &[ProbeResult],
    stats: &LatencyStats,
    charts_path: &str,
    url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if results.is_empty() {
        return Ok(());
    }

    let dir = Path::new(charts_path).join(naming::chart_run_dir(url));
    if let Err(err) = fs::create_dir_all(&dir).await {
        error!(
            "Failed to create chart directory '{}': {}",
            dir.display(),
            err
        );
        return Err(err.into());
    }

    info!("Plotting latency histogram...");
    histogram::plot_latency_histogram(results, stats, &dir.join("latency_histogram.png"))?;

    info!("Plotting status code distribution...");
    status::plot_status_distribution(results, &dir.join("status_codes.png"))?;

    info!("Charts written to '{}'.", dir.display());
    Ok(())
}
