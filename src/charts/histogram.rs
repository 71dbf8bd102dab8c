use std::path::Path;

use hdrhistogram::Histogram;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::metrics::{LatencyStats, ProbeResult};

pub(super) struct LatencyBuckets {
    pub(super) width_ms: u64,
    /// Bucket upper bound in ms paired with the count it holds.
    pub(super) bars: Vec<(u64, u64)>,
}

/// Buckets the recorded latencies linearly via an HDR histogram.
pub(super) fn bucket_latencies(
    results: &[ProbeResult],
) -> Result<LatencyBuckets, Box<dyn std::error::Error>> {
    let mut histogram = Histogram::<u64>::new(3)?;
    for result in results {
        let value = (result.latency_ms.max(0.0) as u64).max(1);
        histogram.record(value)?;
    }

    // Aim for roughly 30 bars.
    let width_ms = (histogram.max() / 30).max(1);
    let bars: Vec<(u64, u64)> = histogram
        .iter_linear(width_ms)
        .map(|bucket| {
            (
                bucket.value_iterated_to(),
                bucket.count_since_last_iteration(),
            )
        })
        .collect();

    Ok(LatencyBuckets { width_ms, bars })
}

/// Draws the latency histogram with vertical percentile markers.
pub(super) fn plot_latency_histogram(
    results: &[ProbeResult],
    stats: &LatencyStats,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if results.is_empty() {
        return Ok(());
    }

    let buckets = bucket_latencies(results)?;
    let x_max = buckets
        .bars
        .last()
        .map(|&(end, _)| end as f64)
        .unwrap_or(1.0)
        .max(1.0);
    let y_max = buckets
        .bars
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(1)
        .max(1);

    let root = BitMapBackend::new(path, (1600, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Latency Distribution", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, 0u64..y_max.saturating_add(1))?;

    chart
        .configure_mesh()
        .x_desc("Latency (ms)")
        .y_desc("Requests")
        .draw()?;

    let bar_color = RGBColor(52, 152, 219);
    chart
        .draw_series(buckets.bars.iter().filter_map(|&(end, count)| {
            if count == 0 {
                return None;
            }
            let x0 = end.saturating_sub(buckets.width_ms) as f64;
            Some(Rectangle::new([(x0, 0), (end as f64, count)], bar_color.filled()))
        }))?
        .label("Requests")
        .legend(move |(x, y)| {
            Rectangle::new(
                [
                    (x, y.saturating_sub(5)),
                    (x.saturating_add(10), y.saturating_add(5)),
                ],
                bar_color.filled(),
            )
        });

    let markers = [
        (stats.percentiles.p50, "p50", RGBColor(46, 204, 113)),
        (stats.percentiles.p90, "p90", RGBColor(241, 196, 15)),
        (stats.percentiles.p95, "p95", RGBColor(230, 126, 34)),
        (stats.percentiles.p99, "p99", RGBColor(231, 76, 60)),
    ];
    for (value, label, color) in markers {
        let marker_x = value.min(x_max);
        chart
            .draw_series(DashedLineSeries::new(
                [(marker_x, 0u64), (marker_x, y_max.saturating_add(1))],
                5,
                5,
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x.saturating_add(20), y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
