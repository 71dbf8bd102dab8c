use std::path::Path;

use plotters::prelude::*;

use crate::metrics::ProbeResult;

/// Class labels and fill colors for the status bar chart.
const CLASSES: [(&str, RGBColor); 5] = [
    ("2xx", RGBColor(46, 204, 113)),
    ("3xx", RGBColor(52, 152, 219)),
    ("4xx", RGBColor(241, 196, 15)),
    ("5xx", RGBColor(231, 76, 60)),
    ("Other", RGBColor(127, 140, 141)),
];

/// Counts recorded statuses per class, in `CLASSES` order.
pub(super) fn class_counts(results: &[ProbeResult]) -> [u64; 5] {
    let mut counts = [0u64; 5];
    for result in results {
        let index = match result.status {
            200..=299 => 0,
            300..=399 => 1,
            400..=499 => 2,
            500..=599 => 3,
            _ => 4,
        };
        if let Some(slot) = counts.get_mut(index) {
            *slot = slot.saturating_add(1);
        }
    }
    counts
}

/// Draws one bar per status-code class.
pub(super) fn plot_status_distribution(
    results: &[ProbeResult],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if results.is_empty() {
        return Ok(());
    }

    let counts = class_counts(results);
    let y_max = counts.iter().copied().max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("HTTP Status Codes", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0u32..5u32, 0u64..y_max.saturating_add(1))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(5)
        .x_label_formatter(&|index| {
            CLASSES
                .get(*index as usize)
                .map(|&(label, _)| label.to_owned())
                .unwrap_or_default()
        })
        .y_desc("Requests")
        .draw()?;

    for (index, (&count, &(label, color))) in counts.iter().zip(CLASSES.iter()).enumerate() {
        if count == 0 {
            continue;
        }
        let x0 = u32::try_from(index).unwrap_or(u32::MAX);
        chart
            .draw_series([Rectangle::new(
                [(x0, 0), (x0.saturating_add(1), count)],
                color.filled(),
            )])?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new(
                    [
                        (x, y.saturating_sub(5)),
                        (x.saturating_add(10), y.saturating_add(5)),
                    ],
                    color.filled(),
                )
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
