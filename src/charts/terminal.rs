use crate::metrics::ProbeResult;

/// Vertical resolution of the terminal latency chart.
const CHART_ROWS: usize = 20;
const SUCCESS_GLYPH: char = '█';
const LIMITED_GLYPH: char = '▄';

/// Renders the per-request latency chart as text lines, one column per
/// request in sequence order. Successful requests scale against the
/// slowest successful request; every non-2xx request renders as a
/// single low marker regardless of its latency.
#[must_use]
pub fn render_terminal_chart(results: &[ProbeResult]) -> Vec<String> {
    if results.is_empty() {
        return Vec::new();
    }

    let max_latency = results
        .iter()
        .filter(|result| result.is_success())
        .map(|result| result.latency_ms)
        .fold(0.0_f64, f64::max);

    let heights: Vec<(usize, char)> = results
        .iter()
        .map(|result| {
            if result.is_success() {
                (scale_height(result.latency_ms, max_latency), SUCCESS_GLYPH)
            } else {
                (1, LIMITED_GLYPH)
            }
        })
        .collect();

    let mut lines = Vec::with_capacity(CHART_ROWS.saturating_add(2));
    for row in (1..=CHART_ROWS).rev() {
        let line: String = heights
            .iter()
            .map(|&(height, glyph)| if height >= row { glyph } else { ' ' })
            .collect();
        lines.push(line);
    }
    lines.push("-".repeat(results.len()));
    lines.push(format!(
        "Success ({}) vs Rate Limited ({})",
        SUCCESS_GLYPH, LIMITED_GLYPH
    ));
    lines
}

/// Maps a latency onto 1..=CHART_ROWS. A zero maximum means no
/// successful request has a measurable height; render nothing.
fn scale_height(latency_ms: f64, max_latency: f64) -> usize {
    if max_latency <= 0.0 {
        return 0;
    }
    let scaled = (latency_ms / max_latency * CHART_ROWS as f64).ceil();
    (scaled.max(1.0) as usize).min(CHART_ROWS)
}
