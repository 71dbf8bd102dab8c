use tokio::sync::mpsc;
use tracing::error;

use crate::args::ProbeArgs;
use crate::charts;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{DispatchPlan, build_client, dispatch_requests, validate_url};
use crate::metrics::{compute_stats, setup_collector};
use crate::sinks::{Presenter, export_csv, export_json};

use super::summary::summary_lines;

/// Drives one full probe run: dispatch, collect, aggregate, report.
pub(crate) async fn run_probe(mut args: ProbeArgs) -> AppResult<()> {
    let url = args
        .url
        .take()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    validate_url(&url)?;
    let client = build_client(&args)?;

    let presenter = Presenter::new(args.format, args.no_color);
    presenter.print_run_header(
        &url,
        args.requests.get(),
        args.delay.as_secs_f64(),
        args.concurrency.get(),
    );

    let (events_tx, events_rx) = mpsc::channel(args.concurrency.get());
    let collector = setup_collector(presenter, events_rx);

    let plan = DispatchPlan {
        url: url.clone(),
        requests: args.requests.get(),
        concurrency: args.concurrency.get(),
        delay: args.delay,
        capture_verbose: args.verbose,
    };
    dispatch_requests(&client, &plan, events_tx).await;

    // The channel is closed; the collector holds the sorted records.
    let log = collector.await?;

    presenter.print_results(&log.results)?;

    let stats = compute_stats(&log.results);
    presenter.print_section("Statistical Analysis:", &summary_lines(&stats, log.failed));
    presenter.print_section("Latency Chart:", &charts::render_terminal_chart(&log.results));

    if let Some(path) = args.export_json.as_deref() {
        export_json(path, &log.results).await?;
    }
    if let Some(path) = args.export_csv.as_deref() {
        export_csv(path, &log.results).await?;
    }

    if let Some(charts_path) = args.charts_path.as_deref()
        && let Err(err) = charts::plot_charts(&log.results, &stats, charts_path, &url).await
    {
        error!("Failed to generate charts: {}", err);
    }

    presenter.print_completion();
    Ok(())
}
