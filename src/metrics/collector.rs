use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::sinks::Presenter;

use super::{ProbeEvent, ProbeLog};

/// Spawns the task that owns result accumulation. Streaming console
/// output is serialized through this task so rows from concurrent
/// requests never interleave.
///
/// The task finishes once every sender has dropped; the returned log
/// holds the records sorted by sequence number.
#[must_use]
pub fn setup_collector(
    presenter: Presenter,
    mut events_rx: mpsc::Receiver<ProbeEvent>,
) -> JoinHandle<ProbeLog> {
    tokio::spawn(async move {
        let mut log = ProbeLog::default();
        while let Some(event) = events_rx.recv().await {
            match event {
                ProbeEvent::Completed { result, verbose } => {
                    presenter.stream_result(&result, verbose.as_deref());
                    log.results.push(result);
                }
                ProbeEvent::Failed { sequence, error } => {
                    warn!("Request {} failed: {}", sequence, error);
                    log.failed = log.failed.saturating_add(1);
                }
            }
        }
        log.results.sort_by_key(|result| result.sequence);
        log
    })
}
