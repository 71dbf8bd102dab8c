use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, Response};
use tokio::sync::{Semaphore, mpsc};
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::metrics::{ProbeEvent, ProbeResult, VerboseReport};

use super::headers::extract_rate_limit;

/// Everything one run's dispatcher needs to know.
#[derive(Debug, Clone)]
pub struct DispatchPlan {
    pub url: String,
    pub requests: u64,
    pub concurrency: usize,
    pub delay: Duration,
    pub capture_verbose: bool,
}

/// Issues the full batch of GET requests. One task is spawned per
/// request; a semaphore with `concurrency` permits bounds how many are
/// in flight. Submission is paced by `delay` without limiting
/// concurrency below the permit count.
///
/// Returns once every request has completed or failed and its event
/// has been shipped to the collector.
pub async fn dispatch_requests(
    client: &Client,
    plan: &DispatchPlan,
    events_tx: mpsc::Sender<ProbeEvent>,
) {
    let permits = Arc::new(Semaphore::new(plan.concurrency));
    let mut handles = Vec::with_capacity(usize::try_from(plan.requests).unwrap_or(0));

    for sequence in 1..=plan.requests {
        if sequence > 1 && !plan.delay.is_zero() {
            sleep(plan.delay).await;
        }

        let permits = Arc::clone(&permits);
        let client = client.clone();
        let events_tx = events_tx.clone();
        let url = plan.url.clone();
        let capture_verbose = plan.capture_verbose;

        handles.push(tokio::spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return;
            };
            let event = probe_once(&client, &url, sequence, capture_verbose).await;
            if events_tx.send(event).await.is_err() {
                warn!("Collector closed before request {} was recorded.", sequence);
            }
        }));
    }
    drop(events_tx);

    for handle in handles {
        if let Err(err) = handle.await {
            debug!("Request task join failed: {}", err);
        }
    }
}

/// Runs one request. Latency covers everything from just before the
/// call to just after the final body byte or the error.
async fn probe_once(client: &Client, url: &str, sequence: u64, capture_verbose: bool) -> ProbeEvent {
    let started = Instant::now();
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            return ProbeEvent::Failed {
                sequence,
                error: err.to_string(),
            };
        }
    };

    let status = response.status().as_u16();
    let rate_limit = extract_rate_limit(response.headers());

    if capture_verbose {
        let header_pairs: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body_is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let body = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                return ProbeEvent::Failed {
                    sequence,
                    error: err.to_string(),
                };
            }
        };
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        return ProbeEvent::Completed {
            result: ProbeResult {
                sequence,
                status,
                rate_limit,
                latency_ms,
                bytes: u64::try_from(body.len()).unwrap_or(u64::MAX),
            },
            verbose: Some(Box::new(VerboseReport {
                headers: header_pairs,
                body: String::from_utf8_lossy(&body).into_owned(),
                body_is_json,
            })),
        };
    }

    let bytes = match drain_response_body(response).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return ProbeEvent::Failed {
                sequence,
                error: err.to_string(),
            };
        }
    };
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "Request {} finished: status {} after {:.1}ms ({} bytes).",
        sequence, status, latency_ms, bytes
    );
    ProbeEvent::Completed {
        result: ProbeResult {
            sequence,
            status,
            rate_limit,
            latency_ms,
            bytes,
        },
        verbose: None,
    }
}

async fn drain_response_body(response: Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
