use std::fmt::Write as _;
use std::path::PathBuf;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::ProbeResult;

fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line).map_err(|err| AppError::sink(SinkError::WriteLine { source: err }))
}

/// Writes the raw records to a pretty-printed JSON file.
///
/// # Errors
///
/// Returns an error when serialization or the file write fails.
pub async fn export_json(path: &str, results: &[ProbeResult]) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(results)
        .map_err(|err| AppError::sink(SinkError::SerializeExport { source: err }))?;
    write_file(path, &json).await.map_err(|err| {
        AppError::sink(SinkError::WriteJsonExport {
            path: PathBuf::from(path),
            source: err,
        })
    })
}

/// Writes the raw records to a CSV file with a header row; absent
/// rate-limit fields stay empty.
///
/// # Errors
///
/// Returns an error when the file write fails.
pub async fn export_csv(path: &str, results: &[ProbeResult]) -> AppResult<()> {
    let mut payload = String::new();
    write_line(
        &mut payload,
        "sequence,status,limit,remaining,reset,period,retry_after,latency_ms",
    )?;
    for result in results {
        let rate_limit = &result.rate_limit;
        write_line(
            &mut payload,
            &format!(
                "{},{},{},{},{},{},{},{}",
                result.sequence,
                result.status,
                rate_limit.limit.as_deref().unwrap_or(""),
                rate_limit.remaining.as_deref().unwrap_or(""),
                rate_limit.reset.as_deref().unwrap_or(""),
                rate_limit.period.as_deref().unwrap_or(""),
                rate_limit.retry_after.as_deref().unwrap_or(""),
                result.latency_ms,
            ),
        )?;
    }
    write_file(path, payload.as_bytes()).await.map_err(|err| {
        AppError::sink(SinkError::WriteCsvExport {
            path: PathBuf::from(path),
            source: err,
        })
    })
}

async fn write_file(path: &str, bytes: &[u8]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).await?;
    writer.flush().await?;
    Ok(())
}
