mod support;

use std::fs;

use tempfile::tempdir;

use support::{closed_port, run_rlprobe, spawn_rate_limit_server_or_skip};

fn expect_success(output: &std::process::Output) -> Result<String, String> {
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[test]
fn e2e_rate_limited_run_reports_exact_success_rate() -> Result<(), String> {
    let Some((url, _server)) = spawn_rate_limit_server_or_skip(18)? else {
        return Ok(());
    };

    let output = run_rlprobe([
        "-u",
        url.as_str(),
        "-n",
        "20",
        "-c",
        "4",
        "-t",
        "10s",
        "--no-color",
    ])?;
    let stdout = expect_success(&output)?;

    for needle in [
        "Rate Limiter Test Results for",
        "| Request | Status |",
        "Total Requests: 20",
        "Failed Requests: 0",
        "Success Rate: 90.00%",
        "Success (█) vs Rate Limited (▄)",
    ] {
        if !stdout.contains(needle) {
            return Err(format!("Missing '{}' in output:\n{}", needle, stdout));
        }
    }

    let limited_rows = stdout.matches("| 429").count();
    if limited_rows != 2 {
        return Err(format!(
            "Expected 2 rate-limited rows, found {}:\n{}",
            limited_rows, stdout
        ));
    }
    let low_markers = stdout.chars().filter(|&ch| ch == '▄').count();
    // Two chart columns plus the one glyph in the legend line.
    if low_markers != 3 {
        return Err(format!(
            "Expected 3 low-marker glyphs, found {}:\n{}",
            low_markers, stdout
        ));
    }
    Ok(())
}

#[test]
fn e2e_exports_write_json_and_csv_files() -> Result<(), String> {
    let Some((url, _server)) = spawn_rate_limit_server_or_skip(usize::MAX)? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let json_path = dir.path().join("results.json");
    let csv_path = dir.path().join("results.csv");
    let json_arg = json_path.to_string_lossy().into_owned();
    let csv_arg = csv_path.to_string_lossy().into_owned();

    let output = run_rlprobe([
        "-u",
        url.as_str(),
        "-n",
        "5",
        "--no-color",
        "--export-json",
        json_arg.as_str(),
        "--export-csv",
        csv_arg.as_str(),
    ])?;
    expect_success(&output)?;

    let csv = fs::read_to_string(&csv_path).map_err(|err| format!("read csv failed: {}", err))?;
    let lines: Vec<&str> = csv.lines().collect();
    if lines.len() != 6 {
        return Err(format!("Expected 6 CSV lines, got {}:\n{}", lines.len(), csv));
    }
    if lines.first().copied()
        != Some("sequence,status,limit,remaining,reset,period,retry_after,latency_ms")
    {
        return Err(format!("Unexpected CSV header: {:?}", lines.first()));
    }

    let json = fs::read_to_string(&json_path).map_err(|err| format!("read json failed: {}", err))?;
    let value: serde_json::Value =
        serde_json::from_str(&json).map_err(|err| format!("parse json failed: {}", err))?;
    let records = value
        .as_array()
        .ok_or_else(|| format!("Expected JSON array: {}", json))?;
    if records.len() != 5 {
        return Err(format!("Expected 5 JSON records, got {}", records.len()));
    }
    for (index, record) in records.iter().enumerate() {
        let sequence = record.get("sequence").and_then(serde_json::Value::as_u64);
        if sequence != Some((index as u64).saturating_add(1)) {
            return Err(format!("Unexpected sequence at {}: {:?}", index, sequence));
        }
        if record.get("limit") != Some(&serde_json::json!("100")) {
            return Err(format!("Unexpected limit: {}", record));
        }
    }
    Ok(())
}

#[test]
fn e2e_json_format_prints_presentation_fields() -> Result<(), String> {
    let Some((url, _server)) = spawn_rate_limit_server_or_skip(usize::MAX)? else {
        return Ok(());
    };

    let output = run_rlprobe(["-u", url.as_str(), "-n", "3", "--format", "json", "--no-color"])?;
    let stdout = expect_success(&output)?;

    for needle in ["\"request_num\"", "\"status_code\": 200", "\"reset\": \"2023-"] {
        if !stdout.contains(needle) {
            return Err(format!("Missing {} in output:\n{}", needle, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_help_tags_exits_before_network_work() -> Result<(), String> {
    let output = run_rlprobe(["--help-tags"])?;
    let stdout = expect_success(&output)?;
    for needle in ["Reset Time", "Retry-After", "X-Rate-Limit-Limit"] {
        if !stdout.contains(needle) {
            return Err(format!("Missing '{}' in glossary:\n{}", needle, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_all_failures_still_produce_a_summary() -> Result<(), String> {
    let port = closed_port()?;
    let url = format!("http://127.0.0.1:{}/", port);

    let output = run_rlprobe(["-u", url.as_str(), "-n", "5", "-t", "2s", "--no-color"])?;
    let stdout = expect_success(&output)?;

    for needle in ["Total Requests: 0", "Failed Requests: 5", "Success Rate: 0.00%"] {
        if !stdout.contains(needle) {
            return Err(format!("Missing '{}' in output:\n{}", needle, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_config_file_supplies_url_and_count() -> Result<(), String> {
    let Some((url, _server)) = spawn_rate_limit_server_or_skip(usize::MAX)? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("probe.toml");
    fs::write(
        &config_path,
        format!("url = \"{}\"\nrequests = 3\nno_color = true\n", url),
    )
    .map_err(|err| format!("write config failed: {}", err))?;
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = run_rlprobe(["--config", config_arg.as_str()])?;
    let stdout = expect_success(&output)?;
    if !stdout.contains("Total Requests: 3") {
        return Err(format!("Missing request count in output:\n{}", stdout));
    }
    Ok(())
}
