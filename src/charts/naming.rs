use chrono::{Datelike, Local, Timelike};

/// Per-run chart directory name: `run-<timestamp>_<host>-<port>`.
pub(super) fn chart_run_dir(url: &str) -> String {
    let now = Local::now();
    let stamp = format!(
        "{:04}-{:02}-{:02}_{:02}-{:02}-{:02}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    format!("run-{}_{}", stamp, host_port_segment(url))
}

fn host_port_segment(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url)
        && let Some(host) = parsed.host_str()
    {
        let port = parsed.port_or_known_default().unwrap_or(0);
        return sanitize_host_port(host, port);
    }
    "unknown-host-0".to_owned()
}

fn sanitize_host_port(host: &str, port: u16) -> String {
    let sanitized_host = sanitize_segment(host);
    let resolved_host = if sanitized_host.is_empty() {
        "unknown-host".to_owned()
    } else {
        sanitized_host
    };
    format!("{}-{}", resolved_host, port)
}

fn sanitize_segment(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => ch,
            _ => '-',
        })
        .collect()
}
