use reqwest::header::HeaderMap;

use crate::metrics::RateLimitInfo;

/// Pulls the five recognized rate-limit headers out of a response by
/// literal name lookup. Any missing header stays `None`.
pub(crate) fn extract_rate_limit(headers: &HeaderMap) -> RateLimitInfo {
    RateLimitInfo {
        limit: header_string(headers, "X-Rate-Limit-Limit"),
        remaining: header_string(headers, "X-Rate-Limit-Remaining"),
        reset: header_string(headers, "X-Rate-Limit-Reset"),
        period: header_string(headers, "X-Rate-Limit-Period"),
        retry_after: header_string(headers, "Retry-After"),
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned())
}
