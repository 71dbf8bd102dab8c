use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
    redirect,
};

use crate::args::{DEFAULT_USER_AGENT, ProbeArgs};
use crate::error::{AppError, AppResult, HttpError};

/// Redirect hops allowed when `--follow-redirects` is set.
const REDIRECT_LIMIT: usize = 10;

/// Validates the target URL before any request is sent.
///
/// # Errors
///
/// Returns an error when the URL does not parse.
pub fn validate_url(url: &str) -> AppResult<url::Url> {
    url::Url::parse(url).map_err(|err| {
        AppError::http(HttpError::InvalidUrl {
            url: url.to_owned(),
            source: err,
        })
    })
}

/// Builds the one `reqwest::Client` shared by every request worker.
/// Custom headers are validated here so a bad header aborts the run
/// before any network work.
///
/// # Errors
///
/// Returns an error when a custom header is invalid or the client
/// cannot be built.
pub fn build_client(args: &ProbeArgs) -> AppResult<Client> {
    let mut headers = HeaderMap::new();
    if !has_header(&args.headers, "accept") {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }
    for (name, value) in &args.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderName {
                name: name.clone(),
                source: err,
            })
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderValue {
                name: name.clone(),
                source: err,
            })
        })?;
        headers.insert(header_name, header_value);
    }

    let policy = if args.follow_redirects {
        redirect::Policy::limited(REDIRECT_LIMIT)
    } else {
        redirect::Policy::none()
    };

    Client::builder()
        .timeout(args.timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .default_headers(headers)
        .redirect(policy)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}

fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
}
