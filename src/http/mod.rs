//! HTTP client construction, request dispatch, and rate-limit header
//! extraction.
mod client;
mod dispatcher;
mod headers;


pub use client::{build_client, validate_url};
pub use dispatcher::{DispatchPlan, dispatch_requests};
pub(crate) use headers::extract_rate_limit;
