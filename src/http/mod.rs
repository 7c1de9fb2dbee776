//! HTTP transport module
//!
//! The pagination engine and API client only see the [`Transport`] trait:
//! give it a URL, get back a parsed JSON document or an error.
//!
//! # Features
//!
//! - **HttpTransport**: reqwest-backed implementation with timeout,
//!   user agent and default headers
//! - **Rate Limiting**: optional token bucket limiter using governor
//!
//! A failed fetch is returned as-is; nothing here retries.

mod client;
mod rate_limit;

pub use client::{HttpTransport, HttpTransportConfig, Transport};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
