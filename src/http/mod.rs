//! HTTP client module
//!
//! A [`PageFetcher`](crate::pagination::PageFetcher) backed by reqwest.
//!
//! # Features
//!
//! - **URL handling**: relative endpoints are joined onto the base URL,
//!   absolute `next` links are fetched unchanged
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Backoff Strategies**: Constant, linear, and exponential backoff

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL};
