//! Pagination module
//!
//! Flattens the `next`-linked pages of a collection endpoint into one
//! record sequence.
//!
//! # Overview
//!
//! - [`PageFetcher`] - the capability that fetches one page body
//! - [`Page`] / [`Record`] - the parsed page shape
//! - [`Paginator`] - pull-based sequence over every page, fetching each
//!   page exactly once

mod paginator;
mod types;

pub use paginator::{Paginator, PaginatorState};
pub use types::{Page, PageFetcher, Record};
#[cfg(test)]
pub(crate) use types::path_and_query;
