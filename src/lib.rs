// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Seshat API client
//!
//! Typed access to the paginated REST collections of the Seshat global
//! history databank, and per-year frequency tables built from them.
//!
//! ## Features
//!
//! - **Class registry**: every published variable class, grouped by category
//! - **Name resolution**: `ProfessionalSoldiers` → `professional_soldier`
//! - **Lazy pagination**: one flat record sequence over `next`-linked pages
//! - **Frequency tables**: year × class counts of a value, as Arrow or Parquet
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use seshat_client::{get_frequencies, HttpClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::new()?;
//!     let years: Vec<i64> = (-500..=100).collect();
//!
//!     let table = get_frequencies(
//!         &client,
//!         &["Roads", "ProfessionalSoldiers"],
//!         &years,
//!         "present",
//!     )
//!     .await?;
//!
//!     table.write_parquet("frequencies.parquet")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  get_frequencies(classes, years, value) → FrequencyTable  │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬──────────┬──────┴──────┬────────────┬─────────┐
//! │ Registry │  Naming  │  Handlers   │  Paginate  │  HTTP   │
//! ├──────────┼──────────┼─────────────┼────────────┼─────────┤
//! │ wf  sc   │ singular │ endpoint    │ next links │ Retry   │
//! │ general  │ snake    │ value field │ lazy pages │ Backoff │
//! │ core ... │ case     │             │ cycle guard│         │
//! └──────────┴──────────┴─────────────┴────────────┴─────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Class name to variable name resolution
pub mod naming;

/// Variable classes grouped by category
pub mod registry;

/// Record handlers and the class instance factory
pub mod handler;

/// Lazy pagination over `next`-linked pages
pub mod pagination;

/// Per-year frequency aggregation
pub mod frequency;

/// Collection operations for a single class
pub mod collection;

/// HTTP client with retry
pub mod http;

/// Client settings
pub mod config;

/// Arrow/Parquet output
pub mod output;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use collection::Collection;
pub use config::Settings;
pub use frequency::{get_frequencies, get_frequencies_with, FrequencyTable};
pub use handler::{HandlerRegistry, RecordHandler};
pub use http::{HttpClient, HttpClientConfig};
pub use naming::variable_name;
pub use pagination::{Page, PageFetcher, Paginator, Record};
pub use registry::{variable_classes, Category};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
