//! Collection operations for a single variable class
//!
//! A [`Collection`] binds a record handler to a page fetcher and offers
//! the usual ways of reading the class's endpoint: the lazy record
//! sequence, the total count, a single page, a single record by id and
//! the de-duplicated full listing.

use crate::error::{Error, Result};
use crate::handler::{HandlerRegistry, RecordHandler};
use crate::pagination::{Page, PageFetcher, Paginator, Record};
use crate::types::{JsonValue, StringMap};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Endpoint operations for one class
pub struct Collection<F> {
    fetcher: F,
    handler: Box<dyn RecordHandler>,
}

impl<F: PageFetcher> Collection<F> {
    /// Bind an already constructed handler to a fetcher
    pub fn new(fetcher: F, handler: Box<dyn RecordHandler>) -> Self {
        Self { fetcher, handler }
    }

    /// Open the collection of a built-in class
    pub fn open(fetcher: F, class_name: &str) -> Result<Self> {
        let handler = HandlerRegistry::builtin().resolve(class_name)?;
        Ok(Self::new(fetcher, handler))
    }

    /// Handler describing the class
    pub fn handler(&self) -> &dyn RecordHandler {
        self.handler.as_ref()
    }

    /// Lazy sequence over every record of the class
    pub fn records(&self) -> Paginator<&F> {
        Paginator::new(&self.fetcher, self.handler.endpoint())
    }

    /// Total number of records as reported by the first page
    pub async fn count(&self) -> Result<u64> {
        let endpoint = self.handler.endpoint();
        let body = self.fetcher.fetch(endpoint, &StringMap::new()).await?;
        Page::from_value(endpoint, body)?
            .count
            .ok_or_else(|| Error::malformed_page(endpoint, "missing 'count'"))
    }

    /// Fetch page `number` (1-based)
    pub async fn page(&self, number: u32) -> Result<Page> {
        let endpoint = self.handler.endpoint();
        let mut params = StringMap::new();
        params.insert("page".to_string(), number.to_string());

        let body = self.fetcher.fetch(endpoint, &params).await?;
        Page::from_value(endpoint, body)
    }

    /// Fetch a single record by id
    pub async fn get(&self, id: impl fmt::Display) -> Result<Record> {
        let url = format!("{}{id}/", self.handler.endpoint());
        match self.fetcher.fetch(&url, &StringMap::new()).await? {
            JsonValue::Object(data) => Ok(Record::new(data)),
            _ => Err(Error::malformed_page(url, "record body is not an object")),
        }
    }

    /// Every record of the class, keeping the first occurrence of each id
    pub async fn all(&self) -> Result<Vec<Record>> {
        let mut pager = self.records();
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        while let Some(record) = pager.next_record().await? {
            let key = record.id().map(JsonValue::to_string).unwrap_or_default();
            if seen.insert(key) {
                records.push(record);
            }
        }

        debug!(
            "Collected {} unique records of '{}' from {} pages",
            records.len(),
            self.handler.class_name(),
            pager.pages_fetched()
        );
        Ok(records)
    }
}

impl<F> fmt::Debug for Collection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("handler", &self.handler)
            .finish_non_exhaustive()
    }
}
