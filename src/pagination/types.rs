//! Pagination types and traits
//!
//! Defines the page shape served by the API, the records it carries and
//! the fetch capability the paginator is driven by.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, OptionStringExt, StringMap};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

/// A single item of a page's `results`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(JsonObject);

impl Record {
    /// Wrap a JSON object
    pub fn new(data: JsonObject) -> Self {
        Self(data)
    }

    /// Record identifier
    pub fn id(&self) -> Option<&JsonValue> {
        self.0.get("id")
    }

    /// Get a field by name
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.0.get(field)
    }

    /// Get an integer field, treating `null` as absent
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.0.get(field).and_then(JsonValue::as_i64)
    }

    /// Borrow the underlying object
    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }

    /// Take the underlying object
    pub fn into_inner(self) -> JsonObject {
        self.0
    }
}

/// One page of a collection endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Total size of the collection, when reported
    pub count: Option<u64>,
    /// Records in server order
    pub results: Vec<Record>,
}

impl Page {
    /// Parse a page body fetched from `url`.
    ///
    /// `results` must be an array of objects that each carry an `id`.
    /// `next` and `previous` may be absent or `null`; an empty string is
    /// read as no link.
    pub fn from_value(url: &str, body: JsonValue) -> Result<Self> {
        let JsonValue::Object(mut body) = body else {
            return Err(Error::malformed_page(url, "page body is not an object"));
        };

        let next = link(url, &body, "next")?;
        let previous = link(url, &body, "previous")?;
        let count = body.get("count").and_then(JsonValue::as_u64);

        let results = match body.remove("results") {
            Some(JsonValue::Array(items)) => items,
            Some(_) => return Err(Error::malformed_page(url, "'results' is not an array")),
            None => return Err(Error::malformed_page(url, "missing 'results'")),
        };

        let results = results
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                JsonValue::Object(data) if data.contains_key("id") => Ok(Record::new(data)),
                JsonValue::Object(_) => Err(Error::malformed_page(
                    url,
                    format!("result {index} has no 'id'"),
                )),
                _ => Err(Error::malformed_page(
                    url,
                    format!("result {index} is not an object"),
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            next,
            previous,
            count,
            results,
        })
    }
}

fn link(url: &str, body: &JsonObject, field: &str) -> Result<Option<String>> {
    match body.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(link)) => Ok(link.clone().none_if_empty()),
        Some(_) => Err(Error::malformed_page(
            url,
            format!("'{field}' is not a string"),
        )),
    }
}

/// Capability to fetch one page body.
///
/// `path` is either an endpoint relative to the service base URL or an
/// absolute `next` link returned by a previous page; implementations must
/// accept both.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the JSON body at `path` with the given query parameters
    async fn fetch(&self, path: &str, params: &StringMap) -> Result<JsonValue>;

    /// Key under which the paginator remembers a fetched `path`.
    ///
    /// Two paths with the same key name the same page. The default drops
    /// the scheme and authority of absolute URLs, so `/items` and
    /// `https://host/items` share a key.
    fn page_key(&self, path: &str) -> String {
        path_and_query(path)
    }
}

/// Path plus query of an absolute URL; relative paths are returned as-is
pub(crate) fn path_and_query(path: &str) -> String {
    match Url::parse(path) {
        Ok(url) => match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        },
        Err(_) => path.to_string(),
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    async fn fetch(&self, path: &str, params: &StringMap) -> Result<JsonValue> {
        (**self).fetch(path, params).await
    }

    fn page_key(&self, path: &str) -> String {
        (**self).page_key(path)
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, path: &str, params: &StringMap) -> Result<JsonValue> {
        (**self).fetch(path, params).await
    }

    fn page_key(&self, path: &str) -> String {
        (**self).page_key(path)
    }
}
