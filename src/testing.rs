//! In-memory page fetcher for unit tests

use crate::error::{Error, Result};
use crate::pagination::{path_and_query, PageFetcher};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned page bodies by URL and records every call
#[derive(Debug, Default)]
pub(crate) struct MockFetcher {
    base_url: Option<String>,
    pages: HashMap<String, JsonValue>,
    failures: HashMap<String, u16>,
    calls: Mutex<Vec<(String, StringMap)>>,
}

impl MockFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Treat `{base_url}{path}` and `path` as the same page
    pub(crate) fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub(crate) fn page(mut self, url: impl Into<String>, body: JsonValue) -> Self {
        self.pages.insert(url.into(), body);
        self
    }

    pub(crate) fn failing(mut self, url: impl Into<String>, status: u16) -> Self {
        self.failures.insert(url.into(), status);
        self
    }

    /// URLs fetched, in call order
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Query parameters of every call, in call order
    pub(crate) fn call_params(&self) -> Vec<StringMap> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, params)| params.clone())
            .collect()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, path: &str, params: &StringMap) -> Result<JsonValue> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), params.clone()));

        if let Some(status) = self.failures.get(path) {
            return Err(Error::http_status(*status, "mock failure"));
        }

        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("Unexpected url {path}")))
    }

    fn page_key(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => path.strip_prefix(base.as_str()).unwrap_or(path).to_string(),
            None => path_and_query(path),
        }
    }
}
