//! Flat record sequence over a paginated collection
//!
//! The paginator buffers one page at a time and only follows `next`
//! links, so every page is fetched once and every record is yielded once.

use super::types::{Page, PageFetcher, Record};
use crate::error::{Error, Result};
use crate::types::StringMap;
use futures::stream::{self, Stream};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Where the paginator is in its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    /// No fetch issued yet
    Start,
    /// Records of the current page are buffered
    HasPage,
    /// Buffer drained, the next page is being fetched
    FetchingNext,
    /// No more pages and no buffered records
    Exhausted,
}

/// Lazy, forward-only record sequence over all pages of an endpoint
pub struct Paginator<F> {
    fetcher: F,
    initial_url: String,
    params: StringMap,
    state: PaginatorState,
    buffer: VecDeque<Record>,
    next_url: Option<String>,
    previous_url: Option<String>,
    count: Option<u64>,
    fetched_urls: Vec<String>,
    seen_pages: HashSet<String>,
}

impl<F: PageFetcher> Paginator<F> {
    /// Create a paginator starting at `initial_url`. Nothing is fetched
    /// until the first record is requested.
    pub fn new(fetcher: F, initial_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            initial_url: initial_url.into(),
            params: StringMap::new(),
            state: PaginatorState::Start,
            buffer: VecDeque::new(),
            next_url: None,
            previous_url: None,
            count: None,
            fetched_urls: Vec::new(),
            seen_pages: HashSet::new(),
        }
    }

    /// Query parameters for the first request. `next` links already
    /// encode their own parameters and are fetched without these.
    #[must_use]
    pub fn with_params(mut self, params: StringMap) -> Self {
        self.params = params;
        self
    }

    /// Current state
    pub fn state(&self) -> PaginatorState {
        self.state
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.fetched_urls.len()
    }

    /// URLs fetched so far, in order
    pub fn fetched_urls(&self) -> &[String] {
        &self.fetched_urls
    }

    /// Number of buffered, not yet yielded records
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// `next` link of the last fetched page
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// `previous` link of the last fetched page
    pub fn previous_url(&self) -> Option<&str> {
        self.previous_url.as_deref()
    }

    /// Collection size reported by the last fetched page
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    /// Pull the next record.
    ///
    /// Returns `Ok(None)` once every page has been consumed. A fetch or
    /// page error is returned as-is and ends the sequence.
    pub async fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            match self.state {
                PaginatorState::Start => {
                    let url = self.initial_url.clone();
                    let params = std::mem::take(&mut self.params);
                    self.load_page(url, &params).await?;
                }
                PaginatorState::HasPage => {
                    if let Some(record) = self.buffer.pop_front() {
                        return Ok(Some(record));
                    }
                    self.state = if self.next_url.is_some() {
                        PaginatorState::FetchingNext
                    } else {
                        PaginatorState::Exhausted
                    };
                }
                PaginatorState::FetchingNext => {
                    let Some(url) = self.next_url.take() else {
                        self.state = PaginatorState::Exhausted;
                        continue;
                    };
                    self.load_page(url, &StringMap::new()).await?;
                }
                PaginatorState::Exhausted => return Ok(None),
            }
        }
    }

    /// Drain every remaining record into a vector
    pub async fn collect_all(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record().await? {
            records.push(record);
        }
        Ok(records)
    }

    /// The remaining sequence as a stream. The stream ends after the
    /// first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> {
        stream::try_unfold(self, |mut pager| async move {
            let record = pager.next_record().await?;
            Ok::<_, Error>(record.map(|record| (record, pager)))
        })
    }

    async fn load_page(&mut self, url: String, params: &StringMap) -> Result<()> {
        if !self.seen_pages.insert(self.fetcher.page_key(&url)) {
            self.state = PaginatorState::Exhausted;
            return Err(Error::malformed_page(
                url,
                "pagination cycle: page was already fetched",
            ));
        }

        let page = match self.fetcher.fetch(&url, params).await {
            Ok(body) => Page::from_value(&url, body),
            Err(e) => Err(e),
        };
        self.fetched_urls.push(url.clone());

        let page = match page {
            Ok(page) => page,
            Err(e) => {
                self.state = PaginatorState::Exhausted;
                return Err(e);
            }
        };

        debug!(
            "Fetched page {} ({} records): {}",
            self.fetched_urls.len(),
            page.results.len(),
            url
        );

        self.buffer = page.results.into();
        self.next_url = page.next;
        self.previous_url = page.previous;
        if page.count.is_some() {
            self.count = page.count;
        }
        self.state = PaginatorState::HasPage;
        Ok(())
    }
}

impl<F> std::fmt::Debug for Paginator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("initial_url", &self.initial_url)
            .field("state", &self.state)
            .field("buffered", &self.buffer.len())
            .field("next_url", &self.next_url)
            .field("pages_fetched", &self.fetched_urls.len())
            .finish_non_exhaustive()
    }
}
