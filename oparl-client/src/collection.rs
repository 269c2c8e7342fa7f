//! Lazy view over OParl external object lists.
//!
//! External lists are reachable by URL but are not resources themselves:
//! they have no `id` or `type` and exist only to paginate large lists. Each
//! page is an object
//!
//! ```json
//! { "data": [ {...}, {...} ], "links": { "next": "https://…?page=2" } }
//! ```
//!
//! where an absent or null `next` link marks the last page. OParl does not
//! require servers to report the total number of items or any link other
//! than `next`, so pages can only be discovered one after another.
//!
//! Only the most recently fetched page is kept in memory. Going back to an
//! earlier index downloads that page again.

use oparl_model::{Diagnostic, DiagnosticKind};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

use crate::client::Client;
use crate::entity::Entity;
use crate::error::{ClientError, ClientResult};

/// A forward-growing, index-addressable sequence of entities backed by a
/// paginated list.
///
/// [`len`](Self::len) is the number of items seen so far and grows as later
/// pages are fetched; it is exact once [`is_exhausted`](Self::is_exhausted)
/// returns true. Use [`to_vec`](Self::to_vec) to download the whole list.
///
/// Like [`Entity`], this is a shared, single-threaded handle.
#[derive(Clone)]
pub struct PaginatedCollection {
    inner: Rc<CollectionInner>,
}

struct CollectionInner {
    client: Client,
    url: String,
    state: RefCell<CollectionState>,
}

struct CollectionState {
    /// `(start offset, page URL)` for every discovered page. The entry after
    /// the last fetched page holds its `next` link, `None` once the last
    /// page is known.
    pages: Vec<(usize, Option<String>)>,
    current_page: Option<usize>,
    offset: usize,
    items: Vec<Entity>,
    len: usize,
}

impl PaginatedCollection {
    pub(crate) fn new(client: Client, url: &str) -> Self {
        Self {
            inner: Rc::new(CollectionInner {
                client,
                url: url.to_string(),
                state: RefCell::new(CollectionState {
                    pages: vec![(0, Some(url.to_string()))],
                    current_page: None,
                    offset: 0,
                    items: Vec::new(),
                    len: 0,
                }),
            }),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Number of items known so far. Never fetches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state.borrow().len
    }

    /// True if no items are known so far. Says nothing about the list on
    /// the server unless [`is_exhausted`](Self::is_exhausted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the last page has been seen, i.e. [`len`](Self::len) is
    /// exact.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        let state = self.inner.state.borrow();
        state.pages.len() > 1 && state.pages.last().is_some_and(|(_, url)| url.is_none())
    }

    /// Number of pages whose position in the list is known.
    #[must_use]
    pub fn known_pages(&self) -> usize {
        let state = self.inner.state.borrow();
        state.pages.iter().filter(|(_, url)| url.is_some()).count()
    }

    /// Returns the item at `index`, fetching pages up to the one that
    /// contains it.
    pub fn get(&self, index: usize) -> ClientResult<Entity> {
        self.load_page_for_index(index)?;
        let state = self.inner.state.borrow();
        index
            .checked_sub(state.offset)
            .and_then(|i| state.items.get(i))
            .cloned()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Signed variant of [`get`](Self::get). Negative indices are rejected.
    pub fn at(&self, index: i64) -> ClientResult<Entity> {
        let index = usize::try_from(index).map_err(|_| ClientError::InvalidIndex(index))?;
        self.get(index)
    }

    /// Iterates over all items, fetching pages as the iteration advances.
    #[must_use]
    pub fn iter(&self) -> CollectionIter {
        CollectionIter {
            collection: self.clone(),
            index: 0,
            done: false,
        }
    }

    /// Downloads the complete list.
    pub fn to_vec(&self) -> ClientResult<Vec<Entity>> {
        self.iter().collect()
    }

    fn out_of_range(&self, index: usize) -> ClientError {
        ClientError::IndexOutOfRange {
            url: self.inner.url.clone(),
            index,
        }
    }

    /// Makes the page containing `index` the current page.
    fn load_page_for_index(&self, index: usize) -> ClientResult<()> {
        let mut page = 0;
        loop {
            let (known, last_url) = {
                let state = self.inner.state.borrow();
                (state.pages.len(), state.pages[page].1.is_some())
            };
            if page == known - 1 {
                if !last_url {
                    return Err(self.out_of_range(index));
                }
                self.load_page(page)?;
            }
            let next_offset = self.inner.state.borrow().pages[page + 1].0;
            if index < next_offset {
                return self.load_page(page);
            }
            page += 1;
        }
    }

    /// Fetches page `page`. Pages must be discovered in order: the URL of
    /// page `i + 1` is only known once page `i` has been fetched.
    fn load_page(&self, page: usize) -> ClientResult<()> {
        let (offset, url) = {
            let state = self.inner.state.borrow();
            if state.current_page == Some(page) {
                return Ok(());
            }
            let (offset, url) = &state.pages[page];
            (*offset, url.clone())
        };
        let Some(url) = url else {
            return Err(self.out_of_range(offset));
        };

        debug!(list = %self.inner.url, page, "Getting page");
        let data = self.inner.client.fetch(&url)?;
        let (items, next) = self.parse_page(&url, &data)?;
        let next_offset = offset + items.len();

        let mut state = self.inner.state.borrow_mut();
        if let Some(recorded) = state.pages.get(page + 1) {
            if *recorded != (next_offset, next.clone()) {
                let message = format!(
                    "Page {page} of list \"{}\" ({url}) changed between fetches: expected next offset {} and next link {:?}, got {next_offset} and {next:?}.",
                    self.inner.url, recorded.0, recorded.1
                );
                drop(state);
                self.inner.client.report(Diagnostic::new(
                    DiagnosticKind::PaginationInconsistent,
                    self.inner.url.as_str(),
                    message,
                ));
                return Err(ClientError::InconsistentPage {
                    url: self.inner.url.clone(),
                    page,
                });
            }
        } else {
            state.pages.push((next_offset, next));
        }
        state.len = state.len.max(next_offset);
        state.items = items;
        state.offset = offset;
        state.current_page = Some(page);
        Ok(())
    }

    fn parse_page(
        &self,
        url: &str,
        data: &serde_json::Value,
    ) -> ClientResult<(Vec<Entity>, Option<String>)> {
        let malformed = |reason: &str| ClientError::MalformedPage {
            url: url.to_string(),
            reason: reason.to_string(),
        };
        let items = data
            .get("data")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| malformed("missing `data` list"))?;
        let entities = items
            .iter()
            .map(|item| self.inner.client.from_json(item))
            .collect::<ClientResult<Vec<_>>>()?;
        let next = data
            .get("links")
            .and_then(|links| links.get("next"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        Ok((entities, next))
    }
}

impl fmt::Debug for PaginatedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedCollection")
            .field("url", &self.inner.url)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PaginatedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<OParl ExternalObjectList {}>", self.inner.url)
    }
}

impl<'a> IntoIterator for &'a PaginatedCollection {
    type Item = ClientResult<Entity>;
    type IntoIter = CollectionIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`PaginatedCollection`].
///
/// Yields each item in order and ends after the last item of the last page.
/// A fetch or parse failure is yielded once and ends the iteration.
pub struct CollectionIter {
    collection: PaginatedCollection,
    index: usize,
    done: bool,
}

impl Iterator for CollectionIter {
    type Item = ClientResult<Entity>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.collection.get(self.index) {
            Ok(entity) => {
                self.index += 1;
                Some(Ok(entity))
            }
            Err(ClientError::IndexOutOfRange { .. }) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
