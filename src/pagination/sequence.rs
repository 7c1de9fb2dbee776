//! Lazy paginated sequence and its cursors
//!
//! A [`Paginated`] owns the page buffer for one logical query. Every
//! [`Cursor`] created from it reads from and extends the same buffer, so a
//! page is fetched at most once no matter how many passes are made.
//!
//! The buffer lives behind `Rc<RefCell<_>>`: handles are `!Send` and must be
//! driven from a single task. No borrow is held across an `.await`.

use super::types::{IntegrityFault, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, warn};
use url::Url;

struct PageBuffer<T> {
    items: Vec<T>,
    // items[..high_water_mark] is complete once fetched
    high_water_mark: usize,
    total_count: Option<usize>,
    next_request: Option<Url>,
    fetches: usize,
    fault: Option<IntegrityFault>,
}

/// A remote collection exposed as one forward-only sequence
pub struct Paginated<T> {
    client: ApiClient,
    buffer: Rc<RefCell<PageBuffer<T>>>,
}

impl<T> Clone for Paginated<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            buffer: Rc::clone(&self.buffer),
        }
    }
}

impl<T> std::fmt::Debug for Paginated<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buffer = self.buffer.borrow();
        f.debug_struct("Paginated")
            .field("buffered", &buffer.items.len())
            .field("high_water_mark", &buffer.high_water_mark)
            .field("total_count", &buffer.total_count)
            .field("next_request", &buffer.next_request.as_ref().map(Url::as_str))
            .field("fetches", &buffer.fetches)
            .field("fault", &buffer.fault)
            .finish()
    }
}

impl<T> Paginated<T> {
    /// Create a sequence whose first page is at `request`. Nothing is fetched yet.
    pub fn new(client: ApiClient, request: Url) -> Self {
        Self {
            client,
            buffer: Rc::new(RefCell::new(PageBuffer {
                items: Vec::new(),
                high_water_mark: 0,
                total_count: None,
                next_request: Some(request),
                fetches: 0,
                fault: None,
            })),
        }
    }

    /// Start a new pass over the sequence
    pub fn cursor(&self) -> Cursor<T> {
        Cursor {
            sequence: self.clone(),
            position: None,
        }
    }

    /// The request that will fetch the next page, if any
    pub fn next_request(&self) -> Option<Url> {
        self.buffer.borrow().next_request.clone()
    }

    /// Server-reported collection size, once the first page has arrived
    pub fn total_count(&self) -> Option<usize> {
        self.buffer.borrow().total_count
    }

    /// Number of items fetched so far
    pub fn buffered_len(&self) -> usize {
        self.buffer.borrow().items.len()
    }

    /// Number of pages fetched so far
    pub fn fetch_count(&self) -> usize {
        self.buffer.borrow().fetches
    }

    /// The integrity fault that ended this sequence, if one occurred
    pub fn fault(&self) -> Option<IntegrityFault> {
        self.buffer.borrow().fault.clone()
    }

    /// True once every item the server will deliver is buffered
    pub fn is_exhausted(&self) -> bool {
        let buffer = self.buffer.borrow();
        buffer
            .total_count
            .is_some_and(|total| buffer.items.len() >= total)
    }

    fn reached_end(&self, position: usize) -> bool {
        self.buffer
            .borrow()
            .total_count
            .is_some_and(|total| position >= total)
    }

    fn record_fault(&self, fault: IntegrityFault) {
        error!("{fault}. Stopping.");
        let mut buffer = self.buffer.borrow_mut();
        // Later passes end cleanly at the buffered prefix
        buffer.total_count = Some(buffer.items.len());
        buffer.fault = Some(fault);
    }
}

impl<T: Clone> Paginated<T> {
    /// Snapshot of the buffered prefix
    pub fn buffered(&self) -> Vec<T> {
        self.buffer.borrow().items.clone()
    }
}

impl<T: DeserializeOwned + Clone> Paginated<T> {
    /// Drive a fresh cursor to the end and return every item
    pub async fn collect_all(&self) -> Result<Vec<T>> {
        let mut cursor = self.cursor();
        let mut items = Vec::new();
        while let Some(item) = cursor.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    async fn item_at(&self, position: usize) -> Result<Option<T>> {
        if self.reached_end(position) {
            return Ok(None);
        }

        let pending = {
            let buffer = self.buffer.borrow();
            if let Some(item) = buffer.items.get(position) {
                return Ok(Some(item.clone()));
            }
            (position >= buffer.high_water_mark).then(|| buffer.next_request.clone())
        };

        match pending {
            Some(None) => {
                let total_count = self.total_count().unwrap_or_default();
                self.record_fault(IntegrityFault::MissingContinuation {
                    total_count,
                    reached: self.buffered_len(),
                });
                return Ok(None);
            }
            Some(Some(request)) => {
                let page = self.fetch_page(&request).await?;
                self.absorb(page)?;
                if self.reached_end(position) {
                    return Ok(None);
                }
            }
            None => {}
        }

        let shortfall = {
            let buffer = self.buffer.borrow();
            match buffer.items.get(position) {
                Some(item) => return Ok(Some(item.clone())),
                None => IntegrityFault::Shortfall {
                    total_count: buffer.total_count.unwrap_or_default(),
                    reached: buffer.items.len(),
                },
            }
        };
        self.record_fault(shortfall);
        Ok(None)
    }

    async fn fetch_page(&self, request: &Url) -> Result<Page<T>> {
        debug!("Fetching page {}", request);
        let body = self.client.get_json(request).await?;
        serde_json::from_value(body).map_err(|e| Error::malformed(request, e.to_string()))
    }

    fn absorb(&self, page: Page<T>) -> Result<()> {
        let Page { meta, objects } = page;
        let next_request = self.client.url(meta.next.as_deref())?;

        let gap = {
            let mut buffer = self.buffer.borrow_mut();
            buffer.fetches += 1;
            buffer.total_count = Some(meta.total_count);
            buffer.next_request = next_request;

            let buffered = buffer.items.len();
            let gap = if meta.offset > buffered {
                Some(IntegrityFault::OffsetGap {
                    expected: buffered,
                    offset: meta.offset,
                })
            } else {
                let overlap = buffered - meta.offset;
                if overlap > 0 {
                    warn!(
                        "Page at offset {} overlaps {} buffered items, skipping them",
                        meta.offset, overlap
                    );
                }
                buffer.items.extend(objects.into_iter().skip(overlap));
                None
            };
            // A page may carry more objects than its limit (limit=0 means all)
            buffer.high_water_mark = meta.window_end().max(buffer.items.len());
            gap
        };

        if let Some(fault) = gap {
            self.record_fault(fault);
        }
        Ok(())
    }
}

/// One forward pass over a [`Paginated`] sequence
pub struct Cursor<T> {
    sequence: Paginated<T>,
    // None until the first item has been returned
    position: Option<usize>,
}

impl<T> Cursor<T> {
    /// Index of the last item returned, `None` before the first
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl<T: DeserializeOwned + Clone> Cursor<T> {
    /// Advance to the next item, fetching a page if the buffer runs out
    ///
    /// Returns `Ok(None)` at the end of the sequence, including when the
    /// server's counts turn out to be inconsistent. On `Err` the cursor does
    /// not move and the call can be repeated.
    pub async fn next(&mut self) -> Result<Option<T>> {
        let position = self.position.map_or(0, |p| p + 1);
        let item = self.sequence.item_at(position).await?;
        if item.is_some() {
            self.position = Some(position);
        }
        Ok(item)
    }

    /// Turn this cursor into a `Stream` of items
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::try_unfold(self, |mut cursor| async move {
            let item = cursor.next().await?;
            Ok::<_, Error>(item.map(|item| (item, cursor)))
        })
    }
}
