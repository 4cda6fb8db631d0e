//! Swipe deck assembly.
//!
//! The deck holds the ordered queue of items a participant swipes through.
//! Items are pulled page by page from a [`CatalogSource`], filtered to the
//! room's allowed services, deduplicated, and topped up in the background
//! when the queue runs low.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, CatalogItem, CatalogSource};

/// When this many unswiped items remain, a background fetch starts.
const LOW_WATER: usize = 3;

pub struct Deck {
    source: Arc<dyn CatalogSource>,
    allowed_sources: Vec<String>,
    items: Vec<CatalogItem>,
    seen: HashSet<String>,
    cursor: usize,
    next_page: u32,
    exhausted: bool,
    pending: Option<mpsc::Receiver<Result<Vec<CatalogItem>, CatalogError>>>,
}

impl Deck {
    /// Build a deck for a room, loading the first catalog page up front.
    pub async fn new(
        source: Arc<dyn CatalogSource>,
        allowed_sources: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut deck = Self {
            source: Arc::clone(&source),
            allowed_sources,
            items: Vec::new(),
            seen: HashSet::new(),
            cursor: 0,
            next_page: 1,
            exhausted: false,
            pending: None,
        };
        let page = deck.next_page;
        let fetched = source.fetch_page(page).await?;
        deck.next_page += 1;
        deck.absorb(fetched);
        Ok(deck)
    }

    /// The item currently facing the participant, if any.
    pub fn current(&self) -> Option<&CatalogItem> {
        self.items.get(self.cursor)
    }

    /// Number of unswiped items left in the queue.
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.cursor)
    }

    /// True once the catalog ran dry and every queued item has been swiped.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted && self.remaining() == 0 && self.pending.is_none()
    }

    /// Move past the current item and top up the queue if it is running low.
    pub fn advance(&mut self) {
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
        self.absorb_fetched();
        if self.needs_replenish() {
            self.begin_replenish();
        }
    }

    fn needs_replenish(&self) -> bool {
        self.remaining() <= LOW_WATER && self.pending.is_none() && !self.exhausted
    }

    fn begin_replenish(&mut self) {
        let (tx, rx) = mpsc::channel(1);
        self.pending = Some(rx);
        let source = Arc::clone(&self.source);
        let page = self.next_page;
        self.next_page += 1;
        debug!(page, "replenishing deck");
        tokio::spawn(async move {
            let result = source.fetch_page(page).await;
            // Receiver dropped means the deck is gone; nothing to do.
            let _ = tx.send(result).await;
        });
    }

    /// Fold a finished background fetch into the queue, if one has landed.
    pub fn absorb_fetched(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(fetched)) => {
                self.pending = None;
                self.absorb(fetched);
            }
            Ok(Err(error)) => {
                self.pending = None;
                self.exhausted = true;
                warn!(%error, "deck replenishment failed");
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.pending = None;
                self.exhausted = true;
            }
        }
    }

    /// Block until the in-flight fetch completes and is absorbed.
    pub async fn wait_for_fetch(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        match rx.recv().await {
            Some(Ok(fetched)) => {
                self.pending = None;
                self.absorb(fetched);
            }
            Some(Err(error)) => {
                self.pending = None;
                self.exhausted = true;
                warn!(%error, "deck replenishment failed");
            }
            None => {
                self.pending = None;
                self.exhausted = true;
            }
        }
    }

    /// Fold a fetched page into the queue. An empty page ends the deck; a
    /// page of nothing but filtered-out or duplicate items chains a fetch of
    /// the next page so the deck always either grows or terminates.
    fn absorb(&mut self, fetched: Vec<CatalogItem>) {
        if fetched.is_empty() {
            self.exhausted = true;
            return;
        }
        if self.extend(fetched) == 0 {
            debug!("catalog page contributed no new items, fetching the next");
            self.begin_replenish();
        }
    }

    /// Append fetched items, dropping ones outside the room's services and
    /// ones already queued. An empty service filter admits everything.
    /// Returns the number of items admitted.
    fn extend(&mut self, fetched: Vec<CatalogItem>) -> usize {
        let before = self.items.len();
        for item in fetched {
            if !self.seen.insert(item.id.clone()) {
                continue;
            }
            let admitted = self.allowed_sources.is_empty()
                || item
                    .available_on
                    .iter()
                    .any(|s| self.allowed_sources.contains(s));
            if admitted {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }
}
