//! Catalog Store
//!
//! Caches the last list fetched per catalog kind and drops that entry after
//! every successful mutation, so the next read always comes from the server.
//! Nothing is patched locally.
//!
//! Each kind carries a generation that `invalidate` bumps. A list response is
//! only cached if the generation it was requested under is still current, and
//! concurrent reads of the same kind and generation share one request.

use std::collections::HashMap;
use std::sync::Mutex;

use futures::channel::oneshot;

use super::CatalogApi;
use crate::error::CatalogError;
use crate::models::{CatalogItem, CatalogKind, CatalogPayload};

type ListResult = Result<Vec<CatalogItem>, CatalogError>;

/// List request in flight for one kind
struct InFlight {
    generation: u64,
    waiters: Vec<oneshot::Sender<ListResult>>,
}

/// How a `list` call gets its items
enum ListTicket {
    Cached(Vec<CatalogItem>),
    /// Issue the request and hand the result to any joiners
    Lead(u64),
    /// Wait for the request already in flight
    Join(oneshot::Receiver<ListResult>),
}

/// Most recent list per kind, with invalidation generations
#[derive(Default)]
pub struct CatalogCache {
    lists: HashMap<CatalogKind, Vec<CatalogItem>>,
    generations: HashMap<CatalogKind, u64>,
    in_flight: HashMap<CatalogKind, InFlight>,
}

impl CatalogCache {
    pub fn get(&self, kind: CatalogKind) -> Option<&Vec<CatalogItem>> {
        self.lists.get(&kind)
    }

    pub fn generation(&self, kind: CatalogKind) -> u64 {
        self.generations.get(&kind).copied().unwrap_or(0)
    }

    /// Store `items` fetched under `generation`; refused if invalidated since
    pub fn insert(&mut self, kind: CatalogKind, generation: u64, items: Vec<CatalogItem>) -> bool {
        if self.generation(kind) != generation {
            return false;
        }
        self.lists.insert(kind, items);
        true
    }

    pub fn invalidate(&mut self, kind: CatalogKind) {
        self.lists.remove(&kind);
        *self.generations.entry(kind).or_insert(0) += 1;
    }

    fn begin_list(&mut self, kind: CatalogKind) -> ListTicket {
        if let Some(items) = self.lists.get(&kind) {
            return ListTicket::Cached(items.clone());
        }
        let generation = self.generation(kind);
        match self.in_flight.get_mut(&kind) {
            Some(flight) if flight.generation == generation => {
                let (tx, rx) = oneshot::channel();
                flight.waiters.push(tx);
                ListTicket::Join(rx)
            }
            _ => {
                self.in_flight.insert(
                    kind,
                    InFlight {
                        generation,
                        waiters: Vec::new(),
                    },
                );
                ListTicket::Lead(generation)
            }
        }
    }

    /// Release the in-flight slot for `generation`, returning its joiners
    fn end_list(&mut self, kind: CatalogKind, generation: u64) -> Vec<oneshot::Sender<ListResult>> {
        match self.in_flight.get(&kind) {
            Some(flight) if flight.generation == generation => self
                .in_flight
                .remove(&kind)
                .map(|flight| flight.waiters)
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// Frees the in-flight slot if the leading request is dropped before it
/// finishes; joiners then see a cancelled channel and fetch on their own
struct LeadGuard<'a, A: CatalogApi> {
    store: &'a CatalogStore<A>,
    kind: CatalogKind,
    generation: u64,
    finished: bool,
}

impl<A: CatalogApi> Drop for LeadGuard<'_, A> {
    fn drop(&mut self) {
        if !self.finished {
            self.store.with_cache(|cache| drop(cache.end_list(self.kind, self.generation)));
        }
    }
}

/// Catalog client with per-kind cache and invalidate-on-write
pub struct CatalogStore<A> {
    pub(super) api: A,
    cache: Mutex<CatalogCache>,
}

impl<A: CatalogApi> CatalogStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: Mutex::new(CatalogCache::default()),
        }
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut CatalogCache) -> R) -> R {
        let mut cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut cache)
    }

    /// Cached list for `kind`, if not invalidated since the last fetch
    pub fn cached(&self, kind: CatalogKind) -> Option<Vec<CatalogItem>> {
        self.with_cache(|cache| cache.get(kind).cloned())
    }

    /// Changes whenever `kind` is invalidated. A result read under an older
    /// generation predates the last write.
    pub fn generation(&self, kind: CatalogKind) -> u64 {
        self.with_cache(|cache| cache.generation(kind))
    }

    pub fn invalidate(&self, kind: CatalogKind) {
        tracing::debug!(kind = kind.slug(), "invalidating catalog cache");
        self.with_cache(|cache| cache.invalidate(kind));
    }

    /// Items in server order; served from cache or a shared in-flight request
    /// when possible
    pub async fn list(&self, kind: CatalogKind) -> ListResult {
        match self.with_cache(|cache| cache.begin_list(kind)) {
            ListTicket::Cached(items) => Ok(items),
            ListTicket::Lead(generation) => self.lead_list(kind, generation).await,
            ListTicket::Join(rx) => match rx.await {
                Ok(result) => result,
                Err(oneshot::Canceled) => {
                    let generation = self.generation(kind);
                    let result = self.fetch_list(kind).await;
                    if let Ok(items) = &result {
                        self.with_cache(|cache| cache.insert(kind, generation, items.clone()));
                    }
                    result
                }
            },
        }
    }

    async fn lead_list(&self, kind: CatalogKind, generation: u64) -> ListResult {
        let mut guard = LeadGuard {
            store: self,
            kind,
            generation,
            finished: false,
        };
        let result = self.fetch_list(kind).await;
        guard.finished = true;

        let waiters = self.with_cache(|cache| {
            if let Ok(items) = &result {
                if !cache.insert(kind, generation, items.clone()) {
                    tracing::debug!(kind = kind.slug(), "discarding list fetched before invalidation");
                }
            }
            cache.end_list(kind, generation)
        });
        for waiter in waiters {
            // Receiver gone means the joiner was dropped
            let _ = waiter.send(result.clone());
        }
        result
    }

    async fn fetch_list(&self, kind: CatalogKind) -> ListResult {
        let items = self.api.list(kind).await.map_err(|e| {
            tracing::warn!(kind = kind.slug(), error = %e, "catalog load failed");
            CatalogError::Load(e)
        })?;
        tracing::debug!(kind = kind.slug(), count = items.len(), "catalog loaded");
        Ok(items)
    }

    pub async fn create(&self, kind: CatalogKind, payload: &CatalogPayload) -> Result<CatalogItem, CatalogError> {
        let created = self.api.create(kind, payload).await.map_err(|e| {
            tracing::warn!(kind = kind.slug(), error = %e, "catalog create failed");
            CatalogError::Create(e)
        })?;
        tracing::info!(kind = kind.slug(), id = created.id, "catalog item created");
        self.invalidate(kind);
        Ok(created)
    }

    pub async fn update(
        &self,
        kind: CatalogKind,
        id: u32,
        payload: &CatalogPayload,
    ) -> Result<CatalogItem, CatalogError> {
        let updated = self.api.update(kind, id, payload).await.map_err(|e| {
            tracing::warn!(kind = kind.slug(), id, error = %e, "catalog update failed");
            CatalogError::Update(e)
        })?;
        tracing::info!(kind = kind.slug(), id, "catalog item updated");
        self.invalidate(kind);
        Ok(updated)
    }

    /// Start a deletion. Nothing is sent until the returned token is confirmed.
    pub fn request_delete(&self, kind: CatalogKind, id: u32) -> PendingDelete {
        PendingDelete { kind, id }
    }

    async fn delete_now(&self, kind: CatalogKind, id: u32) -> Result<(), CatalogError> {
        self.api.delete(kind, id).await.map_err(|e| {
            tracing::warn!(kind = kind.slug(), id, error = %e, "catalog delete failed");
            CatalogError::Delete(e)
        })?;
        tracing::info!(kind = kind.slug(), id, "catalog item deleted");
        self.invalidate(kind);
        Ok(())
    }
}

/// A deletion waiting for the user's explicit confirmation; dropping it
/// sends nothing
#[must_use = "a pending delete does nothing until confirmed"]
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    kind: CatalogKind,
    id: u32,
}

impl PendingDelete {
    /// Issue the DELETE. On failure the item is assumed to still exist.
    pub async fn confirm<A: CatalogApi>(self, store: &CatalogStore<A>) -> Result<(), CatalogError> {
        store.delete_now(self.kind, self.id).await
    }
}
