//! Keyed request cache shared through context.
//!
//! Identical queries issued while one is in flight share its result instead
//! of starting a second request. Mutations call [`QueryCache::invalidate`]
//! with a key prefix: keys somebody still watches refetch, the others are
//! dropped so paged queries do not pile up.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiError;

type AnyData = Arc<dyn Any + Send + Sync>;
type Fetcher = Arc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<AnyData, ApiError>>>> + Send + Sync>;

/// Bookkeeping of which keys are in flight and which results are current.
///
/// Every fetch gets a ticket; a result is applied only if its ticket is
/// still the latest one for the key, so responses overtaken by an
/// invalidation are dropped.
#[derive(Debug, Default)]
pub struct QueryBook {
    entries: HashMap<String, BookEntry>,
    next_ticket: u64,
}

#[derive(Debug, Default, Clone)]
struct BookEntry {
    in_flight: Option<u64>,
    fresh: bool,
    subscribers: usize,
}

/// Outcome of [`QueryBook::invalidate`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Invalidated {
    /// Watched keys, now stale and due for a refetch.
    pub refetch: Vec<String>,
    /// Unwatched keys, forgotten entirely.
    pub evicted: Vec<String>,
}

impl QueryBook {
    /// Returns a ticket when a request must start, `None` when the key is
    /// already loading or holds a fresh result.
    pub fn begin(&mut self, key: &str) -> Option<u64> {
        let entry = self.entries.entry(key.to_string()).or_default();
        if entry.in_flight.is_some() || entry.fresh {
            return None;
        }
        self.next_ticket += 1;
        entry.in_flight = Some(self.next_ticket);
        Some(self.next_ticket)
    }

    /// Records a finished request; `true` if its result should be kept.
    pub fn complete(&mut self, key: &str, ticket: u64, success: bool) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) if entry.in_flight == Some(ticket) => {
                entry.in_flight = None;
                entry.fresh = success;
                true
            }
            _ => false,
        }
    }

    pub fn subscribe(&mut self, key: &str) {
        self.entries.entry(key.to_string()).or_default().subscribers += 1;
    }

    pub fn release(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.subscribers = entry.subscribers.saturating_sub(1);
        }
    }

    /// Abandons in-flight requests of every key starting with `prefix`.
    /// Watched keys are marked stale, unwatched ones are removed.
    pub fn invalidate(&mut self, prefix: &str) -> Invalidated {
        let mut out = Invalidated::default();
        self.entries.retain(|key, entry| {
            if !key.starts_with(prefix) {
                return true;
            }
            if entry.subscribers == 0 {
                out.evicted.push(key.clone());
                return false;
            }
            entry.fresh = false;
            entry.in_flight = None;
            out.refetch.push(key.clone());
            true
        });
        out.refetch.sort();
        out.evicted.sort();
        out
    }

    /// Forgets every key. Tickets keep counting, so requests still in
    /// flight can never match a later entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| e.in_flight.is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Default)]
struct QueryState {
    data: Option<AnyData>,
    loading: bool,
    error: Option<ApiError>,
}

#[derive(Clone, Copy)]
pub struct QueryCache {
    /// Query signals outlive the component that first asked for them.
    owner: StoredValue<Owner>,
    book: StoredValue<QueryBook>,
    states: StoredValue<HashMap<String, RwSignal<QueryState>>>,
    fetchers: StoredValue<HashMap<String, Fetcher>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            owner: StoredValue::new(Owner::current().unwrap_or_else(Owner::new)),
            book: StoredValue::new(QueryBook::default()),
            states: StoredValue::new(HashMap::new()),
            fetchers: StoredValue::new(HashMap::new()),
        }
    }

    /// Subscribes to `key`, starting `fetch` unless the key is already
    /// loading or cached. Pair every call with [`QueryCache::release`].
    pub fn query<T, F, Fut>(&self, key: impl Into<String>, fetch: F) -> QueryHandle<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let key = key.into();
        let state = self.state_for(&key);
        let fetcher: Fetcher = Arc::new(move || {
            let fut = fetch();
            Box::pin(async move { fut.await.map(|v| Arc::new(v) as AnyData) })
        });
        self.fetchers.update_value(|f| {
            f.insert(key.clone(), fetcher);
        });
        self.book.update_value(|b| b.subscribe(&key));
        self.start(&key);
        QueryHandle {
            state,
            _marker: PhantomData,
        }
    }

    /// Drops one subscription taken by [`QueryCache::query`]. The result
    /// stays cached until the next invalidation of its key.
    pub fn release(&self, key: &str) {
        self.book.try_update_value(|b| b.release(key));
    }

    /// Refetches matching keys that are still watched and forgets the rest.
    pub fn invalidate(&self, prefix: &str) {
        let Invalidated { refetch, evicted } =
            self.book.try_update_value(|b| b.invalidate(prefix)).unwrap_or_default();
        log::debug!("query cache: invalidate '{prefix}' -> refetch {refetch:?}, evict {evicted:?}");
        if !evicted.is_empty() {
            self.fetchers.update_value(|f| {
                for key in &evicted {
                    f.remove(key);
                }
            });
            self.states.update_value(|s| {
                for key in &evicted {
                    if let Some(state) = s.remove(key) {
                        state.set(QueryState::default());
                    }
                }
            });
        }
        for key in refetch {
            self.start(&key);
        }
    }

    /// Drops every result, e.g. when the session ends. Subscribers see
    /// empty data until something fetches again.
    pub fn clear(&self) {
        self.book.update_value(QueryBook::clear);
        self.states.with_value(|states| {
            for state in states.values() {
                state.set(QueryState::default());
            }
        });
    }

    fn state_for(&self, key: &str) -> RwSignal<QueryState> {
        if let Some(existing) = self.states.with_value(|s| s.get(key).copied()) {
            return existing;
        }
        let signal = self
            .owner
            .with_value(|owner| owner.with(|| RwSignal::new(QueryState::default())));
        self.states.update_value(|s| {
            s.insert(key.to_string(), signal);
        });
        signal
    }

    fn start(&self, key: &str) {
        let Some(ticket) = self.book.try_update_value(|b| b.begin(key)).flatten() else {
            log::debug!("query cache: hit '{key}'");
            return;
        };
        let Some(fetcher) = self.fetchers.with_value(|f| f.get(key).cloned()) else {
            return;
        };
        log::debug!("query cache: miss '{key}', fetching");
        let state = self.state_for(key);
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let cache = *self;
        let key = key.to_string();
        spawn_local(async move {
            let result = fetcher().await;
            let keep = cache
                .book
                .try_update_value(|b| b.complete(&key, ticket, result.is_ok()))
                .unwrap_or(false);
            if !keep {
                log::debug!("query cache: dropping stale result for '{key}'");
                return;
            }
            state.update(|s| {
                s.loading = false;
                match result {
                    Ok(data) => {
                        s.data = Some(data);
                        s.error = None;
                    }
                    Err(e) => s.error = Some(e),
                }
            });
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache not provided in context (provide it in app root)")
}

/// Reactive view onto one cached query.
pub struct QueryHandle<T> {
    state: RwSignal<QueryState>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for QueryHandle<T> {}

impl<T: Clone + Send + Sync + 'static> QueryHandle<T> {
    pub fn data(&self) -> Option<T> {
        self.state.with(|s| {
            s.data
                .as_ref()
                .and_then(|d| d.downcast_ref::<T>())
                .cloned()
        })
    }

    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.state
            .with(|s| f(s.data.as_ref().and_then(|d| d.downcast_ref::<T>())))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|s| s.error.clone())
    }
}

impl<T: Clone + Default + Send + Sync + 'static> QueryHandle<T> {
    pub fn data_or_default(&self) -> T {
        self.data().unwrap_or_default()
    }

    pub fn signal(&self) -> Signal<T> {
        let handle = *self;
        Signal::derive(move || handle.data_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_does_not_start_request() {
        let mut book = QueryBook::default();
        let ticket = book.begin("items").expect("first request starts");
        assert!(book.begin("items").is_none());
        assert!(book.is_in_flight("items"));

        assert!(book.complete("items", ticket, true));
        assert!(!book.is_in_flight("items"));
        assert!(book.begin("items").is_none(), "fresh result is reused");
    }

    #[test]
    fn failed_request_can_be_retried_by_next_subscriber() {
        let mut book = QueryBook::default();
        let ticket = book.begin("units").unwrap();
        assert!(book.complete("units", ticket, false));
        assert!(book.begin("units").is_some());
    }

    #[test]
    fn invalidate_matches_prefix_only() {
        let mut book = QueryBook::default();
        for key in ["items", "items/prices", "units"] {
            let t = book.begin(key).unwrap();
            book.complete(key, t, true);
        }
        for key in ["items", "items/prices", "units"] {
            book.subscribe(key);
        }
        let out = book.invalidate("items");
        assert_eq!(out.refetch, vec!["items", "items/prices"]);
        assert!(out.evicted.is_empty());
        assert!(book.begin("items").is_some());
        assert!(book.begin("units").is_none());
    }

    #[test]
    fn invalidation_refetches_only_watched_pages() {
        let mut book = QueryBook::default();
        let mut watched: Option<String> = None;
        let keys = [
            "invoices?search=a",
            "invoices?search=ac",
            "invoices?search=acme",
            "invoices?page=1",
            "invoices?page=2",
            "invoices?page=3",
        ];
        for key in keys {
            book.subscribe(key);
            if let Some(ticket) = book.begin(key) {
                book.complete(key, ticket, true);
            }
            if let Some(previous) = watched.replace(key.to_string()) {
                book.release(&previous);
            }
        }
        book.subscribe("items");

        let out = book.invalidate("invoices");
        assert_eq!(out.refetch, vec!["invoices?page=3"]);
        assert_eq!(out.evicted.len(), 5);
        assert_eq!(book.len(), 2);
        assert!(book.begin("invoices?page=3").is_some());
        assert!(book.begin("invoices?page=1").is_some(), "evicted key starts afresh");
    }

    #[test]
    fn release_never_underflows() {
        let mut book = QueryBook::default();
        book.subscribe("units");
        book.release("units");
        book.release("units");
        book.release("missing");
        assert_eq!(book.invalidate("units").evicted, vec!["units"]);
        assert!(book.is_empty());
    }

    #[test]
    fn result_overtaken_by_invalidation_is_dropped() {
        let mut book = QueryBook::default();
        let old = book.begin("suppliers").unwrap();
        book.invalidate("suppliers");
        let new = book.begin("suppliers").unwrap();
        assert_ne!(old, new);
        assert!(!book.complete("suppliers", old, true));
        assert!(book.complete("suppliers", new, true));
    }

    #[test]
    fn clear_drops_results_and_pending_tickets() {
        let mut book = QueryBook::default();
        let done = book.begin("items").unwrap();
        book.complete("items", done, true);
        let pending = book.begin("units").unwrap();
        book.clear();
        assert!(!book.complete("units", pending, true));
        assert!(book.begin("items").is_some());
    }
}
