use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::modules::client::application::query::QueryKey;

pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(60);

type CachedValue = Arc<dyn Any + Send + Sync>;

struct Entry {
    value: CachedValue,
    fetched_at: Instant,
    stale: bool,
}

#[derive(Default)]
struct Slot {
    entry: Option<Entry>,
    /// Generation of the most recently issued fetch.
    latest_issued: u64,
    /// Generation still awaiting its response, if any.
    in_flight: Option<u64>,
}

/// Proof that a fetch was issued; only the newest ticket for a key may
/// write its response into the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> QueryKey {
        self.key
    }
}

/// Keyed cache of remote read results.
pub struct QueryCache {
    slots: Mutex<HashMap<QueryKey, Slot>>,
    stale_time: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::with_stale_time(DEFAULT_STALE_TIME)
    }

    pub fn with_stale_time(stale_time: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            stale_time,
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<QueryKey, Slot>> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The cached value if it can be served without a round trip.
    pub fn fresh<T>(&self, key: QueryKey) -> Option<T>
    where
        T: Clone + 'static,
    {
        let slots = self.slots();
        let entry = slots.get(&key)?.entry.as_ref()?;
        if entry.stale || entry.fetched_at.elapsed() >= self.stale_time {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Whatever is cached, fresh or not.
    pub fn peek<T>(&self, key: QueryKey) -> Option<T>
    where
        T: Clone + 'static,
    {
        let slots = self.slots();
        let entry = slots.get(&key)?.entry.as_ref()?;
        entry.value.downcast_ref::<T>().cloned()
    }

    pub fn is_stale(&self, key: QueryKey) -> bool {
        match self.slots().get(&key).and_then(|s| s.entry.as_ref()) {
            Some(entry) => entry.stale || entry.fetched_at.elapsed() >= self.stale_time,
            None => true,
        }
    }

    pub fn is_fetching(&self, key: QueryKey) -> bool {
        self.slots()
            .get(&key)
            .is_some_and(|slot| slot.in_flight.is_some())
    }

    pub fn begin_fetch(&self, key: QueryKey) -> FetchTicket {
        let mut slots = self.slots();
        let slot = slots.entry(key).or_default();
        slot.latest_issued += 1;
        slot.in_flight = Some(slot.latest_issued);

        FetchTicket {
            key,
            generation: slot.latest_issued,
        }
    }

    /// Stores `value` if `ticket` is still the newest for its key. Returns
    /// whether it was stored.
    pub fn complete<T>(&self, ticket: FetchTicket, value: T) -> bool
    where
        T: Send + Sync + 'static,
    {
        let mut slots = self.slots();
        let slot = slots.entry(ticket.key).or_default();

        if ticket.generation != slot.latest_issued {
            debug!(
                key = %ticket.key,
                generation = ticket.generation,
                latest = slot.latest_issued,
                "Superseded response dropped"
            );
            return false;
        }

        slot.in_flight = None;
        slot.entry = Some(Entry {
            value: Arc::new(value),
            fetched_at: Instant::now(),
            stale: false,
        });
        true
    }

    /// Ends a fetch that produced no value.
    pub fn abandon(&self, ticket: FetchTicket) {
        let mut slots = self.slots();
        if let Some(slot) = slots.get_mut(&ticket.key) {
            if slot.in_flight == Some(ticket.generation) {
                slot.in_flight = None;
            }
        }
    }

    /// Marks the entry stale and retires every outstanding ticket for it.
    pub fn invalidate(&self, key: QueryKey) {
        let mut slots = self.slots();
        let slot = slots.entry(key).or_default();
        slot.latest_issued += 1;
        slot.in_flight = None;
        if let Some(entry) = slot.entry.as_mut() {
            entry.stale = true;
        }
        debug!(key = %key, "Cache entry invalidated");
    }

    pub fn invalidate_all(&self) {
        for key in QueryKey::ALL {
            self.invalidate(key);
        }
    }

    /// Forgets the entry entirely, as if it had never been fetched.
    pub fn remove(&self, key: QueryKey) {
        let mut slots = self.slots();
        let slot = slots.entry(key).or_default();
        slot.latest_issued += 1;
        slot.in_flight = None;
        slot.entry = None;
        debug!(key = %key, "Cache entry removed");
    }
}

/// Serves `key` from the cache when fresh, otherwise runs `fetch` and
/// stores its result under a ticket.
///
/// The caller always gets its own response back; the cache only keeps it
/// when no newer fetch or invalidation happened in the meantime.
pub(crate) async fn run_query<T, F, Fut, E>(
    cache: &QueryCache,
    key: QueryKey,
    fetch: F,
) -> Result<T, E>
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(value) = cache.fresh::<T>(key) {
        debug!(key = %key, "Cache hit");
        return Ok(value);
    }

    let ticket = cache.begin_fetch(key);
    match fetch().await {
        Ok(value) => {
            cache.complete(ticket, value.clone());
            Ok(value)
        }
        Err(e) => {
            cache.abandon(ticket);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_issued_ticket_wins_regardless_of_arrival_order() {
        let cache = QueryCache::new();

        let first = cache.begin_fetch(QueryKey::Skills);
        let second = cache.begin_fetch(QueryKey::Skills);

        assert!(cache.complete(second, vec!["new"]));
        assert!(!cache.complete(first, vec!["old"]));

        assert_eq!(cache.fresh::<Vec<&str>>(QueryKey::Skills), Some(vec!["new"]));
    }

    #[test]
    fn test_invalidation_retires_outstanding_tickets() {
        let cache = QueryCache::new();
        let ticket = cache.begin_fetch(QueryKey::About);
        assert!(cache.is_fetching(QueryKey::About));

        cache.invalidate(QueryKey::About);

        assert!(!cache.is_fetching(QueryKey::About));
        assert!(!cache.complete(ticket, "pre-mutation".to_string()));
        assert_eq!(cache.peek::<String>(QueryKey::About), None);
    }

    #[test]
    fn test_invalidated_entry_is_kept_but_not_fresh() {
        let cache = QueryCache::new();
        let ticket = cache.begin_fetch(QueryKey::Projects);
        cache.complete(ticket, 3u32);

        cache.invalidate(QueryKey::Projects);

        assert!(cache.is_stale(QueryKey::Projects));
        assert_eq!(cache.fresh::<u32>(QueryKey::Projects), None);
        assert_eq!(cache.peek::<u32>(QueryKey::Projects), Some(3));
    }

    #[test]
    fn test_entries_expire_after_stale_time() {
        let cache = QueryCache::with_stale_time(Duration::ZERO);
        let ticket = cache.begin_fetch(QueryKey::Avatar);
        cache.complete(ticket, 1u8);

        assert_eq!(cache.fresh::<u8>(QueryKey::Avatar), None);
    }

    #[test]
    fn test_invalidation_touches_only_its_key() {
        let cache = QueryCache::new();
        for key in [QueryKey::Skills, QueryKey::Projects] {
            let ticket = cache.begin_fetch(key);
            cache.complete(ticket, 0u8);
        }

        cache.invalidate(QueryKey::Skills);

        assert!(cache.is_stale(QueryKey::Skills));
        assert!(!cache.is_stale(QueryKey::Projects));
    }

    #[test]
    fn test_abandon_clears_fetching_only_for_latest() {
        let cache = QueryCache::new();
        let first = cache.begin_fetch(QueryKey::Resume);
        let _second = cache.begin_fetch(QueryKey::Resume);

        cache.abandon(first);

        assert!(cache.is_fetching(QueryKey::Resume));
    }

    #[tokio::test]
    async fn test_run_query_serves_fresh_value_without_fetching() {
        let cache = QueryCache::new();
        let ticket = cache.begin_fetch(QueryKey::About);
        cache.complete(ticket, "cached".to_string());

        let value: Result<String, ()> = run_query(&cache, QueryKey::About, || async {
            panic!("fresh entries must not be refetched")
        })
        .await;

        assert_eq!(value.unwrap(), "cached");
    }

    #[tokio::test]
    async fn test_run_query_error_caches_nothing() {
        let cache = QueryCache::new();

        let value: Result<String, &str> =
            run_query(&cache, QueryKey::About, || async { Err("down") }).await;

        assert_eq!(value, Err("down"));
        assert!(!cache.is_fetching(QueryKey::About));
        assert_eq!(cache.peek::<String>(QueryKey::About), None);
    }
}
