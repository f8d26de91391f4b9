//! Generation-guarded fetch state machines.
//!
//! Every call to [`Resource::fetch`] takes a ticket from a per-resource
//! counter before it suspends. When the request resolves, its result is
//! applied only if that ticket is still the newest one issued; otherwise it is
//! dropped and the call reports [`FetchOutcome::Superseded`]. This keeps a slow
//! early request from overwriting the result of a later one.
//!
//! Locks are held only for the synchronous transitions on either side of the
//! request, never across an `.await`.

use crate::error::FetchError;
use crate::status::{FetchOutcome, FetchStatus, ResourceState};
use core::fmt;
use core::hash::Hash;
use core::panic::AssertUnwindSafe;
use futures::FutureExt;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

struct Entry<T> {
    state: ResourceState<T>,
    // Newest ticket handed out.
    latest: u64,
}

/// Fetch state for one remote resource.
pub struct Resource<T> {
    name: String,
    entry: RwLock<Entry<T>>,
}

impl<T> Resource<T> {
    /// Creates an idle resource.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: RwLock::new(Entry {
                state: ResourceState::default(),
                latest: 0,
            }),
        }
    }

    /// Runs `request` and records its result.
    ///
    /// The status becomes [`FetchStatus::Loading`] before `request` is first
    /// polled. A previous error stays visible until a request succeeds.
    ///
    /// Errors and panics inside `request` are captured as
    /// [`FetchOutcome::Failed`]; this method itself never fails.
    pub async fn fetch<Fut>(&self, request: Fut) -> FetchOutcome
    where
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin();

        let result = match AssertUnwindSafe(request).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(FetchError::Panicked(panic_message(panic.as_ref()))),
        };

        self.finish(ticket, result)
    }

    fn begin(&self) -> u64 {
        let mut entry = self.entry.write();
        entry.latest += 1;
        entry.state.status = FetchStatus::Loading;
        tracing::debug!(resource = %self.name, generation = entry.latest, "fetch started");
        entry.latest
    }

    fn finish(&self, ticket: u64, result: Result<T, FetchError>) -> FetchOutcome {
        let mut entry = self.entry.write();

        if ticket != entry.latest {
            tracing::debug!(
                resource = %self.name,
                generation = ticket,
                latest = entry.latest,
                "discarding superseded fetch result"
            );
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(payload) => {
                entry.state.status = FetchStatus::Succeeded;
                entry.state.payload = Some(payload);
                entry.state.error = None;
                tracing::debug!(resource = %self.name, generation = ticket, "fetch succeeded");
                FetchOutcome::Succeeded
            }
            Err(err) => {
                let message = err.to_string();
                entry.state.status = FetchStatus::Failed;
                entry.state.error = Some(message.clone());
                tracing::warn!(
                    resource = %self.name,
                    generation = ticket,
                    error = %message,
                    "fetch failed"
                );
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Name used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.entry.read().state.status
    }

    /// Message of the last failure, if not cleared by a later success.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.entry.read().state.error.clone()
    }

    /// Number of fetches issued so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.entry.read().latest
    }

    /// Reads the state without cloning the payload.
    pub fn with_state<R>(&self, f: impl FnOnce(&ResourceState<T>) -> R) -> R {
        f(&self.entry.read().state)
    }
}

impl<T: Clone> Resource<T> {
    /// Last successfully fetched payload.
    #[must_use]
    pub fn payload(&self) -> Option<T> {
        self.entry.read().state.payload.clone()
    }

    /// Copy of the full state.
    #[must_use]
    pub fn snapshot(&self) -> ResourceState<T> {
        self.entry.read().state.clone()
    }
}

impl<T> fmt::Debug for Resource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry.read();
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("status", &entry.state.status)
            .field("has_payload", &entry.state.payload.is_some())
            .field("error", &entry.state.error)
            .field("generation", &entry.latest)
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Resources keyed by an identifier, created on first fetch.
///
/// Each key has its own [`Resource`] and therefore its own generation counter:
/// fetching key `a` never supersedes a request for key `b`. Entries live as
/// long as the map.
pub struct ResourceMap<K, T> {
    name: String,
    entries: RwLock<HashMap<K, Arc<Resource<T>>>>,
}

impl<K, T> ResourceMap<K, T>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    /// Creates an empty map.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fetches the resource for `key`, creating it if needed.
    pub async fn fetch<Fut>(&self, key: K, request: Fut) -> FetchOutcome
    where
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let resource = self.entry(key);
        resource.fetch(request).await
    }

    fn entry(&self, key: K) -> Arc<Resource<T>> {
        if let Some(resource) = self.entries.read().get(&key) {
            return Arc::clone(resource);
        }

        let mut entries = self.entries.write();
        let resource = entries.entry(key).or_insert_with_key(|key| {
            tracing::trace!(resource = %self.name, %key, "creating keyed resource");
            Arc::new(Resource::new(format!("{}[{key}]", self.name)))
        });
        Arc::clone(resource)
    }

    /// The resource for `key`, if it was ever fetched.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<Arc<Resource<T>>> {
        self.entries.read().get(key).cloned()
    }

    /// Status for `key`; [`FetchStatus::Idle`] if never fetched.
    #[must_use]
    pub fn status(&self, key: &K) -> FetchStatus {
        self.get(key).map_or(FetchStatus::Idle, |r| r.status())
    }

    /// Last error for `key`.
    #[must_use]
    pub fn error(&self, key: &K) -> Option<String> {
        self.get(key).and_then(|r| r.error())
    }

    /// Number of keys fetched so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no key has been fetched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K, T> ResourceMap<K, T>
where
    K: Eq + Hash + Clone + fmt::Display,
    T: Clone,
{
    /// Last successful payload for `key`.
    #[must_use]
    pub fn payload(&self, key: &K) -> Option<T> {
        self.get(key).and_then(|r| r.payload())
    }
}

impl<K, T> fmt::Debug for ResourceMap<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceMap")
            .field("name", &self.name)
            .field("entries", &self.entries.read().len())
            .finish()
    }
}
