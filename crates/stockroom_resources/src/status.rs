//! Fetch lifecycle types.

/// Where a resource's most recent request stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    /// Never fetched.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Succeeded,
    /// The latest request failed.
    Failed,
}

impl FetchStatus {
    /// Returns `true` while a request is in flight.
    #[must_use]
    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }

    /// Returns `true` once at least one request has completed.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed)
    }
}

/// Observable state of one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState<T> {
    /// Lifecycle status.
    pub status: FetchStatus,
    /// Last successfully fetched value. Kept when later requests fail.
    pub payload: Option<T>,
    /// Message of the last failure. Cleared by the next success only.
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            payload: None,
            error: None,
        }
    }
}

/// What a completed fetch call did to its resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The payload was replaced and the error cleared.
    Succeeded,
    /// The resource was marked failed with this message.
    Failed(String),
    /// A newer request was issued meanwhile; the result was discarded.
    Superseded,
}

impl FetchOutcome {
    /// Returns `true` if the result was applied as a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Succeeded)
    }
}
