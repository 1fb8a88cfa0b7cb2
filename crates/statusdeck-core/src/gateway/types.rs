use std::fmt;

/// The three upstream resources a sync cycle reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Status,
    Components,
    Incidents,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Status, Endpoint::Components, Endpoint::Incidents];

    /// Path appended to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Status => "/status.json",
            Endpoint::Components => "/components.json",
            Endpoint::Incidents => "/incidents.json",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of a single fetch. Failures are already logged by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Available(T),
    Unavailable,
}

impl<T> FetchOutcome<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchOutcome::Unavailable)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            FetchOutcome::Available(value) => Some(value),
            FetchOutcome::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for FetchOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FetchOutcome::Available(value),
            None => FetchOutcome::Unavailable,
        }
    }
}
