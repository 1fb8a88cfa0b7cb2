//! statusdeck-core: Live service-status dashboard engine
//!
//! This library fetches the three resources of a Statuspage-style API,
//! classifies them into visual themes and renders dashboard sections. It is
//! used by the `statusdeck` CLI, which supplies the terminal surface.
//!
//! # Main Entry Points
//!
//! - [`sync`] - Run fetch-classify-render cycles into a dashboard
//! - [`schedule`] - Recurring and manual refresh triggers
//! - [`gateway`] - HTTP access with failure containment
//! - [`render`] - View models and HTML markup for each section
//! - [`format`] - Theme lookup, relative time and escaping helpers
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod gateway;
pub mod logging;
pub mod render;
pub mod schedule;
pub mod status;
pub mod sync;

// Re-export commonly used types at crate root for convenience
pub use config::StatusDeckConfig;
pub use errors::{ConfigError, StatusDeckError, StatusDeckResult};
pub use format::{Theme, Tone};
pub use gateway::{Endpoint, FetchGateway, FetchOutcome, GatewayError, HttpTransport, Transport};
pub use render::{ComponentRow, HeroView, IncidentCard, IncidentsView, Renderer, UpdateView};
pub use schedule::{RefreshScheduler, SchedulerState};
pub use status::{
    Component, ComponentList, ComponentStatus, Incident, IncidentList, IncidentUpdate, Indicator,
    StatusSummary,
};
pub use sync::{CONNECTION_LOST_MESSAGE, Dashboard, NoopSurface, Orchestrator, UiSurface};

// Re-export logging initialization
pub use logging::init_logging;
