use serde::Serialize;

use crate::render::{ComponentRow, HeroView, IncidentsView};
use crate::status::{ComponentList, IncidentList, StatusSummary};

/// Hero text while the status resource cannot be reached.
pub const CONNECTION_LOST_MESSAGE: &str = "Connection Lost - Retrying...";

/// The view model. Owned by the orchestrator, handed to the UI surface after
/// every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub hero: HeroView,
    /// `None` until the first successful cycle.
    pub components: Option<Vec<ComponentRow>>,
    /// `None` until the first successful cycle.
    pub incidents: Option<IncidentsView>,
    /// A cycle is in flight; the manual refresh control is disabled.
    pub loading: bool,
    /// The last cycle could not reach the status resource.
    pub connection_lost: bool,
    /// Finished cycles, successful or not.
    pub cycles_completed: u64,
    /// Data behind the last successful render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourceData>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            hero: HeroView::pending(),
            components: None,
            incidents: None,
            loading: false,
            connection_lost: false,
            cycles_completed: 0,
            sources: None,
        }
    }
}

impl Dashboard {
    pub fn refresh_enabled(&self) -> bool {
        !self.loading
    }

    pub fn refresh_control_label(&self) -> &'static str {
        if self.loading { "Syncing..." } else { "Refresh" }
    }
}

/// Resources fetched by the last successful cycle, for the raw dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceData {
    pub status: StatusSummary,
    pub components: Option<ComponentList>,
    pub incidents: Option<IncidentList>,
}

/// Anything that displays the dashboard.
///
/// Called after every change, including the loading toggles, while the
/// orchestrator holds the dashboard lock, so presents never interleave.
pub trait UiSurface: Send + Sync + 'static {
    fn present(&self, dashboard: &Dashboard);
}

/// Surface that displays nothing; the dashboard is read back afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSurface;

impl UiSurface for NoopSurface {
    fn present(&self, _dashboard: &Dashboard) {}
}
