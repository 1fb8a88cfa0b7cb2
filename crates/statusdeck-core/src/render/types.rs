use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::format::{Theme, indicator_theme};
use crate::status::Indicator;

/// Overall indicator section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub theme: Theme,
    pub text: String,
    /// When the hero was last rendered from a successful cycle.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl HeroView {
    /// Placeholder shown before the first cycle completes.
    pub fn pending() -> Self {
        Self {
            theme: indicator_theme(Indicator::Unknown),
            text: "Checking status...".to_string(),
            refreshed_at: None,
        }
    }

    /// "Refreshed: HH:MM:SS" in local time.
    pub fn refreshed_label(&self) -> String {
        match self.refreshed_at {
            Some(at) => format!(
                "Refreshed: {}",
                at.with_timezone(&Local).format("%H:%M:%S")
            ),
            None => "Refreshed: Never".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRow {
    pub name: String,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateView {
    /// Upstream update status, upper-cased (e.g. "INVESTIGATING").
    pub status_label: String,
    pub body: String,
    /// Relative age such as "5m ago".
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentCard {
    pub name: String,
    /// Sanitized http(s) shortlink; `None` when absent or unsafe.
    pub link: Option<String>,
    pub latest_update: Option<UpdateView>,
}

/// Incident section: a single placeholder or up to the card limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum IncidentsView {
    NoActiveIncidents,
    Cards(Vec<IncidentCard>),
}

impl IncidentsView {
    pub const PLACEHOLDER: &'static str = "No active incidents reported. All systems are green.";

    pub fn cards(&self) -> &[IncidentCard] {
        match self {
            IncidentsView::NoActiveIncidents => &[],
            IncidentsView::Cards(cards) => cards,
        }
    }
}
