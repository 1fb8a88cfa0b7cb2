//! Projection of fetched status data into dashboard sections.
//!
//! Every call builds its section from scratch; nothing carries over from a
//! previous render.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::DisplayConfig;
use crate::config::defaults::{DEFAULT_MAX_COMPONENTS, DEFAULT_MAX_INCIDENTS};
use crate::format::{Theme, component_theme, relative_time, sanitize_link};
use crate::render::types::{ComponentRow, HeroView, IncidentCard, IncidentsView, UpdateView};
use crate::status::{Component, Incident, IncidentUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    max_components: usize,
    max_incidents: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COMPONENTS, DEFAULT_MAX_INCIDENTS)
    }
}

impl Renderer {
    pub fn new(max_components: usize, max_incidents: usize) -> Self {
        Self {
            max_components,
            max_incidents,
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.max_components(), display.max_incidents())
    }

    pub fn render_hero(theme: Theme, text: &str, at: DateTime<Utc>) -> HeroView {
        HeroView {
            theme,
            text: text.to_string(),
            refreshed_at: Some(at),
        }
    }

    /// Top-level components only, in upstream order, up to the row limit.
    pub fn render_components(&self, components: &[Component]) -> Vec<ComponentRow> {
        components
            .iter()
            .filter(|c| c.is_top_level())
            .take(self.max_components)
            .map(|c| ComponentRow {
                name: c.name.clone(),
                theme: component_theme(&c.status),
            })
            .collect()
    }

    /// Up to the card limit, each with only its first (newest) update.
    pub fn render_incidents(&self, incidents: &[Incident], now: DateTime<Utc>) -> IncidentsView {
        if incidents.is_empty() {
            return IncidentsView::NoActiveIncidents;
        }

        let cards = incidents
            .iter()
            .take(self.max_incidents)
            .map(|incident| render_card(incident, now))
            .collect();

        IncidentsView::Cards(cards)
    }
}

fn render_card(incident: &Incident, now: DateTime<Utc>) -> IncidentCard {
    check_update_order(incident);

    let link = incident.shortlink.as_deref().and_then(|raw| {
        let link = sanitize_link(raw);
        if link.is_none() {
            debug!(
                event = "core.render.link_rejected",
                incident = %incident.name,
                link = raw
            );
        }
        link
    });

    IncidentCard {
        name: incident.name.clone(),
        link,
        latest_update: incident
            .incident_updates
            .first()
            .map(|update| render_update(update, now)),
    }
}

fn render_update(update: &IncidentUpdate, now: DateTime<Utc>) -> UpdateView {
    UpdateView {
        status_label: update.status.to_uppercase(),
        body: update.body.clone(),
        age: relative_time(update.created_at.as_deref(), now),
    }
}

/// The first update is shown as the latest on the API's newest-first
/// ordering. Flag payloads where that does not hold.
fn check_update_order(incident: &Incident) {
    let parsed: Vec<DateTime<Utc>> = incident
        .incident_updates
        .iter()
        .filter_map(|u| u.created_at.as_deref())
        .filter_map(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|t| t.with_timezone(&Utc))
        .collect();

    if let Some((first, rest)) = parsed.split_first()
        && rest.iter().any(|t| t > first)
    {
        debug!(
            event = "core.render.update_order_unexpected",
            incident = %incident.name,
            updates = incident.incident_updates.len()
        );
    }
}
