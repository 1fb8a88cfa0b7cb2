use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::config::StatusDeckConfig;
use crate::format::indicator_theme;
use crate::gateway::{
    Endpoint, FetchGateway, FetchOutcome, GatewayError, HttpTransport, Transport,
};
use crate::render::Renderer;
use crate::status::{ComponentList, IncidentList, Indicator, StatusSummary};
use crate::sync::types::{CONNECTION_LOST_MESSAGE, Dashboard, SourceData, UiSurface};

/// Runs sync cycles and owns the dashboard they produce.
///
/// Overlapping cycles are allowed; whichever finishes last wins.
pub struct Orchestrator<T> {
    gateway: FetchGateway<T>,
    renderer: Renderer,
    surface: Arc<dyn UiSurface>,
    dashboard: Mutex<Dashboard>,
    loading_clear_delay: Duration,
}

impl Orchestrator<HttpTransport> {
    /// Build an orchestrator talking to the configured upstream API.
    pub fn from_config(
        config: &StatusDeckConfig,
        surface: Arc<dyn UiSurface>,
    ) -> Result<Self, GatewayError> {
        let transport = HttpTransport::new(config.api.base_url(), config.api.user_agent())?;
        Ok(Self::new(
            FetchGateway::new(transport),
            Renderer::from_config(&config.display),
            surface,
            config.refresh.loading_clear_delay(),
        ))
    }
}

impl<T: Transport> Orchestrator<T> {
    pub fn new(
        gateway: FetchGateway<T>,
        renderer: Renderer,
        surface: Arc<dyn UiSurface>,
        loading_clear_delay: Duration,
    ) -> Self {
        Self {
            gateway,
            renderer,
            surface,
            dashboard: Mutex::new(Dashboard::default()),
            loading_clear_delay,
        }
    }

    /// Snapshot of the current dashboard.
    pub fn dashboard(&self) -> Dashboard {
        self.lock_dashboard().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_dashboard().loading
    }

    /// One fetch-classify-render pass.
    ///
    /// The three resources are fetched concurrently and the cycle waits for
    /// all of them. If the status resource is unavailable the hero shows the
    /// connection-lost message and the component and incident sections keep
    /// their previous content. The loading flag is cleared after the
    /// configured delay whatever the outcome.
    pub async fn run_cycle(&self) {
        info!(event = "core.sync.cycle_started");
        self.update(|d| d.loading = true);

        let (status, components, incidents) = tokio::join!(
            self.gateway
                .fetch_resource::<StatusSummary>(Endpoint::Status),
            self.gateway
                .fetch_resource::<ComponentList>(Endpoint::Components),
            self.gateway
                .fetch_resource::<IncidentList>(Endpoint::Incidents),
        );

        match status {
            FetchOutcome::Unavailable => {
                warn!(
                    event = "core.sync.connection_lost",
                    components_available = !components.is_unavailable(),
                    incidents_available = !incidents.is_unavailable()
                );
                self.update(|d| {
                    d.hero.text = CONNECTION_LOST_MESSAGE.to_string();
                    d.connection_lost = true;
                });
            }
            FetchOutcome::Available(summary) => {
                let sources = SourceData {
                    status: summary,
                    components: components.into_option(),
                    incidents: incidents.into_option(),
                };
                let next = self.render(sources, Utc::now());
                info!(
                    event = "core.sync.cycle_completed",
                    components = next.components.as_ref().map_or(0, Vec::len),
                    incidents = next.incidents.as_ref().map_or(0, |i| i.cards().len())
                );
                self.update(|d| {
                    d.hero = next.hero;
                    d.components = next.components;
                    d.incidents = next.incidents;
                    d.connection_lost = false;
                    d.sources = next.sources;
                });
            }
        }

        tokio::time::sleep(self.loading_clear_delay).await;
        self.update(|d| {
            d.loading = false;
            d.cycles_completed += 1;
        });
    }

    /// Build every section from a successful fetch.
    fn render(&self, sources: SourceData, now: DateTime<Utc>) -> Dashboard {
        let snapshot = sources.status.status.as_ref();
        let indicator = snapshot
            .and_then(|s| s.indicator)
            .unwrap_or(Indicator::None);
        let theme = indicator_theme(indicator);

        let text = snapshot
            .and_then(|s| s.description.as_deref())
            .filter(|d| !d.is_empty())
            .unwrap_or(theme.label.as_ref())
            .to_string();

        // Missing secondary resources render as empty sections.
        let components = sources
            .components
            .as_ref()
            .map(|c| c.components.as_slice())
            .unwrap_or_default();
        let incidents = sources
            .incidents
            .as_ref()
            .map(|i| i.incidents.as_slice())
            .unwrap_or_default();

        Dashboard {
            components: Some(self.renderer.render_components(components)),
            incidents: Some(self.renderer.render_incidents(incidents, now)),
            hero: Renderer::render_hero(theme, &text, now),
            sources: Some(sources),
            ..Dashboard::default()
        }
    }

    fn update(&self, apply: impl FnOnce(&mut Dashboard)) {
        let mut dashboard = self.lock_dashboard();
        apply(&mut dashboard);
        self.surface.present(&dashboard);
    }

    fn lock_dashboard(&self) -> MutexGuard<'_, Dashboard> {
        match self.dashboard.lock() {
            Ok(guard) => guard,
            Err(e) => {
                error!(
                    event = "core.sync.dashboard_lock_poisoned",
                    error = %e,
                    "Mutex poisoned, continuing with the last dashboard"
                );
                e.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::format::Tone;
    use crate::gateway::test_support::{Reply, ScriptedTransport};
    use crate::render::IncidentsView;
    use crate::sync::test_support::{
        COMPONENTS_BODY, INCIDENTS_BODY, RecordingSurface, healthy_transport, orchestrator,
    };

    #[tokio::test]
    async fn test_successful_cycle_renders_all_sections() {
        let transport = healthy_transport();
        let surface = RecordingSurface::new();
        let orchestrator = orchestrator(transport, surface.clone(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        assert_eq!(dashboard.hero.text, "Partially Degraded Service");
        assert_eq!(dashboard.hero.theme.tone, Tone::Yellow);
        assert!(dashboard.hero.refreshed_at.is_some());
        assert!(!dashboard.connection_lost);
        assert!(!dashboard.loading);

        let rows = dashboard.components.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "API");
        assert_eq!(rows[1].name, "Voice");
        assert_eq!(rows[1].theme.label, "Partial Outage");

        let incidents = dashboard.incidents.unwrap();
        assert_eq!(incidents.cards().len(), 1);
        assert_eq!(incidents.cards()[0].name, "Voice connection failures");
    }

    #[tokio::test]
    async fn test_loading_is_signalled_then_cleared() {
        let surface = RecordingSurface::new();
        let orchestrator = orchestrator(healthy_transport(), surface.clone(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let frames = surface.frames();
        assert!(frames.len() >= 3);
        assert!(frames[0].loading);
        assert!(!frames[0].refresh_enabled());
        assert!(frames[1].loading, "render happens while still loading");
        assert!(!frames.last().unwrap().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_cleared_after_delay_even_on_failure() {
        let transport = ScriptedTransport::new();
        transport.set(Endpoint::Status, Reply::Status(503));
        let orchestrator = orchestrator(
            transport,
            RecordingSurface::new(),
            Duration::from_millis(500),
        );

        let started = tokio::time::Instant::now();
        orchestrator.run_cycle().await;

        assert!(started.elapsed() >= Duration::from_millis(500));
        let dashboard = orchestrator.dashboard();
        assert!(!dashboard.loading);
        assert!(dashboard.connection_lost);
        assert_eq!(dashboard.cycles_completed, 1);
    }

    #[tokio::test]
    async fn test_status_failure_keeps_previous_sections() {
        let transport = healthy_transport();
        let orchestrator = orchestrator(transport.clone(), RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;
        let before = orchestrator.dashboard();

        // Status goes away, the other two now return different data.
        transport.set(Endpoint::Status, Reply::ConnectionRefused);
        transport.set(Endpoint::Components, Reply::body(r#"{"components": []}"#));
        transport.set(Endpoint::Incidents, Reply::body(r#"{"incidents": []}"#));

        orchestrator.run_cycle().await;
        let after = orchestrator.dashboard();

        assert_eq!(after.hero.text, CONNECTION_LOST_MESSAGE);
        assert!(after.connection_lost);
        assert_eq!(after.components, before.components);
        assert_eq!(after.incidents, before.incidents);
        assert_eq!(after.hero.refreshed_at, before.hero.refreshed_at);
        assert_eq!(after.sources, before.sources);
    }

    #[tokio::test]
    async fn test_status_failure_before_any_render_leaves_sections_empty() {
        let transport = ScriptedTransport::new();
        transport.set(Endpoint::Status, Reply::Status(500));
        transport.set(Endpoint::Components, Reply::body(COMPONENTS_BODY));
        transport.set(Endpoint::Incidents, Reply::body(INCIDENTS_BODY));
        let orchestrator = orchestrator(transport, RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        assert_eq!(dashboard.hero.text, CONNECTION_LOST_MESSAGE);
        assert!(dashboard.components.is_none());
        assert!(dashboard.incidents.is_none());
    }

    #[tokio::test]
    async fn test_recovery_clears_connection_lost() {
        let transport = ScriptedTransport::new();
        transport.set(Endpoint::Status, Reply::Status(500));
        let orchestrator = orchestrator(transport.clone(), RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;
        assert!(orchestrator.dashboard().connection_lost);

        transport.set(
            Endpoint::Status,
            Reply::body(r#"{"status":{"indicator":"none","description":"All Systems Operational"}}"#),
        );
        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        assert!(!dashboard.connection_lost);
        assert_eq!(dashboard.hero.text, "All Systems Operational");
        assert_eq!(dashboard.cycles_completed, 2);
    }

    #[tokio::test]
    async fn test_null_text_fields_keep_remaining_rows_and_incidents() {
        let transport = healthy_transport();
        transport.set(
            Endpoint::Components,
            Reply::body(
                r#"{"components":[
                    {"id":"c0","name":null,"status":"operational","group_id":null},
                    {"id":"c1","name":"API","status":"operational","group_id":null}
                ]}"#,
            ),
        );
        transport.set(
            Endpoint::Incidents,
            Reply::body(
                r#"{"incidents":[{"name":"Voice outage","shortlink":null,
                    "incident_updates":[{"status":"investigating","body":null,"created_at":null}]}]}"#,
            ),
        );
        let orchestrator = orchestrator(transport, RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        let rows = dashboard.components.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "API");

        let incidents = dashboard.incidents.unwrap();
        assert_eq!(incidents.cards().len(), 1);
        assert_eq!(incidents.cards()[0].name, "Voice outage");
        let update = incidents.cards()[0].latest_update.as_ref().unwrap();
        assert_eq!(update.status_label, "INVESTIGATING");
        assert_eq!(update.body, "");
    }

    #[tokio::test]
    async fn test_secondary_failures_render_empty_sections() {
        let transport = ScriptedTransport::new();
        transport.set(
            Endpoint::Status,
            Reply::body(r#"{"status":{"indicator":"none"}}"#),
        );
        transport.set(Endpoint::Components, Reply::Status(502));
        transport.set(Endpoint::Incidents, Reply::body("{not json"));
        let orchestrator = orchestrator(transport, RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        assert!(!dashboard.connection_lost);
        assert_eq!(dashboard.components, Some(Vec::new()));
        assert_eq!(dashboard.incidents, Some(IncidentsView::NoActiveIncidents));
        let sources = dashboard.sources.unwrap();
        assert!(sources.components.is_none());
        assert!(sources.incidents.is_none());
    }

    #[tokio::test]
    async fn test_missing_indicator_and_description_fall_back() {
        let transport = ScriptedTransport::new();
        transport.set(Endpoint::Status, Reply::body(r#"{"status":{}}"#));
        let orchestrator = orchestrator(transport, RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        assert_eq!(dashboard.hero.theme.tone, Tone::Green);
        assert_eq!(dashboard.hero.text, "All Systems Operational");
    }

    #[tokio::test]
    async fn test_unrecognized_indicator_uses_unknown_theme() {
        let transport = ScriptedTransport::new();
        transport.set(
            Endpoint::Status,
            Reply::body(r#"{"status":{"indicator":"apocalyptic","description":""}}"#),
        );
        let orchestrator = orchestrator(transport, RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        assert_eq!(dashboard.hero.theme.tone, Tone::Muted);
        assert_eq!(dashboard.hero.text, "Status Unknown");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_run_concurrently() {
        let transport = healthy_transport();
        for endpoint in Endpoint::ALL {
            transport.set_delay(endpoint, Duration::from_secs(1));
        }
        let orchestrator = orchestrator(transport.clone(), RecordingSurface::new(), Duration::ZERO);

        let started = tokio::time::Instant::now();
        orchestrator.run_cycle().await;

        assert!(started.elapsed() < Duration::from_secs(2));
        for endpoint in Endpoint::ALL {
            assert_eq!(transport.hits(endpoint), 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_secondary_does_not_fail_cycle() {
        let transport = healthy_transport();
        transport.set_delay(Endpoint::Incidents, Duration::from_secs(10));
        let orchestrator = orchestrator(transport, RecordingSurface::new(), Duration::ZERO);

        orchestrator.run_cycle().await;

        let dashboard = orchestrator.dashboard();
        assert!(!dashboard.connection_lost);
        assert_eq!(dashboard.incidents.unwrap().cards().len(), 1);
    }
}
