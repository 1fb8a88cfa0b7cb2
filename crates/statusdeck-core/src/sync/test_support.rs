//! Fixtures shared by the orchestrator and scheduler tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::gateway::test_support::{Reply, ScriptedTransport};
use crate::gateway::{Endpoint, FetchGateway};
use crate::render::Renderer;
use crate::sync::orchestrator::Orchestrator;
use crate::sync::types::{Dashboard, UiSurface};

pub const STATUS_BODY: &str =
    r#"{"status":{"indicator":"minor","description":"Partially Degraded Service"}}"#;

pub const COMPONENTS_BODY: &str = r#"{"components":[
    {"id":"c1","name":"API","status":"operational","group_id":null},
    {"id":"c2","name":"Voice","status":"partial_outage","group_id":null},
    {"id":"c3","name":"Voice - US East","status":"major_outage","group_id":"c2"}
]}"#;

pub const INCIDENTS_BODY: &str = r#"{"incidents":[{
    "name":"Voice connection failures",
    "shortlink":"https://stspg.io/voice",
    "incident_updates":[
        {"status":"identified","body":"A fix is rolling out.","created_at":"2024-01-15T10:30:00Z"},
        {"status":"investigating","body":"We are looking into it.","created_at":"2024-01-15T10:00:00Z"}
    ]
}]}"#;

pub fn healthy_transport() -> ScriptedTransport {
    let transport = ScriptedTransport::new();
    transport.set(Endpoint::Status, Reply::body(STATUS_BODY));
    transport.set(Endpoint::Components, Reply::body(COMPONENTS_BODY));
    transport.set(Endpoint::Incidents, Reply::body(INCIDENTS_BODY));
    transport
}

pub fn orchestrator(
    transport: ScriptedTransport,
    surface: RecordingSurface,
    loading_clear_delay: Duration,
) -> Orchestrator<ScriptedTransport> {
    Orchestrator::new(
        FetchGateway::new(transport),
        Renderer::default(),
        Arc::new(surface),
        loading_clear_delay,
    )
}

/// Surface that keeps every dashboard it is shown.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Arc<Mutex<Vec<Dashboard>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Dashboard> {
        self.frames.lock().unwrap().clone()
    }
}

impl UiSurface for RecordingSurface {
    fn present(&self, dashboard: &Dashboard) {
        self.frames.lock().unwrap().push(dashboard.clone());
    }
}
