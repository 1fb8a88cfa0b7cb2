//! In-memory [`Transport`] for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::gateway::errors::GatewayError;
use crate::gateway::transport::Transport;
use crate::gateway::types::Endpoint;

#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
    ConnectionRefused,
}

impl Reply {
    pub fn body(body: &str) -> Self {
        Reply::Body(body.to_string())
    }
}

#[derive(Debug, Default)]
struct Script {
    replies: HashMap<&'static str, Reply>,
    delays: HashMap<&'static str, Duration>,
    hits: HashMap<&'static str, usize>,
}

/// Cloneable transport whose replies can be changed between cycles.
///
/// Endpoints without a scripted reply answer with HTTP 404.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, endpoint: Endpoint, reply: Reply) {
        self.script
            .lock()
            .unwrap()
            .replies
            .insert(endpoint.path(), reply);
    }

    pub fn set_delay(&self, endpoint: Endpoint, delay: Duration) {
        self.script
            .lock()
            .unwrap()
            .delays
            .insert(endpoint.path(), delay);
    }

    pub fn hits(&self, endpoint: Endpoint) -> usize {
        self.script
            .lock()
            .unwrap()
            .hits
            .get(endpoint.path())
            .copied()
            .unwrap_or(0)
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<String, GatewayError> {
        let (reply, delay) = {
            let mut script = self.script.lock().unwrap();
            let key = Endpoint::ALL
                .iter()
                .map(|e| e.path())
                .find(|p| *p == path)
                .unwrap_or("unscripted");
            *script.hits.entry(key).or_insert(0) += 1;
            (
                script.replies.get(path).cloned(),
                script.delays.get(path).copied(),
            )
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(GatewayError::HttpStatus {
                path: path.to_string(),
                status,
            }),
            Some(Reply::ConnectionRefused) => Err(GatewayError::Request {
                path: path.to_string(),
                message: "connection refused".to_string(),
            }),
            None => Err(GatewayError::HttpStatus {
                path: path.to_string(),
                status: 404,
            }),
        }
    }
}
