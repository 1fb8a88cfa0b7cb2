use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::StatusDeckError;
use crate::gateway::errors::GatewayError;
use crate::gateway::transport::Transport;
use crate::gateway::types::{Endpoint, FetchOutcome};

/// Wraps a [`Transport`] and turns every failure into
/// [`FetchOutcome::Unavailable`].
///
/// The gateway never hands an error to its caller: transport errors,
/// non-success statuses and undecodable bodies are logged here and
/// downgraded.
#[derive(Debug, Clone)]
pub struct FetchGateway<T> {
    transport: T,
}

impl<T: Transport> FetchGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch and decode one resource. One attempt, no retry.
    pub async fn fetch_resource<R: DeserializeOwned>(&self, endpoint: Endpoint) -> FetchOutcome<R> {
        match self.try_fetch(endpoint).await {
            Ok(resource) => {
                debug!(event = "core.gateway.fetch_completed", endpoint = %endpoint);
                FetchOutcome::Available(resource)
            }
            Err(e) => {
                warn!(
                    event = "core.gateway.fetch_failed",
                    endpoint = %endpoint,
                    error_code = e.error_code(),
                    error = %e
                );
                FetchOutcome::Unavailable
            }
        }
    }

    async fn try_fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, GatewayError> {
        let body = self.transport.get(endpoint.path()).await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Decode {
            path: endpoint.path().to_string(),
            message: e.to_string(),
        })
    }
}
