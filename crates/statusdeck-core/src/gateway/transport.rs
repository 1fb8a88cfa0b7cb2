//! Raw HTTP access to the upstream status API.

use std::future::Future;

use reqwest::Client;
use tracing::debug;

use crate::gateway::errors::GatewayError;

/// Issues a GET for a path below the API base URL and returns the body.
///
/// Implementations report non-success HTTP statuses as
/// [`GatewayError::HttpStatus`].
pub trait Transport: Send + Sync + 'static {
    fn get(&self, path: &str) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest` client.
///
/// Uses the client's default timeouts; there is no retry.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| GatewayError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String, GatewayError> {
        let url = self.url_for(path);
        debug!(event = "core.gateway.request_started", url = %url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| GatewayError::Request {
                    path: path.to_string(),
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| GatewayError::Request {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
