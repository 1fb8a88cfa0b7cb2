use crate::errors::StatusDeckError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{path}' failed: {message}")]
    Request { path: String, message: String },

    #[error("Request to '{path}' returned HTTP {status}")]
    HttpStatus { path: String, status: u16 },

    #[error("Response from '{path}' is not valid JSON for this resource: {message}")]
    Decode { path: String, message: String },
}

impl StatusDeckError for GatewayError {
    fn error_code(&self) -> &'static str {
        match self {
            GatewayError::ClientBuild { .. } => "GATEWAY_CLIENT_BUILD_FAILED",
            GatewayError::Request { .. } => "GATEWAY_REQUEST_FAILED",
            GatewayError::HttpStatus { .. } => "GATEWAY_HTTP_STATUS",
            GatewayError::Decode { .. } => "GATEWAY_DECODE_FAILED",
        }
    }
}
