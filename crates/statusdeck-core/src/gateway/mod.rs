pub mod errors;
pub mod handler;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::GatewayError;
pub use handler::FetchGateway;
pub use transport::{HttpTransport, Transport};
pub use types::{Endpoint, FetchOutcome};
