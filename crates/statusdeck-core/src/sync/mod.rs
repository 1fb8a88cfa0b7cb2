pub mod orchestrator;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use orchestrator::Orchestrator;
pub use types::{CONNECTION_LOST_MESSAGE, Dashboard, NoopSurface, SourceData, UiSurface};
