pub mod types;

pub use types::{
    Component, ComponentList, ComponentStatus, Incident, IncidentList, IncidentUpdate, Indicator,
    StatusSnapshot, StatusSummary,
};
