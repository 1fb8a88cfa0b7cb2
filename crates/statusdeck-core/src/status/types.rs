//! Wire types for the Statuspage v2 resources.
//!
//! Unknown fields are ignored, and absent or `null` fields take their
//! defaults, so a partially filled response still decodes. Status enums never fail to
//! decode: unrecognized values land in a fallback variant.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Overall severity of the whole monitored service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Indicator {
    None,
    Minor,
    Major,
    Critical,
    Unknown,
}

impl Indicator {
    pub fn as_str(self) -> &'static str {
        match self {
            Indicator::None => "none",
            Indicator::Minor => "minor",
            Indicator::Major => "major",
            Indicator::Critical => "critical",
            Indicator::Unknown => "unknown",
        }
    }
}

impl From<&str> for Indicator {
    fn from(value: &str) -> Self {
        match value {
            // A blank indicator reads as operational.
            "none" | "" => Indicator::None,
            "minor" => Indicator::Minor,
            "major" => Indicator::Major,
            "critical" => Indicator::Critical,
            _ => Indicator::Unknown,
        }
    }
}

impl From<String> for Indicator {
    fn from(value: String) -> Self {
        Indicator::from(value.as_str())
    }
}

impl From<Indicator> for String {
    fn from(value: Indicator) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single component.
///
/// `Other` keeps the raw upstream value so it can still be shown as a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentStatus {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    UnderMaintenance,
    Other(String),
}

impl ComponentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentStatus::Operational => "operational",
            ComponentStatus::DegradedPerformance => "degraded_performance",
            ComponentStatus::PartialOutage => "partial_outage",
            ComponentStatus::MajorOutage => "major_outage",
            ComponentStatus::UnderMaintenance => "under_maintenance",
            ComponentStatus::Other(raw) => raw,
        }
    }
}

impl Default for ComponentStatus {
    fn default() -> Self {
        ComponentStatus::Other("unknown".to_string())
    }
}

impl From<&str> for ComponentStatus {
    fn from(value: &str) -> Self {
        match value {
            "operational" => ComponentStatus::Operational,
            "degraded_performance" => ComponentStatus::DegradedPerformance,
            "partial_outage" => ComponentStatus::PartialOutage,
            "major_outage" => ComponentStatus::MajorOutage,
            "under_maintenance" => ComponentStatus::UnderMaintenance,
            other => ComponentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ComponentStatus {
    fn from(value: String) -> Self {
        ComponentStatus::from(value.as_str())
    }
}

impl From<ComponentStatus> for String {
    fn from(value: ComponentStatus) -> Self {
        match value {
            ComponentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `/status.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSummary {
    #[serde(default)]
    pub status: Option<StatusSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub indicator: Option<Indicator>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `/components.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ComponentStatus,
    /// Set on sub-components; those are left out of the top-level grid.
    #[serde(default)]
    pub group_id: Option<String>,
}

impl Component {
    pub fn is_top_level(&self) -> bool {
        self.group_id.is_none()
    }
}

/// Body of `/incidents.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub incidents: Vec<Incident>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub shortlink: Option<String>,
    /// Newest first, as delivered by the API.
    #[serde(default, deserialize_with = "null_as_default")]
    pub incident_updates: Vec<IncidentUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentUpdate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    /// RFC 3339 timestamp, parsed when rendered.
    #[serde(default)]
    pub created_at: Option<String>,
}
