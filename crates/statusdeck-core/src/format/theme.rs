//! Presentation themes for indicators and component statuses.
//!
//! Lookups always produce a theme: unrecognized keys resolve to the table's
//! fallback entry instead of an absent result.

use std::borrow::Cow;

use serde::Serialize;

use crate::status::{ComponentStatus, Indicator};

/// Colour family of a theme, independent of the output medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Yellow,
    Orange,
    Red,
    Accent,
    Muted,
    Gray,
}

impl Tone {
    /// CSS colour used by the HTML projection.
    pub fn css_color(self) -> &'static str {
        match self {
            Tone::Green => "var(--green)",
            Tone::Yellow => "var(--yellow)",
            Tone::Orange => "var(--orange)",
            Tone::Red => "var(--red)",
            Tone::Accent => "var(--accent-primary)",
            Tone::Muted => "var(--text-muted)",
            Tone::Gray => "gray",
        }
    }

    /// CSS glow colour used around the hero indicator.
    pub fn css_glow(self) -> &'static str {
        match self {
            Tone::Green => "var(--green-glow)",
            Tone::Yellow => "rgba(240, 178, 50, 0.2)",
            Tone::Orange => "rgba(249, 115, 22, 0.2)",
            Tone::Red => "var(--red-glow)",
            Tone::Accent | Tone::Muted | Tone::Gray => "transparent",
        }
    }

    /// ANSI SGR foreground code for the terminal dashboard.
    pub fn ansi_code(self) -> &'static str {
        match self {
            Tone::Green => "32",
            Tone::Yellow => "33",
            // 256-colour orange; falls back to a near colour on basic terminals
            Tone::Orange => "38;5;208",
            Tone::Red => "31",
            Tone::Accent => "36",
            Tone::Muted => "2",
            Tone::Gray => "90",
        }
    }
}

/// Presentation attributes derived from an indicator or a component status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub tone: Tone,
    pub label: Cow<'static, str>,
    pub icon: &'static str,
}

impl Theme {
    const fn fixed(tone: Tone, label: &'static str, icon: &'static str) -> Self {
        Self {
            tone,
            label: Cow::Borrowed(label),
            icon,
        }
    }

    pub fn color(&self) -> &'static str {
        self.tone.css_color()
    }

    pub fn glow_color(&self) -> &'static str {
        self.tone.css_glow()
    }
}

/// Which lookup table a raw key is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeTable {
    Indicator,
    Component,
}

/// Resolve a raw indicator or component status string to its theme.
///
/// Never fails: the indicator table falls back to the "Status Unknown"
/// entry, the component table to a neutral gray theme labelled with the raw
/// string.
pub fn theme_for(key: &str, table: ThemeTable) -> Theme {
    match table {
        ThemeTable::Indicator => indicator_theme(Indicator::from(key)),
        ThemeTable::Component => component_theme(&ComponentStatus::from(key)),
    }
}

pub fn indicator_theme(indicator: Indicator) -> Theme {
    match indicator {
        Indicator::None => Theme::fixed(Tone::Green, "All Systems Operational", "✔"),
        Indicator::Minor => Theme::fixed(Tone::Yellow, "Partial System Outage", "!"),
        Indicator::Major => Theme::fixed(Tone::Orange, "Major Service Outage", "✕"),
        Indicator::Critical => Theme::fixed(Tone::Red, "Critical System Failure", "☢"),
        Indicator::Unknown => Theme::fixed(Tone::Muted, "Status Unknown", "?"),
    }
}

pub fn component_theme(status: &ComponentStatus) -> Theme {
    match status {
        ComponentStatus::Operational => Theme::fixed(Tone::Green, "Operational", "✔"),
        ComponentStatus::DegradedPerformance => Theme::fixed(Tone::Yellow, "Degraded", "~"),
        ComponentStatus::PartialOutage => Theme::fixed(Tone::Orange, "Partial Outage", "!"),
        ComponentStatus::MajorOutage => Theme::fixed(Tone::Red, "Major Outage", "✕"),
        ComponentStatus::UnderMaintenance => Theme::fixed(Tone::Accent, "Maintenance", "⚙"),
        ComponentStatus::Other(raw) => Theme {
            tone: Tone::Gray,
            label: Cow::Owned(raw.clone()),
            icon: "?",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_table_covers_every_value() {
        let cases = [
            ("none", "All Systems Operational", Tone::Green),
            ("minor", "Partial System Outage", Tone::Yellow),
            ("major", "Major Service Outage", Tone::Orange),
            ("critical", "Critical System Failure", Tone::Red),
            ("unknown", "Status Unknown", Tone::Muted),
            ("<garbage>", "Status Unknown", Tone::Muted),
        ];

        for (key, label, tone) in cases {
            let theme = theme_for(key, ThemeTable::Indicator);
            assert_eq!(theme.label, label, "label for {key}");
            assert_eq!(theme.tone, tone, "tone for {key}");
        }
    }

    #[test]
    fn test_unrecognized_indicator_uses_unknown_entry() {
        assert_eq!(
            theme_for("<garbage>", ThemeTable::Indicator),
            indicator_theme(Indicator::Unknown)
        );
    }

    #[test]
    fn test_component_table() {
        let cases = [
            ("operational", "Operational", Tone::Green),
            ("degraded_performance", "Degraded", Tone::Yellow),
            ("partial_outage", "Partial Outage", Tone::Orange),
            ("major_outage", "Major Outage", Tone::Red),
            ("under_maintenance", "Maintenance", Tone::Accent),
        ];

        for (key, label, tone) in cases {
            let theme = theme_for(key, ThemeTable::Component);
            assert_eq!(theme.label, label, "label for {key}");
            assert_eq!(theme.tone, tone, "tone for {key}");
        }
    }

    #[test]
    fn test_unrecognized_component_status_keeps_raw_label() {
        let theme = theme_for("partially_on_fire", ThemeTable::Component);
        assert_eq!(theme.label, "partially_on_fire");
        assert_eq!(theme.tone, Tone::Gray);
        assert_eq!(theme.color(), "gray");

        let theme = theme_for("unknown", ThemeTable::Component);
        assert_eq!(theme.label, "unknown");
    }

    #[test]
    fn test_css_attributes() {
        let theme = indicator_theme(Indicator::None);
        assert_eq!(theme.color(), "var(--green)");
        assert_eq!(theme.glow_color(), "var(--green-glow)");

        let theme = indicator_theme(Indicator::Unknown);
        assert_eq!(theme.color(), "var(--text-muted)");
        assert_eq!(theme.glow_color(), "transparent");
    }
}
