use statusdeck_core::ComponentRow;
use statusdeck_core::format::sanitize_terminal;

use crate::terminal::paint;

pub struct ComponentTable {
    name_width: usize,
    status_width: usize,
    color: bool,
}

impl ComponentTable {
    pub fn new(rows: &[ComponentRow], color: bool) -> Self {
        let name_width = rows
            .iter()
            .map(|r| sanitize_terminal(&r.name).chars().count())
            .max()
            .unwrap_or(9)
            .clamp(9, 40); // Between "Component" header and reasonable terminal width

        let status_width = rows
            .iter()
            .map(|r| status_cell(r).chars().count())
            .max()
            .unwrap_or(6)
            .clamp(6, 30); // Between "Status" header and reasonable terminal width

        Self {
            name_width,
            status_width,
            color,
        }
    }

    pub fn render(&self, rows: &[ComponentRow]) -> String {
        let mut out = String::new();
        out.push_str(&self.top_border());
        out.push('\n');
        out.push_str(&self.header_row());
        out.push('\n');
        out.push_str(&self.separator());
        out.push('\n');
        for row in rows {
            out.push_str(&self.row(row));
            out.push('\n');
        }
        out.push_str(&self.bottom_border());
        out.push('\n');
        out
    }

    fn row(&self, row: &ComponentRow) -> String {
        // Pad before painting so escape codes don't count towards the width
        let status = truncate(&status_cell(row), self.status_width);
        format!(
            "│ {} │ {} │",
            truncate(&sanitize_terminal(&row.name), self.name_width),
            paint(&status, row.theme.tone, self.color),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_name$} │ {:<width_status$} │",
            "Component",
            "Status",
            width_name = self.name_width,
            width_status = self.status_width,
        )
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┐",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.status_width + 2),
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┤",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.status_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┘",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.status_width + 2),
        )
    }
}

fn status_cell(row: &ComponentRow) -> String {
    format!("{} {}", row.theme.icon, sanitize_terminal(&row.theme.label))
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusdeck_core::ComponentStatus;
    use statusdeck_core::format::component_theme;

    fn row(name: &str, status: ComponentStatus) -> ComponentRow {
        ComponentRow {
            name: name.to_string(),
            theme: component_theme(&status),
        }
    }

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("API", 6), "API   ");
    }

    #[test]
    fn test_truncate_long_strings() {
        assert_eq!(truncate("Media Proxy Servers", 10), "Media P...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("✔ Operational", 13), "✔ Operational");
        assert_eq!(truncate("✔ Operational", 6), "✔ O...");
    }

    #[test]
    fn test_render_plain_table() {
        let rows = vec![
            row("API", ComponentStatus::Operational),
            row("Voice", ComponentStatus::PartialOutage),
        ];
        let rendered = ComponentTable::new(&rows, false).render(&rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Component"));
        assert!(lines[3].contains("API"));
        assert!(lines[3].contains("✔ Operational"));
        assert!(lines[4].contains("! Partial Outage"));
        assert!(!rendered.contains('\x1b'));

        // Every row has the same display width
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_coloured_status() {
        let rows = vec![row("API", ComponentStatus::MajorOutage)];
        let rendered = ComponentTable::new(&rows, true).render(&rows);
        assert!(rendered.contains("\x1b[31m✕ Major Outage"));
        assert!(rendered.contains("\x1b[0m"));
    }

    #[test]
    fn test_empty_table_keeps_headers() {
        let rendered = ComponentTable::new(&[], false).render(&[]);
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.contains("Status"));
    }

    #[test]
    fn test_long_raw_status_is_truncated() {
        let rows = vec![row("API", ComponentStatus::Other("x".repeat(200)))];
        let rendered = ComponentTable::new(&rows, false).render(&rows);

        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(widths[0] < 100, "table stretched to {}", widths[0]);
        assert!(rendered.contains("..."));
    }

    #[test]
    fn test_control_sequences_removed_from_cells() {
        let rows = vec![row("API\x1b]0;owned\x07\x1b[2J", ComponentStatus::Operational)];
        let rendered = ComponentTable::new(&rows, false).render(&rows);

        assert!(!rendered.contains('\x1b'));
        assert!(!rendered.contains('\x07'));
        assert!(rendered.contains("│ API]0;owned[2J │ ✔ Operational │"));
    }
}
