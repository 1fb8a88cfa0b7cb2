//! Text rendering of the dashboard and the live terminal surface.

use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicI64, Ordering};

use statusdeck_core::format::sanitize_terminal;
use statusdeck_core::{Dashboard, IncidentsView, Tone, UiSurface};

use crate::table::ComponentTable;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Wrap `text` in the ANSI colour of `tone` when colour is enabled.
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", tone.ansi_code(), text)
    } else {
        text.to_string()
    }
}

/// Plain-text rendition of every dashboard region.
///
/// Upstream text passes through [`sanitize_terminal`] before it is written.
pub fn render_dashboard(dashboard: &Dashboard, color: bool) -> String {
    let mut out = String::new();
    let hero = &dashboard.hero;

    let label = sanitize_terminal(&hero.theme.label);
    if dashboard.connection_lost {
        // The theme belongs to the last successful cycle
        let headline = format!("{} {} (stale)", hero.theme.icon, label);
        out.push_str(&format!("{}\n", paint(&headline, Tone::Muted, color)));
        out.push_str(&format!("{}\n", paint(&hero.text, Tone::Red, color)));
    } else {
        let headline = format!("{} {}", hero.theme.icon, label);
        out.push_str(&format!("{}\n", paint(&headline, hero.theme.tone, color)));
        out.push_str(&format!("{}\n", sanitize_terminal(&hero.text)));
    }
    out.push_str(&format!(
        "{}\n\n",
        paint(&hero.refreshed_label(), Tone::Muted, color)
    ));

    out.push_str("Components\n");
    match &dashboard.components {
        Some(rows) if !rows.is_empty() => {
            out.push_str(&ComponentTable::new(rows, color).render(rows));
        }
        Some(_) => out.push_str("No components reported.\n"),
        None => out.push_str("Waiting for data...\n"),
    }
    out.push('\n');

    out.push_str("Active Incidents\n");
    match &dashboard.incidents {
        Some(IncidentsView::NoActiveIncidents) => {
            out.push_str(&format!(
                "{}\n",
                paint(IncidentsView::PLACEHOLDER, Tone::Muted, color)
            ));
        }
        Some(IncidentsView::Cards(cards)) => {
            for card in cards {
                out.push_str(&format!(
                    "• {} {}\n",
                    sanitize_terminal(&card.name),
                    paint("[Active]", Tone::Red, color)
                ));
                if let Some(update) = &card.latest_update {
                    out.push_str(&format!(
                        "  {} · {}\n",
                        paint(&sanitize_terminal(&update.status_label), Tone::Accent, color),
                        paint(&update.age, Tone::Muted, color)
                    ));
                    for line in sanitize_terminal(&update.body).lines() {
                        out.push_str(&format!("  {}\n", line));
                    }
                }
                if let Some(link) = &card.link {
                    out.push_str(&format!(
                        "  {}\n",
                        paint(&sanitize_terminal(link), Tone::Muted, color)
                    ));
                }
            }
        }
        None => out.push_str("Waiting for data...\n"),
    }

    out
}

/// Live dashboard for `statusdeck watch`.
///
/// Redraws the whole screen on every change and shows the keyboard help and
/// the current auto-refresh interval in the footer.
pub struct TerminalSurface {
    color: bool,
    clear: bool,
    interval_secs: AtomicI64,
}

impl TerminalSurface {
    pub fn new(color: bool, interval_secs: i64) -> Self {
        Self {
            color,
            clear: std::io::stdout().is_terminal(),
            interval_secs: AtomicI64::new(interval_secs),
        }
    }

    pub fn set_interval(&self, secs: i64) {
        self.interval_secs.store(secs, Ordering::Relaxed);
    }

    fn footer(&self, dashboard: &Dashboard) -> String {
        let interval = match self.interval_secs.load(Ordering::Relaxed) {
            secs if secs > 0 => format!("every {}s", secs),
            _ => "off".to_string(),
        };
        let control = if dashboard.refresh_enabled() {
            format!("[r] {}", dashboard.refresh_control_label())
        } else {
            paint(dashboard.refresh_control_label(), Tone::Yellow, self.color)
        };
        format!("{}  [<n>] Interval ({})  [q] Quit", control, interval)
    }
}

impl UiSurface for TerminalSurface {
    fn present(&self, dashboard: &Dashboard) {
        let mut frame = String::new();
        if self.clear {
            frame.push_str(CLEAR_SCREEN);
        }
        frame.push_str(&render_dashboard(dashboard, self.color));
        frame.push('\n');
        frame.push_str(&self.footer(dashboard));
        frame.push('\n');

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(frame.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::warn!(event = "cli.watch.present_failed", error = %e);
        }
    }
}
