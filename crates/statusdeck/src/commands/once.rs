use std::sync::Arc;

use clap::ArgMatches;
use tracing::{error, info};

use statusdeck_core::render::markup::{components_html, hero_html, incidents_html};
use statusdeck_core::{Dashboard, NoopSurface, Orchestrator};

use super::helpers::{apply_cli_overrides, load_config_with_warning};
use crate::terminal::render_dashboard;

pub(crate) async fn handle_once_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    info!(event = "cli.once_started", format = format);

    let mut config = apply_cli_overrides(load_config_with_warning(), matches)?;
    // Nothing observes the busy flag of a single cycle
    config.refresh.loading_clear_delay_ms = Some(0);

    let orchestrator = Orchestrator::from_config(&config, Arc::new(NoopSurface)).map_err(|e| {
        error!(event = "cli.once_failed", error = %e);
        e
    })?;
    orchestrator.run_cycle().await;

    let dashboard = orchestrator.dashboard();
    let output = format_dashboard(&dashboard, format, config.display.color())?;
    print!("{}", output);

    info!(
        event = "cli.once_completed",
        connection_lost = dashboard.connection_lost
    );
    Ok(())
}

fn format_dashboard(
    dashboard: &Dashboard,
    format: &str,
    color: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let output = match format {
        "json" => format!("{}\n", serde_json::to_string_pretty(dashboard)?),
        "html" => {
            let mut html = hero_html(&dashboard.hero);
            if let Some(rows) = &dashboard.components {
                html.push_str(&components_html(rows));
            }
            if let Some(incidents) = &dashboard.incidents {
                html.push_str(&incidents_html(incidents));
            }
            html
        }
        "raw" => format!("{}\n", serde_json::to_string_pretty(&dashboard.sources)?),
        _ => render_dashboard(dashboard, color),
    };
    Ok(output)
}
