use clap::ArgMatches;
use tracing::error;

use statusdeck_core::events;

pub mod helpers;

mod once;
mod watch;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("once", sub_matches)) => once::handle_once_command(sub_matches).await,
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches).await,
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }
    events::log_app_shutdown();

    result
}
