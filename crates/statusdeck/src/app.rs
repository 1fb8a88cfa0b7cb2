use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("statusdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live service status dashboard in the terminal")
        .long_about("statusdeck polls a Statuspage-style status API and shows the overall indicator, the top-level components and the active incidents. Sections keep their last content while the API is unreachable.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Status API base URL (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable ANSI colours in terminal output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("once")
                .about("Run a single refresh cycle and print the dashboard")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json", "html", "raw"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Keep the dashboard on screen and refresh it periodically")
                .long_about("Keep the dashboard on screen and refresh it periodically.\n\nWhile running, type a line on stdin:\n  r      refresh now (ignored while a refresh is running)\n  <n>    refresh every n seconds, 0 disables auto-refresh\n  q      quit\n\nCtrl-C also quits.")
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Seconds between refreshes, 0 disables (overrides config)")
                        .value_parser(value_parser!(u64)),
                ),
        )
}
