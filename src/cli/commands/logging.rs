use clap::{Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names accepted by `PROFILE_GATE_LOG_LEVEL`, in `-v` count order.
pub const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Parses a level name into the equivalent `-v` count.
///
/// # Errors
/// Returns a message listing the accepted names.
pub fn parse_level(level: &str) -> Result<u8, String> {
    LEVEL_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(level.trim()))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!(
                "invalid log level '{level}', expected one of: {}",
                LEVEL_NAMES.join(", ")
            )
        })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Raise log verbosity: -v warn, -vv info, -vvv debug, -vvvv trace")
            .env("PROFILE_GATE_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(parse_level),
    )
}
