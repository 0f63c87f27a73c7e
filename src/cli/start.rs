use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use tracing::Level;

/// Levels enabled by one or more `-v`; no flag leaves the ERROR default.
const RAISED_LEVELS: [Level; 4] = [Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];

fn level_for(verbosity: u8) -> Option<Level> {
    let index = usize::from(verbosity.checked_sub(1)?);
    Some(RAISED_LEVELS[index.min(RAISED_LEVELS.len() - 1)])
}

/// Parses the command line, sets up logging and returns the action to run.
///
/// # Errors
/// Returns an error if telemetry cannot be initialized or the arguments do not
/// form a runnable action.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    telemetry::init(level_for(verbosity))?;

    dispatch::handler(&matches)
}
