//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to an action. Global options may appear before or
//! after the subcommand; clap propagates them into the subcommand matches.

use crate::cli::actions::{Action, Credentials};
use crate::cli::commands::{
    session::{ARG_EMAIL, ARG_PASSWORD},
    CMD_LOGIN, CMD_LOGOUT, CMD_REGISTER, CMD_VIEW,
};
use crate::cli::globals::GlobalArgs;
use anyhow::{bail, Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to an action. No subcommand means `view`.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let scope = matches.subcommand().map_or(matches, |(_, sub)| sub);
    let globals = GlobalArgs::parse(scope)?;

    match matches.subcommand_name() {
        None | Some(CMD_VIEW) => Ok(Action::View(globals.config()?)),
        Some(CMD_REGISTER) => Ok(Action::Register(credentials(scope, &globals)?)),
        Some(CMD_LOGIN) => Ok(Action::Login(credentials(scope, &globals)?)),
        Some(CMD_LOGOUT) => Ok(Action::Logout(globals.store_path)),
        Some(other) => bail!("unknown command: {other}"),
    }
}

fn credentials(scope: &clap::ArgMatches, globals: &GlobalArgs) -> Result<Credentials> {
    Ok(Credentials {
        config: globals.config()?,
        email: scope
            .get_one::<String>(ARG_EMAIL)
            .cloned()
            .context("missing required argument: --email")?,
        password: scope
            .get_one::<String>(ARG_PASSWORD)
            .map(|password| SecretString::from(password.as_str()))
            .context("missing required argument: --password")?,
    })
}
