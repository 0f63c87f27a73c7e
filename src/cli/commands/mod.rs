pub mod api;
pub mod logging;
pub mod session;
pub mod storage;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

pub const CMD_VIEW: &str = "view";
pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_REGISTER: &str = "register";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("profile-gate")
        .about("Token-gated profile client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand(
            Command::new(CMD_VIEW)
                .about("Show the signed-in user's private page (default)"),
        )
        .subcommand(session::register_command())
        .subcommand(session::login_command())
        .subcommand(Command::new(CMD_LOGOUT).about("Forget the stored session token"));

    let command = api::with_args(command);
    let command = storage::with_args(command);
    logging::with_args(command)
}
