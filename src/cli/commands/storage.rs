use clap::{Arg, Command};

pub const ARG_STORE: &str = "store";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_STORE)
            .short('s')
            .long(ARG_STORE)
            .help("Credential store file (default: $HOME/.profile-gate/storage.json)")
            .env("PROFILE_GATE_STORE")
            .global(true),
    )
}
