use clap::{Arg, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .short('a')
                .long(ARG_API_URL)
                .help("API base URL, example: https://api.example.com")
                .long_help(
                    "API base URL. The profile is read from <api-url>/private and logins go to <api-url>/login.",
                )
                .env("PROFILE_GATE_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("PROFILE_GATE_TIMEOUT")
                .default_value("10")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}
