use super::{CMD_LOGIN, CMD_REGISTER};
use clap::{Arg, Command};

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

#[must_use]
pub fn login_command() -> Command {
    with_credentials(Command::new(CMD_LOGIN).about("Sign in and store the session token"))
}

#[must_use]
pub fn register_command() -> Command {
    with_credentials(Command::new(CMD_REGISTER).about("Create an account on the backend"))
}

fn with_credentials(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Account email")
                .env("PROFILE_GATE_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Account password")
                .env("PROFILE_GATE_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [
                ("PROFILE_GATE_EMAIL", None::<&str>),
                ("PROFILE_GATE_PASSWORD", Some("from-env")),
            ],
            || {
                let matches = login_command().get_matches_from(vec![
                    "login",
                    "--email",
                    "user@example.com",
                ]);
                assert_eq!(
                    matches.get_one::<String>(ARG_EMAIL).map(String::as_str),
                    Some("user@example.com")
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_PASSWORD).map(String::as_str),
                    Some("from-env")
                );
            },
        );
    }

    #[test]
    fn test_login_requires_email() {
        temp_env::with_vars(
            [
                ("PROFILE_GATE_EMAIL", None::<&str>),
                ("PROFILE_GATE_PASSWORD", None::<&str>),
            ],
            || {
                let result = login_command().try_get_matches_from(vec!["login", "-p", "pw"]);
                assert!(result.is_err());
            },
        );
    }

    #[test]
    fn test_register_takes_credentials() {
        temp_env::with_vars(
            [
                ("PROFILE_GATE_EMAIL", Some("env@example.com")),
                ("PROFILE_GATE_PASSWORD", None::<&str>),
            ],
            || {
                let matches =
                    register_command().get_matches_from(vec!["register", "-p", "hunter2"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_EMAIL).map(String::as_str),
                    Some("env@example.com")
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_PASSWORD).map(String::as_str),
                    Some("hunter2")
                );
            },
        );
    }
}
