pub mod login;
pub mod logout;
pub mod register;
pub mod view;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::app::AppConfig;
use secrecy::SecretString;
use std::path::PathBuf;

/// Backend config plus the account credentials for `login` and `register`.
#[derive(Debug)]
pub struct Credentials {
    pub config: AppConfig,
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub enum Action {
    View(AppConfig),
    Register(Credentials),
    Login(Credentials),
    Logout(PathBuf),
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
