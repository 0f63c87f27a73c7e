use crate::cli::actions::{login, logout, register, view, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::View(config) => view::execute(config).await,
        Action::Register(args) => register::execute(args).await,
        Action::Login(args) => login::execute(args).await,
        Action::Logout(store_path) => logout::execute(&store_path),
    }
}
