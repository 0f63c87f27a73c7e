use super::Credentials;
use crate::{app::ApiClient, features::auth, storage::FileStore};
use anyhow::{Context, Result};

/// Execute the login action.
/// # Errors
/// Returns an error if the backend rejects the credentials or the token cannot be stored.
pub async fn execute(args: Credentials) -> Result<()> {
    let store = FileStore::new(&args.config.store_path);
    let api = ApiClient::new(&args.config).context("failed to build API client")?;

    let email = auth::login(&api, &store, &args.email, &args.password)
        .await
        .context("login failed")?;

    println!("Signed in as {email}");
    Ok(())
}
