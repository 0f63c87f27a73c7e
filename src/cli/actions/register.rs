use super::Credentials;
use crate::{app::ApiClient, features::auth};
use anyhow::{Context, Result};

/// Execute the register action.
/// # Errors
/// Returns an error if the backend refuses the registration.
pub async fn execute(args: Credentials) -> Result<()> {
    let api = ApiClient::new(&args.config).context("failed to build API client")?;

    let msg = auth::register(&api, &args.email, &args.password)
        .await
        .context("registration failed")?;

    println!("{msg}");
    Ok(())
}
