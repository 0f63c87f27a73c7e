use crate::{features::auth, storage::FileStore};
use anyhow::{Context, Result};
use std::path::Path;

/// Execute the logout action.
/// # Errors
/// Returns an error if the store cannot be updated.
pub fn execute(store_path: &Path) -> Result<()> {
    let store = FileStore::new(store_path);
    auth::logout(&store).context("logout failed")?;

    println!("Signed out");
    Ok(())
}
