use crate::app::{
    config::{resolve_store_path, DEFAULT_TIMEOUT_SECS},
    AppConfig,
};
use crate::cli::commands::{api, storage};
use anyhow::{Context, Result};
use std::{path::PathBuf, time::Duration};

/// Options shared by every subcommand.
#[derive(Clone, Debug)]
pub struct GlobalArgs {
    pub api_url: Option<String>,
    pub store_path: PathBuf,
    pub timeout: Duration,
}

impl GlobalArgs {
    /// Reads the global options from parsed matches.
    ///
    /// # Errors
    /// Returns an error if the store path cannot be resolved.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let store_path = resolve_store_path(
            matches
                .get_one::<String>(storage::ARG_STORE)
                .map(String::as_str),
        )?;

        Ok(Self {
            api_url: matches.get_one::<String>(api::ARG_API_URL).cloned(),
            store_path,
            timeout: Duration::from_secs(
                matches
                    .get_one::<u64>(api::ARG_TIMEOUT)
                    .copied()
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }

    /// Builds the client configuration; the API URL is required here.
    ///
    /// # Errors
    /// Returns an error if the API URL is missing or invalid.
    pub fn config(&self) -> Result<AppConfig> {
        let api_url = self
            .api_url
            .as_deref()
            .context("missing required argument: --api-url")?;

        AppConfig::new(api_url, self.timeout, self.store_path.clone())
            .context("invalid PROFILE_GATE_API_URL")
    }
}
