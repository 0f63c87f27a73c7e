//! Client configuration: where the API lives, how long to wait for it, and
//! where the credential store is kept. There is no built-in API host; the
//! base URL always comes from the caller (flag or environment).

use super::errors::AppError;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

/// Default request timeout (seconds) applied to all HTTP helpers.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Store file location relative to `$HOME` when none is configured.
const DEFAULT_STORE_RELATIVE: &str = ".profile-gate/storage.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub timeout: Duration,
    pub store_path: PathBuf,
}

impl AppConfig {
    /// Validates the API base URL and builds a config.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the URL is empty, unparsable, has no host,
    /// uses a scheme other than http/https, or the timeout is zero.
    pub fn new(
        api_base_url: &str,
        timeout: Duration,
        store_path: PathBuf,
    ) -> Result<Self, AppError> {
        let api_base_url = parse_api_base_url(api_base_url)?;

        if timeout.is_zero() {
            return Err(AppError::Config(
                "Request timeout must be greater than zero.".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            timeout,
            store_path,
        })
    }
}

fn parse_api_base_url(raw: &str) -> Result<Url, AppError> {
    let raw = normalize_value(raw)
        .ok_or_else(|| AppError::Config("API base URL is not configured.".to_string()))?;

    let url = Url::parse(&raw)
        .map_err(|err| AppError::Config(format!("Invalid API base URL {raw}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::Config(format!(
                "Invalid API base URL {raw}: unsupported scheme {scheme}"
            )))
        }
    }

    if url.host().is_none() {
        return Err(AppError::Config(format!(
            "Invalid API base URL {raw}: no host specified"
        )));
    }

    Ok(url)
}

/// Resolves the store path, falling back to `$HOME/.profile-gate/storage.json`.
///
/// # Errors
/// Returns `AppError::Config` if no path is given and `HOME` is unset.
pub fn resolve_store_path(explicit: Option<&str>) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit.and_then(normalize_value) {
        return Ok(PathBuf::from(path));
    }

    let home = env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .ok_or_else(|| {
            AppError::Config("HOME is not set; pass --store to choose a store file.".to_string())
        })?;

    Ok(Path::new(&home).join(DEFAULT_STORE_RELATIVE))
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(url: &str) -> Result<AppConfig, AppError> {
        AppConfig::new(
            url,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            PathBuf::from("/tmp/store.json"),
        )
    }

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.example.com "),
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn new_accepts_http_and_https() {
        assert!(config("http://localhost:3001").is_ok());
        let cfg = config(" https://api.example.com/ ").unwrap();
        assert_eq!(cfg.api_base_url.as_str(), "https://api.example.com/");
    }

    #[test]
    fn new_rejects_missing_url() {
        let err = config("  ").unwrap_err();
        assert_eq!(
            err,
            AppError::Config("API base URL is not configured.".to_string())
        );
    }

    #[test]
    fn new_rejects_unsupported_scheme() {
        let err = config("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme ftp"));
    }

    #[test]
    fn new_rejects_zero_timeout() {
        let result = AppConfig::new(
            "https://api.example.com",
            Duration::ZERO,
            PathBuf::from("/tmp/store.json"),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn resolve_store_path_prefers_explicit() {
        let path = resolve_store_path(Some(" /var/lib/gate.json ")).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/gate.json"));
    }

    #[test]
    fn resolve_store_path_defaults_under_home() {
        temp_env::with_var("HOME", Some("/home/tester"), || {
            let path = resolve_store_path(None).unwrap();
            assert_eq!(
                path,
                PathBuf::from("/home/tester/.profile-gate/storage.json")
            );
        });
    }

    #[test]
    fn resolve_store_path_requires_home() {
        temp_env::with_var("HOME", None::<&str>, || {
            assert!(matches!(
                resolve_store_path(Some("  ")),
                Err(AppError::Config(_))
            ));
        });
    }
}
