use anyhow::Result;
use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Builds the level filter: `RUST_LOG` wins, otherwise the verbosity flag.
/// HTTP internals stay quiet unless asked for explicitly.
///
/// # Errors
///
/// Returns an error if a static directive fails to parse
fn env_filter(verbosity_level: Option<Level>) -> Result<EnvFilter> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("hyper_util=error".parse()?)
        .add_directive("h2=error".parse()?))
}

/// Initialize logging on stderr so stdout only carries command output.
///
/// Set `PROFILE_GATE_LOG_FORMAT=json` for one JSON object per line.
///
/// # Errors
///
/// Returns an error if the filter or the global subscriber cannot be installed
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let filter = env_filter(verbosity_level)?;
    let json = std::env::var("PROFILE_GATE_LOG_FORMAT").is_ok_and(|format| format == "json");

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_target(false);
        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_target(false)
            .compact();
        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
