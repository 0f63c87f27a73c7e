use crate::{
    app::{ApiClient, AppConfig},
    features::profile::{HttpProfileClient, ProfileClient},
    routes::{private, Outcome, PrivateView},
    storage::{CredentialStore, FileStore},
};
use anyhow::{Context, Result};
use std::{future::Future, io, sync::Arc};
use tokio::signal;
use tracing::debug;

/// Mounts the private view, waits for it to settle and renders it.
///
/// Returns `None` if `interrupt` resolves with `Ok` before the view settled;
/// the in-flight fetch is cancelled in that case. An `Err` from `interrupt`
/// (no signal handler) is ignored and the view keeps waiting.
pub async fn render_private(
    store: &dyn CredentialStore,
    client: Arc<dyn ProfileClient>,
    interrupt: impl Future<Output = io::Result<()>>,
) -> Option<Outcome> {
    let mut view = PrivateView::mount(store, client);

    let settled = tokio::select! {
        state = view.settled() => Some(state),
        Ok(()) = interrupt => None,
    };

    match settled {
        Some(state) => Some(private::render(&state)),
        None => {
            debug!("interrupted, unmounting view");
            view.unmount();
            None
        }
    }
}

/// Execute the view action.
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub async fn execute(config: AppConfig) -> Result<()> {
    let store = FileStore::new(&config.store_path);
    let api = ApiClient::new(&config).context("failed to build API client")?;
    let client: Arc<dyn ProfileClient> = Arc::new(HttpProfileClient::new(api));

    debug!(api = %config.api_base_url, store = %store.path().display(), "mounting private view");

    match render_private(&store, client, signal::ctrl_c()).await {
        Some(Outcome::Page(page)) => println!("{page}"),
        Some(Outcome::Redirect { to }) => eprintln!("Not signed in, redirecting to {to}"),
        None => {}
    }

    Ok(())
}
