//! Gated profile view for the `/private` route.
//!
//! Mounting reads the stored token once. Without a token the view settles
//! immediately as [`ViewState::NoCredential`] and renders a redirect to `/`;
//! no request is made. With a token it starts in [`ViewState::Loading`] and a
//! single spawned task fetches the profile, publishing the result through a
//! watch channel. Fetch failures are logged and settle as
//! [`ViewState::Failed`], which renders the same greeting with an empty email.
//!
//! The fetch task belongs to the [`PrivateView`]: dropping or unmounting the
//! view aborts it, and a result that races the teardown is discarded.

use super::{paths, Outcome};
use crate::{
    app::AppError,
    features::profile::{Profile, ProfileClient},
    storage::CredentialStore,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    NoCredential,
    Loading,
    Loaded(Profile),
    Failed(AppError),
}

impl ViewState {
    /// Email to display; empty until a profile has loaded.
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Loaded(profile) => &profile.email,
            _ => "",
        }
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[must_use]
pub fn greeting(email: &str) -> String {
    format!("You are now on private {email}")
}

#[must_use]
pub fn render(state: &ViewState) -> Outcome {
    match state {
        ViewState::NoCredential => Outcome::Redirect { to: paths::HOME },
        state => Outcome::Page(greeting(state.email())),
    }
}

pub struct PrivateView {
    state: watch::Receiver<ViewState>,
    mounted: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl PrivateView {
    /// Mounts the view: reads the token and, if there is one, starts the fetch.
    ///
    /// Must be called from within a Tokio runtime when a token is present.
    pub fn mount(store: &dyn CredentialStore, client: Arc<dyn ProfileClient>) -> Self {
        let mounted = Arc::new(AtomicBool::new(true));

        let token = store.token().unwrap_or_else(|err| {
            warn!(error = %err, "credential store unreadable, treating as signed out");
            None
        });

        let Some(token) = token else {
            debug!("no credential stored");
            let (_tx, rx) = watch::channel(ViewState::NoCredential);
            return Self {
                state: rx,
                mounted,
                task: None,
            };
        };

        let (tx, rx) = watch::channel(ViewState::Loading);
        let alive = Arc::clone(&mounted);

        let task = tokio::spawn(async move {
            let next = match client.fetch_profile(&token).await {
                Ok(profile) => {
                    debug!(email = %profile.email, "profile loaded");
                    ViewState::Loaded(profile)
                }
                Err(err) if err.is_unauthorized() => {
                    warn!(error = %err, "stored token was rejected");
                    ViewState::Failed(err)
                }
                Err(err) => {
                    warn!(error = %err, "profile fetch failed");
                    ViewState::Failed(err)
                }
            };

            tx.send_if_modified(|state| {
                if alive.load(Ordering::SeqCst) {
                    *state = next;
                    true
                } else {
                    debug!("view unmounted, dropping profile result");
                    false
                }
            });
        });

        Self {
            state: rx,
            mounted,
            task: Some(task),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn render(&self) -> Outcome {
        render(&self.state.borrow())
    }

    /// A receiver that observes every state change, for hosts that re-render on updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    /// Waits until the view leaves `Loading`.
    ///
    /// If the fetch task ends without publishing (it was aborted or panicked),
    /// the last published state is returned.
    pub async fn settled(&mut self) -> ViewState {
        let settled = self
            .state
            .wait_for(ViewState::is_settled)
            .await
            .map(|state| state.clone());

        settled.unwrap_or_else(|_| self.state.borrow().clone())
    }

    /// Tears the view down, cancelling any in-flight fetch.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for PrivateView {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::SeqCst);

        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!("aborting in-flight profile fetch");
                task.abort();
            }
        }
    }
}

impl std::fmt::Debug for PrivateView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateView")
            .field("state", &*self.state.borrow())
            .field("mounted", &self.mounted.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
