//! Client for the current-user endpoint.

use super::types::Profile;
use crate::app::{ApiClient, AppError};
use secrecy::SecretString;
use std::{future::Future, pin::Pin};

/// Path of the token-protected profile endpoint.
pub const PRIVATE_PATH: &str = "/private";

pub type ProfileFuture<'a> = Pin<Box<dyn Future<Output = Result<Profile, AppError>> + Send + 'a>>;

/// Fetches the profile that belongs to a token.
///
/// The gated view only depends on this trait, so tests and embedders can swap
/// the HTTP implementation out.
pub trait ProfileClient: Send + Sync {
    fn fetch_profile<'a>(&'a self, token: &'a SecretString) -> ProfileFuture<'a>;
}

#[derive(Clone, Debug)]
pub struct HttpProfileClient {
    api: ApiClient,
}

impl HttpProfileClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl ProfileClient for HttpProfileClient {
    fn fetch_profile<'a>(&'a self, token: &'a SecretString) -> ProfileFuture<'a> {
        Box::pin(async move { self.api.get_json_with_bearer(PRIVATE_PATH, token).await })
    }
}
