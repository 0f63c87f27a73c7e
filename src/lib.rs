//! # Profile Gate
//!
//! `profile-gate` is a small client for a token-authenticated backend. Its core
//! is the gated profile view: read the stored credential, fetch the current
//! user's email from `/private` with a bearer token, and either render a
//! greeting or tell the caller to redirect to the landing route.
//!
//! ## Credentials
//!
//! The token lives in a persistent key-value store under the key `token`.
//! `login` writes it, `logout` removes it, and the view only reads it. Tokens
//! are held as [`secrecy::SecretString`] and are never logged.
//!
//! ## Redirects
//!
//! Rendering never navigates. A view without a credential renders
//! [`routes::Outcome::Redirect`] and the caller (the CLI, or whatever embeds
//! the library) decides what navigating to `/` means.

pub mod app;
pub mod cli;
pub mod features;
pub mod routes;
pub mod storage;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
