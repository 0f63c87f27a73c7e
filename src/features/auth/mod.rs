//! Accounts and sessions: registering, exchanging credentials for a token and
//! forgetting it.
//! The token is written to the credential store and nowhere else.

pub mod client;
pub mod types;

pub use client::{login, logout, register, LOGIN_PATH, REGISTER_PATH};
