//! Client routes and what rendering them produces.
//!
//! Views never navigate on their own. They return an [`Outcome`] and whoever
//! hosts them (the CLI here) acts on redirects.

pub mod private;

pub use private::{PrivateView, ViewState};

pub mod paths {
    /// Landing route, where signed-out users are sent.
    pub const HOME: &str = "/";
}

/// Result of rendering a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user.
    Page(String),
    /// The host should navigate to `to` instead of showing anything.
    Redirect { to: &'static str },
}
