//! Current-user profile: response types and the client seam the gated view
//! fetches through.

pub mod client;
pub mod types;

pub use client::{HttpProfileClient, ProfileClient, PRIVATE_PATH};
pub use types::Profile;
