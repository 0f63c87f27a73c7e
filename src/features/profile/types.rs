//! Types for `/private` responses.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned by `/private`.
///
/// The backend also sends a human-readable `response` message next to the
/// email; it is accepted but not kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
}
