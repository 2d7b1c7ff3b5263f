//! Admin console gating configuration.

use serde::{Deserialize, Serialize};

/// Settings gating the `/api/admin` surface.
///
/// Roomhub delegates real identity management to the hosting environment;
/// the API itself only checks a static bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Bearer token required on admin routes. An empty token disables the
    /// entire admin surface.
    #[serde(default)]
    pub api_token: String,
}

impl AdminConfig {
    /// Whether admin routes can be used at all.
    pub fn enabled(&self) -> bool {
        !self.api_token.is_empty()
    }
}
