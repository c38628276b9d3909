//! Remote server connection configuration.

use serde::{Deserialize, Serialize};

const fn default_verify_ssl() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the shopping-list server (e.g. `https://kitchenowl.example`).
    #[serde(default)]
    pub host: String,

    /// Bearer token used for every API call.
    #[serde(default)]
    pub access_token: String,

    /// Verify TLS certificates. Disable only for self-signed test servers.
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            access_token: String::new(),
            verify_ssl: default_verify_ssl(),
        }
    }
}

impl ServerConfig {
    /// True when both host and token are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.access_token.is_empty()
    }
}
