//! Client settings.

use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Environment variable read by [`ClientConfig::from_env`].
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Value of the `Authorization` header, e.g. `Bot <token>`. Empty means
    /// anonymous requests.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds (default: 30). `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` and friends (default: true)
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
}

fn default_user_agent() -> String {
    concat!(
        "DiscordBot (",
        env!("CARGO_PKG_NAME"),
        ", ",
        env!("CARGO_PKG_VERSION"),
        ")"
    )
    .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_system_proxy() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            system_proxy: default_system_proxy(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = if self.token.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientConfig")
            .field("token", &token)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("system_proxy", &self.system_proxy)
            .finish()
    }
}

impl ClientConfig {
    /// Defaults, with the token taken from `DISCORD_TOKEN` when set.
    pub fn from_env() -> Self {
        Self {
            token: std::env::var(TOKEN_ENV).unwrap_or_default(),
            ..Self::default()
        }
    }
}
