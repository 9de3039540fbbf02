//! Discord REST, CDN and status page endpoints, plus a small client that
//! consumes them.
//!
//! ```
//! use discordlinks::{cdn, routes};
//!
//! assert_eq!(
//!     routes::guild_member("123", "456"),
//!     "https://discord.com/api/v8/guilds/123/members/456"
//! );
//! assert_eq!(
//!     cdn::user_avatar("1", "2"),
//!     "https://cdn.discordapp.com/avatars/1/2.png"
//! );
//! ```

/// Discord API version used for the REST and websocket APIs.
pub const API_VERSION: &str = "8";

pub mod api;
pub mod config;
mod error;

pub use api::{cdn, links, routes};
pub use api::{ApiClient, ApiClientError};
pub use config::ClientConfig;
