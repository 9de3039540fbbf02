//! CDN asset URLs: avatars, icons, splashes, banners, emojis.

use super::links::{CDN, CDN_AVATARS, CDN_BANNERS, CDN_CHANNEL_ICONS, CDN_ICONS, CDN_SPLASHES};
use std::num::IntErrorKind;

/// Number of stock avatars served under `embed/avatars/`.
pub const DEFAULT_AVATAR_COUNT: i64 = 5;

pub fn user_avatar(u_id: &str, a_id: &str) -> String {
    format!("{}{}/{}.png", CDN_AVATARS, u_id, a_id)
}

pub fn user_avatar_animated(u_id: &str, a_id: &str) -> String {
    format!("{}{}/{}.gif", CDN_AVATARS, u_id, a_id)
}

/// Picks one of the stock avatars from a user's discriminator.
///
/// Non-numeric input counts as `0`. A numeric string too large for `i64`
/// saturates rather than failing. The remainder keeps the sign of the input,
/// so `"-7"` gives `-2`.
pub fn default_avatar_index(discriminator: &str) -> i64 {
    let value = match discriminator.parse::<i64>() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    };
    value % DEFAULT_AVATAR_COUNT
}

pub fn default_user_avatar(discriminator: &str) -> String {
    format!(
        "{}embed/avatars/{}.png",
        CDN,
        default_avatar_index(discriminator)
    )
}

pub fn guild_icon(g_id: &str, hash: &str) -> String {
    format!("{}{}/{}.png", CDN_ICONS, g_id, hash)
}

pub fn guild_icon_animated(g_id: &str, hash: &str) -> String {
    format!("{}{}/{}.gif", CDN_ICONS, g_id, hash)
}

pub fn guild_splash(g_id: &str, hash: &str) -> String {
    format!("{}{}/{}.png", CDN_SPLASHES, g_id, hash)
}

pub fn guild_banner(g_id: &str, hash: &str) -> String {
    format!("{}{}/{}.png", CDN_BANNERS, g_id, hash)
}

/// Icon of a group DM channel.
pub fn group_icon(c_id: &str, hash: &str) -> String {
    format!("{}{}/{}.png", CDN_CHANNEL_ICONS, c_id, hash)
}

pub fn emoji(e_id: &str) -> String {
    format!("{}emojis/{}.png", CDN, e_id)
}

pub fn emoji_animated(e_id: &str) -> String {
    format!("{}emojis/{}.gif", CDN, e_id)
}
