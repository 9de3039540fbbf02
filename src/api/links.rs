//! Fixed base URLs and endpoints. Everything here is assembled at compile time.

use const_format::{concatcp, formatcp};

pub const STATUS: &str = "https://status.discord.com/api/v2/";
pub const SCHEDULED_MAINTENANCES: &str = concatcp!(STATUS, "scheduled-maintenances/");
pub const SCHEDULED_MAINTENANCES_ACTIVE: &str = concatcp!(SCHEDULED_MAINTENANCES, "active.json");
pub const SCHEDULED_MAINTENANCES_UPCOMING: &str =
    concatcp!(SCHEDULED_MAINTENANCES, "upcoming.json");

pub const DISCORD: &str = "https://discord.com/";
pub const API: &str = formatcp!("{}api/v{}/", DISCORD, crate::API_VERSION);
pub const GUILDS: &str = concatcp!(API, "guilds/");
pub const CHANNELS: &str = concatcp!(API, "channels/");
pub const USERS: &str = concatcp!(API, "users/");
pub const GATEWAY: &str = concatcp!(API, "gateway");
pub const GATEWAY_BOT: &str = concatcp!(GATEWAY, "/bot");
pub const WEBHOOKS: &str = concatcp!(API, "webhooks/");

pub const CDN: &str = "https://cdn.discordapp.com/";
pub const CDN_ATTACHMENTS: &str = concatcp!(CDN, "attachments/");
pub const CDN_AVATARS: &str = concatcp!(CDN, "avatars/");
pub const CDN_ICONS: &str = concatcp!(CDN, "icons/");
pub const CDN_SPLASHES: &str = concatcp!(CDN, "splashes/");
pub const CDN_CHANNEL_ICONS: &str = concatcp!(CDN, "channel-icons/");
pub const CDN_BANNERS: &str = concatcp!(CDN, "banners/");

pub const AUTH: &str = concatcp!(API, "auth/");
pub const LOGIN: &str = concatcp!(AUTH, "login");
pub const LOGOUT: &str = concatcp!(AUTH, "logout");
pub const VERIFY: &str = concatcp!(AUTH, "verify");
pub const VERIFY_RESEND: &str = concatcp!(AUTH, "verify/resend");
pub const FORGOT_PASSWORD: &str = concatcp!(AUTH, "forgot");
pub const RESET_PASSWORD: &str = concatcp!(AUTH, "reset");
pub const REGISTER: &str = concatcp!(AUTH, "register");

// Doubled slash after the version is part of the published path.
pub const VOICE: &str = concatcp!(API, "/voice/");
pub const VOICE_REGIONS: &str = concatcp!(VOICE, "regions");
pub const VOICE_ICE: &str = concatcp!(VOICE, "ice");

pub const TUTORIAL: &str = concatcp!(API, "tutorial/");
pub const TUTORIAL_INDICATORS: &str = concatcp!(TUTORIAL, "indicators");

pub const TRACK: &str = concatcp!(API, "track");
pub const SSO: &str = concatcp!(API, "sso");
pub const REPORT: &str = concatcp!(API, "report");
pub const INTEGRATIONS: &str = concatcp!(API, "integrations");

pub const GUILD_CREATE: &str = concatcp!(API, "guilds");
pub const APPLICATIONS: &str = concatcp!(API, "applications");
pub const RELATIONSHIPS: &str = concatcp!(USERS, "@me/relationships");

pub const OAUTH2: &str = concatcp!(API, "oauth2/");
pub const OAUTH2_APPLICATIONS: &str = concatcp!(OAUTH2, "applications");
