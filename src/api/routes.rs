//! REST endpoint templates.
//!
//! Identifiers are taken as opaque strings and spliced in verbatim; nothing
//! is validated or escaped.

use super::links::{API, APPLICATIONS, CHANNELS, GUILDS, OAUTH2_APPLICATIONS, RELATIONSHIPS};
use super::links::{USERS, WEBHOOKS};

pub fn user(u_id: &str) -> String {
    format!("{}{}", USERS, u_id)
}

pub fn user_settings(u_id: &str) -> String {
    format!("{}{}/settings", USERS, u_id)
}

pub fn user_guilds(u_id: &str) -> String {
    format!("{}{}/guilds", USERS, u_id)
}

pub fn user_guild(u_id: &str, g_id: &str) -> String {
    format!("{}{}/guilds/{}", USERS, u_id, g_id)
}

pub fn user_guild_settings(u_id: &str, g_id: &str) -> String {
    format!("{}{}/guilds/{}/settings", USERS, u_id, g_id)
}

pub fn user_channels(u_id: &str) -> String {
    format!("{}{}/channels", USERS, u_id)
}

pub fn user_devices(u_id: &str) -> String {
    format!("{}{}/devices", USERS, u_id)
}

pub fn user_connections(u_id: &str) -> String {
    format!("{}{}/connections", USERS, u_id)
}

/// Note the current user keeps about `u_id`.
pub fn user_notes(u_id: &str) -> String {
    format!("{}@me/notes/{}", USERS, u_id)
}

pub fn guild(g_id: &str) -> String {
    format!("{}{}", GUILDS, g_id)
}

pub fn guild_preview(g_id: &str) -> String {
    format!("{}{}/preview", GUILDS, g_id)
}

pub fn guild_channels(g_id: &str) -> String {
    format!("{}{}/channels", GUILDS, g_id)
}

pub fn guild_members(g_id: &str) -> String {
    format!("{}{}/members", GUILDS, g_id)
}

pub fn guild_member(g_id: &str, u_id: &str) -> String {
    format!("{}{}/members/{}", GUILDS, g_id, u_id)
}

pub fn guild_member_role(g_id: &str, u_id: &str, r_id: &str) -> String {
    format!("{}{}/members/{}/roles/{}", GUILDS, g_id, u_id, r_id)
}

pub fn guild_bans(g_id: &str) -> String {
    format!("{}{}/bans", GUILDS, g_id)
}

pub fn guild_ban(g_id: &str, u_id: &str) -> String {
    format!("{}{}/bans/{}", GUILDS, g_id, u_id)
}

pub fn guild_integrations(g_id: &str) -> String {
    format!("{}{}/integrations", GUILDS, g_id)
}

pub fn guild_integration(g_id: &str, i_id: &str) -> String {
    format!("{}{}/integrations/{}", GUILDS, g_id, i_id)
}

pub fn guild_integration_sync(g_id: &str, i_id: &str) -> String {
    format!("{}{}/integrations/{}/sync", GUILDS, g_id, i_id)
}

pub fn guild_roles(g_id: &str) -> String {
    format!("{}{}/roles", GUILDS, g_id)
}

pub fn guild_role(g_id: &str, r_id: &str) -> String {
    format!("{}{}/roles/{}", GUILDS, g_id, r_id)
}

pub fn guild_invites(g_id: &str) -> String {
    format!("{}{}/invites", GUILDS, g_id)
}

pub fn guild_widget(g_id: &str) -> String {
    format!("{}{}/widget", GUILDS, g_id)
}

#[deprecated(note = "embeds were renamed to widgets, use `guild_widget`")]
pub fn guild_embed(g_id: &str) -> String {
    guild_widget(g_id)
}

pub fn guild_prune(g_id: &str) -> String {
    format!("{}{}/prune", GUILDS, g_id)
}

pub fn guild_webhooks(g_id: &str) -> String {
    format!("{}{}/webhooks", GUILDS, g_id)
}

pub fn guild_audit_logs(g_id: &str) -> String {
    format!("{}{}/audit-logs", GUILDS, g_id)
}

pub fn guild_emojis(g_id: &str) -> String {
    format!("{}{}/emojis", GUILDS, g_id)
}

pub fn guild_emoji(g_id: &str, e_id: &str) -> String {
    format!("{}{}/emojis/{}", GUILDS, g_id, e_id)
}

pub fn channel(c_id: &str) -> String {
    format!("{}{}", CHANNELS, c_id)
}

pub fn channel_permissions(c_id: &str) -> String {
    format!("{}{}/permissions", CHANNELS, c_id)
}

/// `t_id` is the role or member the overwrite targets.
pub fn channel_permission(c_id: &str, t_id: &str) -> String {
    format!("{}{}/permissions/{}", CHANNELS, c_id, t_id)
}

pub fn channel_invites(c_id: &str) -> String {
    format!("{}{}/invites", CHANNELS, c_id)
}

pub fn channel_typing(c_id: &str) -> String {
    format!("{}{}/typing", CHANNELS, c_id)
}

pub fn channel_messages(c_id: &str) -> String {
    format!("{}{}/messages", CHANNELS, c_id)
}

pub fn channel_message(c_id: &str, m_id: &str) -> String {
    format!("{}{}/messages/{}", CHANNELS, c_id, m_id)
}

pub fn channel_message_ack(c_id: &str, m_id: &str) -> String {
    format!("{}{}/messages/{}/ack", CHANNELS, c_id, m_id)
}

pub fn channel_messages_bulk_delete(c_id: &str) -> String {
    format!("{}/messages/bulk-delete", channel(c_id))
}

pub fn channel_messages_pins(c_id: &str) -> String {
    format!("{}/pins", channel(c_id))
}

pub fn channel_message_pin(c_id: &str, m_id: &str) -> String {
    format!("{}/pins/{}", channel(c_id), m_id)
}

pub fn channel_message_crosspost(c_id: &str, m_id: &str) -> String {
    format!("{}/messages/{}/crosspost", channel(c_id), m_id)
}

pub fn channel_follow(c_id: &str) -> String {
    format!("{}/followers", channel(c_id))
}

pub fn channel_webhooks(c_id: &str) -> String {
    format!("{}/webhooks", channel(c_id))
}

pub fn webhook(w_id: &str) -> String {
    format!("{}{}", WEBHOOKS, w_id)
}

pub fn webhook_token(w_id: &str, token: &str) -> String {
    format!("{}{}/{}", WEBHOOKS, w_id, token)
}

pub fn webhook_message(w_id: &str, token: &str, m_id: &str) -> String {
    format!("{}/messages/{}", webhook_token(w_id, token), m_id)
}

pub fn message_reactions_all(c_id: &str, m_id: &str) -> String {
    format!("{}/reactions", channel_message(c_id, m_id))
}

/// `e_id` is either a unicode emoji or `name:id` for a custom one, already
/// url-encoded by the caller.
pub fn message_reactions(c_id: &str, m_id: &str, e_id: &str) -> String {
    format!("{}/reactions/{}", channel_message(c_id, m_id), e_id)
}

pub fn message_reaction(c_id: &str, m_id: &str, e_id: &str, u_id: &str) -> String {
    format!("{}/{}", message_reactions(c_id, m_id, e_id), u_id)
}

pub fn application(a_id: &str) -> String {
    format!("{}/{}", APPLICATIONS, a_id)
}

pub fn application_global_commands(a_id: &str) -> String {
    format!("{}/commands", application(a_id))
}

pub fn application_global_command(a_id: &str, c_id: &str) -> String {
    format!("{}/{}", application_global_commands(a_id), c_id)
}

pub fn application_guild_commands(a_id: &str, g_id: &str) -> String {
    format!("{}/guilds/{}/commands", application(a_id), g_id)
}

pub fn application_guild_command(a_id: &str, g_id: &str, c_id: &str) -> String {
    format!("{}/{}", application_guild_commands(a_id, g_id), c_id)
}

pub fn interaction(a_id: &str, i_token: &str) -> String {
    format!("{}interactions/{}/{}", API, a_id, i_token)
}

pub fn interaction_response(i_id: &str, i_token: &str) -> String {
    format!("{}/callback", interaction(i_id, i_token))
}

/// Edit or delete the original interaction response.
pub fn interaction_response_actions(a_id: &str, i_token: &str) -> String {
    webhook_message(a_id, i_token, "@original")
}

pub fn followup_message(a_id: &str, i_token: &str) -> String {
    webhook_token(a_id, i_token)
}

pub fn followup_message_actions(a_id: &str, i_token: &str, m_id: &str) -> String {
    webhook_message(a_id, i_token, m_id)
}

pub fn relationship(u_id: &str) -> String {
    format!("{}/{}", RELATIONSHIPS, u_id)
}

pub fn relationships_mutual(u_id: &str) -> String {
    format!("{}{}/relationships", USERS, u_id)
}

pub fn invite(i_id: &str) -> String {
    format!("{}invite/{}", API, i_id)
}

pub fn integrations_join(i_id: &str) -> String {
    format!("{}integrations/{}/join", API, i_id)
}

pub fn oauth2_application(a_id: &str) -> String {
    format!("{}/{}", OAUTH2_APPLICATIONS, a_id)
}

pub fn oauth2_applications_bot(a_id: &str) -> String {
    format!("{}/{}/bot", OAUTH2_APPLICATIONS, a_id)
}

pub fn oauth2_application_assets(a_id: &str) -> String {
    format!("{}/{}/assets", OAUTH2_APPLICATIONS, a_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const V8: &str = "https://discord.com/api/v8/";

    #[test]
    fn user_is_prefix_plus_id() {
        for id in ["", "1", "80351110224678912", "@me", "not a snowflake"] {
            assert_eq!(user(id), format!("{}{}", USERS, id));
        }
    }

    #[test]
    fn user_routes() {
        assert_eq!(
            user_guild_settings("1", "2"),
            format!("{V8}users/1/guilds/2/settings")
        );
        assert_eq!(user_connections("1"), format!("{V8}users/1/connections"));
        assert_eq!(user_notes("9"), format!("{V8}users/@me/notes/9"));
    }

    #[test]
    fn guild_member_example() {
        assert_eq!(
            super::guild_member("123", "456"),
            "https://discord.com/api/v8/guilds/123/members/456"
        );
        assert_eq!(
            guild_member_role("1", "2", "3"),
            format!("{V8}guilds/1/members/2/roles/3")
        );
    }

    #[test]
    fn guild_routes() {
        assert_eq!(
            guild_integration_sync("1", "2"),
            format!("{V8}guilds/1/integrations/2/sync")
        );
        assert_eq!(guild_audit_logs("1"), format!("{V8}guilds/1/audit-logs"));
        assert_eq!(guild_emoji("1", "2"), format!("{V8}guilds/1/emojis/2"));
    }

    #[test]
    #[allow(deprecated)]
    fn guild_embed_is_widget() {
        assert_eq!(guild_embed("7"), guild_widget("7"));
        assert_eq!(guild_widget("7"), format!("{V8}guilds/7/widget"));
    }

    #[test]
    fn channel_routes() {
        assert_eq!(
            channel_message_ack("1", "2"),
            format!("{V8}channels/1/messages/2/ack")
        );
        assert_eq!(
            channel_messages_bulk_delete("1"),
            format!("{V8}channels/1/messages/bulk-delete")
        );
        assert_eq!(
            channel_message_pin("1", "2"),
            format!("{V8}channels/1/pins/2")
        );
        assert_eq!(
            channel_message_crosspost("1", "2"),
            format!("{V8}channels/1/messages/2/crosspost")
        );
        assert_eq!(channel_follow("1"), format!("{V8}channels/1/followers"));
    }

    #[test]
    fn reactions_nest_under_message() {
        assert_eq!(
            message_reaction("1", "2", "%F0%9F%91%8D", "@me"),
            format!("{V8}channels/1/messages/2/reactions/%F0%9F%91%8D/@me")
        );
        assert_eq!(
            message_reactions_all("1", "2"),
            format!("{V8}channels/1/messages/2/reactions")
        );
    }

    #[test]
    fn webhooks_and_interactions() {
        assert_eq!(
            webhook_message("1", "tok", "3"),
            format!("{V8}webhooks/1/tok/messages/3")
        );
        assert_eq!(
            interaction_response("5", "tok"),
            format!("{V8}interactions/5/tok/callback")
        );
        assert_eq!(
            interaction_response_actions("5", "tok"),
            format!("{V8}webhooks/5/tok/messages/@original")
        );
        assert_eq!(followup_message("5", "tok"), webhook_token("5", "tok"));
        assert_eq!(
            followup_message_actions("5", "tok", "6"),
            webhook_message("5", "tok", "6")
        );
    }

    #[test]
    fn application_commands() {
        assert_eq!(
            application_global_command("1", "2"),
            format!("{V8}applications/1/commands/2")
        );
        assert_eq!(
            application_guild_command("1", "2", "3"),
            format!("{V8}applications/1/guilds/2/commands/3")
        );
    }

    #[test]
    fn misc_routes() {
        assert_eq!(relationship("4"), format!("{V8}users/@me/relationships/4"));
        assert_eq!(
            relationships_mutual("4"),
            format!("{V8}users/4/relationships")
        );
        assert_eq!(invite("abc"), format!("{V8}invite/abc"));
        assert_eq!(integrations_join("1"), format!("{V8}integrations/1/join"));
        assert_eq!(
            oauth2_applications_bot("1"),
            format!("{V8}oauth2/applications/1/bot")
        );
        assert_eq!(
            oauth2_application_assets("1"),
            format!("{V8}oauth2/applications/1/assets")
        );
    }

    #[test]
    fn templates_are_pure() {
        assert_eq!(channel_message("1", "2"), channel_message("1", "2"));
        assert_eq!(guild_ban("1", "2"), guild_ban("1", "2"));
    }
}
