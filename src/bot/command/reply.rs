use serenity::all::{CreateEmbed, CreateEmbedFooter, CreateMessage};

use crate::model::{pool::Pool, pooled_role::PooledRole};

/// Discord "blurple" used for every embed the bot sends.
pub const EMBED_COLOUR: u32 = 0x7289DA;

const POOLED_ROLES_TITLE: &str = "Pooled Roles:";

/// Discord rejects embed field values longer than this.
const FIELD_VALUE_LIMIT: usize = 1024;

/// Content of a command reply, independent of serenity's builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(ReplyEmbed),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEmbed {
    pub title: String,
    pub description: Option<String>,
    /// Field name and value pairs, rendered inline.
    pub fields: Vec<(String, String)>,
    pub footer: Option<String>,
}

impl Reply {
    pub fn into_message(self) -> CreateMessage {
        match self {
            Reply::Text(content) => CreateMessage::new().content(content),
            Reply::Embed(embed) => CreateMessage::new().embed(embed.into_create_embed()),
        }
    }
}

impl ReplyEmbed {
    pub fn into_create_embed(self) -> CreateEmbed {
        let mut embed = CreateEmbed::new().title(self.title).colour(EMBED_COLOUR);

        if let Some(description) = self.description {
            embed = embed.description(description);
        }

        for (name, value) in self.fields {
            embed = embed.field(name, value, true);
        }

        if let Some(footer) = self.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }

        embed
    }
}

/// Builds the `pooled_roles` listing with one field per pool.
///
/// A pool whose lines do not fit into a single field continues in further fields
/// with the same name.
pub fn pooled_roles_embed<'a>(
    pools: impl IntoIterator<Item = (Pool, &'a [PooledRole])>,
) -> ReplyEmbed {
    let mut fields = Vec::new();

    for (pool, roles) in pools {
        let mut value = String::new();

        for role in roles {
            let line = format!("`{}({})`", role.role_name, role.guild_name);

            if !value.is_empty() && value.len() + 1 + line.len() > FIELD_VALUE_LIMIT {
                fields.push((pool.to_string(), std::mem::take(&mut value)));
            }
            if !value.is_empty() {
                value.push('\n');
            }
            value.push_str(&line);
        }

        if !value.is_empty() {
            fields.push((pool.to_string(), value));
        }
    }

    ReplyEmbed {
        title: POOLED_ROLES_TITLE.to_string(),
        description: None,
        fields,
        footer: None,
    }
}

/// Listing embed carrying only a message, used when there is nothing to list.
pub fn pooled_roles_notice(description: String) -> ReplyEmbed {
    ReplyEmbed {
        title: POOLED_ROLES_TITLE.to_string(),
        description: Some(description),
        fields: Vec::new(),
        footer: None,
    }
}

/// Announcement sent before a guild resync starts.
pub fn resync_embed() -> ReplyEmbed {
    ReplyEmbed {
        title: "Resyncing roles for users in this server".to_string(),
        description: Some("This may take some time to complete...".to_string()),
        fields: Vec::new(),
        footer: Some("It's recommended you don't run this command frequently.".to_string()),
    }
}
