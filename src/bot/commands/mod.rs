//! Chat commands, grouped in cogs and dispatched by the poise framework.

use log::warn;
use poise::Command;

use crate::bot::Data;
use crate::bot::error::BotError;
use crate::bot::parser::ParsedCommand;
use crate::bot::parser::parse;
use crate::bot::transport::InboundMessage;

pub mod general;
pub mod settings;
pub mod songs;

pub type Error = BotError;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub use general::GeneralCog;
pub use settings::SettingsCog;
pub use songs::SongsCog;

pub trait Cog {
    fn commands(&self) -> Vec<Command<Data, Error>>;
}

pub struct Cogs;

impl Cog for Cogs {
    fn commands(&self) -> Vec<Command<Data, Error>> {
        let general_cog = GeneralCog;
        let songs_cog = SongsCog;
        let settings_cog = SettingsCog;

        general_cog
            .commands()
            .into_iter()
            .chain(songs_cog.commands())
            .chain(settings_cog.commands())
            .collect()
    }
}

/// Whether a command needs the master role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ReadOnly,
    Privileged,
}

/// Where a command is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only in the bound channel.
    BoundChannel,
    /// Anywhere. Reserved for rebinding the channel.
    AnyChannel,
}

/// Admission rules of a command, stored in its `custom_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTags {
    pub capability: Capability,
    pub scope: Scope,
}

impl CommandTags {
    pub const READ_ONLY: Self = Self {
        capability: Capability::ReadOnly,
        scope: Scope::BoundChannel,
    };

    pub const PRIVILEGED: Self = Self {
        capability: Capability::Privileged,
        scope: Scope::BoundChannel,
    };

    /// Tags of `command`. Untagged commands are read-only and bound to the channel.
    pub fn of(command: &Command<Data, Error>) -> Self {
        command
            .custom_data
            .downcast_ref::<Self>()
            .copied()
            .unwrap_or(Self::READ_ONLY)
    }

    pub fn apply(self, mut command: Command<Data, Error>) -> Command<Data, Error> {
        command.custom_data = Box::new(self);
        command
    }
}

/// The message behind a prefix invocation. `None` for application commands.
pub fn inbound_message(ctx: Context<'_>) -> Option<InboundMessage> {
    match ctx {
        poise::Context::Prefix(prefix) => Some(InboundMessage::from(prefix.msg)),
        _ => None,
    }
}

/// Everything a command body gets to see for one invocation.
///
/// The raw content is tokenized again because poise's argument parsing collapses
/// repeated spaces, and empty arguments are significant here.
pub struct CommandRequest<'a> {
    pub data: &'a Data,
    pub message: InboundMessage,
    pub command: ParsedCommand,
}

impl<'a> CommandRequest<'a> {
    pub fn new(data: &'a Data, message: InboundMessage) -> Result<Self, BotError> {
        let command = parse(&message.content)?;
        Ok(Self {
            data,
            message,
            command,
        })
    }

    pub fn from_context(ctx: Context<'a>) -> Result<Self, BotError> {
        let message = inbound_message(ctx).ok_or_else(|| BotError::Internal {
            msg: format!("`{}` invoked without a message", ctx.command().name),
        })?;
        Self::new(ctx.data(), message)
    }

    /// Sends `text` to the channel the command came from.
    ///
    /// A failed send is logged only. By the time a reply goes out the command has
    /// already taken effect.
    pub async fn reply(&self, text: impl AsRef<str>) {
        if let Err(e) = self
            .data
            .transport
            .send_text(self.message.channel_id, text.as_ref())
            .await
        {
            warn!(
                "Failed to reply to `{}` in channel {}: {}",
                self.command.command(),
                self.message.channel_id,
                e
            );
        }
    }
}
