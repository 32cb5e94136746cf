//! The chat-platform boundary: inbound messages and outbound replies.

use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude::Channel;
use poise::serenity_prelude::ChannelId;
use poise::serenity_prelude::Http;
use poise::serenity_prelude::Message;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("Discord API error: {0}")]
    Discord(#[from] Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for TransportError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        TransportError::Discord(Box::new(err))
    }
}

/// A message as the commands see it, detached from the transport's types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundMessage {
    pub author_id: u64,
    pub channel_id: u64,
    pub content: String,
    /// Roles of the issuing member. Empty outside guilds.
    pub roles: Vec<u64>,
}

impl From<&Message> for InboundMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_id: message.author.id.get(),
            channel_id: message.channel_id.get(),
            content: message.content.clone(),
            roles: message
                .member
                .as_ref()
                .map(|member| member.roles.iter().map(|role| role.get()).collect())
                .unwrap_or_default(),
        }
    }
}

/// Channel metadata needed for rebinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelInfo {
    pub name: String,
    /// Parent guild, `None` for direct messages.
    pub guild_id: Option<u64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_text(&self, channel_id: u64, text: &str) -> Result<(), TransportError>;

    async fn channel_info(&self, channel_id: u64) -> Result<ChannelInfo, TransportError>;
}

/// [`Transport`] backed by the Discord REST API.
pub struct SerenityTransport {
    http: Arc<Http>,
}

impl SerenityTransport {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for SerenityTransport {
    async fn send_text(&self, channel_id: u64, text: &str) -> Result<(), TransportError> {
        ChannelId::new(channel_id).say(&self.http, text).await?;
        Ok(())
    }

    async fn channel_info(&self, channel_id: u64) -> Result<ChannelInfo, TransportError> {
        let info = match self.http.get_channel(ChannelId::new(channel_id)).await? {
            Channel::Guild(channel) => ChannelInfo {
                name: channel.name,
                guild_id: Some(channel.guild_id.get()),
            },
            Channel::Private(channel) => ChannelInfo {
                name: channel.name(),
                guild_id: None,
            },
            _ => ChannelInfo::default(),
        };
        Ok(info)
    }
}
