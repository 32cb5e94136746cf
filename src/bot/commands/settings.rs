//! Commands that change the runtime settings. All of them are privileged.

use log::info;
use poise::Command;

use crate::bot::Data;
use crate::bot::commands::Capability;
use crate::bot::commands::Cog;
use crate::bot::commands::CommandRequest;
use crate::bot::commands::CommandTags;
use crate::bot::commands::Context;
use crate::bot::commands::Error;
use crate::bot::commands::Scope;
use crate::bot::error::BotError;
use crate::model::LimitSetting;

pub struct SettingsCog;

impl SettingsCog {
    /// Binds the bot to this channel
    #[poise::command(prefix_command)]
    pub async fn setchannel(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        bind_channel(&CommandRequest::from_context(ctx)?).await
    }

    #[poise::command(prefix_command)]
    pub async fn setsonglimit(
        ctx: Context<'_>,
        #[rest] _args: Option<String>,
    ) -> Result<(), Error> {
        set_limit(&CommandRequest::from_context(ctx)?, LimitSetting::SongLimit).await
    }

    #[poise::command(prefix_command)]
    pub async fn setvotecount(
        ctx: Context<'_>,
        #[rest] _args: Option<String>,
    ) -> Result<(), Error> {
        set_limit(&CommandRequest::from_context(ctx)?, LimitSetting::VotesPerUser).await
    }

    #[poise::command(prefix_command)]
    pub async fn setpateronvotecount(
        ctx: Context<'_>,
        #[rest] _args: Option<String>,
    ) -> Result<(), Error> {
        set_limit(&CommandRequest::from_context(ctx)?, LimitSetting::VotesPerPatron).await
    }
}

impl Cog for SettingsCog {
    fn commands(&self) -> Vec<Command<Data, Error>> {
        let rebind = CommandTags {
            capability: Capability::Privileged,
            scope: Scope::AnyChannel,
        };
        vec![
            rebind.apply(Self::setchannel()),
            CommandTags::PRIVILEGED.apply(Self::setsonglimit()),
            CommandTags::PRIVILEGED.apply(Self::setvotecount()),
            CommandTags::PRIVILEGED.apply(Self::setpateronvotecount()),
        ]
    }
}

/// Binds the bot to the channel the command was sent in.
pub async fn bind_channel(request: &CommandRequest<'_>) -> Result<(), BotError> {
    let channel_id = request.message.channel_id;
    let channel = request.data.transport.channel_info(channel_id).await?;
    let guild_id = channel.guild_id.ok_or(BotError::NotInGuild)?;

    request.data.services.settings.set_channel(channel_id).await?;
    info!(
        "Text channel set to \"{}\" ({}) in guild with ID: {}",
        channel.name, channel_id, guild_id
    );

    request
        .reply(format!("New text channel set to {}", channel.name))
        .await;
    Ok(())
}

/// Overwrites one integer setting with the first argument.
pub async fn set_limit(request: &CommandRequest<'_>, setting: LimitSetting) -> Result<(), BotError> {
    let value = parse_value(setting, request.command.arg(0))?;

    let updated = request.data.services.settings.set_limit(setting, value).await?;
    let value = updated.limit(setting);
    info!("{} set to {}", setting, value);

    request.reply(format!("{} set to {}", setting, value)).await;
    Ok(())
}

/// Base-10 parse of the first argument. Any integer is accepted, including zero and negatives.
fn parse_value(setting: LimitSetting, arg: Option<&str>) -> Result<i64, BotError> {
    let input = arg.ok_or(BotError::MissingArgument { setting })?;
    input.parse::<i64>().map_err(|_| BotError::InvalidNumber {
        setting,
        input: input.to_string(),
    })
}
