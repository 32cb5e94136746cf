//! Read-only commands: help text and a diagnostic greeting.

use poise::Command;

use crate::bot::Data;
use crate::bot::commands::Cog;
use crate::bot::commands::CommandRequest;
use crate::bot::commands::Context;
use crate::bot::commands::Error;
use crate::bot::error::BotError;

pub const HELP_TEXT: &str = "Votebot manages voting on what songs are available. Commands:
**!help** Prints this help text.
**!vote** {song number} Votes for a song by its number.
**!displayList** Prints the entire list of available songs.
**!search** {text} Search for a song with a sub-string of the title or artist.";

pub struct GeneralCog;

impl GeneralCog {
    /// Prints the command overview
    #[poise::command(prefix_command)]
    pub async fn help(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        send_help(&CommandRequest::from_context(ctx)?).await
    }

    /// Shows catalog size and uptime
    #[poise::command(prefix_command)]
    pub async fn hello(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        report_status(&CommandRequest::from_context(ctx)?).await
    }
}

impl Cog for GeneralCog {
    fn commands(&self) -> Vec<Command<Data, Error>> {
        vec![Self::help(), Self::hello()]
    }
}

pub async fn send_help(request: &CommandRequest<'_>) -> Result<(), BotError> {
    request.reply(HELP_TEXT).await;
    Ok(())
}

/// Replies with the catalog size and uptime, proving the bot and its catalog are alive.
pub async fn report_status(request: &CommandRequest<'_>) -> Result<(), BotError> {
    let songs = request.data.services.catalog.all_songs().await?;

    let uptime = request.data.start_time.elapsed().as_secs();
    let hours = uptime / 3600;
    let minutes = (uptime % 3600) / 60;
    let seconds = uptime % 60;

    request
        .reply(format!(
            "World! Songs:{} Uptime: {hours}h {minutes}m {seconds}s",
            songs.len()
        ))
        .await;
    Ok(())
}
