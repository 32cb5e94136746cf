//! Song listing and voting commands.
//!
//! These are registered so the framework can dispatch to them, but none of them
//! act yet: each logs the call and succeeds without replying.

use log::debug;
use poise::Command;

use crate::bot::Data;
use crate::bot::commands::Cog;
use crate::bot::commands::CommandRequest;
use crate::bot::commands::CommandTags;
use crate::bot::commands::Context;
use crate::bot::commands::Error;
use crate::bot::error::BotError;

pub struct SongsCog;

impl SongsCog {
    /// Lists every available song
    #[poise::command(prefix_command, aliases("showallsongs"))]
    pub async fn displaylist(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        placeholder(&CommandRequest::from_context(ctx)?, "list all songs").await
    }

    /// Lists the songs currently up for vote
    #[poise::command(prefix_command)]
    pub async fn showcurrentsongs(
        ctx: Context<'_>,
        #[rest] _args: Option<String>,
    ) -> Result<(), Error> {
        placeholder(&CommandRequest::from_context(ctx)?, "list current songs").await
    }

    #[poise::command(prefix_command)]
    pub async fn vote(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        placeholder(&CommandRequest::from_context(ctx)?, "vote").await
    }

    #[poise::command(prefix_command)]
    pub async fn search(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        placeholder(&CommandRequest::from_context(ctx)?, "search").await
    }

    #[poise::command(prefix_command)]
    pub async fn openvotes(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        placeholder(&CommandRequest::from_context(ctx)?, "open votes").await
    }

    #[poise::command(prefix_command)]
    pub async fn closevotes(ctx: Context<'_>, #[rest] _args: Option<String>) -> Result<(), Error> {
        placeholder(&CommandRequest::from_context(ctx)?, "close votes").await
    }
}

impl Cog for SongsCog {
    fn commands(&self) -> Vec<Command<Data, Error>> {
        vec![
            Self::displaylist(),
            Self::showcurrentsongs(),
            Self::vote(),
            Self::search(),
            CommandTags::PRIVILEGED.apply(Self::openvotes()),
            CommandTags::PRIVILEGED.apply(Self::closevotes()),
        ]
    }
}

/// A command whose behavior does not exist yet.
pub async fn placeholder(request: &CommandRequest<'_>, action: &str) -> Result<(), BotError> {
    debug!(
        "`{}` is not implemented, ignoring {:?} from user {}.",
        action,
        request.command.args(),
        request.message.author_id
    );
    Ok(())
}
