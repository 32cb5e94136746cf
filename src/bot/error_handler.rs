//! Turns command failures into the one reply users ever see.

use log::debug;
use log::error;
use log::info;
use log::warn;
use poise::FrameworkError;

use crate::bot::Data;
use crate::bot::commands::Context;
use crate::bot::commands::Error;
use crate::bot::commands::inbound_message;
use crate::bot::error::BotError;
use crate::bot::transport::InboundMessage;
use crate::bot::transport::Transport;
use crate::error::AppError;

/// Sent for every failure, whatever the cause.
pub const SORRY_TEXT: &str = "Sorry, something went wrong there.";

pub struct ErrorHandler;

impl ErrorHandler {
    /// Framework `on_error` hook. Unknown commands and failed admission stay silent.
    pub async fn handle(error: FrameworkError<'_, Data, Error>) {
        match error {
            FrameworkError::Command { error, ctx, .. } => Self::report(&error, ctx).await,
            FrameworkError::CommandCheckFailed {
                error: Some(error),
                ctx,
                ..
            } => Self::report(&error, ctx).await,
            FrameworkError::CommandCheckFailed { error: None, .. } => {}
            FrameworkError::UnknownCommand { msg_content, .. } => {
                debug!("Ignoring unknown command {:?}", msg_content);
            }
            FrameworkError::ArgumentParse {
                error, input, ctx, ..
            } => {
                let error = BotError::Internal {
                    msg: format!("unparsable arguments {:?}: {}", input, error),
                };
                Self::report(&error, ctx).await;
            }
            error => {
                if let Err(e) = poise::builtins::on_error(error).await {
                    error!("Error while handling error: {}", e);
                }
            }
        }
    }

    async fn report(error: &BotError, ctx: Context<'_>) {
        let command = &ctx.command().name;
        match inbound_message(ctx) {
            Some(message) => {
                Self::apologize(error, command, &message, ctx.data().transport.as_ref()).await
            }
            None => error!("`{}` failed outside a message: {:?}", command, error),
        }
    }

    /// Logs `error` with full detail and sends [`SORRY_TEXT`] to the originating channel.
    pub async fn apologize(
        error: &BotError,
        command: &str,
        message: &InboundMessage,
        transport: &dyn Transport,
    ) {
        Self::log_error(error, command, message);

        if let Err(e) = transport.send_text(message.channel_id, SORRY_TEXT).await {
            error!(
                "Failed to send apology to channel {}: {}",
                message.channel_id, e
            );
        }
    }

    fn log_error(error: &BotError, command: &str, message: &InboundMessage) {
        match error {
            BotError::Forbidden { .. } => warn!(
                "User {} denied `{}` in channel {}: {}",
                message.author_id, command, message.channel_id, error
            ),
            e if e.is_internal() => {
                AppError::log_with_ref(
                    &format!(
                        "Unexpected error in command `{}` from user {}",
                        command, message.author_id
                    ),
                    error,
                );
            }
            _ => info!(
                "Command `{}` from user {} rejected: {}",
                command, message.author_id, error
            ),
        }
    }
}
