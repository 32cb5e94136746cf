//! Admission checks run by the framework before any command body.

use log::debug;

use crate::bot::commands::Capability;
use crate::bot::commands::CommandTags;
use crate::bot::commands::Context;
use crate::bot::commands::Error;
use crate::bot::commands::Scope;
use crate::bot::commands::inbound_message;
use crate::bot::error::BotError;
use crate::bot::parser::parse;
use crate::bot::scope::is_in_scope;
use crate::bot::transport::InboundMessage;
use crate::model::BotSettings;

/// Why a message was dropped without a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    TooShort,
    OutOfChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Ignored(IgnoreReason),
}

/// Framework-wide `command_check`.
///
/// `Ok(false)` drops the invocation silently; an error is reported like a failed command.
pub async fn command_check(ctx: Context<'_>) -> Result<bool, Error> {
    let Some(message) = inbound_message(ctx) else {
        return Ok(true);
    };
    let tags = CommandTags::of(ctx.command());
    let settings = ctx.data().services.settings.snapshot().await;

    match admit(&message, tags, &settings)? {
        Admission::Admitted => Ok(true),
        Admission::Ignored(reason) => {
            debug!(
                "`{}` from user {} in channel {} ignored: {:?}",
                ctx.command().name,
                message.author_id,
                message.channel_id,
                reason
            );
            Ok(false)
        }
    }
}

/// Length check, then channel scope unless the command is exempt, then the role check
/// for privileged commands.
pub fn admit(
    message: &InboundMessage,
    tags: CommandTags,
    settings: &BotSettings,
) -> Result<Admission, BotError> {
    if parse(&message.content).is_err() {
        return Ok(Admission::Ignored(IgnoreReason::TooShort));
    }

    if tags.scope == Scope::BoundChannel && !is_in_scope(message.channel_id, settings.channel_id) {
        return Ok(Admission::Ignored(IgnoreReason::OutOfChannel));
    }

    if tags.capability == Capability::Privileged {
        check_master_role(&message.roles, settings.master_role_id)?;
    }

    Ok(Admission::Admitted)
}

/// Plain membership test. Roles have no hierarchy.
pub fn has_required_role(member_roles: &[u64], required_role: u64) -> bool {
    member_roles.contains(&required_role)
}

/// Fails with [`BotError::Forbidden`] unless the member holds the master role.
///
/// The reason only reaches the logs; callers see the generic apology.
pub fn check_master_role(
    member_roles: &[u64],
    master_role_id: Option<u64>,
) -> Result<(), BotError> {
    match master_role_id {
        Some(role_id) if has_required_role(member_roles, role_id) => Ok(()),
        Some(role_id) => Err(BotError::Forbidden {
            reason: format!("member is missing required role {}", role_id),
        }),
        None => Err(BotError::Forbidden {
            reason: "no master role is configured".to_string(),
        }),
    }
}
