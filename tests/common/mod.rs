use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::RwLock;
use std::time::Instant;

use async_trait::async_trait;
use poise::Command;
use uuid::Uuid;
use votebot::bot::Data;
use votebot::bot::checks::Admission;
use votebot::bot::checks::IgnoreReason;
use votebot::bot::checks::admit;
use votebot::bot::commands::Cog;
use votebot::bot::commands::CommandRequest;
use votebot::bot::commands::CommandTags;
use votebot::bot::commands::Cogs;
use votebot::bot::commands::Error;
use votebot::bot::commands::general::report_status;
use votebot::bot::commands::general::send_help;
use votebot::bot::commands::settings::bind_channel;
use votebot::bot::commands::settings::set_limit;
use votebot::bot::commands::songs::placeholder;
use votebot::bot::error::BotError;
use votebot::bot::error_handler::ErrorHandler;
use votebot::bot::transport::ChannelInfo;
use votebot::bot::transport::InboundMessage;
use votebot::bot::transport::Transport;
use votebot::bot::transport::TransportError;
use votebot::model::BotSettings;
use votebot::model::LimitSetting;
use votebot::repository::JsonFileRepository;
use votebot::repository::SettingsRepository;
use votebot::service::Services;
use votebot::service::catalog_service::InMemoryCatalog;

pub const BOT_ID: u64 = 1;
pub const BOUND_CHANNEL: u64 = 100;
pub const OTHER_CHANNEL: u64 = 200;
pub const DM_CHANNEL: u64 = 300;
pub const GUILD_ID: u64 = 50;
pub const MASTER_ROLE: u64 = 900;
pub const PREFIX: &str = "!";

pub fn temp_settings_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("votebot-test-{}", Uuid::new_v4()))
        .join("settings.json")
}

pub fn teardown(path: &Path) {
    if let Some(dir) = path.parent()
        && dir.exists()
    {
        let _ = std::fs::remove_dir_all(dir);
    }
}

pub fn initial_settings() -> BotSettings {
    BotSettings {
        channel_id: Some(BOUND_CHANNEL),
        master_role_id: Some(MASTER_ROLE),
        song_limit: 10,
        votes_per_user: 3,
        votes_per_patron: 6,
    }
}

#[allow(dead_code)]
pub async fn settings_on_disk(path: &Path) -> BotSettings {
    JsonFileRepository::new(path)
        .load()
        .await
        .expect("Failed to read settings back")
}

// RECORDING TRANSPORT

/// Transport fake that records every attempted send.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingTransport {
    pub sent: RwLock<Vec<(u64, String)>>,
    fail_sends: bool,
}

#[allow(dead_code)]
impl RecordingTransport {
    /// A transport whose sends are recorded and then fail.
    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(u64, String)> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, channel_id: u64, text: &str) -> Result<(), TransportError> {
        self.sent.write().unwrap().push((channel_id, text.to_string()));
        if self.fail_sends {
            return Err(TransportError::Discord(Box::new(
                poise::serenity_prelude::Error::Other("connection reset"),
            )));
        }
        Ok(())
    }

    async fn channel_info(&self, channel_id: u64) -> Result<ChannelInfo, TransportError> {
        Ok(match channel_id {
            DM_CHANNEL => ChannelInfo {
                name: "direct".to_string(),
                guild_id: None,
            },
            id => ChannelInfo {
                name: format!("channel-{}", id),
                guild_id: Some(GUILD_ID),
            },
        })
    }
}

// FRAMEWORK HARNESS

/// How a message ended up after going through [`Harness::send`].
#[derive(Debug)]
#[allow(dead_code)]
pub enum Outcome {
    Completed(String),
    Failed(String, BotError),
    Ignored(IgnoreReason),
    SelfMessage,
    UnknownCommand,
}

#[allow(dead_code)]
impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

/// The registered commands and a [`Data`] over a real JSON settings file.
///
/// [`Harness::send`] walks a message through the same steps the framework takes:
/// self-message filter, prefix, case-insensitive lookup by name or alias,
/// `command_check`, command body and `on_error`.
#[allow(dead_code)]
pub struct Harness {
    pub data: Data,
    pub commands: Vec<Command<Data, Error>>,
    pub transport: Arc<RecordingTransport>,
    pub settings_path: PathBuf,
}

#[allow(dead_code)]
impl Harness {
    pub async fn send(&self, message: &InboundMessage) -> Outcome {
        if message.author_id == BOT_ID {
            return Outcome::SelfMessage;
        }
        let Some(command) = self.find(&message.content) else {
            return Outcome::UnknownCommand;
        };
        let name = command.name.clone();

        let settings = self.data.services.settings.snapshot().await;
        let result = match admit(message, CommandTags::of(command), &settings) {
            Ok(Admission::Ignored(reason)) => return Outcome::Ignored(reason),
            Ok(Admission::Admitted) => self.execute(&name, message.clone()).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Outcome::Completed(name),
            Err(error) => {
                ErrorHandler::apologize(&error, &name, message, self.transport.as_ref()).await;
                Outcome::Failed(name, error)
            }
        }
    }

    pub async fn snapshot(&self) -> BotSettings {
        self.data.services.settings.snapshot().await
    }

    fn find(&self, content: &str) -> Option<&Command<Data, Error>> {
        let word = content.strip_prefix(PREFIX)?.split(' ').next()?;
        self.commands.iter().find(|command| {
            command.name.eq_ignore_ascii_case(word)
                || command.aliases.iter().any(|a| a.eq_ignore_ascii_case(word))
        })
    }

    async fn execute(&self, name: &str, message: InboundMessage) -> Result<(), BotError> {
        let request = CommandRequest::new(&self.data, message)?;
        match name {
            "help" => send_help(&request).await,
            "hello" => report_status(&request).await,
            "displaylist" => placeholder(&request, "list all songs").await,
            "showcurrentsongs" => placeholder(&request, "list current songs").await,
            "vote" => placeholder(&request, "vote").await,
            "search" => placeholder(&request, "search").await,
            "openvotes" => placeholder(&request, "open votes").await,
            "closevotes" => placeholder(&request, "close votes").await,
            "setchannel" => bind_channel(&request).await,
            "setsonglimit" => set_limit(&request, LimitSetting::SongLimit).await,
            "setvotecount" => set_limit(&request, LimitSetting::VotesPerUser).await,
            "setpateronvotecount" => set_limit(&request, LimitSetting::VotesPerPatron).await,
            other => panic!("No command body wired for `{}`", other),
        }
    }
}

pub async fn setup_harness(settings: BotSettings) -> Harness {
    setup_harness_with(settings, RecordingTransport::default()).await
}

/// Harness over a fresh settings file seeded with `settings`.
pub async fn setup_harness_with(settings: BotSettings, transport: RecordingTransport) -> Harness {
    let settings_path = temp_settings_path();
    JsonFileRepository::new(&settings_path)
        .save(&settings)
        .await
        .expect("Failed to seed settings");

    let transport = Arc::new(transport);
    let services = Services::new(
        Arc::new(JsonFileRepository::new(&settings_path)),
        Arc::new(InMemoryCatalog::default()),
    )
    .await
    .expect("Failed to create services");

    let data = Data {
        services: Arc::new(services),
        transport: transport.clone(),
        start_time: Instant::now(),
    };

    Harness {
        data,
        commands: Cogs.commands(),
        transport,
        settings_path,
    }
}

pub fn message(channel_id: u64, content: &str, roles: &[u64]) -> InboundMessage {
    InboundMessage {
        author_id: 42,
        channel_id,
        content: content.to_string(),
        roles: roles.to_vec(),
    }
}
