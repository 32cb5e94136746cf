//! Discord client wiring and the poise framework setup.

pub mod checks;
pub mod commands;
pub mod error;
pub mod error_handler;
pub mod parser;
pub mod scope;
pub mod transport;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use anyhow::Result;
use anyhow::anyhow;
use futures::lock::Mutex;
use log::info;
use poise::Framework;
use poise::FrameworkOptions;
use poise::PrefixFrameworkOptions;
use poise::serenity_prelude::ClientBuilder;
use poise::serenity_prelude::GatewayIntents;
use poise::serenity_prelude::Http;
use poise::serenity_prelude::ShardManager;
use tokio::task::JoinHandle;

use crate::bot::commands::Cog;
use crate::bot::commands::Cogs;
use crate::bot::commands::Error;
use crate::bot::error_handler::ErrorHandler;
use crate::bot::transport::SerenityTransport;
use crate::bot::transport::Transport;
use crate::config::Config;
use crate::service::Services;

/// Process-wide state shared by every command. Built once in [`Bot::new`].
pub struct Data {
    pub services: Arc<Services>,
    pub transport: Arc<dyn Transport>,
    pub start_time: Instant,
}

/// Discord bot client.
pub struct Bot {
    client_builder: Option<ClientBuilder>,
    shard_manager: Arc<Mutex<Option<Arc<ShardManager>>>>,
}

impl Bot {
    pub fn new(config: Arc<Config>, services: Arc<Services>) -> Result<Self> {
        info!("Initializing bot...");

        let http = Arc::new(Http::new(&config.discord_token));
        let data = Data {
            services,
            transport: Arc::new(SerenityTransport::new(http)),
            start_time: Instant::now(),
        };

        let framework = Self::create_framework(&config, data);
        let client_builder =
            ClientBuilder::new(&config.discord_token, Self::intents()).framework(framework);

        Ok(Self {
            client_builder: Some(client_builder),
            shard_manager: Arc::new(Mutex::new(None)),
        })
    }

    /// Starts the bot client in a background task.
    ///
    /// The handle resolves once the client stops, with the error that stopped it.
    pub fn start(&mut self) -> Result<JoinHandle<Result<()>>> {
        info!("Starting bot client...");
        let client_builder = self
            .client_builder
            .take()
            .ok_or_else(|| anyhow!("Bot client already started"))?;
        let shard_manager = self.shard_manager.clone();

        let handle = tokio::spawn(async move {
            info!("Connecting bot to Discord...");
            let mut client = client_builder
                .await
                .context("Failed to build Discord client")?;

            *shard_manager.lock().await = Some(client.shard_manager.clone());
            info!("Bot connected to Discord.");

            client.start().await.context("Bot client crashed")
        });

        info!("Bot client start initiated.");
        Ok(handle)
    }

    /// Closes every shard. Does nothing if the client never connected.
    pub async fn shutdown(&self) {
        if let Some(shard_manager) = self.shard_manager.lock().await.take() {
            info!("Shutting down shards...");
            shard_manager.shutdown_all().await;
        }
    }

    fn create_framework(config: &Config, data: Data) -> Framework<Data, Error> {
        let cogs = Cogs;
        let options = FrameworkOptions::<Data, Error> {
            commands: cogs.commands(),
            on_error: |error| Box::pin(ErrorHandler::handle(error)),
            command_check: Some(|ctx| Box::pin(checks::command_check(ctx))),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                mention_as_prefix: false,
                case_insensitive_commands: true,
                execute_self_messages: false,
                ignore_bots: false,
                ..Default::default()
            },
            ..Default::default()
        };

        Framework::builder()
            .options(options)
            .setup(move |_ctx, ready, _framework| {
                Box::pin(async move {
                    info!(
                        "Bot is ready as {} in {} guilds.",
                        ready.user.name,
                        ready.guilds.len()
                    );
                    Ok(data)
                })
            })
            .build()
    }

    fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}
