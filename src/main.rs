//! Application entry point for votebot.
//!
//! Initializes all components and starts the Discord bot.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use anyhow::bail;
use dotenv::dotenv;
use log::debug;
use log::info;
use tokio::task::JoinHandle;
use votebot::bot::Bot;
use votebot::config::Config;
use votebot::logging::setup_logging;
use votebot::repository::JsonFileRepository;
use votebot::service::Services;
use votebot::service::catalog_service::InMemoryCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let init_start = Instant::now();
    let config = load_config()?;
    let services = setup_services(&config).await?;
    let mut bot = Bot::new(config, services)?;
    let client = bot.start()?;
    info!(
        "Bot setup complete ({:.2}s).",
        init_start.elapsed().as_secs_f64()
    );

    run(&bot, client, init_start).await
}

fn load_config() -> Result<Arc<Config>> {
    let mut config = Config::new();
    config.load()?;
    setup_logging(&config)?;
    info!("Starting votebot...");
    Ok(Arc::new(config))
}

async fn setup_services(config: &Config) -> Result<Arc<Services>> {
    debug!(
        "Loading settings from \"{}\"...",
        config.settings_path.display()
    );
    let repo = Arc::new(JsonFileRepository::new(&config.settings_path));
    let catalog = Arc::new(InMemoryCatalog::default());
    Ok(Arc::new(Services::new(repo, catalog).await?))
}

/// Waits for Ctrl+C or for the client to stop on its own, whichever comes first.
async fn run(bot: &Bot, client: JoinHandle<Result<()>>, init_start: Instant) -> Result<()> {
    info!(
        "votebot is up in {:.2}s. Press Ctrl+C to stop.",
        init_start.elapsed().as_secs_f64()
    );

    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Ctrl+C received, shutting down.");
            bot.shutdown().await;
            Ok(())
        }
        stopped = client => {
            stopped??;
            bail!("Bot client stopped unexpectedly")
        }
    }
}
