use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod commands;
mod config;
mod handlers;
mod health;
mod lookup;
mod send;
mod session;

use bot::TelegramBot;
use config::TelegramConfig;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "telegram")]
#[command(about = "Telegram bot for TON wallet lookups")]
struct Cli {
    /// Path to bot config TOML (overrides BOT_CONFIG_PATH)
    #[arg(long)]
    bot_config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load config from bot.toml when a path is given, else from env
    let config = match cli
        .bot_config
        .or_else(|| std::env::var("BOT_CONFIG_PATH").ok())
    {
        Some(path) => TelegramConfig::from_path(&path)?,
        None => TelegramConfig::from_env()?,
    };

    // Liveness endpoint for the hosting platform, alongside the dispatcher
    let health_port = config.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(health_port).await {
            tracing::error!("Liveness endpoint failed: {}", e);
        }
    });

    // Create and run the bot
    let bot = TelegramBot::new(config)?;
    bot.run().await
}
