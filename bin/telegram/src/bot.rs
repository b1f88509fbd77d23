use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};

use crate::{
    commands::handle_command,
    config::TelegramConfig,
    handlers::handle_message,
};
use tonlens_bot_core::MemoryWalletConnectService;
use tonlens_ton_api::{TonapiClient, ToncenterClient};

pub struct TelegramBot {
    pub bot: Bot,
    pub config: TelegramConfig,
    pub toncenter: ToncenterClient,
    pub tonapi: TonapiClient,
    pub wallet: MemoryWalletConnectService,
}

impl TelegramBot {
    pub fn new(config: TelegramConfig) -> Result<Self> {
        let bot = Bot::new(config.bot_token.clone());
        let toncenter = ToncenterClient::new(config.toncenter_url.clone())?;
        let tonapi = TonapiClient::new(config.tonapi_url.clone(), config.tonapi_key.clone())?;
        let wallet = MemoryWalletConnectService::new(
            config.tonconnect_url.clone(),
            config.tonconnect_manifest_url.clone(),
        );

        Ok(Self {
            bot,
            config,
            toncenter,
            tonapi,
            wallet,
        })
    }

    /// Run the Telegram bot with long-polling.
    pub async fn run(self) -> Result<()> {
        info!("Starting Telegram bot...");

        let bot = Arc::new(self);

        let handler = dptree::entry().branch(Update::filter_message().endpoint(
            |msg: Message, bot_ref: Arc<TelegramBot>| async move {
                // First try to handle as a command
                match handle_command(&bot_ref, &msg).await {
                    Ok(true) => {
                        // Command was handled
                        return respond(());
                    }
                    Ok(false) => {
                        // Not a command, continue to normal handling
                    }
                    Err(e) => {
                        error!("Error handling command: {}", e);
                        return respond(());
                    }
                }

                // Handle as normal message
                if let Err(e) = handle_message(&bot_ref, &msg).await {
                    error!("Error handling message: {}", e);
                }
                respond(())
            },
        ));

        // Build and run dispatcher with long-polling
        Dispatcher::builder(bot.bot.clone(), handler)
            .dependencies(dptree::deps![bot.clone()])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram bot stopped");
        Ok(())
    }
}
