//! Slash command handlers.

use anyhow::Result;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::Requester;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, Message, ParseMode};
use tracing::info;

use crate::{bot::TelegramBot, session::message_session_key};
use tonlens_bot_core::WalletConnectService;

/// Check if a message is a command and return the command name and args.
pub fn parse_command(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with('/') {
        return None;
    }

    let text = text.trim();
    let mut parts = text.splitn(2, |c: char| c.is_whitespace());
    let cmd = parts.next()?.trim_start_matches('/');
    let args = parts.next().unwrap_or("").trim();

    // Remove @botname suffix if present
    let cmd = cmd.split('@').next()?;

    Some((cmd, args))
}

/// Dispatch a command message. Returns `Ok(false)` when the text is not a
/// command this bot knows, so the caller can treat it as a normal message.
pub async fn handle_command(bot: &TelegramBot, message: &Message) -> Result<bool> {
    let text = message.text().unwrap_or("");
    let Some((command, _args)) = parse_command(text) else {
        return Ok(false);
    };

    match command {
        "start" => {
            bot.bot
                .send_message(
                    message.chat.id,
                    "👋 Send me a TON wallet address and I'll fetch balance, Jettons, and NFTs!",
                )
                .await?;
            Ok(true)
        }
        "help" => {
            handle_help(bot, message).await?;
            Ok(true)
        }
        "connect" => {
            handle_connect(bot, message).await?;
            Ok(true)
        }
        "wallet" => {
            handle_wallet(bot, message).await?;
            Ok(true)
        }
        "disconnect" => {
            handle_disconnect(bot, message).await?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Handle /help command.
async fn handle_help(bot: &TelegramBot, message: &Message) -> Result<()> {
    bot.bot
        .send_message(
            message.chat.id,
            "🤖 TonLens Commands\n\n\
            /start - Show the greeting\n\
            /connect - Link your wallet\n\
            /wallet - Show the linked wallet\n\
            /disconnect - Unlink your wallet\n\
            /help - Show this message\n\n\
            Send a wallet address (EQ... or UQ...) to look up its balance, \
            Jettons, and NFTs.",
        )
        .await?;

    Ok(())
}

/// Handle /connect command: start a wallet handshake and send the link.
async fn handle_connect(bot: &TelegramBot, message: &Message) -> Result<()> {
    if bot.config.tonconnect_manifest_url.is_none() {
        bot.bot
            .send_message(
                message.chat.id,
                "Wallet connect is not configured. Ask admin to set TONCONNECT_MANIFEST_URL.",
            )
            .await?;
        return Ok(());
    }

    let Some(session_key) = message_session_key(message) else {
        return Ok(());
    };

    let request = bot.wallet.begin_connect(&session_key).await?;
    info!("Wallet handshake started for session {}", session_key);

    let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        "Connect Wallet",
        request.connect_url.parse()?,
    )]]);

    bot.bot
        .send_message(
            message.chat.id,
            "Open the button below in your TON wallet to connect:",
        )
        .reply_markup(keyboard)
        .await?;

    Ok(())
}

/// Handle /wallet command: show the bound wallet, if any.
async fn handle_wallet(bot: &TelegramBot, message: &Message) -> Result<()> {
    let Some(session_key) = message_session_key(message) else {
        return Ok(());
    };

    match bot.wallet.bound_wallet(&session_key).await? {
        Some(address) => {
            bot.bot
                .send_message(
                    message.chat.id,
                    format!("<b>Connected wallet:</b>\n\n<code>{}</code>", address),
                )
                .parse_mode(ParseMode::Html)
                .await?;
        }
        None => {
            bot.bot
                .send_message(message.chat.id, "No wallet connected. Use /connect first.")
                .await?;
        }
    }

    Ok(())
}

/// Handle /disconnect command.
async fn handle_disconnect(bot: &TelegramBot, message: &Message) -> Result<()> {
    let Some(session_key) = message_session_key(message) else {
        return Ok(());
    };

    bot.wallet.disconnect(&session_key).await?;
    bot.bot
        .send_message(message.chat.id, "Wallet disconnected.")
        .await?;

    Ok(())
}
