//! Message handlers for routing Telegram updates.

use anyhow::Result;
use teloxide::prelude::Requester;
use teloxide::types::{ChatAction, Message, MessageEntityKind};
use tracing::{debug, info, warn};

use crate::{
    bot::TelegramBot,
    config::{DmPolicy, GroupPolicy},
    lookup::wallet_report,
    send::format_reply,
    session::user_id_from_message,
};

/// Main message handler that routes based on chat type.
pub async fn handle_message(bot: &TelegramBot, message: &Message) -> Result<()> {
    let chat = &message.chat;

    if chat.is_private() {
        handle_dm(bot, message).await
    } else if chat.is_group() || chat.is_supergroup() {
        handle_group(bot, message).await
    } else if chat.is_channel() {
        debug!("Ignoring channel message");
        Ok(())
    } else {
        debug!("Unknown chat type, ignoring");
        Ok(())
    }
}

/// Handle direct message (DM) from a user.
async fn handle_dm(bot: &TelegramBot, message: &Message) -> Result<()> {
    let user_id = match user_id_from_message(message) {
        Some(uid) => uid,
        None => {
            warn!("DM message has no sender, ignoring");
            return Ok(());
        }
    };

    // Check DM policy
    match bot.config.dm_policy {
        DmPolicy::Disabled => {
            debug!("DM policy is disabled, ignoring message from {}", user_id);
            return Ok(());
        }
        DmPolicy::Allowlist => {
            if !bot.config.is_allowlisted(user_id.0 as i64) {
                debug!("User {} not in allowlist, ignoring DM", user_id);
                return Ok(());
            }
        }
        DmPolicy::Open => {}
    }

    let text = message.text().unwrap_or("");

    info!("Processing DM from user {}: {}", user_id, text);

    lookup_and_reply(bot, message, text).await
}

/// Handle group message (group or supergroup).
async fn handle_group(bot: &TelegramBot, message: &Message) -> Result<()> {
    let user_id = match user_id_from_message(message) {
        Some(uid) => uid,
        None => {
            debug!("Group message has no sender, ignoring");
            return Ok(());
        }
    };

    // Check group policy
    let should_process = match bot.config.group_policy {
        GroupPolicy::Disabled => {
            debug!("Group policy is disabled, ignoring message");
            return Ok(());
        }
        GroupPolicy::Always => true,
        GroupPolicy::Mention => is_bot_mentioned(&bot.bot, message).await?,
    };

    if !should_process {
        debug!("Bot not mentioned in group message, ignoring");
        return Ok(());
    }

    let text = message.text().unwrap_or("");

    info!(
        "Processing group message from user {} in chat {}: {}",
        user_id, message.chat.id, text
    );

    lookup_and_reply(bot, message, text).await
}

/// Superficial shape check for a TON wallet address.
pub fn looks_like_ton_address(text: &str) -> bool {
    text.starts_with("EQ") || text.starts_with("UQ")
}

/// Drop a leading `@mention` token so group messages can carry an address
/// after the bot's name.
pub fn strip_leading_mention(text: &str) -> &str {
    let text = text.trim();
    match text.strip_prefix('@') {
        Some(rest) => match rest.split_once(char::is_whitespace) {
            Some((_, tail)) => tail.trim(),
            None => "",
        },
        None => text,
    }
}

/// Validate the address, fetch the three sections, and reply.
async fn lookup_and_reply(bot: &TelegramBot, message: &Message, text: &str) -> Result<()> {
    let address = strip_leading_mention(text);

    if !looks_like_ton_address(address) {
        bot.bot
            .send_message(
                message.chat.id,
                "❌ That doesn't look like a valid TON wallet address.",
            )
            .await?;
        return Ok(());
    }

    bot.bot
        .send_message(message.chat.id, "🔎 Fetching wallet data...")
        .await?;
    bot.bot
        .send_chat_action(message.chat.id, ChatAction::Typing)
        .await?;

    let report = wallet_report(bot, address).await;

    for chunk in format_reply(&report) {
        bot.bot.send_message(message.chat.id, chunk).await?;
    }

    Ok(())
}

/// Check if the bot is mentioned in a message.
async fn is_bot_mentioned(bot: &teloxide::Bot, message: &Message) -> Result<bool> {
    let me = bot.get_me().await?;
    let bot_username: Option<&str> = me.username.as_deref();

    // Check if message is a reply to the bot
    if let Some(reply_to) = &message.reply_to_message()
        && let Some(ref from) = reply_to.from
        && from.id == me.id
    {
        return Ok(true);
    }

    // Check for mentions in entities
    if let Some(entities) = message.entities() {
        for entity in entities {
            if let MessageEntityKind::Mention = entity.kind
                && let Some(text) = message.text()
            {
                let start = entity.offset;
                let end = start + entity.length;
                if let Some(mention) = text.get(start..end) {
                    let mentioned_username = mention.trim_start_matches('@');
                    if let Some(bot_user) = bot_username
                        && mentioned_username == bot_user
                    {
                        return Ok(true);
                    }
                }
            }
        }
    }

    Ok(false)
}
