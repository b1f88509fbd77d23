//! Session key helpers for Telegram conversations.
//!
//! Wraps bot-core session utilities for Telegram-specific types.

use teloxide::types::{ChatId, Message, UserId};
use tonlens_bot_core::{Platform, PlatformKeyBuilder};

/// Builds a session key for a direct message thread.
///
/// Format: `telegram:dm:{user_id}`
pub fn dm_session_key(user_id: UserId) -> String {
    PlatformKeyBuilder::new(Platform::Telegram)
        .dm(user_id.0.to_string())
        .build()
}

/// Builds a session key for a group chat thread.
///
/// Format: `telegram:group:{chat_id}`
pub fn group_session_key(chat_id: ChatId) -> String {
    PlatformKeyBuilder::new(Platform::Telegram)
        .group(chat_id.0.to_string())
        .build()
}

/// Session key for whichever chat a message arrived in.
pub fn message_session_key(message: &Message) -> Option<String> {
    if message.chat.is_private() {
        user_id_from_message(message).map(dm_session_key)
    } else {
        Some(group_session_key(message.chat.id))
    }
}

/// Attempts to extract the sender's user id from a message.
///
/// Returns `None` for messages without a sender (e.g. anonymous admin posts).
pub fn user_id_from_message(message: &Message) -> Option<UserId> {
    message.from.as_ref().map(|user| user.id)
}
