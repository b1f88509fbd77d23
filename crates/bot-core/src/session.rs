//! Session key management for chat bots.

/// Chat platform a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Telegram bot API
    Telegram,
}

impl Platform {
    /// Returns the platform identifier used in session keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
        }
    }
}

/// Type of chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatType {
    /// Direct message (1:1 conversation)
    Dm,
    /// Group chat
    Group,
}

impl ChatType {
    /// Returns the chat type identifier used in session keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Dm => "dm",
            ChatType::Group => "group",
        }
    }
}

/// Builder for constructing session keys.
///
/// Session keys follow the format: `{platform}:{chat_type}:{id}`
///
/// # Examples
/// ```
/// use tonlens_bot_core::{Platform, PlatformKeyBuilder};
///
/// let key = PlatformKeyBuilder::new(Platform::Telegram)
///     .dm("123456789")
///     .build();
/// assert_eq!(key, "telegram:dm:123456789");
/// ```
#[derive(Debug, Clone)]
pub struct PlatformKeyBuilder {
    platform: Platform,
    chat_type: Option<ChatType>,
    id: Option<String>,
}

impl PlatformKeyBuilder {
    /// Create a new session key builder for a platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            chat_type: None,
            id: None,
        }
    }

    /// Set as a DM session with the given user ID.
    pub fn dm(mut self, user_id: impl Into<String>) -> Self {
        self.chat_type = Some(ChatType::Dm);
        self.id = Some(user_id.into());
        self
    }

    /// Set as a group session with the given chat ID.
    pub fn group(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_type = Some(ChatType::Group);
        self.id = Some(chat_id.into());
        self
    }

    /// Build the session key string.
    ///
    /// # Panics
    /// Panics if chat type or ID has not been set.
    pub fn build(self) -> String {
        let chat_type = self.chat_type.expect("chat_type must be set");
        let id = self.id.expect("id must be set");

        format!("{}:{}:{}", self.platform.as_str(), chat_type.as_str(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dm_session_key() {
        let key = PlatformKeyBuilder::new(Platform::Telegram)
            .dm("123456789")
            .build();
        assert_eq!(key, "telegram:dm:123456789");
    }

    #[test]
    fn test_group_session_key() {
        let key = PlatformKeyBuilder::new(Platform::Telegram)
            .group("-100123456789")
            .build();
        assert_eq!(key, "telegram:group:-100123456789");
    }

    #[test]
    fn test_keys_unique_per_chat_type() {
        let dm = PlatformKeyBuilder::new(Platform::Telegram).dm("42").build();
        let group = PlatformKeyBuilder::new(Platform::Telegram)
            .group("42")
            .build();
        assert_ne!(dm, group);
    }
}
