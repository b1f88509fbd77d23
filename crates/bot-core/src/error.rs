//! Error types for chat bots.

use thiserror::Error;

/// Result type for bot operations.
pub type BotResult<T> = Result<T, BotError>;

/// Errors that can occur in bot operations.
#[derive(Debug, Error)]
pub enum BotError {
    /// Wallet connect error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// No handshake has been started for the session.
    #[error("No pending wallet handshake. Use /connect first.")]
    NoPendingHandshake,
}
