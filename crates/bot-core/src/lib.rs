//! Shared infrastructure for TonLens chat bots.
//!
//! This crate provides platform-agnostic abstractions for:
//! - Session key management
//! - Error types
//! - Wallet connection handshakes
//!
//! Platform-specific frontends (telegram) build on these primitives.

pub mod error;
pub mod session;
pub mod wallet;

pub use error::{BotError, BotResult};
pub use session::{ChatType, Platform, PlatformKeyBuilder};
pub use wallet::{ConnectRequest, MemoryWalletConnectService, WalletConnectService};
