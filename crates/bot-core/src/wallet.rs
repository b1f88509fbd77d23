//! Wallet connection service for binding wallets to chat sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

use crate::error::{BotError, BotResult};

/// A wallet-connect handshake handed back to the user.
#[derive(Debug, Clone)]
pub struct ConnectRequest {
    /// Hex-encoded session secret identifying this handshake on the bridge.
    pub session_id: String,
    /// Universal link the user opens in their wallet app.
    pub connect_url: String,
}

/// Service for managing wallet connections.
///
/// A handshake starts with [`begin_connect`], which hands back the link the
/// user opens in their wallet app. The handshake itself runs out of process;
/// its completion reports the chosen address through [`bind_wallet`].
///
/// [`begin_connect`]: WalletConnectService::begin_connect
/// [`bind_wallet`]: WalletConnectService::bind_wallet
#[async_trait]
pub trait WalletConnectService: Send + Sync {
    /// Start a handshake for the session, returning the connect link.
    /// Replaces any handshake already pending for the same session.
    async fn begin_connect(&self, session_key: &str) -> BotResult<ConnectRequest>;

    /// Bind the wallet address chosen during the handshake to the session.
    /// The `session_id` must match the pending handshake.
    async fn bind_wallet(&self, session_key: &str, session_id: &str, address: &str)
    -> BotResult<()>;

    /// Get the wallet address bound to a session, if any.
    async fn bound_wallet(&self, session_key: &str) -> BotResult<Option<String>>;

    /// Forget the session's handshake and bound wallet.
    async fn disconnect(&self, session_key: &str) -> BotResult<()>;
}

#[derive(Debug, Clone)]
struct SessionEntry {
    session_id: String,
    address: Option<String>,
}

/// In-memory wallet connect service.
///
/// Session secrets and bound addresses live only in this map; a restart
/// forgets every handshake.
pub struct MemoryWalletConnectService {
    connect_base: String,
    manifest_url: Option<String>,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl MemoryWalletConnectService {
    pub fn new(connect_base: String, manifest_url: Option<String>) -> Self {
        Self {
            connect_base,
            manifest_url,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn generate_session_id() -> String {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let bytes: [u8; 32] = rng.r#gen();
        hex::encode(bytes)
    }

    fn build_connect_url(&self, session_id: &str, manifest_url: &str) -> BotResult<String> {
        let request = serde_json::json!({
            "manifestUrl": manifest_url,
            "items": [{ "name": "ton_addr" }],
        });

        let mut url = Url::parse(&self.connect_base)
            .map_err(|e| BotError::Wallet(format!("Invalid connect URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("v", "2")
            .append_pair("id", session_id)
            .append_pair("r", &request.to_string());

        Ok(url.to_string())
    }
}

#[async_trait]
impl WalletConnectService for MemoryWalletConnectService {
    async fn begin_connect(&self, session_key: &str) -> BotResult<ConnectRequest> {
        let manifest_url = self
            .manifest_url
            .as_deref()
            .ok_or_else(|| BotError::Wallet("Connect manifest is not configured".into()))?;

        let session_id = Self::generate_session_id();
        let connect_url = self.build_connect_url(&session_id, manifest_url)?;

        let mut sessions = self.sessions.write().await;
        sessions.insert(
            session_key.to_string(),
            SessionEntry {
                session_id: session_id.clone(),
                address: None,
            },
        );

        debug!("Started wallet handshake for session {}", session_key);
        Ok(ConnectRequest {
            session_id,
            connect_url,
        })
    }

    async fn bind_wallet(
        &self,
        session_key: &str,
        session_id: &str,
        address: &str,
    ) -> BotResult<()> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(session_key)
            .ok_or(BotError::NoPendingHandshake)?;

        if entry.session_id != session_id {
            return Err(BotError::Wallet("Handshake session mismatch".into()));
        }

        entry.address = Some(address.to_string());
        info!("Bound wallet {} to session {}", address, session_key);
        Ok(())
    }

    async fn bound_wallet(&self, session_key: &str) -> BotResult<Option<String>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(session_key)
            .and_then(|entry| entry.address.clone()))
    }

    async fn disconnect(&self, session_key: &str) -> BotResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_key);
        info!("Disconnected wallet for session {}", session_key);
        Ok(())
    }
}
