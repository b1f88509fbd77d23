//! tonapi.io account holdings client.
//!
//! The API key is optional; without one, requests run against the public
//! rate tier.

use std::time::Duration;

use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::models::{JettonBalances, NftItems};

#[derive(Debug, Clone)]
pub struct TonapiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TonapiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Fetch jetton holdings for an account.
    pub async fn get_jettons(&self, address: &str) -> Result<JettonBalances> {
        let url = format!("{}/v2/accounts/{}/jettons", self.base_url, address);
        tracing::debug!("Fetching jettons for {}", address);
        self.get_json(&url).await
    }

    /// Fetch NFT holdings for an account.
    pub async fn get_nfts(&self, address: &str) -> Result<NftItems> {
        let url = format!("{}/v2/accounts/{}/nfts", self.base_url, address);
        tracing::debug!("Fetching NFTs for {}", address);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            anyhow::bail!("tonapi request failed with status: {}", response.status());
        }

        Ok(response.json().await?)
    }
}
