//! toncenter-style account information client.
//!
//! Set the base URL to a different provider to use any toncenter-compatible
//! deployment.

use std::time::Duration;

use anyhow::Result;

use crate::models::AddressInformation;

#[derive(Debug, Clone)]
pub struct ToncenterClient {
    client: reqwest::Client,
    base_url: String,
}

impl ToncenterClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch raw account state for an address.
    pub async fn get_address_information(&self, address: &str) -> Result<AddressInformation> {
        let url = format!("{}/getAddressInformation?address={}", self.base_url, address);

        tracing::debug!("Fetching address information for {}", address);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "toncenter request failed with status: {}",
                response.status()
            );
        }

        let info: AddressInformation = response.json().await?;
        Ok(info)
    }
}
