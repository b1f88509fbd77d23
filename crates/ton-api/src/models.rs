//! Response models for the TON data APIs.
//!
//! Vendor fields that are optional in practice carry `#[serde(default)]` so
//! a sparse response still decodes.

use serde::Deserialize;

/// Nanotons per TON.
const NANOTON: f64 = 1e9;

/// Envelope returned by toncenter-style endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressInformation {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<AccountState>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw account state from `getAddressInformation`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountState {
    /// Balance in nanotons, as a decimal string.
    pub balance: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl AddressInformation {
    /// Balance in whole TON, if the envelope carries a parseable one.
    pub fn balance_ton(&self) -> Option<f64> {
        let state = self.result.as_ref()?;
        let nanotons: f64 = state.balance.parse().ok()?;
        Some(nanotons / NANOTON)
    }
}

/// Jetton holdings for an account.
#[derive(Debug, Clone, Deserialize)]
pub struct JettonBalances {
    #[serde(default)]
    pub balances: Vec<JettonBalance>,
}

/// A single jetton holding.
#[derive(Debug, Clone, Deserialize)]
pub struct JettonBalance {
    /// Raw balance in the jetton's smallest unit, as a decimal string.
    pub balance: String,
    pub jetton: JettonInfo,
}

/// Jetton master metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JettonInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl JettonBalance {
    /// Display name: jetton name, falling back to symbol, then "Unnamed".
    pub fn display_name(&self) -> &str {
        self.jetton
            .name
            .as_deref()
            .or(self.jetton.symbol.as_deref())
            .unwrap_or("Unnamed")
    }

    /// Holding scaled by the jetton's decimals (9 when unspecified).
    pub fn amount(&self) -> f64 {
        let raw: f64 = self.balance.parse().unwrap_or(0.0);
        let decimals = self.jetton.decimals.unwrap_or(9);
        raw / 10f64.powi(decimals as i32)
    }
}

/// NFT holdings for an account.
#[derive(Debug, Clone, Deserialize)]
pub struct NftItems {
    #[serde(default)]
    pub nft_items: Vec<NftItem>,
}

/// A single NFT item.
#[derive(Debug, Clone, Deserialize)]
pub struct NftItem {
    #[serde(default)]
    pub metadata: NftMetadata,
}

/// Free-form NFT metadata; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NftMetadata {
    #[serde(default)]
    pub name: Option<String>,
}

impl NftItem {
    /// Display name, falling back to "Unnamed NFT".
    pub fn display_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("Unnamed NFT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_information_parses_balance() {
        let info: AddressInformation = serde_json::from_value(json!({
            "ok": true,
            "result": { "balance": "1500000000", "state": "active" }
        }))
        .unwrap();

        assert!(info.ok);
        assert_eq!(info.balance_ton(), Some(1.5));
    }

    #[test]
    fn address_information_error_envelope() {
        let info: AddressInformation = serde_json::from_value(json!({
            "ok": false,
            "error": "Incorrect address"
        }))
        .unwrap();

        assert!(!info.ok);
        assert_eq!(info.error.as_deref(), Some("Incorrect address"));
        assert_eq!(info.balance_ton(), None);
    }

    #[test]
    fn balance_ton_none_for_garbage_balance() {
        let info: AddressInformation = serde_json::from_value(json!({
            "ok": true,
            "result": { "balance": "not-a-number" }
        }))
        .unwrap();

        assert_eq!(info.balance_ton(), None);
    }

    #[test]
    fn jetton_display_name_falls_back() {
        let named: JettonBalance = serde_json::from_value(json!({
            "balance": "1000",
            "jetton": { "name": "Tether USD", "symbol": "USDT", "decimals": 6 }
        }))
        .unwrap();
        assert_eq!(named.display_name(), "Tether USD");

        let symbol_only: JettonBalance = serde_json::from_value(json!({
            "balance": "1000",
            "jetton": { "symbol": "USDT" }
        }))
        .unwrap();
        assert_eq!(symbol_only.display_name(), "USDT");

        let bare: JettonBalance = serde_json::from_value(json!({
            "balance": "1000",
            "jetton": {}
        }))
        .unwrap();
        assert_eq!(bare.display_name(), "Unnamed");
    }

    #[test]
    fn jetton_amount_scales_by_decimals() {
        let holding: JettonBalance = serde_json::from_value(json!({
            "balance": "2500000",
            "jetton": { "symbol": "USDT", "decimals": 6 }
        }))
        .unwrap();
        assert_eq!(holding.amount(), 2.5);
    }

    #[test]
    fn jetton_amount_defaults_to_nine_decimals() {
        let holding: JettonBalance = serde_json::from_value(json!({
            "balance": "3000000000",
            "jetton": {}
        }))
        .unwrap();
        assert_eq!(holding.amount(), 3.0);
    }

    #[test]
    fn empty_holdings_decode() {
        let jettons: JettonBalances = serde_json::from_value(json!({})).unwrap();
        assert!(jettons.balances.is_empty());

        let nfts: NftItems = serde_json::from_value(json!({ "nft_items": [] })).unwrap();
        assert!(nfts.nft_items.is_empty());
    }

    #[test]
    fn nft_display_name_falls_back() {
        let named: NftItem = serde_json::from_value(json!({
            "metadata": { "name": "TON Diamond #1" }
        }))
        .unwrap();
        assert_eq!(named.display_name(), "TON Diamond #1");

        let bare: NftItem = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare.display_name(), "Unnamed NFT");
    }
}
