//! Wallet lookups: fetch account data and format it for the chat reply.
//!
//! Each lookup is guarded on its own; a failed or malformed upstream
//! response collapses into a placeholder line instead of an error.

use anyhow::Result;

use crate::bot::TelegramBot;
use tonlens_ton_api::{AddressInformation, JettonBalances, NftItems};

/// Maximum holdings rendered per section.
const MAX_ITEMS: usize = 5;

const BALANCE_ERROR_FALLBACK: &str = "Invalid address or network issue.";
const JETTONS_FALLBACK: &str = "⚠️ Could not fetch Jettons.";
const NFTS_FALLBACK: &str = "⚠️ Could not fetch NFTs.";

/// Fetch balance, jettons, and NFTs for an address and render the three
/// reply blocks joined by blank lines.
pub async fn wallet_report(bot: &TelegramBot, address: &str) -> String {
    let (info, jettons, nfts) = tokio::join!(
        bot.toncenter.get_address_information(address),
        bot.tonapi.get_jettons(address),
        bot.tonapi.get_nfts(address),
    );

    format!(
        "{}\n\n{}\n\n{}",
        balance_text(address, info),
        jettons_text(jettons),
        nfts_text(nfts)
    )
}

/// Render the balance block from a toncenter response.
pub fn balance_text(address: &str, info: Result<AddressInformation>) -> String {
    match info {
        Ok(info) if info.ok => match info.balance_ton() {
            Some(balance) => {
                format!("💰 Wallet: {}\n🔸 Balance: {:.6} TON", address, balance)
            }
            None => format!("❌ Error: {}", BALANCE_ERROR_FALLBACK),
        },
        Ok(info) => format!(
            "❌ Error: {}",
            info.error
                .unwrap_or_else(|| BALANCE_ERROR_FALLBACK.to_string())
        ),
        Err(err) => format!("⚠️ Failed to fetch data: {}", err),
    }
}

/// Render the jettons block from a tonapi response.
pub fn jettons_text(jettons: Result<JettonBalances>) -> String {
    let Ok(jettons) = jettons else {
        return JETTONS_FALLBACK.to_string();
    };

    if jettons.balances.is_empty() {
        return "No Jettons found.".to_string();
    }

    let lines: Vec<String> = jettons
        .balances
        .iter()
        .take(MAX_ITEMS)
        .map(|holding| format!("• {}: {:.4}", holding.display_name(), holding.amount()))
        .collect();

    format!("🪙 Jettons:\n{}", lines.join("\n"))
}

/// Render the NFTs block from a tonapi response.
pub fn nfts_text(nfts: Result<NftItems>) -> String {
    let Ok(nfts) = nfts else {
        return NFTS_FALLBACK.to_string();
    };

    if nfts.nft_items.is_empty() {
        return "No NFTs found.".to_string();
    }

    let lines: Vec<String> = nfts
        .nft_items
        .iter()
        .take(MAX_ITEMS)
        .map(|item| format!("• {}", item.display_name()))
        .collect();

    format!("🖼️ NFTs:\n{}", lines.join("\n"))
}
