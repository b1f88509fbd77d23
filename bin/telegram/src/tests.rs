use serde_json::json;
use teloxide::types::{ChatId, UserId};

use crate::{
    config::{DmPolicy, GroupPolicy, TelegramConfig},
    handlers::{looks_like_ton_address, strip_leading_mention},
    session::{dm_session_key, group_session_key},
};

fn test_config(dm_policy: DmPolicy, group_policy: GroupPolicy, allow_from: Vec<i64>) -> TelegramConfig {
    TelegramConfig {
        bot_token: "token".to_string(),
        toncenter_url: "https://toncenter.com/api/v2".to_string(),
        tonapi_url: "https://tonapi.io".to_string(),
        tonapi_key: None,
        tonconnect_url: "https://app.tonkeeper.com/ton-connect".to_string(),
        tonconnect_manifest_url: None,
        health_port: 3000,
        dm_policy,
        group_policy,
        allow_from,
    }
}

fn dm_policy_allows(config: &TelegramConfig, user_id: i64) -> bool {
    match config.dm_policy {
        DmPolicy::Disabled => false,
        DmPolicy::Allowlist => config.is_allowlisted(user_id),
        DmPolicy::Open => true,
    }
}

fn group_policy_allows(config: &TelegramConfig, is_mentioned: bool) -> bool {
    match config.group_policy {
        GroupPolicy::Disabled => false,
        GroupPolicy::Always => true,
        GroupPolicy::Mention => is_mentioned,
    }
}

#[test]
fn dm_session_key_format() {
    let key = dm_session_key(UserId(42));
    assert_eq!(key, "telegram:dm:42");
}

#[test]
fn group_session_key_format() {
    let key = group_session_key(ChatId(1234));
    assert_eq!(key, "telegram:group:1234");
}

#[test]
fn group_session_key_negative_ids() {
    let key = group_session_key(ChatId(-100_123));
    assert_eq!(key, "telegram:group:-100123");
}

#[test]
fn address_check_accepts_both_prefixes() {
    assert!(looks_like_ton_address(
        "EQD2NmD_lH5f5u1Kj3KfGyTvhZSX0Eg6qp2a5IQUKXxOG21n"
    ));
    assert!(looks_like_ton_address(
        "UQD2NmD_lH5f5u1Kj3KfGyTvhZSX0Eg6qp2a5IQUKXxOGwbW"
    ));
}

#[test]
fn address_check_rejects_other_text() {
    assert!(!looks_like_ton_address("hello"));
    assert!(!looks_like_ton_address("0x52908400098527886E0F7030069857D2E4169EE7"));
    assert!(!looks_like_ton_address(""));
    // Prefix must be at the start, not anywhere in the text
    assert!(!looks_like_ton_address("wallet UQabc"));
}

#[test]
fn strip_leading_mention_removes_bot_name() {
    assert_eq!(strip_leading_mention("@tonlens_bot UQabc"), "UQabc");
    assert_eq!(strip_leading_mention("UQabc"), "UQabc");
    assert_eq!(strip_leading_mention("  UQabc  "), "UQabc");
    assert_eq!(strip_leading_mention("@tonlens_bot"), "");
}

#[test]
fn dm_policy_open_accepts_any_user() {
    let config = test_config(DmPolicy::Open, GroupPolicy::Disabled, vec![]);

    assert!(dm_policy_allows(&config, 999));
    assert!(dm_policy_allows(&config, -5));
}

#[test]
fn dm_policy_allowlist_accepts_only_listed_users() {
    let config = test_config(DmPolicy::Allowlist, GroupPolicy::Disabled, vec![101, 202]);

    assert!(dm_policy_allows(&config, 101));
    assert!(!dm_policy_allows(&config, 303));
}

#[test]
fn dm_policy_disabled_rejects_all() {
    let config = test_config(DmPolicy::Disabled, GroupPolicy::Disabled, vec![1]);

    assert!(!dm_policy_allows(&config, 1));
    assert!(!dm_policy_allows(&config, 999));
}

#[test]
fn group_policy_always_processes_messages() {
    let config = test_config(DmPolicy::Disabled, GroupPolicy::Always, vec![]);

    assert!(group_policy_allows(&config, false));
    assert!(group_policy_allows(&config, true));
}

#[test]
fn group_policy_mention_requires_mention() {
    let config = test_config(DmPolicy::Disabled, GroupPolicy::Mention, vec![]);

    assert!(!group_policy_allows(&config, false));
    assert!(group_policy_allows(&config, true));
}

#[test]
fn empty_allowlist_blocks_everyone() {
    let config = test_config(DmPolicy::Allowlist, GroupPolicy::Disabled, vec![]);

    assert!(!dm_policy_allows(&config, 1));
}

#[test]
fn config_deserializes_from_toml_with_defaults() {
    let config: TelegramConfig = toml::from_str("bot_token = \"token\"").unwrap();

    assert_eq!(config.bot_token, "token");
    assert_eq!(config.toncenter_url, "https://toncenter.com/api/v2");
    assert_eq!(config.tonapi_url, "https://tonapi.io");
    assert_eq!(config.tonapi_key, None);
    assert_eq!(config.tonconnect_manifest_url, None);
    assert_eq!(config.health_port, 3000);
    assert_eq!(config.dm_policy, DmPolicy::Open);
    assert_eq!(config.group_policy, GroupPolicy::Mention);
    assert!(config.allow_from.is_empty());
}

#[test]
fn config_deserializes_from_json() {
    let value = json!({
        "bot_token": "token",
        "dm_policy": "allowlist",
        "group_policy": "always",
        "allow_from": [42],
        "tonapi_key": "secret",
        "health_port": 8080
    });

    let config: TelegramConfig = serde_json::from_value(value).unwrap();
    assert_eq!(config.bot_token, "token");
    assert_eq!(config.dm_policy, DmPolicy::Allowlist);
    assert_eq!(config.group_policy, GroupPolicy::Always);
    assert_eq!(config.allow_from, vec![42]);
    assert_eq!(config.tonapi_key.as_deref(), Some("secret"));
    assert_eq!(config.health_port, 8080);
}

#[test]
fn policy_parsing_is_case_insensitive() {
    assert_eq!("OPEN".parse::<DmPolicy>(), Ok(DmPolicy::Open));
    assert_eq!("Allowlist".parse::<DmPolicy>(), Ok(DmPolicy::Allowlist));
    assert_eq!("mention".parse::<GroupPolicy>(), Ok(GroupPolicy::Mention));
    assert!("bogus".parse::<DmPolicy>().is_err());
}
