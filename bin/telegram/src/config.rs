use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DmPolicy {
    Open,
    Allowlist,
    Disabled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupPolicy {
    Mention,
    Always,
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    #[serde(default = "default_toncenter_url")]
    pub toncenter_url: String,
    #[serde(default = "default_tonapi_url")]
    pub tonapi_url: String,
    #[serde(default)]
    pub tonapi_key: Option<String>,
    #[serde(default = "default_tonconnect_url")]
    pub tonconnect_url: String,
    #[serde(default)]
    pub tonconnect_manifest_url: Option<String>,
    #[serde(default = "default_health_port")]
    pub health_port: u16,
    #[serde(default = "default_dm_policy")]
    pub dm_policy: DmPolicy,
    #[serde(default = "default_group_policy")]
    pub group_policy: GroupPolicy,
    #[serde(default)]
    pub allow_from: Vec<i64>,
}

fn default_toncenter_url() -> String {
    "https://toncenter.com/api/v2".to_string()
}

fn default_tonapi_url() -> String {
    "https://tonapi.io".to_string()
}

fn default_tonconnect_url() -> String {
    "https://app.tonkeeper.com/ton-connect".to_string()
}

fn default_health_port() -> u16 {
    3000
}

fn default_dm_policy() -> DmPolicy {
    DmPolicy::Open
}

fn default_group_policy() -> GroupPolicy {
    GroupPolicy::Mention
}

impl TelegramConfig {
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read bot config {}: {}", path, e))?;
        let config: TelegramConfig =
            toml::from_str(&contents).map_err(|e| anyhow::anyhow!("Invalid bot config: {}", e))?;
        Ok(config)
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN environment variable is required"))?;

        let toncenter_url =
            std::env::var("TONCENTER_API_URL").unwrap_or_else(|_| default_toncenter_url());
        let tonapi_url = std::env::var("TONAPI_URL").unwrap_or_else(|_| default_tonapi_url());
        let tonapi_key = std::env::var("TONAPI_KEY").ok().filter(|k| !k.is_empty());

        let tonconnect_url =
            std::env::var("TONCONNECT_URL").unwrap_or_else(|_| default_tonconnect_url());
        let tonconnect_manifest_url = std::env::var("TONCONNECT_MANIFEST_URL").ok();

        let health_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_health_port);

        let dm_policy = std::env::var("TELEGRAM_DM_POLICY")
            .unwrap_or_else(|_| "open".to_string())
            .parse()
            .unwrap_or(DmPolicy::Open);

        let group_policy = std::env::var("TELEGRAM_GROUP_POLICY")
            .unwrap_or_else(|_| "mention".to_string())
            .parse()
            .unwrap_or(GroupPolicy::Mention);

        let allow_from: Vec<i64> = std::env::var("TELEGRAM_ALLOW_FROM")
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();

        Ok(Self {
            bot_token,
            toncenter_url,
            tonapi_url,
            tonapi_key,
            tonconnect_url,
            tonconnect_manifest_url,
            health_port,
            dm_policy,
            group_policy,
            allow_from,
        })
    }

    pub fn is_allowlisted(&self, user_id: i64) -> bool {
        self.allow_from.contains(&user_id)
    }
}

impl std::str::FromStr for DmPolicy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(DmPolicy::Open),
            "allowlist" => Ok(DmPolicy::Allowlist),
            "disabled" => Ok(DmPolicy::Disabled),
            _ => Err(()),
        }
    }
}

impl std::str::FromStr for GroupPolicy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mention" => Ok(GroupPolicy::Mention),
            "always" => Ok(GroupPolicy::Always),
            "disabled" => Ok(GroupPolicy::Disabled),
            _ => Err(()),
        }
    }
}
