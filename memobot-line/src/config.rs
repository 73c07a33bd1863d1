//! Transport config: channel token, API URL override, rich-menu id.
//! Loaded from environment variables LINE_CHANNEL_TOKEN, LINE_API_URL,
//! RICH_MENU_ID.

use anyhow::Result;
use std::env;

/// Minimal LINE connectivity config.
pub struct LineConfig {
    pub channel_token: String,
    pub api_url: Option<String>,
    pub rich_menu_id: String,
}

impl LineConfig {
    /// Loads from env: LINE_CHANNEL_TOKEN and RICH_MENU_ID required,
    /// LINE_API_URL optional.
    pub fn from_env() -> Result<Self> {
        let channel_token = env::var("LINE_CHANNEL_TOKEN")
            .map_err(|_| anyhow::anyhow!("LINE_CHANNEL_TOKEN not set"))?;
        let rich_menu_id =
            env::var("RICH_MENU_ID").map_err(|_| anyhow::anyhow!("RICH_MENU_ID not set"))?;
        let api_url = env::var("LINE_API_URL").ok();
        Ok(Self {
            channel_token,
            api_url,
            rich_menu_id,
        })
    }

    /// Constructs with the given token and menu id, no API URL override.
    pub fn with_token(channel_token: String, rich_menu_id: String) -> Self {
        Self {
            channel_token,
            api_url: None,
            rich_menu_id,
        }
    }
}
