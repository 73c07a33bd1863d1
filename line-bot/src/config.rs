//! Bot-level config: database, canonical zone, trigger tokens, bind address.
//! Loaded from environment variables; transport credentials live in
//! [`memobot_line::LineConfig`].

use anyhow::Result;
use chrono_tz::Tz;
use memobot_core::QueryTriggers;
use std::env;

pub struct AppConfig {
    pub database_url: String,
    /// Canonical local zone for day/week windows; fixed per deployment,
    /// not per user.
    pub local_zone: Tz,
    pub triggers: QueryTriggers,
    pub bind_addr: String,
    pub log_file: String,
}

impl AppConfig {
    /// Loads from env, all optional: DATABASE_URL (default sqlite:memobot.db),
    /// LOCAL_TZ (default Asia/Taipei), BIND_ADDR (default 0.0.0.0:3000),
    /// LOG_FILE (default memobot.log), and trigger overrides TODAY_PHRASE,
    /// WEEK_PHRASE, TODAY_POSTBACK, WEEK_POSTBACK.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:memobot.db".to_string());
        let zone_name = env::var("LOCAL_TZ").unwrap_or_else(|_| "Asia/Taipei".to_string());
        let local_zone: Tz = zone_name
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid LOCAL_TZ: {}", zone_name))?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "memobot.log".to_string());

        let defaults = QueryTriggers::default();
        let triggers = QueryTriggers {
            today_phrase: env::var("TODAY_PHRASE").unwrap_or(defaults.today_phrase),
            week_phrase: env::var("WEEK_PHRASE").unwrap_or(defaults.week_phrase),
            today_postback: env::var("TODAY_POSTBACK").unwrap_or(defaults.today_postback),
            week_postback: env::var("WEEK_POSTBACK").unwrap_or(defaults.week_postback),
        };

        Ok(Self {
            database_url,
            local_zone,
            triggers,
            bind_addr,
            log_file,
        })
    }
}
