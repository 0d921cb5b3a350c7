use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

use crate::quotes::ZENQUOTES_URL;

pub const TOKEN_VAR: &str = "TELOXIDE_TOKEN";

#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub db_url: String,
    pub port: u16,
    pub quote_url: String,
    pub quote_timeout: Duration,
    pub db_timeout: Duration,
}

impl Config {
    /// Read the configuration from the environment (and `.env`, if present).
    ///
    /// Fails when the bot token is missing or a numeric setting is malformed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let bot_token = match env::var(TOKEN_VAR) {
            Ok(token) if !token.trim().is_empty() => token,
            _ => bail!("{TOKEN_VAR} environment variable not set"),
        };
        let db_url =
            env::var("DB_URL").unwrap_or_else(|_| "sqlite:encouragements.db".to_string());
        let port = parse_var("PORT", 8080u16)?;
        let quote_url = env::var("QUOTE_API_URL").unwrap_or_else(|_| ZENQUOTES_URL.to_string());
        let quote_timeout = Duration::from_secs(parse_var("QUOTE_TIMEOUT_SECS", 5u64)?);
        let db_timeout = Duration::from_secs(parse_var("DB_TIMEOUT_SECS", 5u64)?);

        Ok(Self {
            bot_token,
            db_url,
            port,
            quote_url,
            quote_timeout,
            db_timeout,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
