use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};

pub const ZENQUOTES_URL: &str = "https://zenquotes.io/api/random";

/// Sent instead of a quote whenever the provider cannot be used.
pub const FALLBACK_QUOTE: &str = "Keep going, you're doing great!";

#[derive(Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

/// Client for a ZenQuotes compatible endpoint returning `[{"q": .., "a": ..}]`.
#[derive(Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
    url: String,
}

impl QuoteClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch a quote formatted as `"<quote> -<author>"`, or [`FALLBACK_QUOTE`].
    pub async fn fetch_quote(&self) -> String {
        quote_or_fallback(self.request_quote().await)
    }

    #[instrument(level = "trace", skip(self), fields(url = %self.url))]
    pub async fn request_quote(&self) -> Result<String> {
        debug!("requesting quote");
        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(anyhow!("quote API error {status}"));
        }

        let raw = resp.text().await?;
        trace!(raw = %raw, "quote response");
        parse_quote(&raw)
    }
}

fn parse_quote(raw: &str) -> Result<String> {
    let quotes: Vec<ZenQuote> = serde_json::from_str(raw)?;
    let quote = quotes
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("quote API returned no quotes"))?;
    Ok(format!("{} -{}", quote.q, quote.a))
}

fn quote_or_fallback(result: Result<String>) -> String {
    match result {
        Ok(quote) => quote,
        Err(err) => {
            warn!(error = %err, "Falling back to canned quote");
            FALLBACK_QUOTE.to_string()
        }
    }
}
