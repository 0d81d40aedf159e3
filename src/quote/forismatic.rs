use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{Quote, QuoteFuture, QuoteSource};
use crate::config::QuoteConfig;
use crate::error::QuoteError;

#[derive(Debug, Clone)]
pub struct ForismaticClient {
    client: Client,
    config: QuoteConfig,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    quote_text: String,
    quote_author: String,
}

impl ForismaticClient {
    pub fn new(config: QuoteConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn random_quote(&self) -> Result<Quote, QuoteError> {
        let res = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("method", "getQuote"),
                ("format", "json"),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(QuoteError::Status(res.status().as_u16()));
        }

        let body = res.text().await?;
        let quote = parse_quote(&body)?;
        debug!(author = %quote.author, "fetched quote");
        Ok(quote)
    }
}

impl QuoteSource for ForismaticClient {
    fn fetch(&self) -> QuoteFuture<'_> {
        Box::pin(self.random_quote())
    }
}

/// Decode a forismatic body into a [`Quote`].
///
/// The provider escapes apostrophes as `\'`, which is not valid JSON, so
/// those are repaired before decoding. Text is kept verbatim, including the
/// trailing space the provider usually appends.
pub fn parse_quote(body: &str) -> Result<Quote, QuoteError> {
    let repaired = repair_escapes(body);
    let response: QuoteResponse = serde_json::from_str(&repaired)?;
    Ok(Quote {
        text: response.quote_text,
        author: response.quote_author,
    })
}

fn repair_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\'') => out.push('\''),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}
