use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{articles_delta, NewsArticle, SentimentProbe};
use crate::config::SentimentConfig;

const PLACEHOLDER_API_KEY: &str = "YOUR_GNEWS_API_KEY";
const SEARCH_LANGUAGE: &str = "en";
const MAX_ARTICLES: u8 = 5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// News search client that reduces the most relevant articles to a keyword delta.
#[derive(Debug, Clone)]
pub struct GNewsProbe {
    client: Option<Client>,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum ProbeError {
    #[error("news search request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("news search returned status {0}")]
    Status(StatusCode),
    #[error("news search payload unreadable: {0}")]
    Payload(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Option<Vec<NewsArticle>>,
}

impl GNewsProbe {
    pub fn new(config: &SentimentConfig) -> Self {
        let client = match Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => Some(client),
            Err(error) => {
                warn!(%error, "news search client unavailable; sentiment will be neutral");
                None
            }
        };
        Self::with_client(client, config)
    }

    /// Probe over an already-built client; without one it stays unconfigured.
    pub(crate) fn with_client(client: Option<Client>, config: &SentimentConfig) -> Self {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
            .map(str::to_string);

        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
        }
    }

    /// False when no real credential or no HTTP client is available; such a probe never issues
    /// a request.
    pub fn is_configured(&self) -> bool {
        self.client.is_some() && self.api_key.is_some()
    }

    async fn search(
        &self,
        client: &Client,
        company_name: &str,
        api_key: &str,
    ) -> Result<Vec<NewsArticle>, ProbeError> {
        let max_articles = MAX_ARTICLES.to_string();
        let response = client
            .get(&self.endpoint)
            .query(&[
                ("q", company_name),
                ("lang", SEARCH_LANGUAGE),
                ("max", max_articles.as_str()),
                ("apikey", api_key),
            ])
            .send()
            .await
            .map_err(ProbeError::Transport)?;

        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status()));
        }

        let body: SearchResponse = response.json().await.map_err(ProbeError::Payload)?;
        Ok(body.articles.unwrap_or_default())
    }
}

#[async_trait]
impl SentimentProbe for GNewsProbe {
    async fn sentiment(&self, company_name: &str) -> i32 {
        let (Some(client), Some(api_key)) = (self.client.as_ref(), self.api_key.as_deref()) else {
            debug!(company = %company_name, "news search not configured; sentiment neutral");
            return 0;
        };

        match self.search(client, company_name, api_key).await {
            Ok(articles) => {
                let delta = articles_delta(&articles);
                debug!(
                    company = %company_name,
                    articles = articles.len(),
                    delta,
                    "news sentiment measured"
                );
                delta
            }
            Err(error) => {
                warn!(company = %company_name, %error, "news sentiment unavailable; treating as neutral");
                0
            }
        }
    }
}
