//! News-based sentiment signal for a company.
//!
//! Probes never fail outward: every infrastructure problem collapses into a neutral delta of 0,
//! which is indistinguishable from "no coverage found".

mod gnews;

pub use gnews::GNewsProbe;

use async_trait::async_trait;
use serde::Deserialize;

pub const POSITIVE_NEWS_KEYWORDS: [&str; 10] = [
    "growth",
    "expansion",
    "profit",
    "acquisition",
    "partnership",
    "innovative",
    "successful",
    "revenue increase",
    "market leader",
    "strong performance",
];

pub const NEGATIVE_NEWS_KEYWORDS: [&str; 10] = [
    "lawsuit",
    "bankruptcy",
    "decline",
    "loss",
    "layoffs",
    "struggling",
    "investigation",
    "scandal",
    "debt",
    "restructuring",
];

/// Source of the integer sentiment delta consumed by the lead scorer.
#[async_trait]
pub trait SentimentProbe: Send + Sync {
    async fn sentiment(&self, company_name: &str) -> i32;
}

#[async_trait]
impl<P> SentimentProbe for Box<P>
where
    P: SentimentProbe + ?Sized,
{
    async fn sentiment(&self, company_name: &str) -> i32 {
        (**self).sentiment(company_name).await
    }
}

#[async_trait]
impl<P> SentimentProbe for std::sync::Arc<P>
where
    P: SentimentProbe + ?Sized,
{
    async fn sentiment(&self, company_name: &str) -> i32 {
        (**self).sentiment(company_name).await
    }
}

/// Constant-neutral probe for offline scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralProbe;

#[async_trait]
impl SentimentProbe for NeutralProbe {
    async fn sentiment(&self, _company_name: &str) -> i32 {
        0
    }
}

/// Article shape returned by the news search; absent fields read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewsArticle {
    fn content(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

/// +1 per positive keyword and -1 per negative keyword found in one piece of text.
pub fn keyword_delta(text: &str) -> i32 {
    let text = text.to_lowercase();
    let positive = POSITIVE_NEWS_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .count() as i32;
    let negative = NEGATIVE_NEWS_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .count() as i32;
    positive - negative
}

/// Sum of per-article keyword deltas.
pub fn articles_delta(articles: &[NewsArticle]) -> i32 {
    articles
        .iter()
        .map(|article| keyword_delta(&article.content()))
        .fold(0i32, i32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_delta_uses_containment_per_keyword() {
        assert_eq!(keyword_delta("Record GROWTH and expansion"), 2);
        assert_eq!(keyword_delta("layoffs follow lawsuit"), -2);
        assert_eq!(keyword_delta("growth growth growth"), 1);
        assert_eq!(keyword_delta("profitable quarter"), 1);
        assert_eq!(keyword_delta("closure amid losses"), -1);
        assert_eq!(keyword_delta("nothing of note"), 0);
    }

    #[test]
    fn articles_sum_title_and_description() {
        let articles = vec![
            NewsArticle {
                title: Some("Acme announces expansion".to_string()),
                description: Some("New partnership signed".to_string()),
            },
            NewsArticle {
                title: Some("Acme faces investigation".to_string()),
                description: None,
            },
            NewsArticle::default(),
        ];
        assert_eq!(articles_delta(&articles), 1);
    }

    #[test]
    fn title_and_description_are_separated_by_a_space() {
        let article = NewsArticle {
            title: Some("market".to_string()),
            description: Some("leader".to_string()),
        };
        assert_eq!(articles_delta(&[article]), 1);

        let split = NewsArticle {
            title: Some("pro".to_string()),
            description: Some("fit".to_string()),
        };
        assert_eq!(articles_delta(&[split]), 0);
    }

    #[tokio::test]
    async fn neutral_probe_is_always_zero() {
        let probe: Box<dyn SentimentProbe> = Box::new(NeutralProbe);
        assert_eq!(probe.sentiment("Anything Inc").await, 0);
    }
}
