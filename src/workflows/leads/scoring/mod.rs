mod format;
mod policy;
mod rules;

use super::domain::{Lead, LeadCategory, ScoreResult};
use super::icp::IcpProfile;
use super::sentiment::SentimentProbe;
use tracing::info;

/// Scores leads against one immutable ICP, consulting the sentiment probe once per lead.
pub struct LeadScorer<P> {
    profile: IcpProfile,
    probe: P,
}

impl<P> LeadScorer<P>
where
    P: SentimentProbe,
{
    pub fn new(profile: IcpProfile, probe: P) -> Self {
        Self { profile, probe }
    }

    pub fn profile(&self) -> &IcpProfile {
        &self.profile
    }

    pub async fn score(&self, lead: &Lead) -> ScoreResult {
        let news_delta = self.probe.sentiment(&lead.company_name).await;
        let result = score_with_sentiment(lead, &self.profile, news_delta);

        info!(
            company = %lead.company_name,
            score = result.total_score,
            category = result.category.label(),
            "lead scored"
        );

        result
    }
}

/// Deterministic scoring given an already measured news sentiment delta.
pub fn score_with_sentiment(lead: &Lead, profile: &IcpProfile, news_delta: i32) -> ScoreResult {
    let (components, total_score) = rules::score_lead(lead, profile, news_delta);
    let category = LeadCategory::from_score(total_score);
    let reasons = policy::explain(category, total_score, &components);

    ScoreResult {
        total_score,
        category,
        reasons,
        components,
    }
}
