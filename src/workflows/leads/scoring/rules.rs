use super::super::domain::{Lead, LeadFactor, ScoreComponent};
use super::super::icp::{Band, IcpProfile};
use super::format::format_usd;

pub(crate) const INDUSTRY_FIT: i32 = 20;
pub(crate) const INDUSTRY_MISMATCH: i32 = -5;
pub(crate) const FINANCIAL_WITHIN: i32 = 25;
pub(crate) const FINANCIAL_OUTSIDE: i32 = -10;
pub(crate) const KEYWORD_WEIGHT: i32 = 5;
pub(crate) const KEYWORD_CAP: i32 = 15;
pub(crate) const CONTACT_ROLE_FIT: i32 = 15;
pub(crate) const EMPLOYEES_WITHIN: i32 = 10;
pub(crate) const NEWS_MULTIPLIER: i32 = 2;
pub(crate) const NEWS_CAP: i32 = 10;

/// Applies every rule in evaluation order, returning the components and their sum.
pub(crate) fn score_lead(
    lead: &Lead,
    profile: &IcpProfile,
    news_delta: i32,
) -> (Vec<ScoreComponent>, i32) {
    let mut components = Vec::with_capacity(7);
    let mut total_score: i32 = 0;

    if !profile.industries.is_empty() {
        let industry = lead.industry.to_lowercase();
        let component = if profile.industries.any_within(&industry) {
            ScoreComponent {
                factor: LeadFactor::Industry,
                score: INDUSTRY_FIT,
                notes: format!("Industry Fit: {}", lead.industry),
            }
        } else {
            ScoreComponent {
                factor: LeadFactor::Industry,
                score: INDUSTRY_MISMATCH,
                notes: format!("Industry Mismatch: {}", lead.industry),
            }
        };
        total_score += component.score;
        components.push(component);
    }

    for component in [
        financial_component(
            LeadFactor::Revenue,
            "Revenue",
            lead.revenue_usd,
            &profile.revenue,
        ),
        financial_component(
            LeadFactor::Ebitda,
            "EBITDA",
            lead.ebitda_usd,
            &profile.ebitda,
        ),
    ] {
        total_score += component.score;
        components.push(component);
    }

    let description = lead.company_description.to_lowercase();
    let positive_hits = profile.positive_keywords.count_within(&description);
    let negative_hits = profile.negative_keywords.count_within(&description);
    let keyword_score = description_keyword_score(positive_hits, negative_hits);
    components.push(ScoreComponent {
        factor: LeadFactor::DescriptionKeywords,
        score: keyword_score,
        notes: format!("{positive_hits} positive and {negative_hits} negative description keyword(s)"),
    });
    total_score += keyword_score;

    let contact_title = lead.contact_title.to_lowercase();
    if profile.contact_roles.any_within(&contact_title) {
        components.push(ScoreComponent {
            factor: LeadFactor::ContactRole,
            score: CONTACT_ROLE_FIT,
            notes: format!("Contact Role: {}", lead.contact_title),
        });
        total_score += CONTACT_ROLE_FIT;
    } else {
        components.push(ScoreComponent {
            factor: LeadFactor::ContactRole,
            score: 0,
            notes: format!("Contact Role: {} not target", lead.contact_title),
        });
    }

    // Out-of-band headcount is reported but never penalised.
    match lead.employee_count {
        Some(count) if profile.employees.contains(count as f64) => {
            components.push(ScoreComponent {
                factor: LeadFactor::EmployeeCount,
                score: EMPLOYEES_WITHIN,
                notes: format!("Employee Count: {count}"),
            });
            total_score += EMPLOYEES_WITHIN;
        }
        Some(count) => components.push(ScoreComponent {
            factor: LeadFactor::EmployeeCount,
            score: 0,
            notes: format!("Employee Count: {count} outside target"),
        }),
        None => components.push(ScoreComponent {
            factor: LeadFactor::EmployeeCount,
            score: 0,
            notes: "Employee count missing".to_string(),
        }),
    }

    let news_score = news_sentiment_score(news_delta);
    components.push(ScoreComponent {
        factor: LeadFactor::NewsSentiment,
        score: news_score,
        notes: if news_delta != 0 {
            format!("News Sentiment Impact: {news_delta}")
        } else {
            "No significant news sentiment".to_string()
        },
    });
    total_score += news_score;

    (components, total_score)
}

fn financial_component(
    factor: LeadFactor,
    label: &str,
    value: Option<f64>,
    band: &Band,
) -> ScoreComponent {
    match value {
        Some(amount) if band.contains(amount) => ScoreComponent {
            factor,
            score: FINANCIAL_WITHIN,
            notes: format!("{label} ({}) within target", format_usd(amount)),
        },
        Some(amount) => ScoreComponent {
            factor,
            score: FINANCIAL_OUTSIDE,
            notes: format!("{label} ({}) outside target", format_usd(amount)),
        },
        None => ScoreComponent {
            factor,
            score: 0,
            notes: format!("{label} data missing"),
        },
    }
}

pub(crate) fn description_keyword_score(positive_hits: usize, negative_hits: usize) -> i32 {
    let positive = i64::try_from(positive_hits).unwrap_or(i64::MAX);
    let negative = i64::try_from(negative_hits).unwrap_or(i64::MAX);
    let net = positive
        .saturating_sub(negative)
        .saturating_mul(i64::from(KEYWORD_WEIGHT));
    net.clamp(-i64::from(KEYWORD_CAP), i64::from(KEYWORD_CAP)) as i32
}

pub(crate) fn news_sentiment_score(delta: i32) -> i32 {
    delta
        .saturating_mul(NEWS_MULTIPLIER)
        .clamp(-NEWS_CAP, NEWS_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_score_is_capped_both_ways() {
        assert_eq!(description_keyword_score(0, 0), 0);
        assert_eq!(description_keyword_score(2, 0), 10);
        assert_eq!(description_keyword_score(3, 0), 15);
        assert_eq!(description_keyword_score(40, 0), 15);
        assert_eq!(description_keyword_score(1, 2), -5);
        assert_eq!(description_keyword_score(0, 9), -15);
        assert_eq!(description_keyword_score(usize::MAX, 0), 15);
    }

    #[test]
    fn news_score_doubles_then_caps() {
        assert_eq!(news_sentiment_score(0), 0);
        assert_eq!(news_sentiment_score(1), 2);
        assert_eq!(news_sentiment_score(-3), -6);
        assert_eq!(news_sentiment_score(5), 10);
        assert_eq!(news_sentiment_score(6), 10);
        assert_eq!(news_sentiment_score(-6), -10);
        assert_eq!(news_sentiment_score(i32::MAX), 10);
        assert_eq!(news_sentiment_score(i32::MIN), -10);
    }
}
