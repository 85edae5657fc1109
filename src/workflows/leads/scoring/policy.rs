use super::super::domain::{LeadCategory, ScoreComponent};

pub(crate) fn summary_line(category: LeadCategory, total_score: i32) -> String {
    format!(
        "Lead Category: {} | Total Score: {}",
        category.label(),
        total_score
    )
}

/// Summary first, then one line per explained component in evaluation order.
pub(crate) fn explain(
    category: LeadCategory,
    total_score: i32,
    components: &[ScoreComponent],
) -> Vec<String> {
    let mut reasons: Vec<String> = components
        .iter()
        .filter(|component| component.factor.explained())
        .map(|component| component.notes.clone())
        .collect();
    reasons.insert(0, summary_line(category, total_score));
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::leads::domain::LeadFactor;

    #[test]
    fn description_component_never_reaches_the_trail() {
        let components = vec![
            ScoreComponent {
                factor: LeadFactor::Revenue,
                score: 25,
                notes: "Revenue ($2,000,000) within target".to_string(),
            },
            ScoreComponent {
                factor: LeadFactor::DescriptionKeywords,
                score: 10,
                notes: "2 positive and 0 negative description keyword(s)".to_string(),
            },
            ScoreComponent {
                factor: LeadFactor::NewsSentiment,
                score: 0,
                notes: "No significant news sentiment".to_string(),
            },
        ];

        let reasons = explain(LeadCategory::LowPotential, 35, &components);

        assert_eq!(
            reasons,
            vec![
                "Lead Category: LOW POTENTIAL | Total Score: 35".to_string(),
                "Revenue ($2,000,000) within target".to_string(),
                "No significant news sentiment".to_string(),
            ]
        );
    }
}
