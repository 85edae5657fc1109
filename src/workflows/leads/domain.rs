use serde::{Deserialize, Deserializer, Serialize};

/// One candidate company as supplied by the caller. Read-only for scoring purposes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub industry: String,
    #[serde(default)]
    pub revenue_usd: Option<f64>,
    #[serde(default)]
    pub ebitda_usd: Option<f64>,
    #[serde(default)]
    pub employee_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Qualitative bucket derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadCategory {
    #[serde(rename = "HIGH POTENTIAL")]
    HighPotential,
    #[serde(rename = "MEDIUM POTENTIAL")]
    MediumPotential,
    #[serde(rename = "LOW POTENTIAL")]
    LowPotential,
}

impl LeadCategory {
    pub const HIGH_THRESHOLD: i32 = 80;
    pub const MEDIUM_THRESHOLD: i32 = 50;

    pub const fn from_score(score: i32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::HighPotential
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::MediumPotential
        } else {
            Self::LowPotential
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LeadCategory::HighPotential => "HIGH POTENTIAL",
            LeadCategory::MediumPotential => "MEDIUM POTENTIAL",
            LeadCategory::LowPotential => "LOW POTENTIAL",
        }
    }
}

/// Attributes examined by the rule engine, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadFactor {
    Industry,
    Revenue,
    Ebitda,
    DescriptionKeywords,
    ContactRole,
    EmployeeCount,
    NewsSentiment,
}

impl LeadFactor {
    /// Whether the factor contributes a line to the explanation trail.
    pub const fn explained(self) -> bool {
        !matches!(self, LeadFactor::DescriptionKeywords)
    }
}

/// Discrete contribution to a lead score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: LeadFactor,
    pub score: i32,
    pub notes: String,
}

/// Scoring output for a single lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: i32,
    pub category: LeadCategory,
    pub reasons: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl ScoreResult {
    pub fn summary(&self) -> &str {
        self.reasons.first().map(String::as_str).unwrap_or_default()
    }

    pub fn contribution(&self, factor: LeadFactor) -> i32 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.score)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_thresholds_are_inclusive_at_the_lower_edge() {
        assert_eq!(LeadCategory::from_score(80), LeadCategory::HighPotential);
        assert_eq!(LeadCategory::from_score(79), LeadCategory::MediumPotential);
        assert_eq!(LeadCategory::from_score(50), LeadCategory::MediumPotential);
        assert_eq!(LeadCategory::from_score(49), LeadCategory::LowPotential);
        assert_eq!(LeadCategory::from_score(-40), LeadCategory::LowPotential);
    }

    #[test]
    fn lead_tolerates_nulls_and_missing_fields() {
        let lead: Lead = serde_json::from_str(
            r#"{ "company_name": "Acme", "industry": null, "revenue_usd": null }"#,
        )
        .expect("lead parses");
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.industry, "");
        assert!(lead.revenue_usd.is_none());
        assert!(lead.employee_count.is_none());
        assert_eq!(lead.contact_title, "");
    }

    #[test]
    fn category_serializes_with_display_label() {
        let value = serde_json::to_value(LeadCategory::MediumPotential).expect("serialize");
        assert_eq!(value, serde_json::json!("MEDIUM POTENTIAL"));
    }
}
