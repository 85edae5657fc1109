use serde::{Deserialize, Serialize};

/// Raw Ideal Customer Profile as an analyst enters it: comma separated token lists and
/// optional numeric bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IcpSettings {
    pub industries: String,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
    pub min_ebitda: Option<f64>,
    pub max_ebitda: Option<f64>,
    #[serde(alias = "positive_keywords_desc")]
    pub positive_keywords: String,
    #[serde(alias = "negative_keywords_desc")]
    pub negative_keywords: String,
    pub contact_roles: String,
    pub min_employees: Option<f64>,
    pub max_employees: Option<f64>,
}

impl IcpSettings {
    /// Profile used for lower middle market acquisition screening when nothing else is supplied.
    pub fn acquisition_defaults() -> Self {
        Self {
            industries: "manufacturing, services, healthcare".to_string(),
            min_revenue: Some(1_000_000.0),
            max_revenue: Some(10_000_000.0),
            min_ebitda: Some(500_000.0),
            max_ebitda: Some(2_000_000.0),
            positive_keywords: "owner-operated, recurring revenue".to_string(),
            negative_keywords: "startup, pre-revenue".to_string(),
            contact_roles: "founder, ceo, owner".to_string(),
            min_employees: Some(10.0),
            max_employees: Some(100.0),
        }
    }

    pub fn normalize(&self) -> IcpProfile {
        IcpProfile::from_settings(self)
    }
}

/// Normalized, immutable matching structures for one scoring session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IcpProfile {
    pub industries: KeywordSet,
    pub revenue: Band,
    pub ebitda: Band,
    pub positive_keywords: KeywordSet,
    pub negative_keywords: KeywordSet,
    pub contact_roles: KeywordSet,
    pub employees: Band,
}

impl IcpProfile {
    pub fn from_settings(settings: &IcpSettings) -> Self {
        Self {
            industries: KeywordSet::parse(&settings.industries),
            revenue: Band::new(settings.min_revenue, settings.max_revenue),
            ebitda: Band::new(settings.min_ebitda, settings.max_ebitda),
            positive_keywords: KeywordSet::parse(&settings.positive_keywords),
            negative_keywords: KeywordSet::parse(&settings.negative_keywords),
            contact_roles: KeywordSet::parse(&settings.contact_roles),
            employees: Band::new(settings.min_employees, settings.max_employees),
        }
    }
}

impl Default for IcpProfile {
    fn default() -> Self {
        Self::from_settings(&IcpSettings::default())
    }
}

/// Lower-cased tokens matched by plain substring containment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(|token| token.trim().to_lowercase())
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// `text` must already be lower-cased.
    pub fn any_within(&self, text: &str) -> bool {
        self.0.iter().any(|token| text.contains(token.as_str()))
    }

    /// Number of tokens contained in `text`; each token counts at most once.
    pub fn count_within(&self, text: &str) -> usize {
        self.0
            .iter()
            .filter(|token| text.contains(token.as_str()))
            .count()
    }
}

/// Inclusive numeric range. A missing minimum is 0 and a missing maximum is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub min: f64,
    #[serde(serialize_with = "serialize_upper_bound")]
    pub max: f64,
}

impl Band {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(f64::INFINITY),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_unbounded_above(&self) -> bool {
        self.max == f64::INFINITY
    }
}

impl Default for Band {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn serialize_upper_bound<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.is_finite() {
        serializer.serialize_some(value)
    } else {
        serializer.serialize_none()
    }
}
