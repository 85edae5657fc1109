use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::workflows::leads::{IcpProfile, IcpSettings, Lead, SentimentProbe};

pub(super) fn acquisition_profile() -> IcpProfile {
    IcpSettings::acquisition_defaults().normalize()
}

pub(super) fn precision_machining() -> Lead {
    Lead {
        company_name: "Precision Machining Solutions".to_string(),
        industry: "Specialty Manufacturing".to_string(),
        revenue_usd: Some(6_800_000.0),
        ebitda_usd: Some(1_100_000.0),
        employee_count: Some(35),
        company_description: "Owner-operated, strong recurring revenue from aerospace clients."
            .to_string(),
        contact_name: Some("Robert Johnson".to_string()),
        contact_title: "Founder & CEO".to_string(),
        location: "Dallas, TX".to_string(),
    }
}

pub(super) fn eco_tech_startup() -> Lead {
    Lead {
        company_name: "Eco-Tech Startup".to_string(),
        industry: "Environmental Tech".to_string(),
        revenue_usd: Some(300_000.0),
        ebitda_usd: Some(-50_000.0),
        employee_count: Some(8),
        company_description: "Pre-revenue startup using AI for waste management.".to_string(),
        contact_name: Some("Sarah Chen".to_string()),
        contact_title: "Co-Founder".to_string(),
        location: "San Francisco, CA".to_string(),
    }
}

pub(super) fn sparse_lead() -> Lead {
    Lead {
        company_name: "Unknown Holdings".to_string(),
        ..Lead::default()
    }
}

/// Probe returning a preset delta and counting how often it was consulted.
#[derive(Debug, Default)]
pub(super) struct FixedProbe {
    pub(super) delta: i32,
    pub(super) calls: AtomicUsize,
}

impl FixedProbe {
    pub(super) fn new(delta: i32) -> Self {
        Self {
            delta,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentProbe for FixedProbe {
    async fn sentiment(&self, _company_name: &str) -> i32 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.delta
    }
}
