mod export;
mod parser;

use super::domain::{Lead, LeadCategory, ScoreResult};
use super::scoring::LeadScorer;
use super::sentiment::SentimentProbe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read leads: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lead JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads lead collections supplied as JSON.
pub struct LeadBatch;

impl LeadBatch {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Lead>, BatchError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Lead>, BatchError> {
        Ok(parser::parse_leads(reader)?)
    }
}

/// A lead paired with its scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLead {
    pub lead: Lead,
    pub result: ScoreResult,
}

/// One line of the tabular export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadReportRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Score")]
    pub score: i32,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Revenue")]
    pub revenue: Option<f64>,
    #[serde(rename = "EBITDA")]
    pub ebitda: Option<f64>,
    #[serde(rename = "Employees")]
    pub employees: Option<u64>,
    #[serde(rename = "Contact")]
    pub contact: String,
}

impl From<&ScoredLead> for LeadReportRow {
    fn from(scored: &ScoredLead) -> Self {
        Self {
            company: scored.lead.company_name.clone(),
            score: scored.result.total_score,
            summary: scored.result.summary().to_string(),
            industry: scored.lead.industry.clone(),
            revenue: scored.lead.revenue_usd,
            ebitda: scored.lead.ebitda_usd,
            employees: scored.lead.employee_count,
            contact: scored.lead.contact_title.clone(),
        }
    }
}

/// Category distribution across a scored batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub high_potential: usize,
    pub medium_potential: usize,
    pub low_potential: usize,
    pub average_score: Option<f64>,
    pub top_company: Option<String>,
}

impl BatchSummary {
    fn from_scored(leads: &[ScoredLead]) -> Self {
        let count = |category: LeadCategory| {
            leads
                .iter()
                .filter(|scored| scored.result.category == category)
                .count()
        };

        let average_score = if leads.is_empty() {
            None
        } else {
            let sum: i64 = leads
                .iter()
                .map(|scored| i64::from(scored.result.total_score))
                .sum();
            Some(sum as f64 / leads.len() as f64)
        };

        // First lead wins ties so the ranking follows input order.
        let top_company = leads
            .iter()
            .fold(None::<&ScoredLead>, |best, scored| match best {
                Some(current) if current.result.total_score >= scored.result.total_score => {
                    Some(current)
                }
                _ => Some(scored),
            })
            .map(|scored| scored.lead.company_name.clone());

        Self {
            total: leads.len(),
            high_potential: count(LeadCategory::HighPotential),
            medium_potential: count(LeadCategory::MediumPotential),
            low_potential: count(LeadCategory::LowPotential),
            average_score,
            top_company,
        }
    }
}

/// Results of scoring a lead collection in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub leads: Vec<ScoredLead>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(leads: Vec<ScoredLead>) -> Self {
        let summary = BatchSummary::from_scored(&leads);
        Self {
            generated_at: Utc::now(),
            leads,
            summary,
        }
    }

    pub fn rows(&self) -> Vec<LeadReportRow> {
        self.leads.iter().map(LeadReportRow::from).collect()
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), BatchError> {
        export::write_rows(writer, &self.rows())?;
        Ok(())
    }
}

impl<P> LeadScorer<P>
where
    P: SentimentProbe,
{
    /// Scores each lead strictly one after another.
    pub async fn score_batch(&self, leads: Vec<Lead>) -> BatchReport {
        let mut scored = Vec::with_capacity(leads.len());
        for lead in leads {
            let result = self.score(&lead).await;
            scored.push(ScoredLead { lead, result });
        }

        let report = BatchReport::new(scored);
        info!(
            leads = report.summary.total,
            high = report.summary.high_potential,
            medium = report.summary.medium_potential,
            low = report.summary.low_potential,
            "lead batch scored"
        );
        report
    }
}
