//! Acquisition lead scoring against an Ideal Customer Profile.

pub mod batch;
pub mod domain;
pub mod icp;
pub mod scoring;
pub mod sentiment;

#[cfg(test)]
mod tests;

pub use batch::{BatchError, BatchReport, BatchSummary, LeadBatch, LeadReportRow, ScoredLead};
pub use domain::{Lead, LeadCategory, LeadFactor, ScoreComponent, ScoreResult};
pub use icp::{Band, IcpProfile, IcpSettings, KeywordSet};
pub use scoring::{score_with_sentiment, LeadScorer};
pub use sentiment::{GNewsProbe, NeutralProbe, SentimentProbe};
