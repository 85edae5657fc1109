use lead_scorer::config::SentimentConfig;
use lead_scorer::workflows::leads::{
    GNewsProbe, IcpSettings, LeadScorer, NeutralProbe, SentimentProbe,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type SessionScorer = LeadScorer<Box<dyn SentimentProbe>>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One scorer per server session: the ICP is fixed at startup and shared read-only.
pub(crate) fn session_scorer(
    settings: &IcpSettings,
    sentiment: &SentimentConfig,
    offline: bool,
) -> SessionScorer {
    let probe: Box<dyn SentimentProbe> = if offline {
        Box::new(NeutralProbe)
    } else {
        Box::new(GNewsProbe::new(sentiment))
    };
    LeadScorer::new(settings.normalize(), probe)
}
