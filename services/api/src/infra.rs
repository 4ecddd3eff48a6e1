use metrics_exporter_prometheus::PrometheusHandle;
use offer_health::economics::EvaluationService;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn evaluation_service() -> Arc<EvaluationService> {
    Arc::new(EvaluationService::new())
}
