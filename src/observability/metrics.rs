use prometheus::{
    Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub settlements_total: IntCounterVec,
    pub settlement_compute_seconds: HistogramVec,
    pub predelivery_checks_total: IntCounterVec,
    pub disputes_resolved_total: IntCounterVec,
    pub notifications_in_queue: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let settlements_total = IntCounterVec::new(
            Opts::new("settlements_total", "Settlements computed by mode"),
            &["mode"],
        )
        .expect("valid settlements_total metric");

        let settlement_compute_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "settlement_compute_seconds",
                "Latency of settlement assembly in seconds",
            ),
            &["mode"],
        )
        .expect("valid settlement_compute_seconds metric");

        let predelivery_checks_total = IntCounterVec::new(
            Opts::new(
                "predelivery_checks_total",
                "Pre-delivery COD checks by outcome",
            ),
            &["outcome"],
        )
        .expect("valid predelivery_checks_total metric");

        let disputes_resolved_total = IntCounterVec::new(
            Opts::new(
                "disputes_resolved_total",
                "Balance dispute resolutions by outcome",
            ),
            &["outcome"],
        )
        .expect("valid disputes_resolved_total metric");

        let notifications_in_queue = IntGauge::new(
            "notifications_in_queue",
            "Driver notifications waiting for the relay",
        )
        .expect("valid notifications_in_queue metric");

        registry
            .register(Box::new(settlements_total.clone()))
            .expect("register settlements_total");
        registry
            .register(Box::new(settlement_compute_seconds.clone()))
            .expect("register settlement_compute_seconds");
        registry
            .register(Box::new(predelivery_checks_total.clone()))
            .expect("register predelivery_checks_total");
        registry
            .register(Box::new(disputes_resolved_total.clone()))
            .expect("register disputes_resolved_total");
        registry
            .register(Box::new(notifications_in_queue.clone()))
            .expect("register notifications_in_queue");

        Self {
            registry,
            settlements_total,
            settlement_compute_seconds,
            predelivery_checks_total,
            disputes_resolved_total,
            notifications_in_queue,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
