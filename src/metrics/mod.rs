use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Order entity construction (successes, failures by reason)
// - Pickup point validation outcomes, including fail-open paths
//
// ============================================================================

/// Pickup point validation outcome label values.
pub const OUTCOME_VALID: &str = "valid";
pub const OUTCOME_INVALID: &str = "invalid";
pub const OUTCOME_FAIL_OPEN_CONFIG: &str = "fail_open_config";
pub const OUTCOME_FAIL_OPEN_REMOTE: &str = "fail_open_remote";

/// Central metrics registry for the plugin core
pub struct Metrics {
    registry: Registry,

    // Order Builder Metrics
    pub orders_built: IntCounter,
    pub order_build_failures: IntCounterVec,

    // Pickup Point Validation Metrics
    pub pickup_point_validations: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_built = IntCounter::new(
            "packetery_orders_built_total",
            "Total order entities built",
        )?;
        registry.register(Box::new(orders_built.clone()))?;

        let order_build_failures = IntCounterVec::new(
            Opts::new(
                "packetery_order_build_failures_total",
                "Order entities that could not be built",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(order_build_failures.clone()))?;

        let pickup_point_validations = IntCounterVec::new(
            Opts::new(
                "packetery_pickup_point_validations_total",
                "Pickup point validations by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(pickup_point_validations.clone()))?;

        Ok(Self {
            registry,
            orders_built,
            order_build_failures,
            pickup_point_validations,
        })
    }

    pub fn record_order_built(&self) {
        self.orders_built.inc();
    }

    pub fn record_order_build_failure(&self, reason: &str) {
        self.order_build_failures.with_label_values(&[reason]).inc();
    }

    pub fn record_validation(&self, outcome: &str) {
        self.pickup_point_validations.with_label_values(&[outcome]).inc();
    }

    /// Text exposition format, ready to be served on /metrics.
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
