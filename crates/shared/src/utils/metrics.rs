use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Start of a timed service operation.
#[derive(Debug)]
pub struct TracingContext {
    pub operation: &'static str,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation: &'static str) -> Self {
        info!("Starting operation: {operation}");
        Self {
            operation,
            start_time: Instant::now(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    /// Registers a fresh pair of families under `<prefix>_request_counter`
    /// and `<prefix>_request_duration`.
    pub fn registered(registry: &mut Registry, prefix: &str, service: &str) -> Self {
        let metrics = Self::new();

        registry.register(
            format!("{prefix}_request_counter"),
            format!("Total number of requests to the {service}"),
            metrics.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration"),
            format!("Histogram of request durations for the {service}"),
            metrics.request_duration.clone(),
        );

        metrics
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn complete_success(&self, ctx: &TracingContext, method: Method, message: &str) {
        info!("✅ {} completed: {message}", ctx.operation);
        self.record(method, Status::Success, ctx.start_time.elapsed().as_secs_f64());
    }

    pub fn complete_error(&self, ctx: &TracingContext, method: Method, message: &str) {
        error!("❌ {} failed: {message}", ctx.operation);
        self.record(method, Status::Error, ctx.start_time.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn recorded_requests_show_up_in_the_exposition() {
        let mut registry = Registry::default();
        let metrics = Metrics::registered(&mut registry, "table_service", "TableService");

        metrics.record(Method::Post, Status::Success, 0.02);
        metrics.record(Method::Post, Status::Error, 0.2);

        let mut body = String::new();
        encode(&mut body, &registry).unwrap();

        assert!(body.contains("table_service_request_counter_total"));
        assert!(body.contains("method=\"Post\""));
        assert!(body.contains("status=\"Error\""));
        assert!(body.contains("table_service_request_duration_bucket"));
    }
}
