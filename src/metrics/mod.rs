use prometheus::{Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Prometheus metrics for request rendering
#[derive(Clone)]
pub struct RenderMetrics {
    // Counters
    pub requests_rendered: Counter,
    pub raw_overrides: Counter,
    pub nodes_rendered: CounterVec,

    // Histograms
    pub facets_per_request: Histogram,

    // Registry
    registry: Arc<Registry>,
}

impl RenderMetrics {
    /// Create a new RenderMetrics instance with its own registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_rendered = Counter::with_opts(Opts::new(
            "querykit_requests_rendered_total",
            "Total number of search requests rendered",
        ))?;
        registry.register(Box::new(requests_rendered.clone()))?;

        let raw_overrides = Counter::with_opts(Opts::new(
            "querykit_raw_overrides_total",
            "Total number of slots filled from raw JSON",
        ))?;
        registry.register(Box::new(raw_overrides.clone()))?;

        let nodes_rendered = CounterVec::new(
            Opts::new(
                "querykit_top_level_nodes_total",
                "Top-level query, filter and facet nodes rendered, by slot",
            ),
            &["slot"],
        )?;
        registry.register(Box::new(nodes_rendered.clone()))?;

        let facets_per_request = Histogram::with_opts(
            HistogramOpts::new("querykit_facets_per_request", "Number of facets per request")
                .buckets(vec![0.0, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0]),
        )?;
        registry.register(Box::new(facets_per_request.clone()))?;

        Ok(Self {
            requests_rendered,
            raw_overrides,
            nodes_rendered,
            facets_per_request,
            registry: Arc::new(registry),
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Record one rendered request
    pub fn record_request(&self, raw_overrides: usize, facets: usize) {
        self.requests_rendered.inc();
        self.raw_overrides.inc_by(raw_overrides as f64);
        self.facets_per_request.observe(facets as f64);
    }

    /// Record top-level nodes rendered into a slot
    pub fn record_nodes(&self, slot: &str, count: usize) {
        if count > 0 {
            self.nodes_rendered.with_label_values(&[slot]).inc_by(count as f64);
        }
    }

    /// Metrics in the Prometheus text exposition format
    pub fn gather_text(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
