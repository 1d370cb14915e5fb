//! Observability: thread-local counters, the sink boundary, and
//! serializable snapshots.
//!
//! Collections report through `sink::record`; nothing else here is called
//! from collection code.

pub(crate) mod metrics;
pub(crate) mod sink;
pub(crate) mod snapshot;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{
    BuildSource, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink,
};
pub use snapshot::CollectionReport;
