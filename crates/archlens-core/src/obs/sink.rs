//! Metrics sink boundary.
//!
//! Collection code MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between collection operations
//! and the thread-local metrics state.
use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// BuildSource
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildSource {
    Mapping,
    Iterable,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    CollectionBuilt {
        source: BuildSource,
        classes: u64,
    },
    BuildRejected {
        source: BuildSource,
    },
    Filtered {
        described: bool,
        scanned: u64,
        retained: u64,
    },
    Redescribed,
    Lookup {
        hit: bool,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

#[cfg(feature = "metrics")]
pub(crate) struct GlobalMetricsSink;

#[cfg(feature = "metrics")]
impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| {
            let ops = &mut m.ops;

            match event {
                MetricsEvent::CollectionBuilt { source, classes } => {
                    match source {
                        BuildSource::Mapping => {
                            ops.built_from_mapping = ops.built_from_mapping.saturating_add(1);
                        }
                        BuildSource::Iterable => {
                            ops.built_from_iterable = ops.built_from_iterable.saturating_add(1);
                        }
                    }
                    ops.classes_indexed = ops.classes_indexed.saturating_add(classes);
                }

                MetricsEvent::BuildRejected { .. } => {
                    ops.build_rejections = ops.build_rejections.saturating_add(1);
                }

                MetricsEvent::Filtered {
                    described,
                    scanned,
                    retained,
                } => {
                    ops.filters_applied = ops.filters_applied.saturating_add(1);
                    if described {
                        ops.filters_described = ops.filters_described.saturating_add(1);
                    }
                    ops.classes_scanned = ops.classes_scanned.saturating_add(scanned);
                    ops.classes_retained = ops.classes_retained.saturating_add(retained);
                }

                MetricsEvent::Redescribed => {
                    ops.redescriptions = ops.redescriptions.saturating_add(1);
                }

                MetricsEvent::Lookup { hit } => {
                    ops.lookups = ops.lookups.saturating_add(1);
                    if !hit {
                        ops.lookup_misses = ops.lookup_misses.saturating_add(1);
                    }
                }
            }
        });
    }
}

#[cfg(feature = "metrics")]
pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

#[cfg(feature = "metrics")]
pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record(_event: MetricsEvent) {}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
