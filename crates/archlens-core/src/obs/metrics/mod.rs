use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for collection operations.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Construction
    pub built_from_mapping: u64,
    pub built_from_iterable: u64,
    pub build_rejections: u64,
    pub classes_indexed: u64,

    // Filtering
    pub filters_applied: u64,
    pub filters_described: u64,
    pub classes_scanned: u64,
    pub classes_retained: u64,

    // Re-description
    pub redescriptions: u64,

    // Lookup
    pub lookups: u64,
    pub lookup_misses: u64,
}

impl EventOps {
    /// Collections built through either entry point.
    #[must_use]
    pub const fn collections_built(&self) -> u64 {
        self.built_from_mapping
            .saturating_add(self.built_from_iterable)
    }
}

///
/// EventReport
/// Point-in-time copy of the counters, safe to serialize.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub counters: EventOps,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
#[cfg_attr(not(feature = "metrics"), allow(dead_code))]
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    EVENT_STATE.with(|m| *m.borrow_mut() = EventState::default());
}

/// Snapshot the counters.
#[must_use]
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        counters: m.ops.clone(),
    })
}
