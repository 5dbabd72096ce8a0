//! Sync Event Port
//!
//! Provides an observable interface for sync operations. The engine never
//! writes to a terminal; it reports what it sees through this sink.

use crate::domain::value_objects::ChangeRecord;

/// Event emitted during install / update / force-refresh / backport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A unit differs from its counterpart. Emitted right before the
    /// confirmation prompt for that unit.
    UnitChanges {
        unit: String,
        changes: Vec<ChangeRecord>,
    },

    /// A unit was copied into its destination
    UnitApplied { unit: String },

    /// The user declined the changes for a unit
    UnitDeclined { unit: String },

    /// A unit failed and was skipped
    UnitFailed { unit: String, message: String },

    /// Rules category regenerated
    RulesSynced { count: usize },
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - ConsoleSink: styled terminal output
/// - JsonSink: NDJSON event stream
/// - NoopSink: Silent operation
pub trait SyncEventSink {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);
}

impl<S: SyncEventSink + ?Sized> SyncEventSink for &S {
    fn on_event(&self, event: SyncEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SyncEventSink for NoopSink {
    fn on_event(&self, _event: SyncEvent) {}
}
