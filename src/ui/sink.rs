//! Event sinks the binary hands to the sync engine.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::json;
use skill_factory::{ChangeRecord, SyncEvent, SyncEventSink};

use crate::ui::components::changes::{plural, render_unit_changes};
use crate::ui::json::write_event;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Styled terminal output: diffs before each prompt, one line per outcome.
pub struct ConsoleSink<W: Write> {
    out: Mutex<W>,
    color: bool,
    unicode: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(color: bool, unicode: bool) -> Self {
        Self::new(io::stdout(), color, unicode)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, color: bool, unicode: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
            unicode,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn render(&self, event: &SyncEvent) -> String {
        let (color, unicode) = (self.color, self.unicode);
        match event {
            SyncEvent::UnitChanges { unit, changes } => {
                render_unit_changes(unit, changes, color, unicode)
            }
            SyncEvent::UnitApplied { unit } => format!(
                "{} {}\n",
                Icon::Success.colored(color, unicode),
                unit
            ),
            SyncEvent::UnitDeclined { unit } => format!(
                "{} {}\n",
                Icon::Arrow.colored(color, unicode),
                ColoredText::dim(format!("{unit} skipped")).render(color)
            ),
            SyncEvent::UnitFailed { message, .. } => format!(
                "{} {}\n",
                Icon::Error.colored(color, unicode),
                ColoredText::error(message.as_str()).render(color)
            ),
            SyncEvent::RulesSynced { count } => format!(
                "{} {}\n",
                Icon::Success.colored(color, unicode),
                ColoredText::dim(format!("{} regenerated", plural(*count, "rule"))).render(color)
            ),
        }
    }
}

impl<W: Write> SyncEventSink for ConsoleSink<W> {
    fn on_event(&self, event: SyncEvent) {
        let text = self.render(&event);
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

/// NDJSON stream of sync events.
pub struct JsonSink<W: Write> {
    out: Mutex<W>,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn change_json(change: &ChangeRecord) -> serde_json::Value {
    match change {
        ChangeRecord::New { .. } => json!({
            "path": change.display_path(),
            "kind": "new",
        }),
        ChangeRecord::Modified { diff, .. } => json!({
            "path": change.display_path(),
            "kind": "modified",
            "diff": diff,
        }),
    }
}

fn event_json(event: &SyncEvent) -> serde_json::Value {
    match event {
        SyncEvent::UnitChanges { unit, changes } => json!({
            "event": "changes",
            "unit": unit,
            "files": changes.iter().map(change_json).collect::<Vec<_>>(),
        }),
        SyncEvent::UnitApplied { unit } => json!({ "event": "applied", "unit": unit }),
        SyncEvent::UnitDeclined { unit } => json!({ "event": "declined", "unit": unit }),
        SyncEvent::UnitFailed { unit, message } => json!({
            "event": "unit_failed",
            "unit": unit,
            "message": message,
        }),
        SyncEvent::RulesSynced { count } => json!({ "event": "rules_synced", "count": count }),
    }
}

impl<W: Write> SyncEventSink for JsonSink<W> {
    fn on_event(&self, event: SyncEvent) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _ = write_event(&mut *out, &event_json(&event));
        let _ = out.flush();
    }
}
