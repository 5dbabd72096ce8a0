//! Command handlers for the `skills` binary
//!
//! Each handler loads the config, builds the engine (or use case) with
//! real adapters and renders the result either as styled text or NDJSON.

mod backport;
mod doctor;
mod install;
mod list;
mod presets;
mod update;

pub use backport::cmd_backport;
pub use doctor::cmd_doctor;
pub use install::cmd_install;
pub use list::cmd_list;
pub use presets::cmd_presets;
pub use update::cmd_update;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use skill_factory::{FactoryConfig, SyncEventSink};
use tracing::debug;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::sink::{ConsoleSink, JsonSink};

/// Resolved config plus the directory the command runs in
pub(crate) struct Workspace {
    pub config: FactoryConfig,
    pub project_root: PathBuf,
}

impl Workspace {
    pub fn load(config_path: Option<&Path>, ui: &UiContext) -> Result<Self> {
        let (config, warnings) = FactoryConfig::discover(config_path)?;
        print_config_warnings(&warnings, ui.unicode);

        let project_root = std::env::current_dir()?;
        debug!(
            source = %config.source.display(),
            project = %project_root.display(),
            "workspace loaded"
        );
        Ok(Self {
            config,
            project_root,
        })
    }

    /// `<project>/<target_dir>`
    pub fn project_target(&self) -> PathBuf {
        self.config.project_target(&self.project_root)
    }
}

pub(crate) fn event_sink(ui: &UiContext) -> Arc<dyn SyncEventSink> {
    if ui.json {
        Arc::new(JsonSink::stdout())
    } else {
        Arc::new(ConsoleSink::stdout(ui.color, ui.unicode))
    }
}
