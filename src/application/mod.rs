//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncEngine` - install, update, force-refresh and backport
//! - `run_doctor` - read-only audit of installed or factory units
//! - `inventory` - which units exist on which side
//! - `list_available_presets` / `resolve_preset` - preset bundles

pub mod doctor;
pub mod inventory;
pub mod presets;
pub mod sync;
pub mod units;

pub use doctor::{run_doctor, DoctorReport, DoctorScope, Finding, Severity};
pub use inventory::{inventory, InventoryEntry, SyncStatus};
pub use presets::{list_available_presets, load_presets, resolve_preset, PRESETS_FILE};
pub use sync::{
    BackportOutcome, EngineSettings, InstallOptions, InstallReport, RefreshReport, SyncEngine,
    UnitFailure, UpdateReport,
};
pub use units::{factory_units, installed_units};
