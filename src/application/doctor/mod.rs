//! Doctor - read-only audit of a units directory
//!
//! Every unit is checked for:
//! - a readable marker file (error)
//! - `See <dir>/<path>` references that do not resolve inside the unit (error)
//! - `@name` references to units that are neither present nor configured (warning)
//! - absolute user paths such as `/Users/...` (warning)
//!
//! Nothing is ever written.

mod checks;
mod report;
mod types;

pub use report::{run_doctor, DoctorReport, DoctorScope, DoctorSink, UnitsLayout};
pub use types::{Finding, Severity};
