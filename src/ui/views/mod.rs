pub mod doctor;
pub mod inventory;
pub mod presets;
pub mod sync;
