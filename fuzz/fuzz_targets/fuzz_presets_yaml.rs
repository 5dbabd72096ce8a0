#![no_main]

use libfuzzer_sys::fuzz_target;
use skill_factory::domain::services::PresetCatalog;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(catalog) = PresetCatalog::from_yaml(content) {
            let units = vec!["alpha".to_string(), "beta".to_string()];
            for preset in catalog.list() {
                // Cycles and unknown names are errors, never a hang
                let _ = catalog.resolve(&preset.name, &units);
            }
        }
    }
});
