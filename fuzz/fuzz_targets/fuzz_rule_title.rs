#![no_main]

use libfuzzer_sys::fuzz_target;
use skill_factory::domain::services::rule_converter;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let rule = rule_converter::convert(content);
        assert!(rule.starts_with("---\ndescription: "));
        assert!(rule.ends_with(content));
    }
});
