#![no_main]

use libfuzzer_sys::fuzz_target;
use skill_factory::PathRewriter;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let rewriter = PathRewriter::default();
        let once = rewriter.rewrite(text);
        assert_eq!(rewriter.rewrite(&once), once);
    }
});
