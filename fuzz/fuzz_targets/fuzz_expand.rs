#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        // Bounded: a short template can still denote billions of strings.
        for item in urlglob::expand(template).take(4096) {
            if let Ok(url) = item {
                assert!(url.len() <= template.len());
            }
        }
    }
});
