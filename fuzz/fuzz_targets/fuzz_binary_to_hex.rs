#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Fuzz 4-bit grouping - invalid digits must error, never panic
        let _ = nibbler::binary_to_hex(input);
    }
});
