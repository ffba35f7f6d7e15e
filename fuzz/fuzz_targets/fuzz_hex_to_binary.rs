#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Fuzz nibble expansion - invalid digits must error, never panic
        let _ = nibbler::hex_to_binary(input);
    }
});
