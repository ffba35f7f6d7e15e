#![no_main]

use libfuzzer_sys::fuzz_target;

use nibbler::models::Base;

fuzz_target!(|data: &[u8]| {
    if let Some((selector, rest)) = data.split_first() {
        if let Ok(input) = std::str::from_utf8(rest) {
            // Fuzz place-value evaluation across all bases - malformed
            // input must error, never panic
            let base = Base::ALL[usize::from(*selector) % Base::ALL.len()];
            let _ = nibbler::evaluate(input, base);
        }
    }
});
