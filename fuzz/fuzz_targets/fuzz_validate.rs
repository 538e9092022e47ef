#![no_main]

use euvat::CountryCode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // A rule may reject anything, but must never panic.
        for country in CountryCode::ALL {
            let _ = country.validate(s);
        }
    }
});
