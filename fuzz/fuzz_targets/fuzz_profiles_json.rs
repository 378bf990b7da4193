//! Fuzz target for enforcing the default catalog over arbitrary profile JSON.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_profiles_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use profileguard_app::{EnforceInput, run_enforce};
use profileguard_settings::Overrides;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let input = EnforceInput {
        config_text: "",
        profiles_json: Some(text),
        overrides: Overrides::default(),
    };
    if let Ok(output) = run_enforce(input) {
        // Profiles are never added or dropped.
        let parsed: Vec<serde_json::Value> = serde_json::from_str(text).unwrap_or_default();
        assert_eq!(output.report.run.profiles.len(), parsed.len());
    }
});
