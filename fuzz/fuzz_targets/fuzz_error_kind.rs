// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz ErrorKind parsing and TypedError deserialization.
//!
//! Verifies:
//! 1. Parsing arbitrary strings as ErrorKind never panics.
//! 2. Any parsed kind agrees across as_str, Display and serde.
//! 3. Deserializing arbitrary JSON as TypedError never panics.
#![no_main]
use libfuzzer_sys::fuzz_target;
use sb_error::{ErrorKind, TypedError};

fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    // --- Property 1 & 2 ---
    if let Ok(kind) = s.parse::<ErrorKind>() {
        assert_eq!(kind.as_str(), s);
        assert_eq!(kind.to_string(), s);
        let json = serde_json::to_string(&kind).expect("ErrorKind must serialize");
        let rt: ErrorKind = serde_json::from_str(&json).expect("ErrorKind round-trip");
        assert_eq!(rt, kind);
    }

    // --- Property 3 ---
    if let Ok(err) = serde_json::from_str::<TypedError>(s) {
        assert_eq!(err.to_string(), err.message());
    }
});
