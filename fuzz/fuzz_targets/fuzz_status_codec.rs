// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz the status codec with arbitrary codes and messages.
//!
//! Verifies:
//! 1. `from_status` is total over every code and never panics.
//! 2. Messages pass through unchanged in both directions.
//! 3. Typed errors survive a trip through a status with kind intact.
#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sb_error::{ErrorKind, TypedError, from_status, to_status};
use tonic::{Code, Status};

#[derive(Debug, Arbitrary)]
struct Input {
    code: i32,
    kind_idx: u8,
    message: String,
}

fuzz_target!(|input: Input| {
    // --- Property 1: inbound is total ---
    let code = Code::from_i32(input.code);
    let status = Status::new(code, input.message.clone());
    match from_status(&status) {
        None => assert_eq!(code, Code::Ok),
        Some(err) => {
            assert_ne!(code, Code::Ok);
            // --- Property 2: message passthrough ---
            assert_eq!(err.message(), input.message);
            let expected = ErrorKind::from_code(code).unwrap_or(ErrorKind::Unknown);
            assert_eq!(err.kind(), expected);
        }
    }

    // --- Property 3: outbound round trip ---
    let kind = ErrorKind::ALL[input.kind_idx as usize % ErrorKind::ALL.len()];
    let err = TypedError::new(kind, input.message.clone());
    let back = from_status(&to_status(Some(&err))).expect("typed errors are never OK");
    assert_eq!(back.kind(), kind);
    assert_eq!(back.message(), input.message);
});
