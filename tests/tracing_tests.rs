// SPDX-License-Identifier: MIT OR Apache-2.0
//! Verifies the debug events emitted when an error degrades to UNKNOWN.

use std::fmt;
use std::sync::{Arc, Mutex};

use sb_error::{ForeignError, TypedError, from_foreign, from_grpc, from_status, to_status};
use tonic::{Code, Status};

// ---------------------------------------------------------------------------
// Shared log-capture infrastructure
// ---------------------------------------------------------------------------

/// Thread-safe buffer that captures tracing output.
#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl LogBuf {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).to_string()
    }

    fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

impl std::io::Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuf {
    type Writer = LogBuf;
    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install a subscriber capturing everything into a [`LogBuf`] for the
/// lifetime of the returned guard.
fn setup_tracing() -> (LogBuf, tracing::subscriber::DefaultGuard) {
    let buf = LogBuf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_target(true)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buf, guard)
}

struct Opaque;

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("opaque failure")
    }
}

impl ForeignError for Opaque {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn unclassified_outbound_error_is_logged() {
    let (buf, _guard) = setup_tracing();
    let err = std::io::Error::other("socket closed");
    let _ = to_status(Some(&err));
    assert!(buf.contains("sb.status"));
    assert!(buf.contains("socket closed"));
}

#[test]
fn typed_outbound_error_is_silent() {
    let (buf, _guard) = setup_tracing();
    let _ = to_status(Some(&TypedError::not_found("gone")));
    let _ = to_status(None);
    assert!(buf.contents().is_empty(), "unexpected log: {}", buf.contents());
}

#[test]
fn unmapped_inbound_code_is_logged() {
    let (buf, _guard) = setup_tracing();
    let _ = from_status(&Status::new(Code::ResourceExhausted, "quota"));
    assert!(buf.contains("sb.status"));
    assert!(buf.contains("ResourceExhausted"));
}

#[test]
fn missing_status_is_logged() {
    let (buf, _guard) = setup_tracing();
    let err = std::io::Error::other("dns failure");
    let _ = from_grpc(Some(&err));
    assert!(buf.contains("dns failure"));
}

#[test]
fn unmatched_foreign_error_is_logged() {
    let (buf, _guard) = setup_tracing();
    let _ = from_foreign(Some(&Opaque));
    assert!(buf.contains("sb.foreign"));
    assert!(buf.contains("opaque failure"));
}
