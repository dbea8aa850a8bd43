// SPDX-License-Identifier: MIT OR Apache-2.0
//! Translation between [`TypedError`] and gRPC [`Status`].
//!
//! The kind/code table lives in [`STATUS_CODES`] and drives both directions.
//! Local names differ from wire names for six kinds (`Unauthorized` is
//! `UNAUTHENTICATED`, `Forbidden` is `PERMISSION_DENIED`, and so on).

use std::error::Error as StdError;

use tonic::{Code, Status};
use tracing::debug;

use crate::kind::ErrorKind;
use crate::typed::TypedError;

/// Kind to gRPC code, one row per kind. `Code::Ok` never appears.
pub const STATUS_CODES: [(ErrorKind, Code); 12] = [
    (ErrorKind::Unknown, Code::Unknown),
    (ErrorKind::Canceled, Code::Cancelled),
    (ErrorKind::NotFound, Code::NotFound),
    (ErrorKind::AlreadyExists, Code::AlreadyExists),
    (ErrorKind::Unauthorized, Code::Unauthenticated),
    (ErrorKind::Forbidden, Code::PermissionDenied),
    (ErrorKind::Conflict, Code::FailedPrecondition),
    (ErrorKind::Invalid, Code::InvalidArgument),
    (ErrorKind::Unavailable, Code::Unavailable),
    (ErrorKind::NotSupported, Code::Unimplemented),
    (ErrorKind::Timeout, Code::DeadlineExceeded),
    (ErrorKind::Internal, Code::Internal),
];

impl ErrorKind {
    /// The gRPC code this kind travels as.
    pub fn code(self) -> Code {
        STATUS_CODES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or(Code::Unknown, |(_, code)| *code)
    }

    /// The kind a gRPC code maps back to.
    ///
    /// `None` for `Code::Ok` and for codes outside [`STATUS_CODES`].
    pub fn from_code(code: Code) -> Option<Self> {
        STATUS_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(kind, _)| *kind)
    }
}

/// Convert a possibly absent error to a gRPC status.
///
/// `None` becomes `OK` with an empty message. A [`TypedError`] keeps its
/// message under the mapped code. Any other error becomes `UNKNOWN` carrying
/// its display text.
pub fn to_status(err: Option<&(dyn StdError + 'static)>) -> Status {
    let Some(err) = err else {
        return Status::new(Code::Ok, "");
    };
    match TypedError::narrow(err) {
        Some(typed) => Status::new(typed.kind().code(), typed.message()),
        None => {
            debug!(target: "sb.status", error = %err, "unclassified error sent as UNKNOWN");
            Status::new(Code::Unknown, err.to_string())
        }
    }
}

/// Convert a gRPC status back to a [`TypedError`].
///
/// `OK` yields `None`. Codes without a kind of their own (`RESOURCE_EXHAUSTED`,
/// `ABORTED`, `OUT_OF_RANGE`, `DATA_LOSS`) arrive as [`ErrorKind::Unknown`].
pub fn from_status(status: &Status) -> Option<TypedError> {
    let code = status.code();
    if code == Code::Ok {
        return None;
    }
    let kind = ErrorKind::from_code(code).unwrap_or_else(|| {
        debug!(target: "sb.status", ?code, "status code has no error kind, using UNKNOWN");
        ErrorKind::Unknown
    });
    Some(TypedError::new(kind, status.message()))
}

/// Convert an error returned by a gRPC call to a [`TypedError`].
///
/// The status is looked up on the error itself and then along its `source()`
/// chain, so transport wrappers around a [`Status`] are unwrapped. An error
/// with no status anywhere becomes [`ErrorKind::Unknown`] with its display
/// text.
pub fn from_grpc(err: Option<&(dyn StdError + 'static)>) -> Option<TypedError> {
    let err = err?;
    match find_status(err) {
        Some(status) => from_status(status),
        None => {
            debug!(target: "sb.status", error = %err, "error carries no status, using UNKNOWN");
            Some(TypedError::unknown(err.to_string()))
        }
    }
}

fn find_status<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Status> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(status) = e.downcast_ref::<Status>() {
            return Some(status);
        }
        current = e.source();
    }
    None
}

impl From<&TypedError> for Status {
    fn from(err: &TypedError) -> Self {
        Status::new(err.kind().code(), err.message())
    }
}

impl From<TypedError> for Status {
    fn from(err: TypedError) -> Self {
        let code = err.kind().code();
        Status::new(code, err.into_message())
    }
}
