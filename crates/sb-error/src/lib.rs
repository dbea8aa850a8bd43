// SPDX-License-Identifier: MIT OR Apache-2.0
//! Typed error taxonomy for service layers, bridged to gRPC status codes.
//!
//! Every error is a [`TypedError`]: one of twelve [`ErrorKind`]s plus a
//! human-readable message. Callers build errors with the per-kind
//! constructors ([`TypedError::not_found`], …), classify arbitrary errors
//! with the predicates ([`is_not_found`], …), and convert at process edges:
//!
//! - [`to_status`] / [`from_status`] / [`from_grpc`] translate to and from
//!   `tonic::Status` (feature `grpc`, on by default).
//! - [`from_foreign`] translates errors of another system that implements
//!   [`ForeignError`].
//!
//! ```
//! use sb_error::{ErrorKind, TypedError, is_forbidden, kind_of};
//!
//! let err = TypedError::forbidden("read-only replica");
//! assert!(is_forbidden(&err));
//! assert_eq!(kind_of(&err), Some(ErrorKind::Forbidden));
//!
//! let io = std::io::Error::other("Forbidden");
//! assert!(!is_forbidden(&io));
//! ```
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod foreign;
pub mod kind;
#[cfg(feature = "grpc")]
pub mod status;
pub mod typed;

pub use foreign::{ForeignError, from_foreign};
pub use kind::{ErrorKind, ParseErrorKindError};
#[cfg(feature = "grpc")]
pub use status::{STATUS_CODES, from_grpc, from_status, to_status};
pub use typed::{
    TypedError, is_already_exists, is_canceled, is_conflict, is_forbidden, is_internal,
    is_invalid, is_kind, is_not_found, is_not_supported, is_timeout, is_unauthorized,
    is_unavailable, is_unknown, kind_of, kind_of_opt,
};
