// SPDX-License-Identifier: MIT OR Apache-2.0
//! The closed set of error kinds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract failure category shared by every service in the layer.
///
/// Serialises to a `SCREAMING_SNAKE_CASE` tag that matches [`ErrorKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Failure with no more specific category.
    Unknown,
    /// The caller abandoned the operation.
    Canceled,
    /// The addressed resource does not exist.
    NotFound,
    /// The resource the caller tried to create already exists.
    AlreadyExists,
    /// The caller could not be authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed to do this.
    Forbidden,
    /// The system is not in the state the operation requires.
    Conflict,
    /// The request itself is malformed.
    Invalid,
    /// The service is temporarily unable to serve the request.
    Unavailable,
    /// The operation is not implemented by this service.
    NotSupported,
    /// The deadline expired before the operation completed.
    Timeout,
    /// An invariant broke inside the service.
    Internal,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 12] = [
        Self::Unknown,
        Self::Canceled,
        Self::NotFound,
        Self::AlreadyExists,
        Self::Unauthorized,
        Self::Forbidden,
        Self::Conflict,
        Self::Invalid,
        Self::Unavailable,
        Self::NotSupported,
        Self::Timeout,
        Self::Internal,
    ];

    /// Stable `&'static str` tag for the kind (e.g. `"NOT_FOUND"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Canceled => "CANCELED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Conflict => "CONFLICT",
            Self::Invalid => "INVALID",
            Self::Unavailable => "UNAVAILABLE",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::Timeout => "TIMEOUT",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`ErrorKind`] tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error kind: {input:?}")]
pub struct ParseErrorKindError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseErrorKindError { input: s.to_owned() })
    }
}
