// SPDX-License-Identifier: MIT OR Apache-2.0
//! [`TypedError`], its per-kind constructors, and the classification
//! predicates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::hash::{Hash, Hasher};

use crate::kind::ErrorKind;

/// An error value tagged with an [`ErrorKind`].
///
/// The display text is the message verbatim; the kind is never embedded in
/// it. Two errors compare equal when their kinds match, whatever their
/// messages say.
///
/// ```
/// use sb_error::{ErrorKind, TypedError};
///
/// let err = TypedError::forbidden("tenant admin only");
/// assert_eq!(err.kind(), ErrorKind::Forbidden);
/// assert_eq!(err.to_string(), "tenant admin only");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, thiserror::Error)]
#[error("{message}")]
pub struct TypedError {
    kind: ErrorKind,
    message: String,
}

impl TypedError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The kind this error was constructed with.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Narrow an arbitrary error to a [`TypedError`].
    ///
    /// Returns `None` for any other error type. Only the error itself is
    /// inspected, never its `source()` chain.
    pub fn narrow<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a TypedError> {
        err.downcast_ref::<TypedError>()
    }

    /// [`TypedError::narrow`] over a possibly absent error.
    pub fn narrow_opt<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a TypedError> {
        err.and_then(Self::narrow)
    }
}

impl PartialEq for TypedError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for TypedError {}

impl Hash for TypedError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

/// The kind of `err`, if it is a [`TypedError`].
pub fn kind_of(err: &(dyn StdError + 'static)) -> Option<ErrorKind> {
    TypedError::narrow(err).map(TypedError::kind)
}

/// [`kind_of`] over a possibly absent error.
pub fn kind_of_opt(err: Option<&(dyn StdError + 'static)>) -> Option<ErrorKind> {
    err.and_then(kind_of)
}

/// Whether `err` is a [`TypedError`] of the given kind.
pub fn is_kind(err: &(dyn StdError + 'static), kind: ErrorKind) -> bool {
    kind_of(err) == Some(kind)
}

macro_rules! per_kind {
    ($($kind:ident => $ctor:ident, $pred:ident;)*) => {
        impl TypedError {
            $(
                #[doc = concat!("Create an [`ErrorKind::", stringify!($kind), "`] error.")]
                pub fn $ctor(message: impl Into<String>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )*
        }

        $(
            #[doc = concat!(
                "Whether `err` is a [`TypedError`] of kind [`ErrorKind::",
                stringify!($kind),
                "`]."
            )]
            pub fn $pred(err: &(dyn StdError + 'static)) -> bool {
                is_kind(err, ErrorKind::$kind)
            }
        )*
    };
}

per_kind! {
    Unknown => unknown, is_unknown;
    Canceled => canceled, is_canceled;
    NotFound => not_found, is_not_found;
    AlreadyExists => already_exists, is_already_exists;
    Unauthorized => unauthorized, is_unauthorized;
    Forbidden => forbidden, is_forbidden;
    Conflict => conflict, is_conflict;
    Invalid => invalid, is_invalid;
    Unavailable => unavailable, is_unavailable;
    NotSupported => not_supported, is_not_supported;
    Timeout => timeout, is_timeout;
    Internal => internal, is_internal;
}
