// SPDX-License-Identifier: MIT OR Apache-2.0
//! Adapter for errors raised by external systems that carry their own
//! typed-error taxonomy.

use std::fmt;

use tracing::debug;

use crate::kind::ErrorKind;
use crate::typed::TypedError;

/// Classification surface of an external system's typed error.
///
/// Every predicate defaults to `false`; implementors override the ones their
/// taxonomy can answer. [`from_foreign`] asks them in declaration order.
pub trait ForeignError: fmt::Display {
    /// Foreign counterpart of [`ErrorKind::Unknown`].
    fn is_unknown(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Canceled`].
    fn is_canceled(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::NotFound`].
    fn is_not_found(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::AlreadyExists`].
    fn is_already_exists(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Unauthorized`].
    fn is_unauthorized(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Forbidden`].
    fn is_forbidden(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Conflict`].
    fn is_conflict(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Invalid`].
    fn is_invalid(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Unavailable`].
    fn is_unavailable(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::NotSupported`].
    fn is_not_supported(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Timeout`].
    fn is_timeout(&self) -> bool {
        false
    }
    /// Foreign counterpart of [`ErrorKind::Internal`].
    fn is_internal(&self) -> bool {
        false
    }

    /// The message to carry into the local error. Defaults to the display
    /// text.
    fn message(&self) -> String {
        self.to_string()
    }
}

/// Translate a foreign typed error into the local taxonomy.
///
/// The first foreign predicate that answers `true` picks the kind, checked in
/// the order Unknown, Canceled, NotFound, AlreadyExists, Unauthorized,
/// Forbidden, Conflict, Invalid, Unavailable, NotSupported, Timeout,
/// Internal. When none answers, the result is [`ErrorKind::Unknown`] with the
/// foreign display text.
pub fn from_foreign<E: ForeignError + ?Sized>(err: Option<&E>) -> Option<TypedError> {
    let err = err?;
    let chain: [(fn(&E) -> bool, ErrorKind); 12] = [
        (E::is_unknown, ErrorKind::Unknown),
        (E::is_canceled, ErrorKind::Canceled),
        (E::is_not_found, ErrorKind::NotFound),
        (E::is_already_exists, ErrorKind::AlreadyExists),
        (E::is_unauthorized, ErrorKind::Unauthorized),
        (E::is_forbidden, ErrorKind::Forbidden),
        (E::is_conflict, ErrorKind::Conflict),
        (E::is_invalid, ErrorKind::Invalid),
        (E::is_unavailable, ErrorKind::Unavailable),
        (E::is_not_supported, ErrorKind::NotSupported),
        (E::is_timeout, ErrorKind::Timeout),
        (E::is_internal, ErrorKind::Internal),
    ];
    match chain.iter().find(|(pred, _)| pred(err)) {
        Some((_, kind)) => Some(TypedError::new(*kind, err.message())),
        None => {
            debug!(
                target: "sb.foreign",
                error = %err,
                "foreign error matched no kind, using UNKNOWN"
            );
            Some(TypedError::unknown(err.to_string()))
        }
    }
}
