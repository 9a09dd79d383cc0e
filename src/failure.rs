//! Unified error value
//!
//! A `Failure` is what the engine reports in the `error` slot of an
//! [`Outcome`](crate::Outcome), whether the callable returned an error or
//! panicked. It is a shared handle: clones point at the same error, and
//! equality is identity of that error, not equality of its text.

use serde::{Serialize, Serializer};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/* ===================== Failure ===================== */

/// Shared handle to an error value
#[derive(Clone)]
pub struct Failure {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Failure {
    /// Wrap an error value
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Failure {
            inner: Arc::new(error),
        }
    }

    /// Build a failure whose description is exactly `text`
    pub fn msg(text: impl Into<String>) -> Self {
        Failure::new(Message(text.into()))
    }

    /// Adopt an already shared error without re-wrapping it
    pub fn from_arc(inner: Arc<dyn StdError + Send + Sync + 'static>) -> Self {
        Failure { inner }
    }

    /// Adopt a boxed error
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Failure {
            inner: Arc::from(error),
        }
    }

    /// Textual description of the failure
    pub fn describe(&self) -> String {
        self.inner.to_string()
    }

    /// Borrow the underlying error
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// Downcast to the concrete error type the failure was built from
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// True when both handles refer to the same error value
    pub fn ptr_eq(&self, other: &Failure) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure::new(error)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.inner).finish()
    }
}

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&*self.inner)
    }
}

/* ===================== Built-in error shapes ===================== */

/// Error carrying a plain text description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Message(pub String);

/// Panic payload with no known textual form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("panic with non-printable payload")]
pub struct UnknownPayload;
