//! Outcome of one try invocation

use crate::failure::Failure;
use crate::value::Value;
use serde::Serialize;

/// How the callable finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Status {
    /// Returned normally, no trailing error
    Succeeded = 0,
    /// Returned normally with an error-shaped trailing value
    Returned = 1,
    /// Panicked and the panic was intercepted
    Terminated = 2,
}

/// Results and error of one invocation
///
/// `results` mirrors the callable's return values in order. When the
/// callable returned an error-shaped trailing value, that value stays in
/// `results` and is also reported in `error`. When the callable panicked,
/// `results` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub results: Vec<Value>,
    pub error: Option<Failure>,
    pub status: Status,
}

impl Outcome {
    pub(crate) fn returned(results: Vec<Value>, error: Option<Failure>) -> Self {
        let status = if error.is_some() {
            Status::Returned
        } else {
            Status::Succeeded
        };
        Outcome {
            results,
            error,
            status,
        }
    }

    pub(crate) fn terminated(error: Failure) -> Self {
        Outcome {
            results: Vec::new(),
            error: Some(error),
            status: Status::Terminated,
        }
    }

    /// True when no error was reported
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Split into the `(results, error)` pair
    pub fn into_parts(self) -> (Vec<Value>, Option<Failure>) {
        (self.results, self.error)
    }

    /// Results on success, the error otherwise
    pub fn into_result(self) -> Result<Vec<Value>, Failure> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.results),
        }
    }
}
