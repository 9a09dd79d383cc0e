//! Dynamic invoker
//!
//! Validates the "try" argument, calls it with no arguments, collects every
//! returned value and pulls out the trailing error. Panics from the callable
//! are intercepted here when the catch-panic mode is on.

use crate::error::CallableError;
use crate::failure::Failure;
use crate::normalize::normalize;
use crate::outcome::Outcome;
use crate::shape::IntoResults;
use crate::value::{Func, Value};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/* ===================== Callable ===================== */

/// A validated zero-argument unit of work
pub struct Callable<'a>(Box<dyn FnOnce() -> Vec<Value> + 'a>);

impl<'a> Callable<'a> {
    pub fn new<F, R>(f: F) -> Self
    where
        F: FnOnce() -> R + 'a,
        R: IntoResults,
    {
        Callable(Box::new(move || f().into_results()))
    }

    /// Call and collect the results in declaration order
    pub fn call(self) -> Vec<Value> {
        (self.0)()
    }
}

impl fmt::Debug for Callable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// Anything that can be passed as the "try" argument
pub trait Invocable<'a> {
    /// Resolve to a callable, or report why it cannot be invoked
    fn into_callable(self) -> Result<Callable<'a>, CallableError>;
}

impl<'a, F, R> Invocable<'a> for F
where
    F: FnOnce() -> R + 'a,
    R: IntoResults,
{
    fn into_callable(self) -> Result<Callable<'a>, CallableError> {
        Ok(Callable::new(self))
    }
}

impl<'a> Invocable<'a> for Callable<'a> {
    fn into_callable(self) -> Result<Callable<'a>, CallableError> {
        Ok(self)
    }
}

impl<'a> Invocable<'a> for Func {
    fn into_callable(self) -> Result<Callable<'a>, CallableError> {
        Ok(Callable(Box::new(move || self.call())))
    }
}

impl<'a> Invocable<'a> for Value {
    fn into_callable(self) -> Result<Callable<'a>, CallableError> {
        match self {
            Value::Func(func) => func.into_callable(),
            Value::Null => Err(CallableError::NilFunction),
            _ => Err(CallableError::NotFunction),
        }
    }
}

/* ===================== Invocation ===================== */

/// Validate, then execute with panics intercepted when `catch_panic` is set
///
/// Validation happens before interception is installed, so a misuse panic
/// always reaches the caller.
pub fn check_and_execute<'a, C>(target: C, catch_panic: bool) -> Outcome
where
    C: Invocable<'a>,
{
    let callable = check(target);

    if !catch_panic {
        return execute(callable);
    }

    match panic::catch_unwind(AssertUnwindSafe(move || execute(callable))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let failure = normalize(payload);
            tracing::debug!(error = %failure, "intercepted panic from callable");
            Outcome::terminated(failure)
        }
    }
}

/// Resolve the target or panic with the misuse payload
fn check<'a, C>(target: C) -> Callable<'a>
where
    C: Invocable<'a>,
{
    match target.into_callable() {
        Ok(callable) => callable,
        Err(misuse) => {
            tracing::debug!(error = %misuse, "rejected try argument");
            panic::panic_any(misuse)
        }
    }
}

/// Call the callable and report its trailing error
pub fn execute(callable: Callable<'_>) -> Outcome {
    let results = callable.call();
    let error = trailing_error(&results);
    Outcome::returned(results, error)
}

/// The error-shaped last value, if any
///
/// Only the last value is inspected, and only `Value::Error` counts: a
/// `Null` in an error slot is not an error.
pub fn trailing_error(results: &[Value]) -> Option<Failure> {
    match results.last() {
        Some(Value::Error(failure)) => Some(failure.clone()),
        _ => None,
    }
}
