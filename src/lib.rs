//! # trycatch
//!
//! try/catch/finally for code that reports errors through return values.
//!
//! A callable of (almost) any return shape is invoked with no arguments.
//! Its return values are collected in order, an error-shaped trailing value
//! is reported as the error, and a panic is turned into an error as long as
//! the catch-panic mode is on.
//!
//! ```rust
//! use trycatch::{try_catch_finally, Failure, Value};
//!
//! let mut log = Vec::new();
//! let outcome = try_catch_finally(
//!     || ("Hello World", Failure::msg("expected error")),
//!     |err| log.push(format!("error in catch: {}", err)),
//!     || println!("in finally"),
//! );
//!
//! assert_eq!(log, vec!["error in catch: expected error".to_string()]);
//! assert_eq!(outcome.results.len(), 2);
//! assert_eq!(outcome.results[0], Value::from("Hello World"));
//! assert_eq!(outcome.error.map(|e| e.describe()).as_deref(), Some("expected error"));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod failure;
pub mod invoker;
pub mod mode;
pub mod normalize;
pub mod outcome;
pub mod shape;
pub mod value;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigBuilder};
pub use engine::{Engine, Phase};
pub use error::{CallableError, Error, Result};
pub use failure::{Failure, Message, UnknownPayload};
pub use invoker::{Callable, Invocable};
pub use mode::{catch_panic, set_catch_panic, CatchPanicGuard};
pub use outcome::{Outcome, Status};
pub use shape::IntoResults;
pub use value::{Func, Opaque, Value};

/// Run the callable
///
/// Panics from the callable are intercepted according to the process-wide
/// mode. A `Value` that is not a function panics with a [`CallableError`].
pub fn r#try<'a, C>(callable: C) -> Outcome
where
    C: Invocable<'a>,
{
    Engine::new().r#try(callable)
}

/// Run the callable, then `finally`
pub fn try_finally<'a, 'h, C, Z>(callable: C, finally: Z) -> Outcome
where
    C: Invocable<'a>,
    Z: FnOnce() + 'h,
{
    Engine::new().try_finally(callable, finally)
}

/// Run the callable, then `catch` if it reported an error
pub fn try_catch<'a, 'h, C, K>(callable: C, catch: K) -> Outcome
where
    C: Invocable<'a>,
    K: FnOnce(&Failure) + 'h,
{
    Engine::new().try_catch(callable, catch)
}

/// Run the callable, then `catch` if it reported an error, then `finally`
///
/// `finally` runs unless the callable's panic propagates (catch-panic mode
/// off) or `catch` itself panics.
pub fn try_catch_finally<'a, 'h, C, K, Z>(callable: C, catch: K, finally: Z) -> Outcome
where
    C: Invocable<'a>,
    K: FnOnce(&Failure) + 'h,
    Z: FnOnce() + 'h,
{
    Engine::new().try_catch_finally(callable, catch, finally)
}
