//! Crate error types

use thiserror::Error;

/// Misuse of the engine: the "try" argument cannot be invoked
///
/// These are raised as panic payloads (via `std::panic::panic_any`), never
/// returned in an `Outcome`, and they escape regardless of the catch-panic
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallableError {
    #[error("try: nil function")]
    NilFunction,
    #[error("try: not a function")]
    NotFunction,
}

/// Errors from fallible setup APIs
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
