//! Execution orchestrator
//!
//! Runs the callable, then the optional catch handler, then the optional
//! finally handler, in that order on the calling thread:
//!
//! ```text
//! Invoking -> {Succeeded | Returned | Terminated} -> Catching? -> Finalizing? -> Done
//! ```
//!
//! - The catch handler runs only when the invocation reported an error.
//! - The finally handler runs whenever it is reached.
//! - Handlers are never guarded: a panic in the catch handler unwinds out of
//!   the engine and the finally handler does not run.
//! - The returned outcome is the one produced by the invocation; handlers
//!   cannot change it.

use crate::config::Config;
use crate::failure::Failure;
use crate::invoker::{check_and_execute, Invocable};
use crate::mode;
use crate::outcome::Outcome;
use serde::Serialize;

/// Sequencer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Phase {
    /// Running the callable
    Invoking = 0,
    /// Running the catch handler (an error was reported)
    Catching = 1,
    /// Running the finally handler
    Finalizing = 2,
    /// Outcome handed back to the caller
    Done = 3,
}

type CatchFn<'h> = Box<dyn FnOnce(&Failure) + 'h>;
type FinallyFn<'h> = Box<dyn FnOnce() + 'h>;

/// Try/catch/finally engine
///
/// `catch_panic` set to `None` follows the process-wide mode, read once at
/// the start of every invocation.
///
/// The panic hook is left alone: an intercepted panic is still reported by
/// whatever hook is installed (the default one prints it to stderr).
/// Install a quieter hook with `std::panic::set_hook` if that is unwanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    catch_panic: Option<bool>,
}

impl Engine {
    /// Engine following the process-wide mode
    pub fn new() -> Self {
        Engine { catch_panic: None }
    }

    pub fn from_config(config: &Config) -> Self {
        Engine {
            catch_panic: config.catch_panic,
        }
    }

    /// Pin the catch-panic mode for this engine
    pub fn with_catch_panic(mut self, enabled: bool) -> Self {
        self.catch_panic = Some(enabled);
        self
    }

    /// The pinned mode, if any
    pub fn catch_panic_override(&self) -> Option<bool> {
        self.catch_panic
    }

    /// Run the callable
    pub fn r#try<'a, C>(&self, callable: C) -> Outcome
    where
        C: Invocable<'a>,
    {
        self.run(callable, None, None)
    }

    /// Run the callable, then `finally`
    pub fn try_finally<'a, 'h, C, Z>(&self, callable: C, finally: Z) -> Outcome
    where
        C: Invocable<'a>,
        Z: FnOnce() + 'h,
    {
        self.run(callable, None, Some(Box::new(finally)))
    }

    /// Run the callable, then `catch` if it reported an error
    pub fn try_catch<'a, 'h, C, K>(&self, callable: C, catch: K) -> Outcome
    where
        C: Invocable<'a>,
        K: FnOnce(&Failure) + 'h,
    {
        self.run(callable, Some(Box::new(catch)), None)
    }

    /// Run the callable, then `catch` if it reported an error, then `finally`
    pub fn try_catch_finally<'a, 'h, C, K, Z>(&self, callable: C, catch: K, finally: Z) -> Outcome
    where
        C: Invocable<'a>,
        K: FnOnce(&Failure) + 'h,
        Z: FnOnce() + 'h,
    {
        self.run(callable, Some(Box::new(catch)), Some(Box::new(finally)))
    }

    fn run<'a, 'h, C>(
        &self,
        callable: C,
        catch: Option<CatchFn<'h>>,
        finally: Option<FinallyFn<'h>>,
    ) -> Outcome
    where
        C: Invocable<'a>,
    {
        let catch_panic = self.catch_panic.unwrap_or_else(mode::catch_panic);
        tracing::trace!(phase = ?Phase::Invoking, catch_panic, "running callable");

        let outcome = check_and_execute(callable, catch_panic);
        tracing::debug!(
            status = ?outcome.status,
            results = outcome.results.len(),
            "callable finished"
        );

        if let (Some(error), Some(catch)) = (&outcome.error, catch) {
            tracing::trace!(phase = ?Phase::Catching, error = %error, "running catch handler");
            catch(error);
        }

        if let Some(finally) = finally {
            tracing::trace!(phase = ?Phase::Finalizing, "running finally handler");
            finally();
        }

        tracing::trace!(phase = ?Phase::Done, "try finished");
        outcome
    }
}
