//! Process-wide catch-panic mode
//!
//! When enabled (the default), a panic raised by the callable is converted
//! into the `error` of the outcome. When disabled, it unwinds past the
//! engine untouched.
//!
//! The flag is read once at the start of each invocation and is not
//! synchronized with in-flight invocations: flipping it while other threads
//! are running try calls races with them. Set it at startup, or around a
//! test with [`CatchPanicGuard`].

use std::sync::atomic::{AtomicBool, Ordering};

static CATCH_PANIC: AtomicBool = AtomicBool::new(true);

/// Current process-wide mode
pub fn catch_panic() -> bool {
    CATCH_PANIC.load(Ordering::Relaxed)
}

/// Set the process-wide mode, returning the previous value
pub fn set_catch_panic(enabled: bool) -> bool {
    CATCH_PANIC.swap(enabled, Ordering::Relaxed)
}

/// Overrides the process-wide mode until dropped
#[must_use = "the previous mode is restored when the guard is dropped"]
#[derive(Debug)]
pub struct CatchPanicGuard {
    previous: bool,
}

impl CatchPanicGuard {
    pub fn new(enabled: bool) -> Self {
        CatchPanicGuard {
            previous: set_catch_panic(enabled),
        }
    }
}

impl Drop for CatchPanicGuard {
    fn drop(&mut self) {
        set_catch_panic(self.previous);
    }
}
