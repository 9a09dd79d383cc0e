//! Test helpers shared by the engine tests

use crate::Failure;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard, PoisonError};

static MODE_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that read or flip the process-wide catch-panic mode
pub fn mode_lock() -> MutexGuard<'static, ()> {
    init_tracing();
    MODE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Install a test subscriber (RUST_LOG controls verbosity)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn expected_error() -> Failure {
    Failure::msg("expected error")
}

/// Callable that panics with `payload`
pub fn raise<P: Any + Send + 'static>(payload: P) -> impl FnOnce() {
    move || panic::panic_any(payload)
}

/// Run `f`, which must panic, and hand back the panic payload
pub fn catch_payload<F: FnOnce()>(f: F) -> Box<dyn Any + Send> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => unreachable!("Expected a panic"),
        Err(payload) => payload,
    }
}
