//! Tests for rejected try arguments

use super::helpers::{catch_payload, mode_lock};
use crate::{
    r#try, try_catch_finally, CallableError, CatchPanicGuard, Engine, Invocable, Value,
};
use std::cell::Cell;

fn misuse_of(payload: Box<dyn std::any::Any + Send>) -> CallableError {
    match payload.downcast::<CallableError>() {
        Ok(misuse) => *misuse,
        Err(_) => unreachable!("Expected a CallableError payload"),
    }
}

#[test]
fn test_nil_function_panics() {
    let _lock = mode_lock();

    let payload = catch_payload(|| {
        r#try(Value::Null);
    });

    assert_eq!(misuse_of(payload), CallableError::NilFunction);
}

#[test]
fn test_not_a_function_panics() {
    let _lock = mode_lock();

    let payload = catch_payload(|| {
        r#try(Value::from("not a function"));
    });

    assert_eq!(misuse_of(payload), CallableError::NotFunction);
}

#[test]
fn test_misuse_panics_regardless_of_mode() {
    for enabled in [true, false] {
        let engine = Engine::new().with_catch_panic(enabled);

        let payload = catch_payload(|| {
            engine.r#try(Value::Null);
        });
        assert_eq!(misuse_of(payload), CallableError::NilFunction);

        let payload = catch_payload(|| {
            engine.r#try(Value::Int(1));
        });
        assert_eq!(misuse_of(payload), CallableError::NotFunction);
    }
}

#[test]
fn test_misuse_skips_handlers() {
    let _lock = mode_lock();
    let _mode = CatchPanicGuard::new(true);
    let handlers = Cell::new(0);

    let payload = catch_payload(|| {
        try_catch_finally(
            Value::Bool(true),
            |_| handlers.set(handlers.get() + 1),
            || handlers.set(handlers.get() + 1),
        );
    });

    assert_eq!(misuse_of(payload), CallableError::NotFunction);
    assert_eq!(handlers.get(), 0);
}

#[test]
fn test_into_callable_classification() {
    assert_eq!(
        Invocable::into_callable(Value::Null).err(),
        Some(CallableError::NilFunction)
    );
    assert_eq!(
        Invocable::into_callable(Value::List(vec![])).err(),
        Some(CallableError::NotFunction)
    );

    let Ok(callable) = Invocable::into_callable(Value::func(|| 5)) else {
        unreachable!("Expected a callable");
    };
    assert_eq!(callable.call(), vec![Value::Int(5)]);
}

#[test]
fn test_misuse_messages() {
    assert_eq!(CallableError::NilFunction.to_string(), "try: nil function");
    assert_eq!(CallableError::NotFunction.to_string(), "try: not a function");
}
