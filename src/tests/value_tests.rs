//! Tests for result values and outcome serialization

use crate::{Engine, Failure, Func, Outcome, Status, Value};
use serde_json::json;

#[test]
fn test_error_equality_is_identity() {
    let a = Failure::msg("expected error");
    let b = Failure::msg("expected error");

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(Value::Error(a.clone()), Value::Error(a.clone()));
    assert_ne!(Value::Error(a), Value::Error(b));
}

#[test]
fn test_func_and_opaque_equality_is_identity() {
    let f = Func::new(|| 1);
    assert_eq!(Value::Func(f.clone()), Value::Func(f));
    assert_ne!(Value::func(|| 1), Value::func(|| 1));

    let o = Value::opaque(5_u64);
    assert_eq!(o.clone(), o);
    assert_ne!(Value::opaque(5_u64), Value::opaque(5_u64));
}

#[test]
fn test_conversions() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(3_u8)), Value::Int(3));
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from('c'), Value::Str("c".to_string()));
    assert_eq!(
        Value::from(vec!["a", "b"]),
        Value::List(vec![Value::from("a"), Value::from("b")])
    );
}

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Num(1.5).to_string(), "1.5");
    assert_eq!(Value::from("Hello World").to_string(), "Hello World");
    assert_eq!(
        Value::List(vec![Value::Int(1), Value::from("x"), Value::Bool(false)]).to_string(),
        "[1, x, false]"
    );
    assert_eq!(Value::Error(Failure::msg("boom")).to_string(), "boom");
    assert_eq!(Value::func(|| {}).to_string(), "<func>");
}

#[test]
fn test_accessors() {
    let err = Failure::msg("boom");
    let value = Value::Error(err.clone());

    assert_eq!(value.as_error(), Some(&err));
    assert_eq!(value.type_name(), "error");
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::Int(9).as_int(), Some(9));
    assert!(Value::Null.is_null());
    assert_eq!(Value::Null.as_error(), None);
}

#[test]
fn test_value_serialization() {
    let value = Value::List(vec![
        Value::Int(1),
        Value::from("two"),
        Value::Error(Failure::msg("boom")),
        Value::Null,
    ]);

    let json = serde_json::to_value(&value).expect("Value serialization failed");

    assert_eq!(
        json,
        json!({
            "t": "List",
            "v": [
                {"t": "Int", "v": 1},
                {"t": "Str", "v": "two"},
                {"t": "Error", "v": "boom"},
                {"t": "Null"}
            ]
        })
    );
}

#[test]
fn test_func_value_does_not_serialize() {
    assert!(serde_json::to_string(&Value::func(|| 1)).is_err());
    assert!(serde_json::to_string(&Value::opaque(1_u8)).is_err());
}

#[test]
fn test_outcome_serialization() {
    let outcome: Outcome = Engine::new()
        .with_catch_panic(true)
        .r#try(|| ("Hello World", Failure::msg("expected error")));

    let json = serde_json::to_value(&outcome).expect("Outcome serialization failed");

    assert_eq!(
        json,
        json!({
            "results": [
                {"t": "Str", "v": "Hello World"},
                {"t": "Error", "v": "expected error"}
            ],
            "error": "expected error",
            "status": "Returned"
        })
    );
    assert_eq!(outcome.status, Status::Returned);
}

#[test]
fn test_nan_is_never_equal() {
    assert_ne!(Value::Num(f64::NAN), Value::Num(f64::NAN));
    assert_ne!(
        Value::List(vec![Value::Num(f64::NAN)]),
        Value::List(vec![Value::Num(f64::NAN)])
    );
}
