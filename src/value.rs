//! Runtime value types
//!
//! Every value a callable returns is lifted into a [`Value`] so results of
//! any shape can be collected into one ordered sequence.

use crate::failure::Failure;
use crate::shape::IntoResults;
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/* ===================== Value ===================== */

/// Dynamically-typed result value
///
/// Equality follows `f64` for `Num`, so a `Num(NaN)` (and any list holding
/// one) is never equal to itself.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "t", content = "v")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Num(f64),
    Str(String),
    List(Vec<Value>),
    /// Error-shaped value
    Error(Failure),
    /// Zero-argument function value
    #[serde(skip_serializing)]
    Func(Func),
    /// Any other value, kept by reference
    #[serde(skip_serializing)]
    Opaque(Opaque),
}

impl Value {
    /// Wrap a value of a type the engine has no variant for
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(Opaque::new(value))
    }

    /// Wrap a zero-argument function
    pub fn func<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoResults,
    {
        Value::Func(Func::new(f))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The failure carried by an error-shaped value
    pub fn as_error(&self) -> Option<&Failure> {
        match self {
            Value::Error(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Num(_) => "num",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Error(_) => "error",
            Value::Func(_) => "func",
            Value::Opaque(_) => "opaque",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a.ptr_eq(b),
            (Value::Func(a), Value::Func(b)) => a.ptr_eq(b),
            (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Num(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Error(failure) => write!(f, "{}", failure),
            Value::Func(_) => f.write_str("<func>"),
            Value::Opaque(_) => f.write_str("<opaque>"),
        }
    }
}

/* ===================== Function values ===================== */

/// Shareable zero-argument function value
#[derive(Clone)]
pub struct Func(Arc<dyn Fn() -> Vec<Value> + Send + Sync>);

impl Func {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoResults,
    {
        Func(Arc::new(move || f().into_results()))
    }

    /// Call the function and collect its results
    pub fn call(&self) -> Vec<Value> {
        (self.0)()
    }

    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Func(..)")
    }
}

/* ===================== Opaque values ===================== */

/// Value of a type the engine has no variant for
#[derive(Clone)]
pub struct Opaque(Arc<dyn Any + Send + Sync>);

impl Opaque {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Opaque(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

/* ===================== Conversions ===================== */

macro_rules! value_from {
    ($variant:ident, $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

value_from!(Bool, bool: bool);
value_from!(Int, i64: i8, i16, i32, i64, u8, u16, u32);
value_from!(Num, f64: f32, f64);
value_from!(Str, String: String, &str, char);

/// Wide integers become `Int` when they fit in an `i64`, `Num` otherwise
macro_rules! value_from_wide {
    ($($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    match i64::try_from(v) {
                        Ok(n) => Value::Int(n),
                        Err(_) => Value::Num(v as f64),
                    }
                }
            }
        )+
    };
}

value_from_wide!(i128, isize, u64, u128, usize);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<Failure> for Value {
    fn from(failure: Failure) -> Self {
        Value::Error(failure)
    }
}

impl From<Func> for Value {
    fn from(func: Func) -> Self {
        Value::Func(func)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Value::Opaque(opaque)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
