//! Callable return shapes
//!
//! A callable may return nothing, a single value, a tuple of values or a
//! `Result`. Each shape flattens into an ordered result sequence, with any
//! error sitting in the trailing position.

use crate::failure::Failure;
use crate::value::{Func, Opaque, Value};

/// Flatten a callable's return value into an ordered result sequence
///
/// Implemented for `()`, every primitive integer and float, `bool`, `char`,
/// `String`, `&str`, `Value`, `Failure`, `Func`, `Opaque`, `Option`/`Vec` of
/// those, tuples of up to six of them, and `Result<T, E>` with `E: Into<Failure>`.
/// Integers outside the `i64` range are kept as `Num`. Other types can be
/// returned through `Value::opaque`.
pub trait IntoResults {
    fn into_results(self) -> Vec<Value>;
}

impl IntoResults for () {
    fn into_results(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! single_result {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoResults for $ty {
                fn into_results(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )+
    };
}

single_result!(
    Value, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
    String, &str, Failure, Func, Opaque,
);

impl<T: Into<Value>> IntoResults for Option<T> {
    fn into_results(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

impl<T: Into<Value>> IntoResults for Vec<T> {
    fn into_results(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

/// `Ok` keeps the success shape, `Err` becomes a lone trailing error
impl<T, E> IntoResults for Result<T, E>
where
    T: IntoResults,
    E: Into<Failure>,
{
    fn into_results(self) -> Vec<Value> {
        match self {
            Ok(v) => v.into_results(),
            Err(e) => vec![Value::Error(e.into())],
        }
    }
}

macro_rules! tuple_results {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> IntoResults for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_results(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

tuple_results!(A);
tuple_results!(A, B);
tuple_results!(A, B, C);
tuple_results!(A, B, C, D);
tuple_results!(A, B, C, D, E);
tuple_results!(A, B, C, D, E, F);
