//! Panic payload normalization
//!
//! Converts whatever a callable panicked with into a [`Failure`]:
//!
//! - error-shaped payloads are used as-is (a `Failure` keeps its identity)
//!
//!   Error-shaped means `Failure`, `Value::Error`, `Box<dyn Error + Send + Sync>`,
//!   `Arc<dyn Error + Send + Sync>`, this crate's own error types, or one of a
//!   few common std errors (`io::Error`, `fmt::Error`, number and UTF-8 parse
//!   errors). Any other concrete error type has no generic way to be
//!   recognized in a `dyn Any` payload: raise it as a `Failure` (or boxed /
//!   shared `dyn Error`) to keep its description.
//! - text payloads become a failure described by exactly that text
//! - anything else is described by its default textual form

use crate::error::CallableError;
use crate::failure::{Failure, Message, UnknownPayload};
use crate::value::Value;
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::str::{ParseBoolError, Utf8Error};
use std::string::FromUtf8Error;
use std::sync::Arc;

/// Normalize a caught panic payload into a failure
pub fn normalize(payload: Box<dyn Any + Send>) -> Failure {
    let payload = match error_payload(payload) {
        Ok(failure) => return failure,
        Err(payload) => payload,
    };

    if let Some(text) = text_payload(&*payload) {
        return Failure::msg(text);
    }

    match display_payload(&*payload) {
        Some(text) => Failure::msg(text),
        None => {
            tracing::trace!("panic payload has no textual form");
            Failure::new(UnknownPayload)
        }
    }
}

/// Take the payload by value when it is already error-shaped
fn error_payload(payload: Box<dyn Any + Send>) -> Result<Failure, Box<dyn Any + Send>> {
    let payload = match payload.downcast::<Failure>() {
        Ok(failure) => return Ok(*failure),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Value>() {
        Ok(value) => match *value {
            Value::Error(failure) => return Ok(failure),
            other => Box::new(other) as Box<dyn Any + Send>,
        },
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Arc<dyn StdError + Send + Sync>>() {
        Ok(shared) => return Ok(Failure::from_arc(*shared)),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
        Ok(boxed) => return Ok(Failure::from_boxed(*boxed)),
        Err(payload) => payload,
    };
    concrete::<CallableError>(payload)
        .or_else(concrete::<Message>)
        .or_else(concrete::<UnknownPayload>)
        .or_else(concrete::<io::Error>)
        .or_else(concrete::<fmt::Error>)
        .or_else(concrete::<ParseIntError>)
        .or_else(concrete::<ParseFloatError>)
        .or_else(concrete::<ParseBoolError>)
        .or_else(concrete::<Utf8Error>)
        .or_else(concrete::<FromUtf8Error>)
}

/// Wrap the payload when it is exactly the error type `E`
fn concrete<E>(payload: Box<dyn Any + Send>) -> Result<Failure, Box<dyn Any + Send>>
where
    E: StdError + Send + Sync + 'static,
{
    payload.downcast::<E>().map(|error| Failure::new(*error))
}

fn text_payload(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        return Some((*s).to_string());
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return Some(s.clone());
    }
    match payload.downcast_ref::<Value>() {
        Some(Value::Str(s)) => Some(s.clone()),
        _ => None,
    }
}

macro_rules! display_as {
    ($payload:expr, $($ty:ty),+) => {
        $(
            if let Some(v) = $payload.downcast_ref::<$ty>() {
                return Some(v.to_string());
            }
        )+
    };
}

fn display_payload(payload: &(dyn Any + Send)) -> Option<String> {
    display_as!(
        payload, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
        char, Value
    );
    None
}
