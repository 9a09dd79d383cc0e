//! Tests for the try engine
//!
//! Organized by entry point / feature area

mod helpers;
mod invalid_tests;
mod value_tests;
