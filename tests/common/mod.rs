//! Common test utilities module
//!
//! Provides shared utilities for tests including:
//! - Temporary file management
//! - Fixture frames
#![allow(dead_code)]

pub mod test_utils;

pub use test_utils::{create_test_csv, mtcars_sample, wide_readings, TempTestFile};
