//! Core types for tego
//!
//! This is the foundation crate that every other tego crate depends on.
//! It provides:
//! - The base error type and `Result` alias
//! - Fixed names shared across crates (signature marker, environment variables)
//!
//! This crate has no dependencies on other tego crates.

pub mod constants;
pub mod error;

pub use error::{Error, Result};
