//! Shared types and errors for Divvy.
//!
//! This crate provides common types used across all other crates:
//! - Monetary helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
