//! # qm-core
//!
//! Core types and error definitions for quantmath-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – primitive type aliases, the error
//! enum, and the `ensure!` precondition macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
