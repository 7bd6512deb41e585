//! # quantmath
//!
//! Gaussian quadrature and orthogonal-polynomial analytics for
//! quantitative finance.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `qm-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! quantmath = "0.1"
//! ```
//!
//! ```rust
//! use quantmath::math::{generate, QuadratureFamily};
//!
//! // ∫₀^∞ x² e⁻ˣ dx = Γ(3) = 2
//! let rule = generate(QuadratureFamily::Laguerre { alpha: 0.0 }, 5).unwrap();
//! let value = rule.integrate(|x| x * x);
//! assert!((value - 2.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use qm_core as core;

/// Numerical engine: solvers, polynomials, Gaussian quadratures.
pub use qm_math as math;
