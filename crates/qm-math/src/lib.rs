//! # qm-math
//!
//! The numerical engine of quantmath-rs: floating-point comparison
//! helpers, a 1D Newton-Raphson solver, the classical orthogonal
//! polynomial families, and Gaussian quadrature weight/abscissa
//! generation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Numerical integration: fixed-order Gaussian quadrature rules.
pub mod integrals;

/// Classical orthogonal polynomial families and their evaluators.
pub mod polynomials;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::close;
pub use integrals::gaussianquadratures::{
    generate, GaussianQuadratureData, WeightAndAbscissaFunction,
};
pub use polynomials::QuadratureFamily;
