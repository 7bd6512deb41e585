//! Error types for quantmath-rs.
//!
//! A single `thiserror`-derived enum covers the whole engine: the domain
//! failure kinds surfaced by quadrature generation plus a generic
//! precondition variant produced by the `ensure!` macro. All failures are
//! reported synchronously to the caller; nothing is retried internally.

use thiserror::Error;

/// The top-level error type used throughout quantmath-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Quadrature order outside the valid domain; `n` must be positive.
    #[error("invalid quadrature order: n must be positive, got {0}")]
    InvalidOrder(usize),

    /// Family shape parameter outside the domain where the weight function
    /// is defined.
    #[error("invalid shape parameter: {0}")]
    InvalidShapeParameter(String),

    /// A root search failed to converge or met a vanishing derivative. A
    /// missed root invalidates the whole rule, so no partial result exists.
    #[error("root not found: {0}")]
    RootNotFound(String),

    /// Precondition violated (produced by the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout quantmath-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition, returning `Err(Error::Precondition(...))` if it
/// does not hold.
///
/// # Example
/// ```
/// use qm_core::{ensure, errors::Result};
/// fn positive(x: f64) -> Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
