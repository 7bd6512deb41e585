//! Numerical integration.
//!
//! Fixed-order Gaussian quadratures over the classical orthogonal
//! polynomial families (Legendre, Laguerre, Hermite, Jacobi).

pub mod gaussianquadratures;
