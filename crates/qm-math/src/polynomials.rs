//! Classical orthogonal polynomial families and their evaluators.
//!
//! Each family is generated by its three-term recurrence; values and first
//! derivatives at a point are obtained by running the recurrence
//! numerically at that point. Derivatives use the classical closed forms
//! in terms of the two highest recurrence values, so no symbolic
//! differentiation is involved anywhere.

use qm_core::{
    errors::{Error, Result},
    Real, Size,
};

/// The closed set of orthogonal polynomial families supported by the
/// quadrature engine, each carrying its shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadratureFamily {
    /// Legendre polynomials: weight `1` on `[-1, 1]`.
    Legendre,
    /// Generalized Laguerre polynomials: weight `x^α e^{-x}` on `[0, ∞)`.
    Laguerre {
        /// Shape parameter; must satisfy `alpha > -1`.
        alpha: Real,
    },
    /// Hermite polynomials (physicists' convention): weight `e^{-x²}` on
    /// `(-∞, ∞)`.
    Hermite,
    /// Jacobi polynomials: weight `(1-x)^α (1+x)^β` on `[-1, 1]`.
    Jacobi {
        /// First shape parameter; must satisfy `alpha > -1`.
        alpha: Real,
        /// Second shape parameter; must satisfy `beta > -1`.
        beta: Real,
    },
}

impl QuadratureFamily {
    /// Check that the shape parameters lie in the domain where the family's
    /// weight function is integrable.
    ///
    /// # Errors
    /// [`Error::InvalidShapeParameter`] for out-of-domain or non-finite
    /// parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Legendre | Self::Hermite => Ok(()),
            Self::Laguerre { alpha } => {
                if alpha.is_finite() && alpha > -1.0 {
                    Ok(())
                } else {
                    Err(Error::InvalidShapeParameter(format!(
                        "Laguerre requires alpha > -1, got {alpha}"
                    )))
                }
            }
            Self::Jacobi { alpha, beta } => {
                if !(alpha.is_finite() && alpha > -1.0) {
                    return Err(Error::InvalidShapeParameter(format!(
                        "Jacobi requires alpha > -1, got {alpha}"
                    )));
                }
                if !(beta.is_finite() && beta > -1.0) {
                    return Err(Error::InvalidShapeParameter(format!(
                        "Jacobi requires beta > -1, got {beta}"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Values of the polynomials of degrees `0..=n` at `x`, obtained by
    /// running the family's three-term recurrence.
    fn values(&self, n: Size, x: Real) -> Vec<Real> {
        let mut p = Vec::with_capacity(n + 1);
        p.push(1.0);
        if n == 0 {
            return p;
        }
        p.push(self.degree_one(x));
        for j in 1..n {
            let jf = j as Real;
            let next = match *self {
                Self::Legendre => ((2.0 * jf + 1.0) * x * p[j] - jf * p[j - 1]) / (jf + 1.0),
                Self::Laguerre { alpha } => {
                    ((2.0 * jf + 1.0 + alpha - x) * p[j] - (jf + alpha) * p[j - 1]) / (jf + 1.0)
                }
                Self::Hermite => 2.0 * x * p[j] - 2.0 * jf * p[j - 1],
                Self::Jacobi { alpha, beta } => {
                    // The j = 0 coefficient degenerates when α+β = 0, so the
                    // recurrence starts from the closed-form degree-1 value
                    // and c = 2j+α+β stays positive for α, β > -1.
                    let c = 2.0 * jf + alpha + beta;
                    let a1 = 2.0 * (jf + 1.0) * (jf + alpha + beta + 1.0) * c;
                    let a2 = (c + 1.0) * (alpha * alpha - beta * beta);
                    let a3 = (c + 1.0) * c * (c + 2.0);
                    let a4 = 2.0 * (jf + alpha) * (jf + beta) * (c + 2.0);
                    ((a2 + a3 * x) * p[j] - a4 * p[j - 1]) / a1
                }
            };
            p.push(next);
        }
        p
    }

    /// The degree-1 polynomial at `x`.
    fn degree_one(&self, x: Real) -> Real {
        match *self {
            Self::Legendre => x,
            Self::Laguerre { alpha } => 1.0 + alpha - x,
            Self::Hermite => 2.0 * x,
            Self::Jacobi { alpha, beta } => {
                0.5 * (alpha + beta + 2.0) * x + 0.5 * (alpha - beta)
            }
        }
    }

    /// First derivative of the degree-`n` polynomial at `x`, expressed
    /// through the recurrence values `pn = P_n(x)` and `pn1 = P_{n-1}(x)`.
    fn derivative(&self, n: Size, x: Real, pn: Real, pn1: Real) -> Real {
        if n == 0 {
            return 0.0;
        }
        let nf = n as Real;
        match *self {
            Self::Legendre => nf * (x * pn - pn1) / (x * x - 1.0),
            Self::Laguerre { alpha } => (nf * pn - (nf + alpha) * pn1) / x,
            Self::Hermite => 2.0 * nf * pn1,
            Self::Jacobi { alpha, beta } => {
                let c = 2.0 * nf + alpha + beta;
                (nf * (alpha - beta - c * x) * pn + 2.0 * (nf + alpha) * (nf + beta) * pn1)
                    / (c * (1.0 - x * x))
            }
        }
    }
}

/// The `(value, first-derivative)` evaluator for a single degree of one
/// family instance. Immutable once produced; evaluation re-runs the
/// recurrence at the requested point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialPair {
    family: QuadratureFamily,
    degree: Size,
}

impl PolynomialPair {
    /// Degree of this polynomial.
    pub fn degree(&self) -> Size {
        self.degree
    }

    /// Family the polynomial belongs to.
    pub fn family(&self) -> QuadratureFamily {
        self.family
    }

    /// Polynomial value at `x`.
    pub fn value(&self, x: Real) -> Real {
        self.family.values(self.degree, x)[self.degree]
    }

    /// First derivative at `x`.
    pub fn derivative(&self, x: Real) -> Real {
        if self.degree == 0 {
            return 0.0;
        }
        let p = self.family.values(self.degree, x);
        self.family
            .derivative(self.degree, x, p[self.degree], p[self.degree - 1])
    }
}

/// Ascending sequence of `(value, derivative)` pairs for degrees `0..=n`.
///
/// The returned vector has length `n + 1`; entry `k` evaluates the
/// degree-`k` polynomial of `family`.
///
/// # Errors
/// [`Error::InvalidShapeParameter`] if the family's parameters are out of
/// domain.
pub fn polynomial_sequence(family: QuadratureFamily, n: Size) -> Result<Vec<PolynomialPair>> {
    family.validate()?;
    Ok((0..=n)
        .map(|degree| PolynomialPair { family, degree })
        .collect())
}
