//! Gaussian quadrature weight and abscissa generation.
//!
//! Each family generator locates the roots of the order-`n` orthogonal
//! polynomial by Newton-Raphson refinement of family-specific empirical
//! seeds, then applies the family's closed-form weight expression. The
//! resulting rule integrates polynomials of degree `< 2n` exactly against
//! the family's weight function on its canonical domain.
//!
//! The seed heuristics carry literal tuning constants from the
//! numerical-analysis literature; they encode where the roots cluster, and
//! Newton-Raphson is only locally convergent, so the constants are
//! load-bearing and must not be re-derived.

use std::f64::consts::PI;

use qm_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};
use statrs::function::factorial::factorial;
use statrs::function::gamma::{gamma, ln_gamma};

use crate::polynomials::{polynomial_sequence, PolynomialPair, QuadratureFamily};
use crate::solvers1d::{newton_raphson, DEFAULT_ACCURACY};

// ═══════════════════════════════════════════════════════════════════════════════
// Quadrature data
// ═══════════════════════════════════════════════════════════════════════════════

/// An immutable Gauss quadrature rule: index-aligned abscissas and weights.
///
/// Abscissas are strictly increasing; `abscissas[i]` pairs with
/// `weights[i]`. Construction is the only mutation point.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianQuadratureData {
    x: Vec<Real>,
    w: Vec<Real>,
}

impl GaussianQuadratureData {
    /// Build a rule from equal-length abscissa and weight sequences.
    ///
    /// # Errors
    /// [`Error::Precondition`] if the lengths differ.
    pub fn new(x: Vec<Real>, w: Vec<Real>) -> Result<Self> {
        ensure!(
            x.len() == w.len(),
            "abscissas ({}) and weights ({}) must have equal length",
            x.len(),
            w.len()
        );
        Ok(Self { x, w })
    }

    /// Quadrature abscissas, in increasing order.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Quadrature weights, index-aligned with the abscissas.
    pub fn w(&self) -> &[Real] {
        &self.w
    }

    /// Number of quadrature points.
    pub fn order(&self) -> Size {
        self.x.len()
    }

    /// Evaluate `∫ f(x) w(x) dx ≈ Σ wᵢ f(xᵢ)` against the family's weight
    /// function.
    pub fn integrate<F: Fn(Real) -> Real>(&self, f: F) -> Real {
        self.x
            .iter()
            .zip(self.w.iter())
            .map(|(&xi, &wi)| wi * f(xi))
            .sum()
    }
}

/// Generator of quadrature weights and abscissas for one polynomial family.
///
/// Implementations hold only immutable shape parameters, so a single
/// instance is freely shareable across threads and calls.
pub trait WeightAndAbscissaFunction {
    /// Generate the order-`n` rule.
    ///
    /// # Errors
    /// [`Error::InvalidOrder`] when `n == 0`;
    /// [`Error::InvalidShapeParameter`] for out-of-domain parameters;
    /// [`Error::RootNotFound`] when a root search fails, in which case no
    /// partial result is returned.
    fn generate(&self, n: Size) -> Result<GaussianQuadratureData>;
}

/// Generate the order-`n` rule for `family`.
///
/// The single dispatching entry point over the closed family set;
/// deterministic for fixed inputs.
///
/// # Errors
/// See [`WeightAndAbscissaFunction::generate`].
pub fn generate(family: QuadratureFamily, n: Size) -> Result<GaussianQuadratureData> {
    match family {
        QuadratureFamily::Legendre => GaussLegendre.generate(n),
        QuadratureFamily::Laguerre { alpha } => GaussLaguerre::new(alpha).generate(n),
        QuadratureFamily::Hermite => GaussHermite.generate(n),
        QuadratureFamily::Jacobi { alpha, beta } => GaussJacobi::new(alpha, beta).generate(n),
    }
}

/// Validation shared by every generator, run before any numeric work:
/// rejects `n == 0` and out-of-domain shape parameters, then builds the
/// ascending polynomial-pair sequence up to degree `n`.
fn checked_sequence(family: QuadratureFamily, n: Size) -> Result<Vec<PolynomialPair>> {
    if n == 0 {
        return Err(Error::InvalidOrder(n));
    }
    polynomial_sequence(family, n)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Gauss-Laguerre (weight x^α e^{-x} on [0, ∞))
// ═══════════════════════════════════════════════════════════════════════════════

/// Gauss-Laguerre rule generator: weight `x^α e^{-x}` on `[0, ∞)`.
///
/// Weights are `wᵢ = -Γ(α+n) / (n! · L'ₙ(xᵢ) · Lₙ₋₁(xᵢ))`. Roots emerge
/// smallest-first, each seed extrapolated from the previously found roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussLaguerre {
    alpha: Real,
}

impl GaussLaguerre {
    /// Generator for the generalized Laguerre family with shape `alpha`.
    pub fn new(alpha: Real) -> Self {
        Self { alpha }
    }

    /// Shape parameter.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Empirical seed for the `(i+1)`-th smallest root.
    fn initial_guess(&self, previous_root: Real, i: Size, n: Size, x: &[Real]) -> Real {
        let alpha = self.alpha;
        let nf = n as Real;
        if i == 0 {
            return (1.0 + alpha) * (3.0 + 0.92 * alpha) / (1.0 + 1.8 * alpha + 2.4 * nf);
        }
        if i == 1 {
            return previous_root + (15.0 + 6.25 * alpha) / (1.0 + 0.9 * alpha + 2.5 * nf);
        }
        let j = (i - 1) as Real;
        previous_root
            + ((1.0 + 2.55 * j) / (1.9 * j) + 1.26 * j * alpha / (1.0 + 3.5 * j))
                * (previous_root - x[i - 2])
                / (1.0 + 0.3 * alpha)
    }
}

impl Default for GaussLaguerre {
    /// The plain Laguerre family, `α = 0`.
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl WeightAndAbscissaFunction for GaussLaguerre {
    fn generate(&self, n: Size) -> Result<GaussianQuadratureData> {
        let alpha = self.alpha;
        let pairs = checked_sequence(QuadratureFamily::Laguerre { alpha }, n)?;
        let top = pairs[n];
        let previous = pairs[n - 1];
        let nf = n as Real;

        let mut x = Vec::with_capacity(n);
        let mut w = Vec::with_capacity(n);
        let mut root = 0.0;
        for i in 0..n {
            let guess = self.initial_guess(root, i, n, &x);
            root = newton_raphson(
                |z| top.value(z),
                |z| top.derivative(z),
                guess,
                DEFAULT_ACCURACY,
            )?;
            x.push(root);
            w.push(
                -gamma(alpha + nf)
                    / (factorial(n as u64) * top.derivative(root) * previous.value(root)),
            );
        }
        GaussianQuadratureData::new(x, w)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Gauss-Legendre (weight 1 on [-1, 1])
// ═══════════════════════════════════════════════════════════════════════════════

/// Gauss-Legendre rule generator: weight `1` on `[-1, 1]`.
///
/// The root set is symmetric about zero, so only the upper half is
/// searched, from the largest root inward, and the mirrored half is filled
/// alongside. Weights are `wᵢ = 2 / ((1-xᵢ²) · [P'ₙ(xᵢ)]²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussLegendre;

impl GaussLegendre {
    /// Integrate `f` on `[a, b]` by affinely mapping the order-`order`
    /// rule from `[-1, 1]`.
    ///
    /// # Errors
    /// [`Error::InvalidOrder`] when `order == 0`;
    /// [`Error::RootNotFound`] on a failed root search.
    pub fn integrate_on<F: Fn(Real) -> Real>(
        order: Size,
        f: F,
        a: Real,
        b: Real,
    ) -> Result<Real> {
        let q = GaussLegendre.generate(order)?;
        let half = 0.5 * (b - a);
        let mid = 0.5 * (a + b);
        Ok(half * q.integrate(|z| f(mid + half * z)))
    }
}

impl WeightAndAbscissaFunction for GaussLegendre {
    fn generate(&self, n: Size) -> Result<GaussianQuadratureData> {
        let pairs = checked_sequence(QuadratureFamily::Legendre, n)?;
        let top = pairs[n];
        let nf = n as Real;

        let mut x = vec![0.0; n];
        let mut w = vec![0.0; n];
        for i in 0..(n + 1) / 2 {
            // Chebyshev-angle seed for the (i+1)-th largest root.
            let guess = (PI * (i as Real + 0.75) / (nf + 0.5)).cos();
            let root = newton_raphson(
                |z| top.value(z),
                |z| top.derivative(z),
                guess,
                DEFAULT_ACCURACY,
            )?;
            let dp = top.derivative(root);
            let weight = 2.0 / ((1.0 - root * root) * dp * dp);
            x[i] = -root;
            x[n - 1 - i] = root;
            w[i] = weight;
            w[n - 1 - i] = weight;
        }
        GaussianQuadratureData::new(x, w)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Gauss-Hermite (weight e^{-x²} on (-∞, ∞))
// ═══════════════════════════════════════════════════════════════════════════════

/// Gauss-Hermite rule generator (physicists' convention): weight `e^{-x²}`
/// on `(-∞, ∞)`.
///
/// Only the non-negative half of the symmetric root set is searched, from
/// the largest root inward. Weights are `wᵢ = 2ⁿ⁺¹ n! √π / [H'ₙ(xᵢ)]²`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussHermite;

/// Empirical seed for the `(i+1)`-th largest Hermite root; `found` holds
/// the positive roots already located, largest first.
fn hermite_initial_guess(i: Size, n: Size, found: &[Real]) -> Real {
    let nf = n as Real;
    match i {
        0 => (2.0 * nf + 1.0).sqrt() - 1.85575 * (2.0 * nf + 1.0).powf(-1.0 / 6.0),
        1 => found[0] - 1.14 * nf.powf(0.426) / found[0],
        2 => 1.86 * found[1] - 0.86 * found[0],
        3 => 1.91 * found[2] - 0.91 * found[1],
        _ => 2.0 * found[i - 1] - found[i - 2],
    }
}

impl WeightAndAbscissaFunction for GaussHermite {
    fn generate(&self, n: Size) -> Result<GaussianQuadratureData> {
        let pairs = checked_sequence(QuadratureFamily::Hermite, n)?;
        let top = pairs[n];
        let norm = 2f64.powi(n as i32 + 1) * factorial(n as u64) * PI.sqrt();

        let mut x = vec![0.0; n];
        let mut w = vec![0.0; n];
        let mut found = Vec::with_capacity((n + 1) / 2);
        for i in 0..(n + 1) / 2 {
            let guess = hermite_initial_guess(i, n, &found);
            let root = newton_raphson(
                |z| top.value(z),
                |z| top.derivative(z),
                guess,
                DEFAULT_ACCURACY,
            )?;
            found.push(root);
            let dp = top.derivative(root);
            let weight = norm / (dp * dp);
            x[i] = -root;
            x[n - 1 - i] = root;
            w[i] = weight;
            w[n - 1 - i] = weight;
        }
        GaussianQuadratureData::new(x, w)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Gauss-Jacobi (weight (1-x)^α (1+x)^β on [-1, 1])
// ═══════════════════════════════════════════════════════════════════════════════

/// Gauss-Jacobi rule generator: weight `(1-x)^α (1+x)^β` on `[-1, 1]`.
///
/// The seed heuristic walks from the largest root downward; results are
/// stored back-to-front so the returned abscissas ascend. Weights are
/// `wᵢ = Γ(α+n)Γ(β+n)/(Γ(n+1)Γ(n+α+β+1)) · (2n+α+β) · 2^{α+β}
/// / (P'ₙ(xᵢ) · Pₙ₋₁(xᵢ))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussJacobi {
    alpha: Real,
    beta: Real,
}

impl GaussJacobi {
    /// Generator for the Jacobi family with shape parameters `alpha`, `beta`.
    pub fn new(alpha: Real, beta: Real) -> Self {
        Self { alpha, beta }
    }

    /// First shape parameter.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Second shape parameter.
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// Empirical seed for the `(i+1)`-th largest root; `found` holds the
    /// roots already located, largest first.
    fn initial_guess(&self, i: Size, n: Size, found: &[Real]) -> Real {
        let (alpha, beta) = (self.alpha, self.beta);
        let nf = n as Real;
        match i {
            0 => {
                let an = alpha / nf;
                let bn = beta / nf;
                let r1 = (1.0 + alpha) * (2.78 / (4.0 + nf * nf) + 0.768 * an / nf);
                let r2 = 1.0 + 1.48 * an + 0.96 * bn + 0.452 * an * an + 0.83 * an * bn;
                1.0 - r1 / r2
            }
            1 => {
                let r1 = (4.1 + alpha) / ((1.0 + alpha) * (1.0 + 0.156 * alpha));
                let r2 = 1.0 + 0.06 * (nf - 8.0) * (1.0 + 0.12 * alpha) / nf;
                let r3 = 1.0 + 0.012 * beta * (1.0 + 0.25 * alpha.abs()) / nf;
                found[0] - (1.0 - found[0]) * r1 * r2 * r3
            }
            2 => {
                let r1 = (1.67 + 0.28 * alpha) / (1.0 + 0.37 * alpha);
                let r2 = 1.0 + 0.22 * (nf - 8.0) / nf;
                let r3 = 1.0 + 8.0 * beta / ((6.28 + beta) * nf * nf);
                found[1] - (found[0] - found[1]) * r1 * r2 * r3
            }
            i if i == n - 2 => {
                let r1 = (1.0 + 0.235 * beta) / (0.766 + 0.119 * beta);
                let r2 = 1.0 / (1.0 + 0.639 * (nf - 4.0) / (1.0 + 0.71 * (nf - 4.0)));
                let r3 = 1.0 / (1.0 + 20.0 * alpha / ((7.5 + alpha) * nf * nf));
                found[i - 1] + (found[i - 1] - found[i - 2]) * r1 * r2 * r3
            }
            i if i == n - 1 => {
                let r1 = (1.0 + 0.37 * beta) / (1.67 + 0.28 * beta);
                let r2 = 1.0 / (1.0 + 0.22 * (nf - 8.0) / nf);
                let r3 = 1.0 / (1.0 + 8.0 * alpha / ((6.28 + alpha) * nf * nf));
                found[i - 1] + (found[i - 1] - found[i - 2]) * r1 * r2 * r3
            }
            _ => 3.0 * found[i - 1] - 3.0 * found[i - 2] + found[i - 3],
        }
    }
}

impl Default for GaussJacobi {
    /// `α = β = 0`, the Legendre special case.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl WeightAndAbscissaFunction for GaussJacobi {
    fn generate(&self, n: Size) -> Result<GaussianQuadratureData> {
        let (alpha, beta) = (self.alpha, self.beta);
        let pairs = checked_sequence(QuadratureFamily::Jacobi { alpha, beta }, n)?;
        let top = pairs[n];
        let previous = pairs[n - 1];
        let nf = n as Real;
        let ab = alpha + beta;
        let ln_norm =
            ln_gamma(alpha + nf) + ln_gamma(beta + nf) - ln_gamma(nf + 1.0) - ln_gamma(nf + ab + 1.0);
        let norm = ln_norm.exp() * (2.0 * nf + ab) * 2f64.powf(ab);

        let mut x = vec![0.0; n];
        let mut w = vec![0.0; n];
        let mut found: Vec<Real> = Vec::with_capacity(n);
        for i in 0..n {
            let guess = self.initial_guess(i, n, &found);
            let root = newton_raphson(
                |z| top.value(z),
                |z| top.derivative(z),
                guess,
                DEFAULT_ACCURACY,
            )?;
            found.push(root);
            x[n - 1 - i] = root;
            w[n - 1 - i] = norm / (top.derivative(root) * previous.value(root));
        }
        GaussianQuadratureData::new(x, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Real, b: Real, tol: Real) {
        assert!(
            (a - b).abs() < tol,
            "expected {b}, got {a}, diff = {}",
            (a - b).abs()
        );
    }

    #[test]
    fn legendre_exact_for_polynomials() {
        // ∫_{-1}^{1} x⁴ dx = 2/5 — exact from order 3 up
        let q = GaussLegendre.generate(5).unwrap();
        assert_near(q.integrate(|x| x.powi(4)), 0.4, 1e-12);
    }

    #[test]
    fn legendre_integrate_on_interval() {
        // ∫₀^π sin(x) dx = 2
        let result = GaussLegendre::integrate_on(10, |x| x.sin(), 0.0, PI).unwrap();
        assert_near(result, 2.0, 1e-10);
    }

    #[test]
    fn laguerre_weights_sum_to_one() {
        // ∫₀^∞ e^{-x} dx = 1, i.e. Σ wᵢ = 1 for α = 0
        let q = GaussLaguerre::default().generate(10).unwrap();
        assert_near(q.w().iter().sum::<Real>(), 1.0, 1e-10);
    }

    #[test]
    fn laguerre_second_moment() {
        // ∫₀^∞ x² e^{-x} dx = Γ(3) = 2
        let q = GaussLaguerre::default().generate(10).unwrap();
        assert_near(q.integrate(|x| x * x), 2.0, 1e-9);
    }

    #[test]
    fn hermite_weights_sum_to_sqrt_pi() {
        // ∫_{-∞}^{∞} e^{-x²} dx = √π
        let q = GaussHermite.generate(10).unwrap();
        assert_near(q.w().iter().sum::<Real>(), PI.sqrt(), 1e-10);
    }

    #[test]
    fn jacobi_reduces_to_legendre() {
        let jacobi = GaussJacobi::default().generate(5).unwrap();
        let legendre = GaussLegendre.generate(5).unwrap();
        for k in 0..5 {
            assert_near(jacobi.x()[k], legendre.x()[k], 1e-9);
            assert_near(jacobi.w()[k], legendre.w()[k], 1e-9);
        }
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let result = GaussianQuadratureData::new(vec![0.0, 1.0], vec![1.0]);
        assert!(matches!(result, Err(Error::Precondition(_))));
    }

    #[test]
    fn zero_order_rejected() {
        assert!(matches!(
            GaussLegendre.generate(0),
            Err(Error::InvalidOrder(0))
        ));
    }
}
