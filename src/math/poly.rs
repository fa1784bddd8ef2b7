//! Quadratic polynomials over index positions.
//!
//! The pinned-mode fit evaluates `f(x) = a·x² + b·x + c` at integer index
//! positions `x ∈ {0, 1, …, n-1}`. We keep the monomial evaluation order
//! (`a·x² + b·x + c`, not Horner form) so the values match the closed-form
//! coefficient derivation term for term.

/// Coefficients of `f(x) = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadPoly {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadPoly {
    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// First difference `f(x) - f(x-1)` for unit-spaced positions.
    pub fn unit_step(&self, x: f64) -> f64 {
        self.eval(x) - self.eval(x - 1.0)
    }
}
