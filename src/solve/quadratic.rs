//! Constrained monotonic sequence solver.
//!
//! Produces a strictly increasing sequence of `n` values from `start` to
//! `end` such that absolute steps grow while relative steps shrink. Two
//! closed-form fits cover the two modes:
//!
//! - **Natural** (no pinned first step): each value is
//!   `start + (end - start)·t²` at the normalized position `t = i/(n-1)`.
//!   Only the two boundary constraints are active; the exponent 2 fixes the
//!   curvature.
//! - **Pinned** (`first_delta` given): a quadratic `f(x) = a·x² + b·x + c`
//!   over index positions through the three pinned points
//!   `(0, start)`, `(1, start + first_delta)`, `(n-1, end)`:
//!
//!   ```text
//!   c = start
//!   a = (end - start - first_delta·(n-1)) / ((n-1)·(n-2))
//!   b = first_delta - a
//!   ```
//!
//! A single quadratic is the minimal-degree curve through three point
//! constraints with one inflection-free monotonic branch over the small
//! lengths callers use; higher degrees risk oscillation. The degree is part
//! of the output contract, not an implementation detail.
//!
//! The three pinned points are exact by contract: `value_at` returns them
//! verbatim instead of re-evaluating the polynomial, so no floating-point
//! rounding from the closed form can reach a pinned index.

use thiserror::Error;

use crate::domain::{CurveSpec, Element};
use crate::math::QuadPoly;

/// Validation failures. Both are raised before any computation proceeds;
/// the solver never returns a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// `n < 3`: the construction needs at least three independent
    /// constraints (start, end, and either the curvature-free interpolant
    /// or the pinned first step).
    #[error("sequence length must be at least 3 (got {0})")]
    InvalidLength(usize),
    /// Element query outside `[0, n-1]`.
    #[error("index {ith} is out of bounds for a sequence of length {n}")]
    IndexOutOfRange { ith: usize, n: usize },
}

#[derive(Debug, Clone, Copy)]
enum Curve {
    Natural,
    Pinned(QuadPoly),
}

/// A validated, ready-to-evaluate fit for one [`CurveSpec`].
///
/// Construction does all validation and coefficient work; evaluation is a
/// pure function of the stored state, so a fit is trivially shareable
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct QuadFit {
    spec: CurveSpec,
    curve: Curve,
}

impl QuadFit {
    pub fn new(spec: CurveSpec) -> Result<Self, SolveError> {
        if spec.n < 3 {
            return Err(SolveError::InvalidLength(spec.n));
        }

        let curve = match spec.first_delta {
            None => Curve::Natural,
            Some(first_delta) => {
                let m = (spec.n - 1) as f64;
                // (n-1)(n-2) > 0 for every n >= 3, so the division is safe.
                let a = (spec.span() - first_delta * m) / (m * (m - 1.0));
                let b = first_delta - a;
                Curve::Pinned(QuadPoly { a, b, c: spec.start })
            }
        };

        Ok(Self { spec, curve })
    }

    pub fn spec(&self) -> &CurveSpec {
        &self.spec
    }

    /// Value at index `i` (callers must keep `i < n`).
    ///
    /// The pinned points — index 0, index `n-1`, and index 1 in pinned mode —
    /// are returned verbatim. Doing the override here rather than as a
    /// post-pass over a materialized vector makes [`Self::sequence`] and
    /// [`Self::element`] agree exactly.
    pub fn value_at(&self, i: usize) -> f64 {
        if i == 0 {
            return self.spec.start;
        }
        if i == self.spec.n - 1 {
            return self.spec.end;
        }
        if i == 1 {
            if let Some(first_delta) = self.spec.first_delta {
                return self.spec.start + first_delta;
            }
        }

        match self.curve {
            Curve::Natural => {
                let t = i as f64 / (self.spec.n - 1) as f64;
                self.spec.start + self.spec.span() * (t * t)
            }
            Curve::Pinned(poly) => poly.eval(i as f64),
        }
    }

    /// Materialize the full ordered sequence.
    pub fn sequence(&self) -> Vec<f64> {
        (0..self.spec.n).map(|i| self.value_at(i)).collect()
    }

    /// Single-element query: the value at `ith` and its step delta.
    ///
    /// Evaluates at most two indices instead of materializing the sequence;
    /// the result is numerically identical to extracting the corresponding
    /// entries from [`Self::sequence`].
    pub fn element(&self, ith: usize) -> Result<Element, SolveError> {
        if ith >= self.spec.n {
            return Err(SolveError::IndexOutOfRange {
                ith,
                n: self.spec.n,
            });
        }

        let value = self.value_at(ith);
        let delta = if ith == 0 {
            0.0
        } else {
            value - self.value_at(ith - 1)
        };
        Ok(Element { value, delta })
    }
}

/// Solve for the full sequence.
pub fn solve_sequence(spec: &CurveSpec) -> Result<Vec<f64>, SolveError> {
    Ok(QuadFit::new(*spec)?.sequence())
}

/// Solve for a single element `(value, delta)`.
pub fn solve_element(spec: &CurveSpec, ith: usize) -> Result<Element, SolveError> {
    QuadFit::new(*spec)?.element(ith)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn pinned(n: usize, start: f64, end: f64, first_delta: f64) -> CurveSpec {
        CurveSpec {
            n,
            start,
            end,
            first_delta: Some(first_delta),
        }
    }

    fn natural(n: usize, start: f64, end: f64) -> CurveSpec {
        CurveSpec {
            n,
            start,
            end,
            first_delta: None,
        }
    }

    #[test]
    fn pinned_endpoints_and_first_step_are_exact() {
        let seq = solve_sequence(&pinned(10, 0.0, 0.7, 0.05)).unwrap();
        assert_eq!(seq.len(), 10);
        assert_eq!(seq[0], 0.0);
        assert_eq!(seq[1], 0.05);
        assert_eq!(seq[9], 0.7);
        // Every later absolute step exceeds the pinned first step.
        for i in 2..10 {
            assert!(seq[i] - seq[i - 1] > 0.05, "step {i} too small");
        }
    }

    #[test]
    fn natural_midpoint_is_quarter_of_span() {
        // t = 3/6 = 0.5, so the midpoint is start + span/4 exactly.
        let seq = solve_sequence(&natural(7, 0.0, 0.7)).unwrap();
        assert_eq!(seq[3], 0.175);
        assert_eq!(seq[0], 0.0);
        assert_eq!(seq[6], 0.7);
    }

    #[test]
    fn natural_steps_grow_and_relative_steps_shrink() {
        let seq = solve_sequence(&natural(7, 0.0, 0.7)).unwrap();
        for i in 1..7 {
            assert!(seq[i] > seq[i - 1]);
        }
        for i in 2..7 {
            assert!(seq[i] - seq[i - 1] > seq[i - 1] - seq[i - 2]);
        }
        // Relative steps, defined from the first nonzero base.
        for i in 3..7 {
            let rel = (seq[i] - seq[i - 1]) / seq[i - 1];
            let prev_rel = (seq[i - 1] - seq[i - 2]) / seq[i - 2];
            assert!(rel < prev_rel, "relative step grew at {i}");
        }
    }

    #[test]
    fn element_zero_has_zero_delta() {
        let el = solve_element(&pinned(10, 0.0, 0.7, 0.05), 0).unwrap();
        assert_eq!(el.value, 0.0);
        assert_eq!(el.delta, 0.0);
    }

    #[test]
    fn element_last_matches_sequence_tail() {
        let spec = pinned(10, 0.0, 0.7, 0.05);
        let seq = solve_sequence(&spec).unwrap();
        let el = solve_element(&spec, 9).unwrap();
        assert_eq!(el.value, 0.7);
        assert_eq!(el.delta, seq[9] - seq[8]);
    }

    #[test]
    fn element_query_matches_full_sequence_everywhere() {
        for spec in [
            pinned(10, 0.0, 0.7, 0.05),
            pinned(3, 1.0, 2.0, 0.2),
            natural(12, -1.0, 4.0),
        ] {
            let seq = solve_sequence(&spec).unwrap();
            for ith in 0..spec.n {
                let el = solve_element(&spec, ith).unwrap();
                assert_eq!(el.value, seq[ith], "value mismatch at {ith}");
                let expected_delta = if ith == 0 { 0.0 } else { seq[ith] - seq[ith - 1] };
                assert_eq!(el.delta, expected_delta, "delta mismatch at {ith}");
            }
        }
    }

    #[test]
    fn short_lengths_are_rejected() {
        for n in [0, 1, 2] {
            let err = solve_sequence(&pinned(n, 0.0, 0.7, 0.05)).unwrap_err();
            assert_eq!(err, SolveError::InvalidLength(n));
            let err = solve_sequence(&natural(n, 0.0, 0.7)).unwrap_err();
            assert_eq!(err, SolveError::InvalidLength(n));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = solve_element(&pinned(10, 0.0, 0.7, 0.05), 10).unwrap_err();
        assert_eq!(err, SolveError::IndexOutOfRange { ith: 10, n: 10 });
        // Length validation runs first.
        let err = solve_element(&pinned(2, 0.0, 0.7, 0.05), 10).unwrap_err();
        assert_eq!(err, SolveError::InvalidLength(2));
    }

    #[test]
    fn pinned_fit_passes_through_interior_closed_form() {
        // n=5, start=0, end=1, first_delta=0.1:
        // a = (1 - 0.1*4) / (4*3) = 0.05, b = 0.05, c = 0.
        let spec = pinned(5, 0.0, 1.0, 0.1);
        let seq = solve_sequence(&spec).unwrap();
        assert_relative_eq!(seq[2], 0.05 * 4.0 + 0.05 * 2.0, epsilon = 1e-15);
        assert_relative_eq!(seq[3], 0.05 * 9.0 + 0.05 * 3.0, epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn natural_mode_is_monotone_with_growing_steps(
            n in 3usize..40,
            start in -5.0f64..5.0,
            span in 0.1f64..50.0,
        ) {
            let spec = natural(n, start, start + span);
            let seq = solve_sequence(&spec).unwrap();
            prop_assert_eq!(seq[0], start);
            prop_assert_eq!(seq[n - 1], start + span);
            for i in 1..n {
                prop_assert!(seq[i] > seq[i - 1]);
            }
            for i in 2..n {
                prop_assert!(seq[i] - seq[i - 1] > seq[i - 1] - seq[i - 2]);
            }
        }

        #[test]
        fn pinned_mode_is_monotone_with_growing_steps(
            n in 3usize..40,
            start in -5.0f64..5.0,
            span in 0.1f64..50.0,
            // Keep the pinned step strictly below the average step so the
            // fitted curvature stays positive.
            frac in 0.05f64..0.95,
        ) {
            let first_delta = frac * span / (n - 1) as f64;
            let spec = pinned(n, start, start + span, first_delta);
            let seq = solve_sequence(&spec).unwrap();
            prop_assert_eq!(seq[0], start);
            prop_assert_eq!(seq[1], start + first_delta);
            prop_assert_eq!(seq[n - 1], start + span);
            for i in 1..n {
                prop_assert!(seq[i] > seq[i - 1]);
            }
            for i in 2..n {
                prop_assert!(seq[i] - seq[i - 1] > seq[i - 1] - seq[i - 2]);
            }
        }

        #[test]
        fn pinned_relative_steps_shrink_from_zero_start(
            n in 4usize..40,
            span in 0.1f64..50.0,
            frac in 0.05f64..0.95,
        ) {
            // Relative steps are only guaranteed to shrink when the sequence
            // starts at zero (or negligibly close to it), which is the
            // regime the generator targets.
            let first_delta = frac * span / (n - 1) as f64;
            let spec = pinned(n, 0.0, span, first_delta);
            let seq = solve_sequence(&spec).unwrap();
            for i in 3..n {
                let rel = (seq[i] - seq[i - 1]) / seq[i - 1];
                let prev_rel = (seq[i - 1] - seq[i - 2]) / seq[i - 2];
                prop_assert!(rel < prev_rel, "relative step grew at index {}", i);
            }
        }

        #[test]
        fn element_query_agrees_with_sequence(
            n in 3usize..30,
            span in 0.1f64..20.0,
            frac in 0.05f64..0.95,
            ith_seed in 0usize..30,
        ) {
            let first_delta = frac * span / (n - 1) as f64;
            let spec = pinned(n, 0.0, span, first_delta);
            let ith = ith_seed % n;
            let seq = solve_sequence(&spec).unwrap();
            let el = solve_element(&spec, ith).unwrap();
            prop_assert_eq!(el.value, seq[ith]);
            let expected = if ith == 0 { 0.0 } else { seq[ith] - seq[ith - 1] };
            prop_assert_eq!(el.delta, expected);
        }
    }
}
