//! Periodic cubic spline interpolation
//!
//! Fits a C² cubic through knots `(x_k, y_k)` whose first and last values
//! coincide, and matches slope and curvature across that seam. Evaluation
//! outside `[x_0, x_n]` wraps around the period `x_n - x_0`.
//!
//! With `M_k` the second derivative at knot `k` and `h_k = x_{k+1} - x_k`,
//! continuity of the first derivative gives one equation per knot:
//!
//! ```text
//! h_{k-1}/6 M_{k-1} + (h_{k-1} + h_k)/3 M_k + h_k/6 M_{k+1}
//!     = (y_{k+1} - y_k)/h_k - (y_k - y_{k-1})/h_{k-1}
//! ```
//!
//! with indices taken modulo `n`. The resulting cyclic tridiagonal system is
//! small, so it is solved densely with an LU decomposition.

use anyhow::{anyhow, ensure, Result};
use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone)]
pub struct PeriodicCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    m: Vec<f64>, // second derivative per knot, m[n] == m[0]
}

impl PeriodicCubicSpline {
    /// Fit the spline through `xs`/`ys`.
    ///
    /// Needs at least 3 knots, strictly increasing `xs` and `ys[0] == ys[n]`.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        ensure!(xs.len() == ys.len(), "knot count mismatch: {} x values, {} y values", xs.len(), ys.len());
        ensure!(xs.len() >= 3, "periodic spline needs at least 3 knots, got {}", xs.len());
        ensure!(
            xs.iter().chain(ys.iter()).all(|v| v.is_finite()),
            "spline knots must be finite"
        );
        ensure!(
            xs.windows(2).all(|w| w[1] > w[0]),
            "spline knots must be strictly increasing"
        );

        let n = xs.len() - 1; // number of intervals == number of unknowns
        ensure!(
            (ys[0] - ys[n]).abs() <= 1e-12 * ys[0].abs().max(1.0),
            "periodic spline needs matching end values, got {} and {}",
            ys[0],
            ys[n]
        );

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);

        for k in 0..n {
            let prev = (k + n - 1) % n;
            let next = (k + 1) % n;
            let h_prev = h[prev];
            let h_next = h[k];

            // += so that prev == next (two intervals) still assembles correctly
            a[(k, prev)] += h_prev / 6.0;
            a[(k, k)] += (h_prev + h_next) / 3.0;
            a[(k, next)] += h_next / 6.0;

            let y_prev = ys[if k == 0 { n - 1 } else { k - 1 }];
            rhs[k] = (ys[k + 1] - ys[k]) / h_next - (ys[k] - y_prev) / h_prev;
        }

        let solved = a
            .lu()
            .solve(&rhs)
            .ok_or_else(|| anyhow!("periodic spline system is singular"))?;

        let mut m: Vec<f64> = solved.iter().copied().collect();
        m.push(m[0]);

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    pub fn period(&self) -> f64 {
        self.xs[self.xs.len() - 1] - self.xs[0]
    }

    pub fn knots(&self) -> (&[f64], &[f64]) {
        (&self.xs, &self.ys)
    }

    /// Spline value at `x`
    pub fn eval(&self, x: f64) -> f64 {
        let (k, u) = self.locate(x);
        let (x0, x1) = (self.xs[k], self.xs[k + 1]);
        let h = x1 - x0;
        let (l, r) = (x1 - u, u - x0);

        self.m[k] * l.powi(3) / (6.0 * h)
            + self.m[k + 1] * r.powi(3) / (6.0 * h)
            + (self.ys[k] / h - self.m[k] * h / 6.0) * l
            + (self.ys[k + 1] / h - self.m[k + 1] * h / 6.0) * r
    }

    /// First derivative at `x`
    pub fn derivative(&self, x: f64) -> f64 {
        let (k, u) = self.locate(x);
        let (x0, x1) = (self.xs[k], self.xs[k + 1]);
        let h = x1 - x0;
        let (l, r) = (x1 - u, u - x0);

        -self.m[k] * l * l / (2.0 * h)
            + self.m[k + 1] * r * r / (2.0 * h)
            + (self.ys[k + 1] - self.ys[k]) / h
            - (self.m[k + 1] - self.m[k]) * h / 6.0
    }

    /// Second derivative at `x`
    pub fn second_derivative(&self, x: f64) -> f64 {
        let (k, u) = self.locate(x);
        let (x0, x1) = (self.xs[k], self.xs[k + 1]);
        let h = x1 - x0;
        (self.m[k] * (x1 - u) + self.m[k + 1] * (u - x0)) / h
    }

    /// Wrap `x` into the base period and find its interval
    fn locate(&self, x: f64) -> (usize, f64) {
        let x0 = self.xs[0];
        let xn = self.xs[self.xs.len() - 1];
        let u = if (x0..=xn).contains(&x) {
            x
        } else {
            x0 + (x - x0).rem_euclid(self.period())
        };

        let n = self.xs.len() - 1;
        let k = self.xs.partition_point(|&knot| knot <= u).saturating_sub(1).min(n - 1);
        (k, u)
    }
}
