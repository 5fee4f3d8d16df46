// src/solvers/milstein.rs
//! Milstein Scheme for Higher-Order SDE Integration
//!
//! # Mathematical Framework
//!
//! For a scalar SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Milstein scheme includes an additional correction term:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n + ½ b(X_n, t_n) b'(X_n, t_n) [(ΔW_n)² - Δt]
//! ```
//!
//! Where:
//! - `b'(x,t) = ∂b/∂x` is the derivative of the diffusion coefficient
//! - `(ΔW_n)² - Δt` is the Itô correction term
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 1.0 (vs 0.5 for Euler-Maruyama)
//! - **Weak convergence**: Order 1.0
//! - **Cost**: Requires diffusion derivative calculation
//!
//! # When to Use
//!
//! - When higher path-wise accuracy is needed
//! - For models where the diffusion derivative is easily computed
//! - When the step size cannot be made very small

use super::Scheme;
use std::f64;

/// Milstein numerical scheme over user-supplied drift, diffusion and
/// diffusion-derivative evaluators.
pub struct Milstein<A, B, D> {
    drift: A,
    diffusion: B,
    diffusion_derivative: D,
}

impl<A, B, D> Milstein<A, B, D>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    pub fn new(drift: A, diffusion: B, diffusion_derivative: D) -> Self {
        Milstein {
            drift,
            diffusion,
            diffusion_derivative,
        }
    }
}

impl<A, B, D> Scheme for Milstein<A, B, D>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    /// Single Milstein step with Itô correction.
    ///
    /// The diffusion value `b(x,t)` is evaluated once and reused for both
    /// the linear term and the correction term.
    fn step(&self, x: f64, t: f64, dt: f64, dw: f64) -> f64 {
        let drift_val = (self.drift)(x, t);
        let diffusion_val = (self.diffusion)(x, t);
        let diffusion_derivative_val = (self.diffusion_derivative)(x, t);

        x + drift_val * dt
            + diffusion_val * dw
            + 0.5 * diffusion_val * diffusion_derivative_val * (dw * dw - dt)
    }
}
