// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `ΔW_n ~ N(0, Δt)` are independent normal increments
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Stability**: Conditionally stable (depends on drift/diffusion)
//!
//! # Use Cases
//!
//! - General-purpose SDE solver
//! - Simple implementation, widely understood
//! - No coefficient derivatives required

use super::Scheme;
use std::f64;

/// Euler-Maruyama numerical scheme over user-supplied drift and diffusion
/// evaluators.
pub struct EulerMaruyama<A, B> {
    drift: A,
    diffusion: B,
}

impl<A, B> EulerMaruyama<A, B>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
{
    pub fn new(drift: A, diffusion: B) -> Self {
        EulerMaruyama { drift, diffusion }
    }
}

impl<A, B> Scheme for EulerMaruyama<A, B>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
{
    /// Single Euler-Maruyama step: `X + a(X,t)·Δt + b(X,t)·ΔW`.
    ///
    /// Each evaluator is invoked exactly once per step.
    fn step(&self, x: f64, t: f64, dt: f64, dw: f64) -> f64 {
        x + (self.drift)(x, t) * dt + (self.diffusion)(x, t) * dw
    }
}
