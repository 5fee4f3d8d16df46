// src/models/gbm.rs
//! Geometric Brownian Motion: `dS_t = μ S_t dt + σ S_t dW_t`.

use crate::error::{validation::*, SdeError, SdeResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use std::f64;

/// GBM coefficient set. Useful for driving the general integrator:
/// the linear structure gives `b'(s,t) = σ` in closed form.
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    pub fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    pub fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }

    pub fn diffusion_derivative(&self, _s: f64, _t: f64) -> f64 {
        self.sigma
    }
}

/// Simulate one GBM path with the Euler recurrence
/// `S_{i+1} = S_i + μ S_i Δt + σ S_i ΔW_i`.
///
/// Self-contained specialization: the coefficients are linear in the state,
/// so no evaluator callbacks and no derivative are needed. Increments come
/// from a fresh entropy-seeded engine; use the general
/// [`euler_maruyama_with_variates`](crate::integrator::euler_maruyama_with_variates)
/// entry point with GBM coefficients when reproducibility is required.
///
/// The returned path has `n_steps + 1` entries with `path[0] == s0`.
pub fn simulate_gbm(
    s0: f64,
    mu: f64,
    sigma: f64,
    t_horizon: f64,
    n_steps: usize,
) -> SdeResult<Vec<f64>> {
    validate_steps(n_steps)?;
    validate_finite("s0", s0)?;
    validate_finite("mu", mu)?;
    validate_finite("sigma", sigma)?;
    validate_finite("t_horizon", t_horizon)?;

    let dt = t_horizon / n_steps as f64;
    let sqrt_dt = dt.sqrt();
    let mut rng = StdRng::from_entropy();

    let mut path = Vec::with_capacity(n_steps + 1);
    path.push(s0);

    let mut s = s0;
    for i in 0..n_steps {
        let z: f64 = StandardNormal.sample(&mut rng);
        let dw = sqrt_dt * z;
        s += mu * s * dt + sigma * s * dw;
        if !s.is_finite() {
            return Err(SdeError::NonFiniteState {
                step: i + 1,
                t: (i + 1) as f64 * dt,
                value: s,
            });
        }
        path.push(s);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_shape() {
        let path = simulate_gbm(100.0, 0.05, 0.2, 1.0, 252).unwrap();
        assert_eq!(path.len(), 253);
        assert_eq!(path[0], 100.0);
    }

    #[test]
    fn test_degenerate_coefficients_give_constant_path() {
        let path = simulate_gbm(100.0, 0.0, 0.0, 1.0, 50).unwrap();
        assert_eq!(path, vec![100.0; 51]);
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(simulate_gbm(100.0, 0.05, 0.2, 1.0, 0).is_err());
    }

    #[test]
    fn test_coefficients() {
        let gbm = Gbm::new(0.05, 0.2);
        assert_eq!(gbm.drift(100.0, 0.0), 5.0);
        assert_eq!(gbm.diffusion(100.0, 0.0), 20.0);
        assert_eq!(gbm.diffusion_derivative(100.0, 0.0), 0.2);
    }
}
