// src/models/ou_process.rs
//! Ornstein-Uhlenbeck process: `dX_t = θ(μ - X_t) dt + σ dW_t`.
//!
//! Constant diffusion makes the Milstein correction vanish and the
//! transient mean `μ + (x0 - μ)e^{-θt}` known in closed form, which is why
//! this process serves as the convergence-test fixture.

use std::f64;

pub struct OrnsteinUhlenbeck {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OrnsteinUhlenbeck {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OrnsteinUhlenbeck { theta, mu, sigma }
    }

    pub fn drift(&self, x: f64, _t: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    pub fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }

    pub fn diffusion_derivative(&self, _x: f64, _t: f64) -> f64 {
        0.0
    }

    /// Mean of the transient distribution at time `t` started from `x0`.
    pub fn exact_mean(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_pulls_toward_mean() {
        let ou = OrnsteinUhlenbeck::new(0.5, 0.1, 0.2);
        assert!(ou.drift(1.0, 0.0) < 0.0);
        assert!(ou.drift(-1.0, 0.0) > 0.0);
        assert_eq!(ou.drift(0.1, 0.0), 0.0);
    }

    #[test]
    fn test_exact_mean_limits() {
        let ou = OrnsteinUhlenbeck::new(0.5, 0.1, 0.2);
        assert_eq!(ou.exact_mean(3.0, 0.0), 3.0);
        assert!((ou.exact_mean(3.0, 1e6) - ou.mu).abs() < 1e-12);
    }
}
