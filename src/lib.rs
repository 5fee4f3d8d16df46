//! # sde-path: Sample-Path Simulation for Scalar SDEs
//!
//! A Rust library for simulating sample paths of scalar stochastic
//! differential equations of the form `dX = a(X,t) dt + b(X,t) dW`, where
//! `W` is a standard Wiener process.
//!
//! ## Key Features
//!
//! - **Two discretization schemes**: Euler-Maruyama (strong order 0.5) and
//!   Milstein (strong order 1.0)
//! - **Closed-form GBM sampler**: self-contained Geometric Brownian Motion
//!   specialization
//! - **Pluggable randomness**: increments drawn internally or derived from a
//!   caller-supplied buffer of standard-normal variates for bit-for-bit
//!   reproducibility
//! - **Parallel ensembles**: independent trajectories fanned out with Rayon
//! - **Robust numerics**: argument validation up front, non-finite states
//!   surfaced as errors, no partial paths
//!
//! ## Quick Start
//!
//! ```rust
//! use sde_path::integrator::euler_maruyama_with_variates;
//!
//! // Ornstein-Uhlenbeck-style SDE: dX = (3 - X) dt + 0.2 dW.
//! // With an all-zero variate buffer the path is the deterministic
//! // Euler discretization of dX = (3 - X) dt.
//! let variates = vec![0.0; 252];
//! let path = euler_maruyama_with_variates(
//!     1.0,
//!     |x, _t| 3.0 - x,
//!     |_x, _t| 0.2,
//!     1.0,
//!     252,
//!     &variates,
//! )
//! .expect("valid arguments");
//!
//! assert_eq!(path.len(), 253);
//! assert_eq!(path[0], 1.0);
//! assert!(path[252] > 1.0 && path[252] < 3.0);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Both schemes advance the state one step at a time over the uniform grid
//! `t_i = i * T / n_steps`, driven by Wiener increments `dW_i ~ N(0, dt)`.
//! Euler-Maruyama applies the linear update `X + a dt + b dW`; Milstein adds
//! the Itô correction `0.5 b b' (dW^2 - dt)` for strong order 1.0.

// Module declarations
pub mod ensemble;
pub mod error;
pub mod increments;
pub mod integrator;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use integrator::{
    euler_maruyama, euler_maruyama_with_variates, milstein, milstein_with_variates,
};
pub use models::gbm::simulate_gbm;
