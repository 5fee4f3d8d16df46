// src/solvers/mod.rs
pub mod euler_maruyama;
pub mod milstein;

pub use euler_maruyama::EulerMaruyama;
pub use milstein::Milstein;

/// A discretization scheme for the scalar SDE `dX = a(X,t) dt + b(X,t) dW`.
///
/// A scheme is a pure function of the current state, the step geometry and
/// the Wiener increment; no history beyond the immediately preceding state
/// is consulted. Implementations hold the drift/diffusion evaluators they
/// were built from, which must themselves be deterministic in `(x, t)`.
pub trait Scheme {
    /// Advance the state one step from `(x, t)` to `t + dt` under the
    /// increment `dw`.
    fn step(&self, x: f64, t: f64, dt: f64, dw: f64) -> f64;
}
