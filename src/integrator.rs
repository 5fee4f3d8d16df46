// src/integrator.rs
//! Path Integrator
//!
//! The stepping loop shared by every discretization scheme. One call
//! simulates one trajectory:
//!
//! ```text
//! path[0] = x0
//! path[i+1] = scheme.step(path[i], i·dt, dt, dW_i)    i = 0..n_steps
//! ```
//!
//! with `dt = T / n_steps` computed on the fly (the time grid is never
//! materialized) and the increments `dW_i` obtained from an
//! [`IncrementSource`]. The loop is parameterized over the source, not
//! duplicated per mode: the internal-entropy and external-variate entry
//! points below differ only in which source they construct.
//!
//! # Failure Policy
//!
//! All failures abort the call and return no path: argument validation and
//! the variate-buffer bounds check happen before the result buffer is
//! allocated, and a state that becomes NaN or infinite mid-path surfaces as
//! [`SdeError::NonFiniteState`] rather than silently poisoning the
//! remaining steps.

use crate::error::{validation::*, SdeError, SdeResult};
use crate::increments::{IncrementSource, NormalSource, VariateSource};
use crate::solvers::{EulerMaruyama, Milstein, Scheme};
use std::f64;

/// Simulate one path of `n_steps` steps over the horizon `t_horizon`.
///
/// The returned vector has exactly `n_steps + 1` entries with `path[0] ==
/// x0`. `t_horizon = 0` is valid and produces a constant path (every
/// increment degenerates to zero).
///
/// # Errors
///
/// - `InvalidParameters` for `n_steps == 0` or non-finite `x0`/`t_horizon`
/// - `InsufficientVariates` if the source's buffer is too short
/// - `NonFiniteState` if a step produces NaN or infinity
pub fn integrate<S, I>(
    x0: f64,
    t_horizon: f64,
    n_steps: usize,
    scheme: &S,
    increments: &mut I,
) -> SdeResult<Vec<f64>>
where
    S: Scheme,
    I: IncrementSource,
{
    validate_steps(n_steps)?;
    validate_finite("x0", x0)?;
    validate_finite("t_horizon", t_horizon)?;

    let dt = t_horizon / n_steps as f64;

    // All fallible source work happens before the path buffer exists.
    increments.begin(n_steps, dt)?;

    let mut path = Vec::with_capacity(n_steps + 1);
    path.push(x0);

    let mut x = x0;
    for i in 0..n_steps {
        let t = i as f64 * dt;
        let dw = increments.next_increment();
        x = scheme.step(x, t, dt, dw);
        if !x.is_finite() {
            return Err(SdeError::NonFiniteState {
                step: i + 1,
                t: t + dt,
                value: x,
            });
        }
        path.push(x);
    }

    Ok(path)
}

/// Euler-Maruyama path with internally generated increments.
///
/// A fresh engine is seeded from system entropy per call; there is no
/// reproducibility guarantee across calls. Use
/// [`euler_maruyama_with_variates`] for deterministic output.
pub fn euler_maruyama<A, B>(
    x0: f64,
    a: A,
    b: B,
    t_horizon: f64,
    n_steps: usize,
) -> SdeResult<Vec<f64>>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
{
    let scheme = EulerMaruyama::new(a, b);
    let mut source = NormalSource::from_entropy();
    integrate(x0, t_horizon, n_steps, &scheme, &mut source)
}

/// Euler-Maruyama path driven by caller-supplied standard-normal variates.
///
/// `variates` must hold at least `n_steps` entries; each is scaled by
/// `sqrt(dt)` to form the Wiener increment. Identical inputs produce
/// bit-identical paths.
pub fn euler_maruyama_with_variates<A, B>(
    x0: f64,
    a: A,
    b: B,
    t_horizon: f64,
    n_steps: usize,
    variates: &[f64],
) -> SdeResult<Vec<f64>>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
{
    let scheme = EulerMaruyama::new(a, b);
    let mut source = VariateSource::new(variates);
    integrate(x0, t_horizon, n_steps, &scheme, &mut source)
}

/// Milstein path with internally generated increments.
///
/// `db_dx` is the derivative of the diffusion coefficient with respect to
/// the state, evaluated at the same `(x, t)` as `b`.
pub fn milstein<A, B, D>(
    x0: f64,
    a: A,
    b: B,
    db_dx: D,
    t_horizon: f64,
    n_steps: usize,
) -> SdeResult<Vec<f64>>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    let scheme = Milstein::new(a, b, db_dx);
    let mut source = NormalSource::from_entropy();
    integrate(x0, t_horizon, n_steps, &scheme, &mut source)
}

/// Milstein path driven by caller-supplied standard-normal variates.
pub fn milstein_with_variates<A, B, D>(
    x0: f64,
    a: A,
    b: B,
    db_dx: D,
    t_horizon: f64,
    n_steps: usize,
    variates: &[f64],
) -> SdeResult<Vec<f64>>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    let scheme = Milstein::new(a, b, db_dx);
    let mut source = VariateSource::new(variates);
    integrate(x0, t_horizon, n_steps, &scheme, &mut source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_length_and_initial_value() {
        for n_steps in [1usize, 2, 10, 252] {
            let path = euler_maruyama(3.0, |x, _| 3.0 - x, |_, _| 0.2, 1.0, n_steps).unwrap();
            assert_eq!(path.len(), n_steps + 1);
            assert_eq!(path[0], 3.0);
        }
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = euler_maruyama(1.0, |_, _| 0.0, |_, _| 1.0, 1.0, 0).unwrap_err();
        assert!(matches!(err, SdeError::InvalidParameters { .. }));

        let err = milstein(1.0, |_, _| 0.0, |_, _| 1.0, |_, _| 0.0, 1.0, 0).unwrap_err();
        assert!(matches!(err, SdeError::InvalidParameters { .. }));
    }

    #[test]
    fn test_non_finite_arguments_rejected() {
        assert!(euler_maruyama(f64::NAN, |_, _| 0.0, |_, _| 1.0, 1.0, 10).is_err());
        assert!(euler_maruyama(1.0, |_, _| 0.0, |_, _| 1.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_zero_horizon_constant_path() {
        let path = euler_maruyama(5.0, |x, _| x, |x, _| x, 0.0, 10).unwrap();
        assert_eq!(path, vec![5.0; 11]);
    }

    #[test]
    fn test_non_finite_state_surfaced() {
        // An ill-posed drift poisons the state on the first step.
        let variates = [1.0; 4];
        let err = euler_maruyama_with_variates(
            1.0,
            |_, _| f64::NAN,
            |_, _| 0.0,
            1.0,
            4,
            &variates,
        )
        .unwrap_err();
        assert!(matches!(err, SdeError::NonFiniteState { step: 1, .. }));
    }
}
