// src/increments.rs
//! Wiener Increment Sources
//!
//! # Design Philosophy
//!
//! Every path simulation is driven by a sequence of Wiener increments
//! `dW_i ~ N(0, dt)`. Two modes cover the practical use cases:
//!
//! 1. **Internal mode** ([`NormalSource`]): increments are drawn from a
//!    pseudorandom engine owned by the source. A fresh engine seeded from
//!    system entropy gives independent paths per call; a fixed seed gives
//!    reproducible paths (used by the parallel ensemble sampler).
//! 2. **External mode** ([`VariateSource`]): the caller supplies a buffer of
//!    standard-normal variates `z_i` and the source scales them to
//!    `dW_i = z_i * sqrt(dt)`. Bit-for-bit reproducible, and the mode test
//!    suites should exercise.
//!
//! # Scaling Contract
//!
//! The increment standard deviation is `sqrt(dt)`, never `dt`. Both sources
//! scale a standard-normal draw by `sqrt(dt)` exactly once; the classic
//! defect of sampling from an already-`sqrt(dt)`-wide distribution and then
//! scaling again (standard deviation `dt`) is guarded by a statistical
//! regression test.

use crate::error::{SdeError, SdeResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Source of the Wiener increments driving one path simulation.
///
/// `begin` performs all fallible work (bounds and parameter checks) once,
/// before the integrator allocates the result buffer; `next_increment` is
/// then called exactly `n_steps` times and cannot fail.
pub trait IncrementSource {
    /// Prepare the source for a path of `n_steps` increments over steps of
    /// size `dt`.
    fn begin(&mut self, n_steps: usize, dt: f64) -> SdeResult<()>;

    /// Next increment `dW_i`. Only valid after a successful `begin`.
    fn next_increment(&mut self) -> f64;
}

/// Internal mode: increments drawn from an owned pseudorandom engine as
/// `sqrt(dt) * Z` with `Z ~ N(0, 1)`.
#[derive(Debug, Clone)]
pub struct NormalSource {
    rng: StdRng,
    sqrt_dt: f64,
}

impl NormalSource {
    /// Engine seeded from system entropy. No reproducibility guarantee
    /// across calls.
    pub fn from_entropy() -> Self {
        NormalSource {
            rng: StdRng::from_entropy(),
            sqrt_dt: 0.0,
        }
    }

    /// Engine seeded deterministically. Same seed, same increments.
    pub fn from_seed(seed: u64) -> Self {
        NormalSource {
            rng: StdRng::seed_from_u64(seed),
            sqrt_dt: 0.0,
        }
    }
}

impl IncrementSource for NormalSource {
    fn begin(&mut self, _n_steps: usize, dt: f64) -> SdeResult<()> {
        // dt = 0 is valid and degenerates every increment to 0.
        self.sqrt_dt = dt.sqrt();
        Ok(())
    }

    fn next_increment(&mut self) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        self.sqrt_dt * z
    }
}

/// External mode: a read-only view over a caller-owned buffer of
/// standard-normal variates, scaled to increments as `z_i * sqrt(dt)`.
///
/// The buffer is never copied. Entries beyond `n_steps` are ignored.
#[derive(Debug, Clone)]
pub struct VariateSource<'a> {
    variates: &'a [f64],
    sqrt_dt: f64,
    next: usize,
}

impl<'a> VariateSource<'a> {
    pub fn new(variates: &'a [f64]) -> Self {
        VariateSource {
            variates,
            sqrt_dt: 0.0,
            next: 0,
        }
    }
}

impl IncrementSource for VariateSource<'_> {
    fn begin(&mut self, n_steps: usize, dt: f64) -> SdeResult<()> {
        if self.variates.len() < n_steps {
            return Err(SdeError::InsufficientVariates {
                required: n_steps,
                provided: self.variates.len(),
            });
        }
        self.sqrt_dt = dt.sqrt();
        self.next = 0;
        Ok(())
    }

    fn next_increment(&mut self) -> f64 {
        let z = self.variates[self.next];
        self.next += 1;
        self.sqrt_dt * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_reproducibility() {
        let mut src1 = NormalSource::from_seed(42);
        let mut src2 = NormalSource::from_seed(42);
        src1.begin(100, 0.01).unwrap();
        src2.begin(100, 0.01).unwrap();

        for _ in 0..100 {
            assert_eq!(src1.next_increment(), src2.next_increment());
        }
    }

    #[test]
    fn test_seeded_sources_differ_across_seeds() {
        let mut src1 = NormalSource::from_seed(42);
        let mut src2 = NormalSource::from_seed(43);
        src1.begin(10, 0.01).unwrap();
        src2.begin(10, 0.01).unwrap();

        let a: Vec<f64> = (0..10).map(|_| src1.next_increment()).collect();
        let b: Vec<f64> = (0..10).map(|_| src2.next_increment()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_variate_scaling() {
        let variates = [1.0, -2.0, 0.5];
        let mut src = VariateSource::new(&variates);
        src.begin(3, 0.25).unwrap();

        assert_eq!(src.next_increment(), 0.5);
        assert_eq!(src.next_increment(), -1.0);
        assert_eq!(src.next_increment(), 0.25);
    }

    #[test]
    fn test_variate_buffer_too_short() {
        let variates = [0.1; 251];
        let mut src = VariateSource::new(&variates);

        let err = src.begin(252, 1.0 / 252.0).unwrap_err();
        assert_eq!(
            err,
            SdeError::InsufficientVariates {
                required: 252,
                provided: 251,
            }
        );
    }

    #[test]
    fn test_excess_variates_ignored() {
        let variates = [1.0; 10];
        let mut src = VariateSource::new(&variates);
        assert!(src.begin(5, 1.0).is_ok());
    }

    #[test]
    fn test_zero_dt_degenerates_increments() {
        let variates = [3.0, -4.0];
        let mut src = VariateSource::new(&variates);
        src.begin(2, 0.0).unwrap();
        assert_eq!(src.next_increment(), 0.0);
        assert_eq!(src.next_increment(), 0.0);

        let mut internal = NormalSource::from_seed(7);
        internal.begin(2, 0.0).unwrap();
        assert_eq!(internal.next_increment(), 0.0);
    }
}
