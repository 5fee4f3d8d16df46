// src/error.rs
use std::fmt;

/// Custom error types for the sde-path library
#[derive(Debug, Clone, PartialEq)]
pub enum SdeError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// External variate buffer too short for the requested step count
    InsufficientVariates { required: usize, provided: usize },

    /// A simulated state left the finite domain (NaN or infinity)
    NonFiniteState { step: usize, t: f64, value: f64 },

    /// Invalid ensemble configuration
    InvalidConfiguration { field: String, reason: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SdeError::InsufficientVariates { required, provided } => {
                write!(
                    f,
                    "Variate buffer too short: {} steps requested but only {} variates provided",
                    required, provided
                )
            }
            SdeError::NonFiniteState { step, t, value } => {
                write!(
                    f,
                    "State became non-finite ({}) at step {} (t = {}); check the drift/diffusion coefficients",
                    value, step, t
                )
            }
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for sde-path operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value <= 0.0 {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> SdeResult<()> {
        if steps == 0 {
            Err(SdeError::InvalidParameters {
                parameter: "n_steps".to_string(),
                value: 0.0,
                constraint: "must be at least 1".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SdeResult<()> {
        if paths == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
