//! Engine configuration, validation, and error types.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MdpConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Discount factor outside `[0, 1]` or not finite.
    InvalidGamma {
        /// The invalid value.
        value: f64,
    },
    /// Error rate outside `[0, 1]` or not finite.
    InvalidErrorRate {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGamma { value } => {
                write!(f, "gamma must be within [0, 1], got {value}")
            }
            Self::InvalidErrorRate { value } => {
                write!(f, "error rate must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── MdpConfig ──────────────────────────────────────────────────────

/// Construction-time parameters of an [`Mdp`](crate::Mdp).
#[derive(Clone, Debug, PartialEq)]
pub struct MdpConfig {
    /// Discount factor. Default: 1.0.
    pub gamma: f64,
    /// Probability mass spread uniformly over all four directions on
    /// every move. Default: 0.0 (deterministic execution).
    pub error_rate: f64,
    /// Seed for the default sampler. Default: 0.
    pub seed: u64,
}

impl Default for MdpConfig {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            error_rate: 0.0,
            seed: 0,
        }
    }
}

impl MdpConfig {
    /// Set the discount factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the error rate.
    pub fn with_error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }

    /// Set the sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !unit_interval(self.gamma) {
            return Err(ConfigError::InvalidGamma { value: self.gamma });
        }
        if !unit_interval(self.error_rate) {
            return Err(ConfigError::InvalidErrorRate {
                value: self.error_rate,
            });
        }
        Ok(())
    }
}

fn unit_interval(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}
