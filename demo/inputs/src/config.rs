//! Simulation parameters.

use crate::error::GeneratorError;

/// Immutable parameters of a GBM simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmConfig {
    /// Initial asset price (S0)
    pub initial_price: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Annualised expected return (μ)
    pub expected_return: f64,
    /// Horizon in years (T)
    pub time_horizon: f64,
    /// Number of paths (N)
    pub num_simulations: usize,
    /// Time steps per path
    pub num_steps: usize,
}

impl Default for GbmConfig {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            volatility: 0.20,
            expected_return: 0.05,
            time_horizon: 1.0,
            num_simulations: 1_000_000,
            num_steps: 252,
        }
    }
}

impl GbmConfig {
    /// Validate the configuration, reporting every violation at once.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let mut errors = Vec::new();

        if !(self.initial_price.is_finite() && self.initial_price > 0.0) {
            errors.push(format!(
                "initial_price must be positive, got {}",
                self.initial_price
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            errors.push(format!(
                "volatility cannot be negative, got {}",
                self.volatility
            ));
        }
        if !self.expected_return.is_finite() {
            errors.push("expected_return must be finite".to_string());
        }
        if !(self.time_horizon.is_finite() && self.time_horizon > 0.0) {
            errors.push(format!(
                "time_horizon must be positive, got {}",
                self.time_horizon
            ));
        }
        if self.num_simulations == 0 {
            errors.push("num_simulations must be greater than 0".to_string());
        }
        if self.num_steps == 0 {
            errors.push("num_steps must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(GeneratorError::InvalidConfig(errors))
        }
    }

    /// Step size in years.
    pub fn dt(&self) -> f64 {
        self.time_horizon / self.num_steps as f64
    }

    /// Analytical mean of the terminal price, `S0·exp(μT)`.
    pub fn expected_terminal_mean(&self) -> f64 {
        self.initial_price * (self.expected_return * self.time_horizon).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GbmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_simulations, 1_000_000);
        assert_eq!(config.num_steps, 252);
        assert!((config.dt() - 1.0 / 252.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_volatility_allowed() {
        let config = GbmConfig {
            volatility: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = GbmConfig {
            initial_price: 0.0,
            volatility: -0.1,
            expected_return: f64::NAN,
            time_horizon: -1.0,
            num_simulations: 0,
            num_steps: 0,
        };
        match config.validate() {
            Err(GeneratorError::InvalidConfig(errors)) => assert_eq!(errors.len(), 6),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
