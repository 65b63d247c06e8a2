//! Annealing configuration.

use crate::error::{AnnealError, Result};

/// Parameters of the exponential cooling curve `T(t) = T_max * exp(-t / tau)`.
///
/// Valid when `T_max > T_min > 0` and `tau > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoolingParameters {
    /// Time constant. Larger values cool more slowly and run longer.
    pub tau: f64,

    /// Termination threshold. The run stops once the temperature reaches it.
    pub min_temperature: f64,

    /// Initial temperature.
    pub max_temperature: f64,
}

impl CoolingParameters {
    pub fn new(tau: f64, min_temperature: f64, max_temperature: f64) -> Self {
        Self {
            tau,
            min_temperature,
            max_temperature,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// [`AnnealError::InvalidParameters`] naming the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let values = [self.tau, self.min_temperature, self.max_temperature];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(AnnealError::invalid("cooling parameters must be finite"));
        }
        if self.tau <= 0.0 {
            return Err(AnnealError::invalid(format!(
                "tau must be positive, got {}",
                self.tau
            )));
        }
        if self.min_temperature <= 0.0 {
            return Err(AnnealError::invalid(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.max_temperature <= self.min_temperature {
            return Err(AnnealError::invalid(format!(
                "max_temperature ({}) must exceed min_temperature ({})",
                self.max_temperature, self.min_temperature
            )));
        }
        Ok(())
    }
}

impl Default for CoolingParameters {
    fn default() -> Self {
        Self::new(1e4, 1e-3, 10.0)
    }
}

/// Configuration for an [`Annealer`](super::Annealer) run.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_tau(100.0)
///     .with_min_temperature(1e-3)
///     .with_max_temperature(1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Cooling curve and termination floor.
    pub cooling: CoolingParameters,

    /// Random seed for reproducibility. `None` draws one per run.
    pub seed: Option<u64>,

    /// Iterations between progress log lines.
    pub progress_interval: u64,

    /// Iterations between samples of the best distance history.
    pub history_interval: u64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            cooling: CoolingParameters::default(),
            seed: None,
            progress_interval: 1000,
            history_interval: 100,
        }
    }
}

impl AnnealConfig {
    pub fn with_cooling(mut self, cooling: CoolingParameters) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_tau(mut self, tau: f64) -> Self {
        self.cooling.tau = tau;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.cooling.min_temperature = t;
        self
    }

    pub fn with_max_temperature(mut self, t: f64) -> Self {
        self.cooling.max_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_progress_interval(mut self, n: u64) -> Self {
        self.progress_interval = n;
        self
    }

    pub fn with_history_interval(mut self, n: u64) -> Self {
        self.history_interval = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.cooling.validate()?;
        if self.progress_interval == 0 {
            return Err(AnnealError::invalid("progress_interval must be positive"));
        }
        if self.history_interval == 0 {
            return Err(AnnealError::invalid("history_interval must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.cooling.tau - 1e4).abs() < 1e-10);
        assert!((config.cooling.min_temperature - 1e-3).abs() < 1e-15);
        assert!((config.cooling.max_temperature - 10.0).abs() < 1e-10);
        assert_eq!(config.seed, None);
        assert_eq!(config.progress_interval, 1000);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_tau() {
        let config = AnnealConfig::default().with_tau(0.0);
        assert!(matches!(
            config.validate(),
            Err(AnnealError::InvalidParameters { .. })
        ));
        assert!(AnnealConfig::default().with_tau(-5.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_min_temperature() {
        let config = AnnealConfig::default().with_min_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_max_le_min() {
        let config = AnnealConfig::default()
            .with_min_temperature(1.0)
            .with_max_temperature(1.0);
        assert!(config.validate().is_err());

        let config = AnnealConfig::default()
            .with_min_temperature(10.0)
            .with_max_temperature(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite() {
        let config = AnnealConfig::default().with_max_temperature(f64::INFINITY);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_tau(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_intervals() {
        assert!(AnnealConfig::default()
            .with_progress_interval(0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_history_interval(0)
            .validate()
            .is_err());
    }
}
