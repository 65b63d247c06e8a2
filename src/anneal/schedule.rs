//! Exponential cooling schedule.

use super::config::CoolingParameters;

/// Closed-form temperature curve `T(t) = T_max * exp(-t / tau)`.
///
/// Stateless beyond its parameters: the same `t` always maps to the
/// same temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSchedule {
    params: CoolingParameters,
}

impl CoolingSchedule {
    pub fn new(params: CoolingParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CoolingParameters {
        &self.params
    }

    /// Temperature at iteration `t` (the first iteration is `t = 1`).
    pub fn temperature_at(&self, t: u64) -> f64 {
        temperature_at(t, self.params.max_temperature, self.params.tau)
    }

    /// Whether `temperature` has reached the termination floor.
    pub fn is_frozen(&self, temperature: f64) -> bool {
        temperature <= self.params.min_temperature
    }

    /// Number of iterations a run performs: the first `t` with
    /// `T(t) <= T_min`, i.e. `ceil(tau * ln(T_max / T_min))`.
    pub fn expected_iterations(&self) -> u64 {
        let p = &self.params;
        (p.tau * (p.max_temperature / p.min_temperature).ln()).ceil() as u64
    }
}

/// `T_max * exp(-t / tau)`.
pub fn temperature_at(t: u64, max_temperature: f64, tau: f64) -> f64 {
    max_temperature * (-(t as f64) / tau).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_curve() {
        let schedule = CoolingSchedule::new(CoolingParameters::new(100.0, 1e-3, 1.0));
        assert!((schedule.temperature_at(0) - 1.0).abs() < 1e-15);
        assert!((schedule.temperature_at(100) - (-1.0f64).exp()).abs() < 1e-15);
        assert!(schedule.temperature_at(2) < schedule.temperature_at(1));
    }

    #[test]
    fn test_expected_iterations() {
        // 100 * ln(1000) = 690.77...
        let schedule = CoolingSchedule::new(CoolingParameters::new(100.0, 1e-3, 1.0));
        assert_eq!(schedule.expected_iterations(), 691);
        assert!(schedule.is_frozen(schedule.temperature_at(691)));
        assert!(!schedule.is_frozen(schedule.temperature_at(690)));
    }

    #[test]
    fn test_free_function_matches() {
        assert_eq!(
            temperature_at(37, 10.0, 1e4),
            CoolingSchedule::new(CoolingParameters::default()).temperature_at(37)
        );
    }
}
