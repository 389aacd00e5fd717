use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::FeeStrategy;

const SECS_PER_HOUR: f64 = 3600.0;

/// How durations beyond the first hour are billed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourlyRounding {
    /// Bill the exact fractional hour count (2.5h costs 2.5 × rate).
    #[default]
    Fractional,
    /// Round every started hour up (2.5h costs 3 × rate).
    Ceil,
}

/// Charges per hour parked. Anything under one hour costs one full hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyFeeStrategy {
    rate_per_hour: f64,
    rounding: HourlyRounding,
}

impl HourlyFeeStrategy {
    pub fn new(rate_per_hour: f64) -> Self {
        Self {
            rate_per_hour,
            rounding: HourlyRounding::default(),
        }
    }

    pub fn with_rounding(mut self, rounding: HourlyRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn rate_per_hour(&self) -> f64 {
        self.rate_per_hour
    }

    pub fn rounding(&self) -> HourlyRounding {
        self.rounding
    }
}

impl FeeStrategy for HourlyFeeStrategy {
    fn name(&self) -> &'static str {
        "hourly"
    }

    fn calculate_fee(&self, duration: Duration) -> f64 {
        let hours = duration.as_secs_f64() / SECS_PER_HOUR;
        if hours < 1.0 {
            return self.rate_per_hour;
        }

        match self.rounding {
            HourlyRounding::Fractional => hours * self.rate_per_hour,
            HourlyRounding::Ceil => hours.ceil() * self.rate_per_hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    #[test]
    fn test_under_one_hour_costs_one_hour() {
        let strategy = HourlyFeeStrategy::new(10.0);
        assert_eq!(strategy.calculate_fee(Duration::ZERO), 10.0);
        assert_eq!(strategy.calculate_fee(minutes(1)), 10.0);
        assert_eq!(strategy.calculate_fee(minutes(59)), 10.0);
    }

    #[test]
    fn test_whole_hours() {
        let strategy = HourlyFeeStrategy::new(10.0);
        assert_eq!(strategy.calculate_fee(minutes(60)), 10.0);
        assert_eq!(strategy.calculate_fee(minutes(180)), 30.0);
    }

    #[test]
    fn test_fractional_hours_by_default() {
        let strategy = HourlyFeeStrategy::new(10.0);
        assert_eq!(strategy.rounding(), HourlyRounding::Fractional);
        assert_eq!(strategy.calculate_fee(minutes(150)), 25.0);
    }

    #[test]
    fn test_ceil_rounding() {
        let strategy = HourlyFeeStrategy::new(10.0).with_rounding(HourlyRounding::Ceil);
        assert_eq!(strategy.calculate_fee(minutes(30)), 10.0);
        assert_eq!(strategy.calculate_fee(minutes(61)), 20.0);
        assert_eq!(strategy.calculate_fee(minutes(150)), 30.0);
        assert_eq!(strategy.calculate_fee(minutes(180)), 30.0);
    }

    #[test]
    fn test_rounding_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            rounding: HourlyRounding,
        }
        let w: Wrapper = toml::from_str(r#"rounding = "ceil""#).unwrap();
        assert_eq!(w.rounding, HourlyRounding::Ceil);
    }
}
