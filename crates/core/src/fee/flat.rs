use std::time::Duration;

use super::FeeStrategy;

/// Charges the same amount regardless of duration.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatFeeStrategy {
    flat_fee: f64,
}

impl FlatFeeStrategy {
    pub fn new(flat_fee: f64) -> Self {
        Self { flat_fee }
    }

    pub fn flat_fee(&self) -> f64 {
        self.flat_fee
    }
}

impl FeeStrategy for FlatFeeStrategy {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn calculate_fee(&self, _duration: Duration) -> f64 {
        self.flat_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_fee_ignores_duration() {
        let strategy = FlatFeeStrategy::new(15.0);
        assert_eq!(strategy.calculate_fee(Duration::ZERO), 15.0);
        assert_eq!(strategy.calculate_fee(Duration::from_secs(60)), 15.0);
        assert_eq!(strategy.calculate_fee(Duration::from_secs(3600 * 30)), 15.0);
    }

    #[test]
    fn test_flat_fee_name() {
        assert_eq!(FlatFeeStrategy::new(1.0).name(), "flat");
    }
}
