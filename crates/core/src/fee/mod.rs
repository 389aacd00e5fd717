//! Fee strategies.
//!
//! A lot delegates fee math to a [`FeeStrategy`]. Strategies are shared as
//! `Arc<dyn FeeStrategy>` so the same instance can be applied to every lot an
//! attendant manages.

mod flat;
mod hourly;
mod traits;

pub use flat::FlatFeeStrategy;
pub use hourly::{HourlyFeeStrategy, HourlyRounding};
pub use traits::FeeStrategy;

use std::sync::Arc;

use crate::config::{FeeConfig, FeeStrategyKind};

/// Hourly rate applied to newly created lots.
pub const DEFAULT_HOURLY_RATE: f64 = 10.0;

/// Build the fee strategy named by the configuration.
pub fn create_fee_strategy(config: &FeeConfig) -> Arc<dyn FeeStrategy> {
    match config.strategy {
        FeeStrategyKind::Hourly => {
            Arc::new(HourlyFeeStrategy::new(config.rate).with_rounding(config.rounding))
        }
        FeeStrategyKind::Flat => Arc::new(FlatFeeStrategy::new(config.rate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_create_hourly_from_config() {
        let config = FeeConfig {
            strategy: FeeStrategyKind::Hourly,
            rate: 4.0,
            rounding: HourlyRounding::Ceil,
        };
        let strategy = create_fee_strategy(&config);
        assert_eq!(strategy.name(), "hourly");
        assert_eq!(strategy.calculate_fee(Duration::from_secs(90 * 60)), 8.0);
    }

    #[test]
    fn test_create_flat_from_config() {
        let config = FeeConfig {
            strategy: FeeStrategyKind::Flat,
            rate: 12.5,
            rounding: HourlyRounding::default(),
        };
        let strategy = create_fee_strategy(&config);
        assert_eq!(strategy.name(), "flat");
        assert_eq!(strategy.calculate_fee(Duration::from_secs(10 * 3600)), 12.5);
    }

    #[test]
    fn test_default_config_matches_default_lot_fee() {
        let strategy = create_fee_strategy(&FeeConfig::default());
        assert_eq!(strategy.name(), "hourly");
        assert_eq!(
            strategy.calculate_fee(Duration::from_secs(60)),
            DEFAULT_HOURLY_RATE
        );
    }
}
