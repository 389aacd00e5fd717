use std::collections::HashSet;

use super::{types::ParkingConfig, ConfigError};

/// Validate configuration
/// Currently validates:
/// - At least one lot, each with capacity > 0
/// - Explicit lot ids are non-blank and unique
/// - Attendant name is not blank
/// - Fee rate is finite and not negative
pub fn validate_config(config: &ParkingConfig) -> Result<(), ConfigError> {
    if config.attendant.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "attendant.name cannot be blank".to_string(),
        ));
    }

    if config.lots.is_empty() {
        return Err(ConfigError::ValidationError(
            "at least one lot must be configured".to_string(),
        ));
    }

    let mut ids = HashSet::new();
    for (index, lot) in config.lots.iter().enumerate() {
        if lot.capacity == 0 {
            return Err(ConfigError::ValidationError(format!(
                "lots[{}].capacity must be greater than 0",
                index
            )));
        }
        if let Some(id) = &lot.id {
            if id.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "lots[{}].id cannot be blank",
                    index
                )));
            }
            if !ids.insert(id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate lot id: {}",
                    id
                )));
            }
        }
    }

    if !config.fee.rate.is_finite() || config.fee.rate < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "fee.rate must be a non-negative number, got {}",
            config.fee.rate
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LotConfig;

    fn valid() -> ParkingConfig {
        ParkingConfig::with_capacities("Budi", &[2, 3])
    }

    fn assert_invalid(config: &ParkingConfig) {
        let err = validate_config(config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid()).is_ok());
    }

    #[test]
    fn test_validate_no_lots_fails() {
        let mut config = valid();
        config.lots.clear();
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_zero_capacity_fails() {
        let mut config = valid();
        config.lots[1].capacity = 0;
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_duplicate_ids_fails() {
        let mut config = valid();
        config.lots = vec![
            LotConfig {
                id: Some("a".to_string()),
                capacity: 1,
            },
            LotConfig {
                id: Some("a".to_string()),
                capacity: 2,
            },
        ];
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_blank_name_fails() {
        let mut config = valid();
        config.attendant.name = "  ".to_string();
        assert_invalid(&config);
    }

    #[test]
    fn test_validate_bad_rate_fails() {
        let mut config = valid();
        config.fee.rate = -1.0;
        assert_invalid(&config);

        config.fee.rate = f64::NAN;
        assert_invalid(&config);
    }
}
