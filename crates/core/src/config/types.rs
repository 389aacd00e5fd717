use serde::{Deserialize, Serialize};

use crate::fee::{HourlyRounding, DEFAULT_HOURLY_RATE};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParkingConfig {
    #[serde(default)]
    pub attendant: AttendantConfig,
    pub lots: Vec<LotConfig>,
    #[serde(default)]
    pub fee: FeeConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

/// Attendant configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttendantConfig {
    #[serde(default = "default_attendant_name")]
    pub name: String,
}

impl Default for AttendantConfig {
    fn default() -> Self {
        Self {
            name: default_attendant_name(),
        }
    }
}

fn default_attendant_name() -> String {
    "attendant".to_string()
}

/// A single parking lot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LotConfig {
    /// Lot id (generated when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub capacity: usize,
}

/// Fee configuration, applied to every lot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeeConfig {
    #[serde(default)]
    pub strategy: FeeStrategyKind,
    /// Hourly rate, or the flat amount for `flat`
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Only used by the hourly strategy
    #[serde(default)]
    pub rounding: HourlyRounding,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            strategy: FeeStrategyKind::default(),
            rate: default_rate(),
            rounding: HourlyRounding::default(),
        }
    }
}

fn default_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeeStrategyKind {
    #[default]
    Hourly,
    Flat,
}

/// Lot-selection configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub strategy: SelectionStrategyKind,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategyKind {
    #[default]
    FirstAvailable,
    MostCapacity,
    MostFreeSpace,
}

impl ParkingConfig {
    /// Config with one lot per capacity and defaults everywhere else.
    pub fn with_capacities(name: impl Into<String>, capacities: &[usize]) -> Self {
        Self {
            attendant: AttendantConfig { name: name.into() },
            lots: capacities
                .iter()
                .map(|&capacity| LotConfig { id: None, capacity })
                .collect(),
            fee: FeeConfig::default(),
            selection: SelectionConfig::default(),
        }
    }
}
