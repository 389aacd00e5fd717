//! Vehicle value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle, identified by its license plate.
///
/// The plate is the uniqueness key across lots. Blank plates are
/// representable so that lots can reject them with a proper error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: String,
}

impl Vehicle {
    pub fn new(license_plate: impl Into<String>) -> Self {
        Self {
            license_plate: license_plate.into(),
        }
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    /// Whether the plate is empty or whitespace only.
    pub fn has_blank_plate(&self) -> bool {
        self.license_plate.trim().is_empty()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.license_plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_equality_by_plate() {
        assert_eq!(Vehicle::new("AAA111"), Vehicle::new("AAA111".to_string()));
        assert_ne!(Vehicle::new("AAA111"), Vehicle::new("BBB222"));
    }

    #[test]
    fn test_blank_plate() {
        assert!(Vehicle::new("").has_blank_plate());
        assert!(Vehicle::new("   ").has_blank_plate());
        assert!(!Vehicle::new("B 1234 XY").has_blank_plate());
    }
}
