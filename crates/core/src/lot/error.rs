//! Error types for lot operations.

use std::fmt;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Why a ticket was not accepted by a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketRejection {
    /// The lot never issued this ticket number.
    NeverIssued,
    /// The ticket was already used to retrieve a vehicle.
    AlreadyUsed,
}

impl fmt::Display for TicketRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketRejection::NeverIssued => write!(f, "never issued"),
            TicketRejection::AlreadyUsed => write!(f, "already used"),
        }
    }
}

/// Errors returned by [`ParkingLot`](super::ParkingLot) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// The vehicle has no license plate.
    #[error("Cannot park without license plate")]
    EmptyLicensePlate,

    /// Every space in the lot is occupied.
    #[error("No available position in lot {lot_id} (capacity {capacity})")]
    LotFull { lot_id: String, capacity: usize },

    /// The vehicle already occupies a space in this lot.
    #[error("Car {plate} is already parked in lot {lot_id}")]
    DuplicateVehicle { plate: String, lot_id: String },

    /// The ticket has no number.
    #[error("Cannot unpark without ticket number")]
    EmptyTicket,

    /// The ticket does not match an occupied space.
    #[error("Unrecognized parking ticket {ticket}: {reason}")]
    UnrecognizedTicket {
        ticket: String,
        reason: TicketRejection,
    },
}

impl LotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyLicensePlate | Self::EmptyTicket => ErrorCategory::InputValidation,
            Self::LotFull { .. } => ErrorCategory::Capacity,
            Self::DuplicateVehicle { .. } | Self::UnrecognizedTicket { .. } => {
                ErrorCategory::State
            }
        }
    }

    /// Whether the same request may succeed later without changing it.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Capacity
    }

    /// Stable snake_case name, used as a metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyLicensePlate => "empty_license_plate",
            Self::LotFull { .. } => "lot_full",
            Self::DuplicateVehicle { .. } => "duplicate_vehicle",
            Self::EmptyTicket => "empty_ticket",
            Self::UnrecognizedTicket { .. } => "unrecognized_ticket",
        }
    }
}
