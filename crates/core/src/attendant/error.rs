//! Error types for attendant operations.

use thiserror::Error;

use crate::error::ErrorCategory;
use crate::lot::LotError;

/// Errors returned by [`ParkingAttendant`](super::ParkingAttendant).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendantError {
    /// The vehicle already occupies a space in one of the managed lots.
    #[error("Car {plate} is already parked")]
    CarAlreadyParked { plate: String },

    /// A lot with the same id is already managed.
    #[error("Parking lot {lot_id} is already assigned")]
    DuplicateLot { lot_id: String },

    /// No managed lot has a free space.
    #[error("All parking lots are full")]
    AllLotsFull,

    /// No managed lot currently holds the ticket. Never-issued and already
    /// used tickets are not told apart at this level.
    #[error("Ticket {ticket} not found in any parking lot")]
    TicketNotFound { ticket: String },

    /// The chosen lot rejected the request.
    #[error(transparent)]
    Lot(#[from] LotError),
}

impl AttendantError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CarAlreadyParked { .. }
            | Self::DuplicateLot { .. }
            | Self::TicketNotFound { .. } => ErrorCategory::State,
            Self::AllLotsFull => ErrorCategory::Capacity,
            Self::Lot(e) => e.category(),
        }
    }

    /// Whether the same request may succeed later without changing it.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Capacity
    }

    /// Stable snake_case name, used as a metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CarAlreadyParked { .. } => "car_already_parked",
            Self::DuplicateLot { .. } => "duplicate_lot",
            Self::AllLotsFull => "all_lots_full",
            Self::TicketNotFound { .. } => "ticket_not_found",
            Self::Lot(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lot_errors_keep_their_category() {
        let err = AttendantError::from(LotError::EmptyLicensePlate);
        assert_eq!(err.category(), ErrorCategory::InputValidation);
        assert_eq!(err.kind(), "empty_license_plate");
        assert_eq!(err.to_string(), "Cannot park without license plate");
    }

    #[test]
    fn test_duplicate_lot() {
        let err = AttendantError::DuplicateLot {
            lot_id: "lot-1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::State);
        assert_eq!(err.kind(), "duplicate_lot");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_all_lots_full_is_retryable() {
        assert!(AttendantError::AllLotsFull.is_retryable());
        assert!(!AttendantError::TicketNotFound {
            ticket: "abc".to_string()
        }
        .is_retryable());
    }
}
