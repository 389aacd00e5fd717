//! Parking facility core.
//!
//! Lots with finite capacity, an attendant that routes vehicles to lots under
//! a selectable strategy, single-use tickets, and synchronous observer
//! notifications on every occupancy change.

pub mod attendant;
pub mod config;
pub mod error;
pub mod fee;
pub mod id;
pub mod lot;
pub mod metrics;
pub mod observer;
pub mod selection;
pub mod testing;
pub mod ticket;
pub mod vehicle;

pub use attendant::{
    build_attendant, AttendantError, AvailabilityTracker, ParkingAttendant, SharedAttendant,
};
pub use config::{
    load_config, load_config_from_str, validate_config, AttendantConfig, ConfigError, FeeConfig,
    FeeStrategyKind, LotConfig, ParkingConfig, SelectionConfig, SelectionStrategyKind,
};
pub use error::ErrorCategory;
pub use fee::{
    create_fee_strategy, FeeStrategy, FlatFeeStrategy, HourlyFeeStrategy, HourlyRounding,
};
pub use lot::{LotError, ParkingLot, Receipt, TicketRejection};
pub use metrics::MetricsObserver;
pub use observer::{LotObserver, LotStatus, TracingObserver};
pub use selection::{
    create_selection_strategy, FirstAvailableStrategy, LotSelectionStrategy,
    MostCapacityStrategy, MostFreeSpaceStrategy,
};
pub use ticket::Ticket;
pub use vehicle::Vehicle;
