//! Parking attendant.
//!
//! The attendant owns the lots, routes incoming vehicles with its
//! [`LotSelectionStrategy`](crate::selection::LotSelectionStrategy) and finds
//! the owning lot for returned tickets.

mod availability;
mod error;
mod parking_attendant;
mod shared;

pub use availability::AvailabilityTracker;
pub use error::AttendantError;
pub use parking_attendant::ParkingAttendant;
pub use shared::SharedAttendant;

use std::sync::Arc;
use tracing::info;

use crate::config::ParkingConfig;
use crate::fee::create_fee_strategy;
use crate::lot::ParkingLot;
use crate::metrics::MetricsObserver;
use crate::observer::TracingObserver;
use crate::selection::create_selection_strategy;

/// Build an attendant from configuration.
///
/// Every lot gets the configured fee strategy and three subscribers, in
/// order: the attendant's availability cache, a [`TracingObserver`] and a
/// [`MetricsObserver`].
pub fn build_attendant(config: &ParkingConfig) -> ParkingAttendant {
    let fee_strategy = create_fee_strategy(&config.fee);
    let tracing_observer = Arc::new(TracingObserver::new());
    let metrics_observer = Arc::new(MetricsObserver);

    let lots: Vec<ParkingLot> = config
        .lots
        .iter()
        .map(|lot_config| {
            let mut lot = match &lot_config.id {
                Some(id) => ParkingLot::with_id(id.clone(), lot_config.capacity),
                None => ParkingLot::new(lot_config.capacity),
            };
            lot.change_fee_strategy(Arc::clone(&fee_strategy));
            lot
        })
        .collect();

    let mut attendant = ParkingAttendant::new(config.attendant.name.clone(), lots);
    attendant.subscribe_to_all_lots();
    for lot in attendant.parking_lots_mut() {
        lot.add_observer(tracing_observer.clone());
        lot.add_observer(metrics_observer.clone());
    }
    attendant.change_parking_strategy(create_selection_strategy(&config.selection));

    info!(
        attendant = %attendant.name(),
        lots = attendant.parking_lots().len(),
        fee = fee_strategy.name(),
        strategy = attendant.strategy_name(),
        "Parking attendant ready"
    );

    attendant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeeStrategyKind, LotConfig, SelectionStrategyKind};
    use crate::vehicle::Vehicle;

    #[test]
    fn test_build_attendant_from_config() {
        let mut config = ParkingConfig::with_capacities("Budi", &[2, 3]);
        config.lots[0].id = Some("north".to_string());
        config.fee.strategy = FeeStrategyKind::Flat;
        config.fee.rate = 4.0;
        config.selection.strategy = SelectionStrategyKind::MostCapacity;

        let mut attendant = build_attendant(&config);

        assert_eq!(attendant.name(), "Budi");
        assert_eq!(attendant.parking_lots()[0].id(), "north");
        assert_eq!(attendant.parking_lots()[1].id().len(), 8);
        assert_eq!(attendant.strategy_name(), "most_capacity");
        assert!(attendant
            .parking_lots()
            .iter()
            .all(|lot| lot.fee_strategy_name() == "flat" && lot.observer_count() == 3));

        let ticket = attendant.park_car(&Vehicle::new("AAA111")).unwrap();
        assert_eq!(ticket.lot_id, attendant.parking_lots()[1].id());
    }

    #[test]
    fn test_built_attendant_tracks_availability() {
        let config = ParkingConfig {
            lots: vec![LotConfig {
                id: Some("only".to_string()),
                capacity: 1,
            }],
            ..ParkingConfig::with_capacities("Budi", &[])
        };
        let mut attendant = build_attendant(&config);

        let ticket = attendant.park_car(&Vehicle::new("AAA111")).unwrap();
        assert!(attendant.available_lots().is_empty());
        attendant.unpark_car(&ticket).unwrap();
        assert_eq!(attendant.available_lots(), vec!["only".to_string()]);
    }
}
