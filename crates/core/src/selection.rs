//! Lot-selection strategies.
//!
//! A strategy picks the index of one lot from the attendant's collection.
//! Only [`FirstAvailableStrategy`] looks at fullness; the others may pick a
//! full lot, in which case the subsequent park fails with `LotFull`. The
//! choice is a hint, not a reservation.

use std::fmt;
use std::sync::Arc;

use crate::config::{SelectionConfig, SelectionStrategyKind};
use crate::lot::ParkingLot;

/// Chooses one lot for an incoming vehicle.
pub trait LotSelectionStrategy: Send + Sync + fmt::Debug {
    /// Short name of this strategy, used in logs and status output.
    fn name(&self) -> &'static str;

    /// Index into `lots` of the chosen lot, or `None` if there is nothing to choose.
    fn choose(&self, lots: &[ParkingLot]) -> Option<usize>;
}

/// First lot, in declaration order, with a free space.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailableStrategy;

impl LotSelectionStrategy for FirstAvailableStrategy {
    fn name(&self) -> &'static str {
        "first_available"
    }

    fn choose(&self, lots: &[ParkingLot]) -> Option<usize> {
        lots.iter().position(|lot| !lot.is_full())
    }
}

/// Lot with the greatest total capacity; ties go to the earliest lot.
#[derive(Debug, Default, Clone, Copy)]
pub struct MostCapacityStrategy;

impl LotSelectionStrategy for MostCapacityStrategy {
    fn name(&self) -> &'static str {
        "most_capacity"
    }

    fn choose(&self, lots: &[ParkingLot]) -> Option<usize> {
        first_max_by_key(lots, ParkingLot::capacity)
    }
}

/// Lot with the most free spaces; ties go to the earliest lot.
#[derive(Debug, Default, Clone, Copy)]
pub struct MostFreeSpaceStrategy;

impl LotSelectionStrategy for MostFreeSpaceStrategy {
    fn name(&self) -> &'static str {
        "most_free_space"
    }

    fn choose(&self, lots: &[ParkingLot]) -> Option<usize> {
        first_max_by_key(lots, ParkingLot::available)
    }
}

// `Iterator::max_by_key` keeps the last maximum; we need the first.
fn first_max_by_key(lots: &[ParkingLot], key: impl Fn(&ParkingLot) -> usize) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, lot) in lots.iter().enumerate() {
        let value = key(lot);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Build the strategy named by the configuration.
pub fn create_selection_strategy(config: &SelectionConfig) -> Arc<dyn LotSelectionStrategy> {
    match config.strategy {
        SelectionStrategyKind::FirstAvailable => Arc::new(FirstAvailableStrategy),
        SelectionStrategyKind::MostCapacity => Arc::new(MostCapacityStrategy),
        SelectionStrategyKind::MostFreeSpace => Arc::new(MostFreeSpaceStrategy),
    }
}
