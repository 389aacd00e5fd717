//! Prometheus metrics for the parking core.
//!
//! This module provides metrics for:
//! - Park and unpark requests handled by attendants, by result
//! - Fees billed at checkout
//! - Free spaces per lot (via [`MetricsObserver`])

use once_cell::sync::Lazy;
use prometheus::{Counter, IntCounterVec, IntGaugeVec, Opts};

use crate::observer::{LotObserver, LotStatus};

// =============================================================================
// Attendant Metrics
// =============================================================================

/// Park requests total by result.
pub static PARK_OPERATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("parking_park_operations_total", "Total park requests"),
        &["result"], // "success" or an error kind, e.g. "all_lots_full"
    )
    .unwrap()
});

/// Unpark requests total by result.
pub static UNPARK_OPERATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("parking_unpark_operations_total", "Total unpark requests"),
        &["result"],
    )
    .unwrap()
});

/// Sum of fees billed at checkout.
pub static FEES_COLLECTED: Lazy<Counter> = Lazy::new(|| {
    Counter::new("parking_fees_collected_total", "Total fees billed at checkout").unwrap()
});

// =============================================================================
// Lot Metrics
// =============================================================================

/// Free spaces per lot, as last reported to a [`MetricsObserver`].
pub static LOT_AVAILABLE_SPACES: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new(
            "parking_lot_available_spaces",
            "Free spaces in a parking lot",
        ),
        &["lot_id"],
    )
    .unwrap()
});

/// Observer that mirrors lot status changes into [`LOT_AVAILABLE_SPACES`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsObserver;

impl LotObserver for MetricsObserver {
    fn on_lot_status_changed(&self, status: &LotStatus) {
        LOT_AVAILABLE_SPACES
            .with_label_values(&[status.lot_id.as_str()])
            .set(i64::try_from(status.available).unwrap_or(i64::MAX));
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Label value for the outcome of an attendant request.
pub(crate) fn result_label<T>(result: &Result<T, crate::attendant::AttendantError>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    }
}

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(PARK_OPERATIONS.clone()),
        Box::new(UNPARK_OPERATIONS.clone()),
        Box::new(FEES_COLLECTED.clone()),
        Box::new(LOT_AVAILABLE_SPACES.clone()),
    ]
}
