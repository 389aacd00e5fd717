use std::fmt;
use std::time::Duration;

/// Maps a parking duration to a monetary amount.
pub trait FeeStrategy: Send + Sync + fmt::Debug {
    /// Short name of this strategy, used in logs and status output.
    fn name(&self) -> &'static str;

    /// Fee owed for parking `duration`.
    fn calculate_fee(&self, duration: Duration) -> f64;
}
