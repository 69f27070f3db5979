use tracing::warn;

/// Running total of completed-order amounts.
///
/// Process-lifetime only: the figure is not persisted and resets to zero on
/// restart. Amounts are in minor currency units but carried as `f64`, since
/// the threshold discount can produce fractional totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueLedger {
    total: f64,
}

impl RevenueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one completed order's discounted total.
    ///
    /// The amount must be non-negative; a negative credit is ignored so the
    /// total never decreases.
    pub fn credit(&mut self, amount: f64) {
        if amount < 0.0 {
            warn!(amount, "ignoring negative revenue credit");
            return;
        }
        self.total += amount;
    }

    /// Accumulated revenue since process start.
    pub fn total(&self) -> f64 {
        self.total
    }
}
