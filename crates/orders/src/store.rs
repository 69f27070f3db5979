//! Persistence seam for the single active order.

use cafepos_core::PosResult;

use crate::order::Order;

/// Durable store holding at most one order record.
///
/// `save` replaces the record whole; there is no append, no history, and a
/// single writer is assumed. Missing records are a valid state, not an
/// error: `load` reports them as `None` and `delete` treats them as done.
pub trait OrderStore {
    /// Overwrite the record with the given order.
    fn save(&mut self, order: &Order) -> PosResult<()>;

    /// Load the record, or `None` when none has been written.
    ///
    /// Content that exists but does not parse is `PosError::CorruptRecord`.
    fn load(&self) -> PosResult<Option<Order>>;

    /// Remove the record; a missing record is a no-op.
    fn delete(&mut self) -> PosResult<()>;
}
