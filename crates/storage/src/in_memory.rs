use cafepos_core::PosResult;
use cafepos_orders::{Order, OrderStore};

/// In-memory order store.
///
/// Intended for tests and ephemeral sessions: the same contract as the file
/// store, against an `Option<Order>` instead of a file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    record: Option<Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the stored record without going through `load`.
    pub fn record(&self) -> Option<&Order> {
        self.record.as_ref()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn save(&mut self, order: &Order) -> PosResult<()> {
        self.record = Some(order.clone());
        Ok(())
    }

    fn load(&self) -> PosResult<Option<Order>> {
        Ok(self.record.clone())
    }

    fn delete(&mut self) -> PosResult<()> {
        self.record = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafepos_orders::OrderLine;

    #[test]
    fn save_load_delete_cycle() {
        let mut store = InMemoryOrderStore::new();
        assert!(store.load().unwrap().is_none());

        let order = Order::from_parts(vec![OrderLine::new("Coffee")], 2500, false);
        store.save(&order).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), order);

        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
        store.delete().unwrap();
    }
}
