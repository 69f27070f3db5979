use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use cafepos_core::{PosError, PosResult};
use cafepos_orders::{Order, OrderLine, OrderStore};

/// Default file name, kept from the original deployment.
pub const ORDER_FILE_NAME: &str = "order_details.json";

/// On-disk shape of the order record.
///
/// The field names are the durable contract: renaming any of them breaks
/// records written by earlier runs. There is no version field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedOrderRecord {
    total_order: u64,
    order_items: Vec<String>,
    order_completed: bool,
}

impl From<&Order> for PersistedOrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            total_order: order.subtotal(),
            order_items: order
                .lines()
                .iter()
                .map(|line| line.label().to_string())
                .collect(),
            order_completed: order.is_completed(),
        }
    }
}

impl PersistedOrderRecord {
    fn into_order(self) -> Order {
        Order::from_parts(
            self.order_items.into_iter().map(OrderLine::new).collect(),
            self.total_order,
            self.order_completed,
        )
    }
}

/// File-backed store for the single order record.
///
/// Saves replace the file whole: the record is written to a temp sibling,
/// synced, and renamed into place, so a reader never observes a partially
/// written record. Single writer assumed; there is no locking.
#[derive(Debug, Clone)]
pub struct JsonOrderStore {
    path: PathBuf,
}

impl JsonOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `order_details.json` in the current working directory, the
    /// original deployment's location.
    pub fn in_current_dir() -> PosResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| PosError::storage(e.to_string()))?;
        Ok(Self::new(cwd.join(ORDER_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl OrderStore for JsonOrderStore {
    fn save(&mut self, order: &Order) -> PosResult<()> {
        let record = PersistedOrderRecord::from(order);
        let bytes =
            serde_json::to_vec_pretty(&record).map_err(|e| PosError::storage(e.to_string()))?;

        let tmp = self.tmp_path();
        {
            let mut file =
                fs::File::create(&tmp).map_err(|e| PosError::storage(e.to_string()))?;
            file.write_all(&bytes)
                .map_err(|e| PosError::storage(e.to_string()))?;
            file.sync_all().map_err(|e| PosError::storage(e.to_string()))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| PosError::storage(e.to_string()))?;

        debug!(path = %self.path.display(), completed = record.order_completed, "order record saved");
        Ok(())
    }

    fn load(&self) -> PosResult<Option<Order>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PosError::storage(e.to_string())),
        };
        let record: PersistedOrderRecord =
            serde_json::from_slice(&bytes).map_err(|e| PosError::corrupt(e.to_string()))?;
        Ok(Some(record.into_order()))
    }

    fn delete(&mut self) -> PosResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "order record deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PosError::storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonOrderStore {
        JsonOrderStore::new(dir.path().join(ORDER_FILE_NAME))
    }

    fn sample_order(completed: bool) -> Order {
        Order::from_parts(
            vec![OrderLine::new("Pizza (Medium)"), OrderLine::new("Coffee")],
            5500,
            completed,
        )
    }

    #[test]
    fn load_without_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let order = sample_order(true);

        store.save(&order).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, order);
    }

    #[test]
    fn save_overwrites_prior_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save(&sample_order(false)).unwrap();
        let smaller = Order::from_parts(vec![OrderLine::new("Fries")], 1500, false);
        store.save(&smaller).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, smaller);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(&sample_order(false)).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(ORDER_FILE_NAME)]);
    }

    #[test]
    fn record_uses_the_contract_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(&sample_order(false)).unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
        assert_eq!(raw["total_order"], 5500);
        assert_eq!(raw["order_completed"], false);
        assert_eq!(raw["order_items"][0], "Pizza (Medium)");
    }

    #[test]
    fn corrupt_record_is_surfaced_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"not json at all").unwrap();

        let err = store.load().unwrap_err();
        match err {
            PosError::CorruptRecord(_) => {}
            _ => panic!("Expected CorruptRecord for unparsable content"),
        }
    }

    #[test]
    fn wrong_schema_is_corrupt_too() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), br#"{"totals": 12}"#).unwrap();

        let err = store.load().unwrap_err();
        match err {
            PosError::CorruptRecord(_) => {}
            _ => panic!("Expected CorruptRecord for wrong schema"),
        }
    }

    #[test]
    fn delete_removes_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(&sample_order(false)).unwrap();

        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn delete_is_a_no_op_without_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.delete().unwrap();
        store.delete().unwrap();
    }
}
