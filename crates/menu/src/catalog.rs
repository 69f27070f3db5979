use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cafepos_core::{PosError, PosResult};

/// Portion size for items priced per size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Capitalized label for display, e.g. in `"Pizza (Medium)"`.
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// Parse a user-supplied size string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Some(Size::Small),
            "medium" => Some(Size::Medium),
            "large" => Some(Size::Large),
            _ => None,
        }
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Price for one menu item: flat, or a per-size table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuEntry {
    /// One price regardless of size, in minor currency units.
    Flat(u64),
    /// Price depends on the chosen size.
    Sized(BTreeMap<Size, u64>),
}

/// In-memory menu: normalized item name → entry.
///
/// Names are trimmed and lowercased on every operation, so `"Muffin"` and
/// `"muffin"` are the same item. `BTreeMap` keeps `list_items` stable for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuStore {
    items: BTreeMap<String, MenuEntry>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cafe's stock menu. Prices in rupees.
    pub fn standard_menu() -> Self {
        let mut menu = Self::new();
        menu.items.insert(
            "pizza".to_string(),
            MenuEntry::Sized(BTreeMap::from([
                (Size::Small, 2000),
                (Size::Medium, 3000),
                (Size::Large, 4000),
            ])),
        );
        for (name, price) in [
            ("pasta", 3000),
            ("coffee", 2500),
            ("cookies", 1500),
            ("fries", 1500),
            ("softie", 2500),
            ("choco lava cake", 4500),
        ] {
            menu.items.insert(name.to_string(), MenuEntry::Flat(price));
        }
        menu
    }

    /// Look up the price of an item.
    ///
    /// Sized items require a size; flat items ignore one if given. Any miss
    /// (unknown item, missing size, size not on the table) is `ItemNotFound`.
    pub fn get_price(&self, item: &str, size: Option<Size>) -> PosResult<u64> {
        let key = normalize(item);
        let entry = self
            .items
            .get(&key)
            .ok_or_else(|| PosError::item_not_found(key.clone()))?;
        match entry {
            MenuEntry::Flat(price) => Ok(*price),
            MenuEntry::Sized(by_size) => {
                let size =
                    size.ok_or_else(|| PosError::item_not_found(format!("{key} (size required)")))?;
                by_size
                    .get(&size)
                    .copied()
                    .ok_or_else(|| PosError::item_not_found(format!("{key} ({})", size.label())))
            }
        }
    }

    /// Insert or overwrite a flat-priced entry.
    pub fn add_item(&mut self, name: &str, price: u64) -> PosResult<()> {
        let key = normalize(name);
        if key.is_empty() {
            return Err(PosError::invalid_menu_edit("name cannot be empty"));
        }
        if price == 0 {
            return Err(PosError::invalid_menu_edit("price must be positive"));
        }
        self.items.insert(key, MenuEntry::Flat(price));
        Ok(())
    }

    /// Remove an entry entirely.
    pub fn remove_item(&mut self, name: &str) -> PosResult<()> {
        let key = normalize(name);
        self.items
            .remove(&key)
            .map(|_| ())
            .ok_or(PosError::ItemNotFound(key))
    }

    /// Stable enumeration of item names for display/selection.
    pub fn list_items(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&normalize(name))
    }

    pub fn entry(&self, name: &str) -> Option<&MenuEntry> {
        self.items.get(&normalize(name))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Title-case an item name for display: `"choco lava cake"` → `"Choco Lava Cake"`.
pub fn title_case(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_price_lookup() {
        let menu = MenuStore::standard_menu();
        assert_eq!(menu.get_price("coffee", None).unwrap(), 2500);
    }

    #[test]
    fn flat_price_ignores_size() {
        let menu = MenuStore::standard_menu();
        assert_eq!(menu.get_price("coffee", Some(Size::Large)).unwrap(), 2500);
    }

    #[test]
    fn sized_price_lookup_per_size() {
        let menu = MenuStore::standard_menu();
        assert_eq!(menu.get_price("pizza", Some(Size::Small)).unwrap(), 2000);
        assert_eq!(menu.get_price("pizza", Some(Size::Medium)).unwrap(), 3000);
        assert_eq!(menu.get_price("pizza", Some(Size::Large)).unwrap(), 4000);
    }

    #[test]
    fn sized_item_without_size_is_a_miss() {
        let menu = MenuStore::standard_menu();
        let err = menu.get_price("pizza", None).unwrap_err();
        match err {
            PosError::ItemNotFound(_) => {}
            _ => panic!("Expected ItemNotFound for sized item without size"),
        }
    }

    #[test]
    fn unknown_item_is_not_found() {
        let menu = MenuStore::standard_menu();
        let err = menu.get_price("sushi", None).unwrap_err();
        match err {
            PosError::ItemNotFound(name) => assert_eq!(name, "sushi"),
            _ => panic!("Expected ItemNotFound for unknown item"),
        }
    }

    #[test]
    fn lookup_normalizes_name() {
        let menu = MenuStore::standard_menu();
        assert_eq!(menu.get_price("  Coffee ", None).unwrap(), 2500);
    }

    #[test]
    fn add_item_then_lookup() {
        let mut menu = MenuStore::new();
        menu.add_item("muffin", 1200).unwrap();
        assert_eq!(menu.get_price("muffin", None).unwrap(), 1200);
    }

    #[test]
    fn add_item_normalizes_name() {
        let mut menu = MenuStore::new();
        menu.add_item("Muffin", 1200).unwrap();
        assert_eq!(menu.get_price("muffin", None).unwrap(), 1200);
        assert_eq!(menu.list_items(), vec!["muffin"]);
    }

    #[test]
    fn add_item_overwrites_existing_price() {
        let mut menu = MenuStore::new();
        menu.add_item("muffin", 1200).unwrap();
        menu.add_item("muffin", 1500).unwrap();
        assert_eq!(menu.get_price("muffin", None).unwrap(), 1500);
    }

    #[test]
    fn add_item_rejects_empty_name() {
        let mut menu = MenuStore::new();
        let err = menu.add_item("   ", 1200).unwrap_err();
        match err {
            PosError::InvalidMenuEdit(_) => {}
            _ => panic!("Expected InvalidMenuEdit for empty name"),
        }
    }

    #[test]
    fn add_item_rejects_zero_price() {
        let mut menu = MenuStore::new();
        let err = menu.add_item("muffin", 0).unwrap_err();
        match err {
            PosError::InvalidMenuEdit(_) => {}
            _ => panic!("Expected InvalidMenuEdit for zero price"),
        }
    }

    #[test]
    fn remove_item_then_lookup_fails() {
        let mut menu = MenuStore::standard_menu();
        menu.remove_item("coffee").unwrap();
        let err = menu.get_price("coffee", None).unwrap_err();
        match err {
            PosError::ItemNotFound(_) => {}
            _ => panic!("Expected ItemNotFound after removal"),
        }
    }

    #[test]
    fn remove_missing_item_is_not_found() {
        let mut menu = MenuStore::new();
        let err = menu.remove_item("coffee").unwrap_err();
        match err {
            PosError::ItemNotFound(_) => {}
            _ => panic!("Expected ItemNotFound for missing item"),
        }
    }

    #[test]
    fn list_items_is_stable() {
        let menu = MenuStore::standard_menu();
        let first = menu.list_items();
        let second = menu.list_items();
        assert_eq!(first, second);
        assert!(first.contains(&"pizza"));
        assert!(first.contains(&"choco lava cake"));
    }

    #[test]
    fn size_parse_is_case_insensitive() {
        assert_eq!(Size::parse("Medium"), Some(Size::Medium));
        assert_eq!(Size::parse(" large "), Some(Size::Large));
        assert_eq!(Size::parse("extra"), None);
    }

    #[test]
    fn title_case_handles_multiple_words() {
        assert_eq!(title_case("choco lava cake"), "Choco Lava Cake");
        assert_eq!(title_case("coffee"), "Coffee");
    }
}
