//! Menu catalog: item name → price mapping with admin edit operations.
//!
//! Prices are plain minor-currency-unit integers (rupees here); an item is
//! either flat-priced or priced per portion size. Pure in-memory state, no IO.

pub mod catalog;

pub use catalog::{title_case, MenuEntry, MenuStore, Size};
