//! Order persistence: the sole source of cross-run state.
//!
//! `JsonOrderStore` keeps the single order record as a JSON file replaced
//! whole on every save; `InMemoryOrderStore` is its in-memory twin for
//! tests and ephemeral sessions.

pub mod in_memory;
pub mod json_store;

pub use in_memory::InMemoryOrderStore;
pub use json_store::{JsonOrderStore, ORDER_FILE_NAME};
