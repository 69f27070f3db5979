//! `cafepos-core` — domain foundation building blocks.
//!
//! This crate contains the error model shared by the menu, order, ledger,
//! and storage crates. It has no IO and no presentation concerns.

pub mod error;

pub use error::{PosError, PosResult};
