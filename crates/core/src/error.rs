//! Domain error model.

use thiserror::Error;

/// Result type used across the point-of-sale core.
pub type PosResult<T> = Result<T, PosError>;

/// Domain-level error.
///
/// Every variant is a local, recoverable condition: the core reports it to
/// the presentation layer for display and the process keeps running. A
/// missing persisted record is deliberately *not* an error (it is the valid
/// "no prior order" signal and surfaces as `None` from the store).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PosError {
    /// Menu lookup missed: unknown item, or a sized item without a usable size.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Finalize attempted with nothing ordered.
    #[error("cannot complete an empty order")]
    EmptyOrder,

    /// Mutation attempted on a completed order; only a reset can follow.
    #[error("order is already completed")]
    OrderCompleted,

    /// A persisted order record exists but cannot be parsed.
    #[error("corrupt order record: {0}")]
    CorruptRecord(String),

    /// Admin menu edit rejected (non-positive price or empty name).
    #[error("invalid menu edit: {0}")]
    InvalidMenuEdit(String),

    /// Underlying storage failed. Surfaced immediately, never retried.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl PosError {
    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptRecord(msg.into())
    }

    pub fn invalid_menu_edit(msg: impl Into<String>) -> Self {
        Self::InvalidMenuEdit(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
