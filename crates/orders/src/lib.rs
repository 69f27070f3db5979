//! Order domain: the current cart, its lifecycle, and its persistence seam.
//!
//! The session state machine (`OrderSession`) owns the in-progress order,
//! writes it through to an [`OrderStore`] after every mutation, and credits
//! the revenue ledger exactly once per completion. Pure domain logic plus a
//! storage trait; the file-backed store lives in `cafepos-storage`.

pub mod order;
pub mod session;
pub mod store;

pub use order::{Order, OrderLine, OrderStatus, DISCOUNT_RATE, DISCOUNT_THRESHOLD};
pub use session::{OrderSession, PaymentMethod, Receipt};
pub use store::OrderStore;
