//! Revenue bookkeeping for the admin view.

pub mod revenue;

pub use revenue::RevenueLedger;
