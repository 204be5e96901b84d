//! Price history and point-in-time price resolution for tradable
//! instruments, plus the ledger records that reference them.
//!
//! The centre of the crate is [`pricing::PriceSeries`]: a date-keyed,
//! always-sorted history with an optional live quote overlaid past its end.

pub mod accounting;
pub mod instrument;
pub mod pricing;
