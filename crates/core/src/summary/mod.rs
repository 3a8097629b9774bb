//! Balance-query facade.
//!
//! One call takes a group's full expense history and returns everything a
//! balance view needs: the net balance per user and the simplified
//! settle-up plan. Recomputed from scratch on every query - there is no
//! cached sheet to invalidate.

pub mod service;
pub mod types;


pub use service::GroupLedgerService;
pub use types::BalanceSummary;
