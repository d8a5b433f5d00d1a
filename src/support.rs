//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants enforced at construction time.
//! - [`steam`]: Water and steam property lookups.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod steam;
pub mod units;
