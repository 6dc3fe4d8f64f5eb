//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`properties`]: Temperature dependent fluid properties.
//! - [`units`]: Quantities not provided by [`uom`].

pub mod constraint;
pub mod properties;
pub mod units;
