//! Customer orders domain module.
//!
//! An order is the aggregate root over the products it references. Fulfillment
//! mutates those products through the root; the order itself never changes shape.

pub mod order;

pub use order::Order;
