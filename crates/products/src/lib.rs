//! Product catalog domain module.
//!
//! This crate holds the inventory record the fulfillment policies operate on,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod product;

pub use category::{ProductCategory, UnknownCategory};
pub use product::{Product, ProductRecord, SeasonWindow};
