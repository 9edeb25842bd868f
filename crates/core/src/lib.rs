//! `orderflow-core`: domain building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, order
//! and fulfillment crates (no infrastructure concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId};
