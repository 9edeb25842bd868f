//! HTTP API: configuration, routing, and error mapping around the fulfillment engine.

pub mod app;
pub mod config;
