//! HTTP server library for the ten-pin bowling service.
//!
//! Exposed as a library so integration tests can drive the router directly.

pub mod api;
pub mod config;
pub mod logging;
