//! Aggregating search proxy for the HubSpot Files API.
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

/// Pagination loop shared by every entry point.
pub mod aggregate;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
/// Upstream search abstraction and its `reqwest` implementation.
pub mod upstream;
