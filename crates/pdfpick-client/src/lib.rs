//! Client side of the PDF picker: fetches from the search proxy, caches the
//! normalized result set per credential, and serves local search and
//! selection.
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod host;
pub mod proxy;
pub mod selector;
pub mod store;
