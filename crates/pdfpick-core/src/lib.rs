//! Core domain types for the HubSpot PDF picker.
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod matching;
pub mod record;
pub mod search;
