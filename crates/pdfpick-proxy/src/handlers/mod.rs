//! HTTP request handlers.

pub mod search;
