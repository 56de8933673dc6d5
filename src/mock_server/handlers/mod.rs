//! HTTP request handlers for the mock server.

pub mod species;

pub use species::*;
