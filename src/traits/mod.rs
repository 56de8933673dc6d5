//! Trait definitions for catalog operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! endpoint differences in the implementations.

mod count;
mod get;

pub use count::Count;
pub use get::Get;
