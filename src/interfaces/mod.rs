//! Adapters between external document formats and the domain types.

pub mod json;
