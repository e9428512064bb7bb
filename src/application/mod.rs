//! Application layer containing the pricing logic.
//!
//! This module defines the `DiscountEngine`, the single entry point that turns a
//! `PricingRequest` into a `PricingResult`. It performs no I/O.

pub mod engine;
