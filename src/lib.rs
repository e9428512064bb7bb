pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::engine::{CapPolicy, DiscountEngine, apply_discounts};
