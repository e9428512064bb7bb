//! Domain types: discount rules, applied records and the pricing request/result pair.

pub mod discount;
pub mod price;
pub mod pricing;
