use super::discount::{AppliedDiscount, DiscountRule};
use super::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An original price and the ordered discount rules to apply to it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub original_price: Price,
    #[serde(default)]
    pub discounts: Vec<DiscountRule>,
}

impl PricingRequest {
    pub fn new(original_price: Price, discounts: Vec<DiscountRule>) -> Self {
        Self {
            original_price,
            discounts,
        }
    }
}

/// The outcome of pricing a request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub final_price: Decimal,
    /// Records in rule order; a cap record, when present, is always last.
    pub applied_discounts: Vec<AppliedDiscount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{ "originalPrice": 100, "discounts": [{ "type": "fixed", "value": 10 }] }"#;
        let request: PricingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.original_price.value(), dec!(100));
        assert_eq!(request.discounts.len(), 1);
    }

    #[test]
    fn test_request_without_discounts() {
        let request: PricingRequest = serde_json::from_str(r#"{ "originalPrice": 42 }"#).unwrap();
        assert!(request.discounts.is_empty());
    }

    #[test]
    fn test_request_negative_price_rejected() {
        let json = r#"{ "originalPrice": -5, "discounts": [] }"#;
        assert!(serde_json::from_str::<PricingRequest>(json).is_err());
    }
}
