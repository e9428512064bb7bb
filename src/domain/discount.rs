use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind tag shared by discount rules and the records they produce.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Fixed,
    Percentage,
    Conditional,
    Tiered,
    Cap,
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscountKind::Fixed => "fixed",
            DiscountKind::Percentage => "percentage",
            DiscountKind::Conditional => "conditional",
            DiscountKind::Tiered => "tiered",
            DiscountKind::Cap => "cap",
        };
        f.write_str(name)
    }
}

/// One price band of a tiered discount. Bounds are inclusive.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Tier {
    pub min: Decimal,
    pub max: Decimal,
    pub value: Decimal,
}

impl Tier {
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// A single discount descriptor, tagged on the wire by its `type` field.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiscountRule {
    /// Flat amount off the remaining price.
    Fixed { value: Decimal },
    /// Percentage (0-100) of the remaining price.
    Percentage { value: Decimal },
    /// Flat amount, only when the original price is strictly above `condition`.
    Conditional { condition: Decimal, value: Decimal },
    /// Flat amount taken from the first tier containing the original price.
    Tiered { tiers: Vec<Tier> },
    /// Ceiling on the total discount granted by all other rules.
    #[serde(rename_all = "camelCase")]
    Cap { max_discount: Decimal },
}

impl DiscountRule {
    pub fn kind(&self) -> DiscountKind {
        match self {
            DiscountRule::Fixed { .. } => DiscountKind::Fixed,
            DiscountRule::Percentage { .. } => DiscountKind::Percentage,
            DiscountRule::Conditional { .. } => DiscountKind::Conditional,
            DiscountRule::Tiered { .. } => DiscountKind::Tiered,
            DiscountRule::Cap { .. } => DiscountKind::Cap,
        }
    }
}

/// The effect of one processed rule, or the cap event appended after the pass.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AppliedDiscount {
    Fixed {
        amount: Decimal,
    },
    Percentage {
        amount: Decimal,
    },
    Conditional {
        amount: Decimal,
    },
    Tiered {
        amount: Decimal,
    },
    #[serde(rename_all = "camelCase")]
    Cap {
        original_discount_total: Decimal,
        capped_at: Decimal,
    },
}

impl AppliedDiscount {
    pub fn kind(&self) -> DiscountKind {
        match self {
            AppliedDiscount::Fixed { .. } => DiscountKind::Fixed,
            AppliedDiscount::Percentage { .. } => DiscountKind::Percentage,
            AppliedDiscount::Conditional { .. } => DiscountKind::Conditional,
            AppliedDiscount::Tiered { .. } => DiscountKind::Tiered,
            AppliedDiscount::Cap { .. } => DiscountKind::Cap,
        }
    }

    /// The amount deducted, or `None` for a cap record.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            AppliedDiscount::Fixed { amount }
            | AppliedDiscount::Percentage { amount }
            | AppliedDiscount::Conditional { amount }
            | AppliedDiscount::Tiered { amount } => Some(*amount),
            AppliedDiscount::Cap { .. } => None,
        }
    }

    /// The ceiling that was enforced, or `None` for a deduction record.
    pub fn capped_at(&self) -> Option<Decimal> {
        match self {
            AppliedDiscount::Cap { capped_at, .. } => Some(*capped_at),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rule_deserialization_by_type_tag() {
        let json = r#"[
            { "type": "fixed", "value": 20 },
            { "type": "percentage", "value": 10 },
            { "type": "conditional", "condition": 200, "value": 15 },
            { "type": "tiered", "tiers": [{ "min": 0, "max": 99, "value": 5 }] },
            { "type": "cap", "maxDiscount": 60 }
        ]"#;
        let rules: Vec<DiscountRule> = serde_json::from_str(json).unwrap();

        assert_eq!(rules[0], DiscountRule::Fixed { value: dec!(20) });
        assert_eq!(
            rules[2],
            DiscountRule::Conditional {
                condition: dec!(200),
                value: dec!(15)
            }
        );
        assert_eq!(rules[3].kind(), DiscountKind::Tiered);
        assert_eq!(
            rules[4],
            DiscountRule::Cap {
                max_discount: dec!(60)
            }
        );
    }

    #[test]
    fn test_unknown_rule_type_rejected() {
        let json = r#"{ "type": "bogo", "value": 1 }"#;
        assert!(serde_json::from_str::<DiscountRule>(json).is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{ "type": "conditional", "value": 15 }"#;
        assert!(serde_json::from_str::<DiscountRule>(json).is_err());
    }

    #[test]
    fn test_cap_record_serialization() {
        let record = AppliedDiscount::Cap {
            original_discount_total: dec!(83),
            capped_at: dec!(60),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "cap");
        assert_eq!(value["originalDiscountTotal"], 83.0);
        assert_eq!(value["cappedAt"], 60.0);
    }

    #[test]
    fn test_tier_bounds_inclusive() {
        let tier = Tier {
            min: dec!(100),
            max: dec!(199),
            value: dec!(10),
        };
        assert!(tier.contains(dec!(100)));
        assert!(tier.contains(dec!(199)));
        assert!(!tier.contains(dec!(199.01)));
        assert!(!tier.contains(dec!(99.99)));
    }

    #[test]
    fn test_record_accessors() {
        let fixed = AppliedDiscount::Fixed { amount: dec!(10) };
        assert_eq!(fixed.amount(), Some(dec!(10)));
        assert_eq!(fixed.capped_at(), None);
        assert_eq!(fixed.kind().to_string(), "fixed");
    }
}
