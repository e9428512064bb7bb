use crate::domain::discount::{AppliedDiscount, DiscountRule, Tier};
use crate::domain::pricing::{PricingRequest, PricingResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// How the engine resolves a request carrying more than one cap rule.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CapPolicy {
    /// The last cap rule in the list is the one enforced.
    #[default]
    LastWins,
    /// The smallest cap in the list is the one enforced.
    Strictest,
}

/// Applies an ordered list of discount rules to a price.
///
/// `DiscountEngine` holds no state between requests; every call to [`apply`](Self::apply)
/// is an independent, side-effect free computation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountEngine {
    cap_policy: CapPolicy,
}

impl DiscountEngine {
    /// Creates an engine with the default cap policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cap_policy(cap_policy: CapPolicy) -> Self {
        Self { cap_policy }
    }

    pub fn cap_policy(&self) -> CapPolicy {
        self.cap_policy
    }

    /// Prices a request in a single left-to-right pass over its rules.
    ///
    /// Percentage rules compound on the price remaining after earlier rules, while
    /// conditional and tiered rules are always evaluated against the original price.
    /// When a cap is present and the accumulated discount exceeds it, the final price
    /// is recomputed as `original - cap` and a cap record is appended last.
    pub fn apply(&self, request: &PricingRequest) -> PricingResult {
        let original = request.original_price.value();
        let mut remaining = original;
        let mut total = Decimal::ZERO;
        let mut cap: Option<Decimal> = None;
        let mut applied = Vec::with_capacity(request.discounts.len() + 1);

        for rule in &request.discounts {
            let record = match rule {
                DiscountRule::Fixed { value } => {
                    let amount = (*value).min(remaining);
                    AppliedDiscount::Fixed { amount }
                }
                DiscountRule::Percentage { value } => {
                    // Scale the rate first so 0-100 never grows past `remaining`.
                    let amount = remaining.saturating_mul(*value / dec!(100));
                    AppliedDiscount::Percentage { amount }
                }
                DiscountRule::Conditional { condition, value } => {
                    if original <= *condition {
                        debug!(%condition, %original, "conditional discount not met");
                        continue;
                    }
                    let amount = (*value).min(remaining);
                    AppliedDiscount::Conditional { amount }
                }
                DiscountRule::Tiered { tiers } => {
                    let amount = tier_value(tiers, original).min(remaining);
                    AppliedDiscount::Tiered { amount }
                }
                DiscountRule::Cap { max_discount } => {
                    cap = Some(self.select_cap(cap, *max_discount));
                    continue;
                }
            };

            // Every non-cap record carries an amount.
            let amount = record.amount().unwrap_or_default();
            remaining = remaining.saturating_sub(amount);
            total = total.saturating_add(amount);
            debug!(kind = %record.kind(), %amount, %remaining, "discount applied");
            applied.push(record);
        }

        if let Some(capped_at) = cap
            && total > capped_at
        {
            debug!(%total, %capped_at, "total discount capped");
            applied.push(AppliedDiscount::Cap {
                original_discount_total: total,
                capped_at,
            });
            return PricingResult {
                final_price: original - capped_at,
                applied_discounts: applied,
            };
        }

        PricingResult {
            final_price: remaining,
            applied_discounts: applied,
        }
    }

    fn select_cap(&self, current: Option<Decimal>, candidate: Decimal) -> Decimal {
        match (self.cap_policy, current) {
            (CapPolicy::Strictest, Some(current)) => current.min(candidate),
            _ => candidate,
        }
    }
}

/// Prices a request with the default engine.
pub fn apply_discounts(request: &PricingRequest) -> PricingResult {
    DiscountEngine::new().apply(request)
}

// First matching tier wins; no match grants nothing.
fn tier_value(tiers: &[Tier], price: Decimal) -> Decimal {
    tiers
        .iter()
        .find(|tier| tier.contains(price))
        .map(|tier| tier.value)
        .unwrap_or(Decimal::ZERO)
}
