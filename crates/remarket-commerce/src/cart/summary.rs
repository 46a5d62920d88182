//! Cart summary aggregation.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Aggregate totals over the current cart item set.
///
/// Never independently mutated: always recomputed from the item snapshot via
/// [`CartSummary::compute`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of line totals before insurance.
    pub subtotal: Money,
    /// Sum of selected insurance prices (one per insured item).
    pub insurance_total: Money,
    /// Shipping cost. Currently always zero: standard delivery is free.
    pub shipping_total: Money,
    /// Grand total.
    pub total: Money,
    /// Sum of item quantities.
    pub item_count: u32,
}

impl CartSummary {
    /// Compute the summary for a cart snapshot.
    pub fn compute(items: &[CartItem], currency: Currency) -> Result<CartSummary, CommerceError> {
        let mut subtotal = Money::zero(currency);
        for item in items {
            subtotal = subtotal
                .try_add(&item.line_total()?)
                .ok_or(CommerceError::Overflow)?;
        }

        let insurance_total = Money::try_sum(
            items.iter().filter_map(|i| i.insurance.as_ref().map(|s| &s.price)),
            currency,
        )
        .ok_or(CommerceError::Overflow)?;

        let shipping_total = Money::zero(currency);

        let total = subtotal
            .try_add(&insurance_total)
            .and_then(|t| t.try_add(&shipping_total))
            .ok_or(CommerceError::Overflow)?;

        let item_count = items.iter().map(|i| i.quantity).sum();

        Ok(CartSummary {
            subtotal,
            insurance_total,
            shipping_total,
            total,
            item_count,
        })
    }

    /// Summary of an empty cart.
    pub fn empty(currency: Currency) -> CartSummary {
        CartSummary {
            subtotal: Money::zero(currency),
            insurance_total: Money::zero(currency),
            shipping_total: Money::zero(currency),
            total: Money::zero(currency),
            item_count: 0,
        }
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{InsuranceOption, SelectedInsurance};

    #[test]
    fn test_summary_with_insurance() {
        // Prices 10 and 20, quantities 2 and 1, one item insured at 5:
        // subtotal 40, insurance 5, total 45, count 3.
        let insurance = SelectedInsurance {
            option_id: "annual".to_string(),
            kind: crate::cart::InsuranceKind::Annual,
            name: "Assurance".to_string(),
            price: Money::from_decimal(5.0, Currency::EUR),
        };
        let items = vec![
            CartItem::new("c1", "l1", Money::from_decimal(10.0, Currency::EUR), 2),
            CartItem::new("c2", "l2", Money::from_decimal(20.0, Currency::EUR), 1)
                .with_insurance(insurance),
        ];

        let summary = CartSummary::compute(&items, Currency::EUR).unwrap();
        assert_eq!(summary.subtotal.amount_cents, 4000);
        assert_eq!(summary.insurance_total.amount_cents, 500);
        assert_eq!(summary.shipping_total.amount_cents, 0);
        assert_eq!(summary.total.amount_cents, 4500);
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_summary_empty_cart() {
        let summary = CartSummary::compute(&[], Currency::EUR).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary, CartSummary::empty(Currency::EUR));
    }

    #[test]
    fn test_summary_from_catalog_plan() {
        let plan = InsuranceOption::by_id("annual").unwrap();
        let items = vec![
            CartItem::new("c1", "l1", Money::from_decimal(199.0, Currency::EUR), 1)
                .with_insurance(SelectedInsurance::from_option(&plan)),
        ];
        let summary = CartSummary::compute(&items, Currency::EUR).unwrap();
        assert_eq!(summary.insurance_total.amount_cents, 5999);
        assert_eq!(summary.total.amount_cents, 19900 + 5999);
    }

    #[test]
    fn test_summary_mixed_currency_errors() {
        let items = vec![CartItem::new(
            "c1",
            "l1",
            Money::new(1000, Currency::USD),
            1,
        )];
        assert!(CartSummary::compute(&items, Currency::EUR).is_err());
    }
}
