//! Client-side cart state.
//!
//! Mirrors the last-loaded server cart snapshot. The summary is never
//! stored: it is recomputed from the item set on demand. Insurance
//! selection is local-only in this version, matching the backend surface.

use remarket_commerce::cart::{CartItem, CartSummary, SelectedInsurance};
use remarket_commerce::error::CommerceError;
use remarket_commerce::ids::CartItemId;
use remarket_commerce::money::Currency;

/// The app shell's view of the cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    items: Vec<CartItem>,
    currency: Currency,
}

impl CartState {
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Replace the snapshot after a server load.
    pub fn set_items(&mut self, items: Vec<CartItem>) {
        self.items = items;
    }

    /// Current items.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Attach or replace the insurance selection on one item. Returns
    /// false if the item is not in the cart.
    pub fn set_item_insurance(
        &mut self,
        item_id: &CartItemId,
        insurance: Option<SelectedInsurance>,
    ) -> bool {
        match self.items.iter_mut().find(|i| &i.id == item_id) {
            Some(item) => {
                item.insurance = insurance;
                true
            }
            None => false,
        }
    }

    /// Remove the insurance selection from one item.
    pub fn remove_item_insurance(&mut self, item_id: &CartItemId) -> bool {
        self.set_item_insurance(item_id, None)
    }

    /// Drop every item (logout teardown).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recompute the aggregate summary from the current snapshot.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        CartSummary::compute(&self.items, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remarket_commerce::cart::InsuranceOption;
    use remarket_commerce::money::Money;

    fn items() -> Vec<CartItem> {
        vec![
            CartItem::new("c1", "l1", Money::from_decimal(10.0, Currency::EUR), 2),
            CartItem::new("c2", "l2", Money::from_decimal(20.0, Currency::EUR), 1),
        ]
    }

    #[test]
    fn test_summary_recomputed_from_snapshot() {
        let mut state = CartState::new(Currency::EUR);
        state.set_items(items());

        let summary = state.summary().unwrap();
        assert_eq!(summary.subtotal.amount_cents, 4000);
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_insurance_selection_updates_summary() {
        let mut state = CartState::new(Currency::EUR);
        state.set_items(items());

        let plan = InsuranceOption::by_id("annual").unwrap();
        assert!(state.set_item_insurance(
            &CartItemId::new("c2"),
            Some(SelectedInsurance::from_option(&plan)),
        ));
        assert_eq!(state.summary().unwrap().insurance_total.amount_cents, 5999);

        assert!(state.remove_item_insurance(&CartItemId::new("c2")));
        assert_eq!(state.summary().unwrap().insurance_total.amount_cents, 0);
    }

    #[test]
    fn test_insurance_on_unknown_item() {
        let mut state = CartState::new(Currency::EUR);
        state.set_items(items());
        assert!(!state.set_item_insurance(&CartItemId::new("missing"), None));
    }

    #[test]
    fn test_clear_on_logout() {
        let mut state = CartState::new(Currency::EUR);
        state.set_items(items());
        state.clear();
        assert!(state.items().is_empty());
        assert!(state.summary().unwrap().is_empty());
    }
}
