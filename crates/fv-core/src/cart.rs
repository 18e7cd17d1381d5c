use crate::models::CartItem;

pub const CART_ICON_HTML: &str = r#"<i class="fas fa-shopping-cart"></i>"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub item_count: u32,
    pub total: f64,
}

/// Total units in the cart, saturating at `u32::MAX`.
pub fn item_count(cart: &[CartItem]) -> u32 {
    cart.iter()
        .map(CartItem::units)
        .fold(0, u32::saturating_add)
}

/// Count and total for the fallback cart dialog. See `CartItem::line_total`
/// for the per-line precedence.
pub fn summarize(cart: &[CartItem]) -> CartSummary {
    CartSummary {
        item_count: item_count(cart),
        total: cart.iter().map(CartItem::line_total).sum(),
    }
}

impl CartSummary {
    pub fn fallback_message(&self) -> String {
        format!(
            "Cart has {} items\nTotal: ${:.2}\n\nGo to the Shop page to manage your cart.",
            self.item_count, self.total
        )
    }
}

/// Inner HTML of `#cart-icon` for a given count.
pub fn badge_html(count: u32) -> String {
    if count == 0 {
        CART_ICON_HTML.to_owned()
    } else {
        format!(r#"{CART_ICON_HTML} <span class="cart-count">{count}</span>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart(raw: &str) -> Vec<CartItem> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn count_sums_quantities_with_default_one() {
        assert_eq!(item_count(&cart(r#"[{"quantity":2},{"price":5}]"#)), 3);
        assert_eq!(item_count(&[]), 0);
    }

    // totalPrice is taken as-is and quantity is ignored for plain `price`
    // lines. Live carts depend on this, so it is pinned rather than corrected.
    #[test]
    fn fallback_total_prefers_total_price_and_ignores_quantity() {
        let summary = summarize(&cart(r#"[{"totalPrice":12},{"price":5,"quantity":3}]"#));
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.total, 17.0);
    }

    #[test]
    fn lines_without_prices_add_nothing() {
        let summary = summarize(&cart(r#"[{"quantity":1},{"name":"towel"}]"#));
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn huge_quantities_saturate_instead_of_overflowing() {
        let count = item_count(&cart(r#"[{"quantity":4000000000},{"quantity":4000000000}]"#));
        assert_eq!(count, u32::MAX);
    }

    #[test]
    fn string_prices_from_form_fields_are_totalled() {
        let summary = summarize(&cart(r#"[{"id":"shoe","price":"29.99","quantity":2}]"#));
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, 29.99);
    }

    #[test]
    fn fallback_message_formats_two_decimals() {
        let summary = CartSummary {
            item_count: 3,
            total: 17.0,
        };
        assert_eq!(
            summary.fallback_message(),
            "Cart has 3 items\nTotal: $17.00\n\nGo to the Shop page to manage your cart."
        );
    }

    #[test]
    fn badge_shows_count_only_when_non_zero() {
        assert_eq!(badge_html(0), r#"<i class="fas fa-shopping-cart"></i>"#);
        assert_eq!(
            badge_html(3),
            r#"<i class="fas fa-shopping-cart"></i> <span class="cart-count">3</span>"#
        );
    }
}
