//! Cart summary. The shop page owns the real cart UI; this is only the
//! fallback shown when its manager is not loaded.

use crate::dom;
use crate::pages;
use crate::state;
use fv_core::page::SHOP_MANAGER;

pub fn show_cart() {
    if let Some(shop) = pages::lookup_global(SHOP_MANAGER) {
        if let Some(show) = pages::method(&shop, "showCart") {
            if let Err(err) = show.call0(&shop) {
                gloo_console::error!("fitverse: ShopManager.showCart failed", err);
            }
            return;
        }
    }

    let message = state::with(|app| app.cart_summary().fallback_message());
    dom::alert(&message);
}
