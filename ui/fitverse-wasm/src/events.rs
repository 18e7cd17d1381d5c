//! Event binding for the shared header.

use crate::cart;
use crate::dom;
use crate::render;
use wasm_bindgen::prelude::*;

/// Attach a click handler for the lifetime of the page.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        if $el
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_err()
        {
            gloo_console::warn!("fitverse: failed to attach click handler");
        }
        cb.forget();
    }};
}

/// Hamburger button toggles `.nav-links.active`. Needs both elements.
pub fn bind_navigation() {
    let (Some(hamburger), Some(nav_links)) =
        (dom::query(".hamburger-menu"), dom::query(".nav-links"))
    else {
        return;
    };
    on_click!(hamburger, move |_: web_sys::MouseEvent| {
        dom::toggle_class(&nav_links, "active");
    });
}

/// Cart icon opens the cart instead of following its link.
pub fn bind_cart_icon() {
    let Some(icon) = dom::by_id(render::CART_ICON_ID) else {
        return;
    };
    on_click!(icon, |e: web_sys::MouseEvent| {
        e.prevent_default();
        cart::show_cart();
    });
}
