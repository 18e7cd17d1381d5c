//! Header widgets: cart badge, join/greeting button, points counter.
//!
//! `update_ui` is the only entry point; the three widgets are always synced
//! together and each is skipped when its element is not on the page.

use crate::api;
use crate::dom;
use crate::state;
use fv_core::view::{HeaderView, LoginControl};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub const CART_ICON_ID: &str = "cart-icon";
pub const JOIN_BUTTON_ID: &str = "join-us-btn";
pub const POINTS_ID: &str = "user-points";

thread_local! {
    // Shared by every refresh.
    static LOGOUT_HANDLER: Closure<dyn FnMut(web_sys::MouseEvent)> =
        Closure::wrap(Box::new(|_: web_sys::MouseEvent| api::logout()) as Box<dyn FnMut(_)>);
}

pub fn update_ui() {
    let view = state::with(|app| app.header_view());
    update_cart_icon(&view);
    update_login_button(&view);
    update_points_display(&view);
}

fn update_cart_icon(view: &HeaderView) {
    if let Some(icon) = dom::by_id(CART_ICON_ID) {
        dom::set_inner_html(&icon, &view.cart_html);
    }
}

fn update_login_button(view: &HeaderView) {
    let Some(button) = dom::by_id_typed::<HtmlElement>(JOIN_BUTTON_ID) else {
        return;
    };
    match &view.login {
        LoginControl::Greeting { text } => {
            dom::set_text(&button, text);
            dom::set_attr(&button, "href", "#");
            LOGOUT_HANDLER.with(|cb| button.set_onclick(Some(cb.as_ref().unchecked_ref())));
        }
        LoginControl::JoinLink { text, href } => {
            dom::set_text(&button, text);
            dom::set_attr(&button, "href", href);
            button.set_onclick(None);
        }
    }
}

fn update_points_display(view: &HeaderView) {
    if let Some(points) = dom::by_id(POINTS_ID) {
        dom::set_text(&points, &view.points_text);
    }
}
