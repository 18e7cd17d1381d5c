//! What the header widgets should show for a given state.
//!
//! Computed here so the browser side only has to apply it.

use crate::cart;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginControl {
    /// Greeting; clicking logs out.
    Greeting { text: String },
    /// Plain link to the login page, no click handler.
    JoinLink { text: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub cart_count: u32,
    pub cart_html: String,
    pub login: LoginControl,
    pub points_text: String,
}

impl HeaderView {
    pub fn from_state(state: &AppState, login_document: &str) -> Self {
        let cart_count = cart::item_count(&state.cart);
        let login = match state.user_name() {
            Some(name) => LoginControl::Greeting {
                text: format!("Welcome, {name}"),
            },
            None => LoginControl::JoinLink {
                text: "Join Us".to_owned(),
                href: login_document.to_owned(),
            },
        };

        Self {
            cart_count,
            cart_html: cart::badge_html(cart_count),
            login,
            points_text: state.user_points.to_string(),
        }
    }
}
