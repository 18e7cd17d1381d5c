//! Public API for other page scripts.
//!
//! Exported both as module functions and, for classic scripts, as methods on
//! a `window.FitVerseApp` object published at startup. Nothing here throws
//! into JS: bad input and failed writes are logged and skipped.

use crate::cart;
use crate::dom;
use crate::notify;
use crate::pages;
use crate::render;
use crate::state;
use fv_core::UserRecord;
use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Log in with a user record (`{ name, points, ... }`). Overwrites any
/// current user; extra fields are stored as given.
#[wasm_bindgen]
pub fn login(user: JsValue) {
    let user = match decode_user(&user) {
        Ok(user) => user,
        Err(msg) => {
            gloo_console::warn!(format!("fitverse: login ignored: {msg}"));
            return;
        }
    };
    state::report(state::with_mut(|app| app.login(user)));
    render::update_ui();
}

/// Clear user and cart, then go to the home page.
#[wasm_bindgen]
pub fn logout() {
    let result = state::with_mut(|app| app.logout());
    state::report(result);
    render::update_ui();
    dom::navigate(&state::config().home_document);
}

/// Add (or with a negative value, subtract) points. No-op when logged out.
/// Fractional values are truncated.
#[wasm_bindgen(js_name = addPoints)]
pub fn add_points(delta: f64) {
    if !delta.is_finite() {
        gloo_console::warn!(format!("fitverse: addPoints ignored non-finite delta {delta}"));
        return;
    }
    match state::with_mut(|app| app.add_points(delta.trunc() as i64)) {
        Ok(true) => render::update_ui(),
        Ok(false) => {}
        Err(err) => {
            gloo_console::warn!(format!("fitverse: {err}"));
            render::update_ui();
        }
    }
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    notify::show_notification(message, kind.as_deref());
}

#[wasm_bindgen(js_name = showCart)]
pub fn show_cart() {
    cart::show_cart();
}

/// Kept for older page scripts; the shop manager owns cart mutation.
#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart() {
    gloo_console::log!("Legacy addToCart called, use ShopManager.addToCart instead");
}

/// Snapshot of `{ currentUser, cart, userPoints, isLoggedIn }`.
#[wasm_bindgen(js_name = state)]
pub fn snapshot() -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    state::with(|app| app.state().snapshot().serialize(&serializer)).unwrap_or_else(|err| {
        gloo_console::warn!(format!("fitverse: state snapshot failed: {err:?}"));
        JsValue::NULL
    })
}

#[wasm_bindgen(js_name = registerPage)]
pub fn register_page(page: String, init: Function) {
    pages::register(page, init);
}

#[wasm_bindgen(js_name = getCurrentPage)]
pub fn get_current_page() -> String {
    pages::current_page()
}

/// JS object → `UserRecord`, going through JSON so numbers and extra fields
/// land exactly as they would from storage.
fn decode_user(value: &JsValue) -> Result<UserRecord, String> {
    if !value.is_object() {
        return Err("expected an object".to_owned());
    }
    let json = js_sys::JSON::stringify(value)
        .map_err(|err| format!("{err:?}"))?
        .as_string()
        .unwrap_or_default();
    serde_json::from_str(&json).map_err(|err| err.to_string())
}

// ── window.FitVerseApp ──

macro_rules! expose {
    ($obj:expr, $name:literal, $closure:expr, $sig:ty) => {{
        let cb = Closure::wrap(Box::new($closure) as Box<$sig>);
        let _ = Reflect::set(&$obj, &JsValue::from_str($name), cb.as_ref());
        cb.forget();
    }};
}

pub const GLOBAL_NAME: &str = "FitVerseApp";

/// Publish the API as `window.FitVerseApp` for non-module scripts.
pub fn publish_global() {
    let app = Object::new();

    expose!(app, "login", |user: JsValue| login(user), dyn Fn(JsValue));
    expose!(app, "logout", || logout(), dyn Fn());
    expose!(app, "addPoints", |delta: f64| add_points(delta), dyn Fn(f64));
    expose!(
        app,
        "showNotification",
        |message: JsValue, kind: JsValue| {
            let message = message.as_string().unwrap_or_default();
            show_notification(&message, kind.as_string());
        },
        dyn Fn(JsValue, JsValue)
    );
    expose!(app, "showCart", || show_cart(), dyn Fn());
    expose!(app, "addToCart", || add_to_cart(), dyn Fn());
    expose!(app, "state", || snapshot(), dyn Fn() -> JsValue);
    expose!(
        app,
        "registerPage",
        |page: String, init: JsValue| match init.dyn_into::<Function>() {
            Ok(f) => register_page(page, f),
            Err(_) => gloo_console::warn!("fitverse: registerPage expects a function"),
        },
        dyn Fn(String, JsValue)
    );
    expose!(app, "getCurrentPage", || get_current_page(), dyn Fn() -> String);

    let _ = Reflect::set(
        &gloo_utils::window(),
        &JsValue::from_str(GLOBAL_NAME),
        &app,
    );
}
