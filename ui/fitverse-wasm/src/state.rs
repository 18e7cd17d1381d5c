//! Page-wide controller instance.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Borrows must not be held across calls back into JS: page scripts may call
//! the public API re-entrantly from inside an initializer or click handler.

use fv_core::{AppConfig, Controller, Error, KeyValueStore};
use std::cell::RefCell;

/// `localStorage`, seen through the core storage trait. A page without
/// storage (privacy mode, sandboxed iframe) behaves as an empty store that
/// rejects writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn js_error(err: wasm_bindgen::JsValue) -> Error {
    Error::storage(format!("{err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> fv_core::Result<Option<String>> {
        match local_storage() {
            Some(s) => s.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> fv_core::Result<()> {
        let s = local_storage().ok_or_else(|| Error::storage("localStorage unavailable"))?;
        s.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> fv_core::Result<()> {
        match local_storage() {
            Some(s) => s.remove_item(key).map_err(js_error),
            None => Ok(()),
        }
    }
}

pub type App = Controller<BrowserStore>;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Create the controller, loading stored state. Replaces any previous one.
pub fn install(config: AppConfig) {
    let app = Controller::new(BrowserStore, config);
    APP.with(|a| *a.borrow_mut() = Some(app));
}

/// Run a closure with shared access to the controller.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&App) -> R,
{
    with_mut(|app| f(app))
}

/// Run a closure with mutable access to the controller. A page script that
/// calls in before startup gets a default-configured controller.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut App) -> R,
{
    APP.with(|a| {
        let mut guard = a.borrow_mut();
        let app = guard.get_or_insert_with(|| Controller::new(BrowserStore, AppConfig::default()));
        f(app)
    })
}

pub fn config() -> AppConfig {
    with(|app| app.config().clone())
}

/// Log a failed write without interrupting the caller.
pub fn report(result: fv_core::Result<()>) {
    if let Err(err) = result {
        gloo_console::warn!(format!("fitverse: {err}"));
    }
}
