//! Page dispatch.
//!
//! At startup the registry is filled by looking up each known global
//! manager (`ShopManager`, `AuthManager`, ...). Page scripts loaded as modules
//! can instead call `registerPage(id, fn)`. Dispatch runs at most the one
//! initializer for the current page and ignores pages with none.

use fv_core::page::{self, PageRegistry};
use js_sys::{Array, Function, Reflect};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[derive(Clone)]
pub enum Initializer {
    /// A global manager object; `init` is called with the manager as `this`.
    Manager { name: &'static str, object: JsValue },
    /// A bare function passed to `registerPage`.
    Callback(Function),
}

impl Initializer {
    fn run(&self) -> Result<JsValue, JsValue> {
        match self {
            Initializer::Manager { object, .. } => method(object, "init")
                .ok_or_else(|| JsValue::from_str("init is not a function"))?
                .call0(object),
            Initializer::Callback(f) => f.call0(&JsValue::UNDEFINED),
        }
    }

    fn label(&self) -> &str {
        match self {
            Initializer::Manager { name, .. } => name,
            Initializer::Callback(_) => "registered initializer",
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<PageRegistry<Initializer>> = RefCell::new(PageRegistry::new());
}

/// Resolve a global binding by name. Properties of the global object are read
/// directly; top-level `const`/`let` declarations are not properties, so
/// those are looked up through the `Function` constructor when it is allowed.
pub fn lookup_global(name: &str) -> Option<JsValue> {
    let global = js_sys::global();
    Reflect::get(&global, &JsValue::from_str(name))
        .ok()
        .filter(is_present)
        .or_else(|| lexical_global(&global, name))
        .filter(is_present)
}

fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

// `Reflect::construct` returns `Err` where a CSP without 'unsafe-eval'
// makes `new Function` throw.
fn lexical_global(global: &JsValue, name: &str) -> Option<JsValue> {
    let ctor = Reflect::get(global, &JsValue::from_str("Function"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let body = format!("return typeof {name} !== 'undefined' ? {name} : undefined;");
    let getter = Reflect::construct(&ctor, &Array::of1(&JsValue::from_str(&body)))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    getter.call0(&JsValue::UNDEFINED).ok()
}

/// `object[name]` when it is callable.
pub fn method(object: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(object, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn current_page() -> String {
    page::page_id(&crate::dom::pathname())
}

/// Register every known manager that is present and exposes `init`.
pub fn discover_managers() {
    REGISTRY.with(|r| {
        r.borrow_mut().discover_managers(|name| {
            let object = lookup_global(name)?;
            method(&object, "init")?;
            Some(Initializer::Manager { name, object })
        });
    });
}

/// Run the current page's initializer, if any.
pub fn initialize_current_page() {
    let page = current_page();
    let due = REGISTRY.with(|r| r.borrow_mut().dispatch(&page));
    if let Some(init) = due {
        run(&page, &init);
    }
}

/// Register an initializer for `page`. Once startup dispatch has happened, a
/// late registration for the current page runs immediately.
pub fn register(page: String, init: Function) {
    let due = REGISTRY.with(|r| {
        r.borrow_mut()
            .register(page.clone(), Initializer::Callback(init))
    });
    if let Some(init) = due {
        run(&page, &init);
    }
}

fn run(page: &str, init: &Initializer) {
    if let Err(err) = init.run() {
        gloo_console::error!(
            format!("fitverse: {} failed on page '{page}'", init.label()),
            err
        );
    }
}
