//! DOM helpers.
//!
//! Every element this controller touches is optional on any given page, so
//! lookups return `Option` and callers skip when the element is missing.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

pub fn by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    gloo_utils::document().query_selector(selector).ok()?
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    let _ = el.set_attribute(name, value);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

pub fn set_style(el: &HtmlElement, css: &str) {
    let _ = el.style().set_css_text(css);
}

pub fn set_style_property(el: &HtmlElement, name: &str, value: &str) {
    let _ = el.style().set_property(name, value);
}

pub fn create_html(tag: &str) -> Option<HtmlElement> {
    gloo_utils::document()
        .create_element(tag)
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Append a `<style id=..>` to `<head>` unless one with that id exists.
pub fn inject_style(id: &str, css: &str) {
    if by_id(id).is_some() {
        return;
    }
    let Some(style) = create_html("style") else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = gloo_utils::head().append_child(&style);
}

pub fn append_to_body(el: &Element) -> bool {
    gloo_utils::body().append_child(el).is_ok()
}

pub fn remove(el: &Element) {
    el.remove();
}

pub fn pathname() -> String {
    gloo_utils::window().location().pathname().unwrap_or_default()
}

pub fn navigate(href: &str) {
    if let Err(err) = gloo_utils::window().location().set_href(href) {
        gloo_console::error!("navigation failed", err);
    }
}

pub fn alert(message: &str) {
    let _ = gloo_utils::window().alert_with_message(message);
}
