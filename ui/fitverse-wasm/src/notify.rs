//! Toast banners.
//!
//! Each call inserts its own element and schedules its own removal; timers are
//! forgotten, so banners cannot be cancelled and simply stack.

use crate::dom;
use crate::state;
use fv_core::notify::{EXIT_ANIMATION, Notification};
use gloo_timers::callback::Timeout;

pub fn show_notification(message: &str, kind: Option<&str>) {
    let note = Notification::new(message, kind);
    let Some(banner) = dom::create_html("div") else {
        return;
    };
    banner.set_class_name(&note.class_name());
    banner.set_text_content(Some(&note.message));
    dom::set_style(&banner, &note.entry_css());

    if !dom::append_to_body(&banner) {
        gloo_console::warn!("fitverse: could not attach notification");
        return;
    }

    let timings = state::config().notification;
    Timeout::new(timings.display_ms, move || {
        dom::set_style_property(&banner, "animation", EXIT_ANIMATION);
        Timeout::new(timings.exit_ms, move || dom::remove(&banner)).forget();
    })
    .forget();
}
