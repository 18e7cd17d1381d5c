use crate::dom;
use fv_core::style;

/// Add the startup stylesheets. The anti-shake override is controlled by
/// `AppConfig::anti_shake`.
pub fn inject_startup_styles(anti_shake: bool) {
    for (id, css) in style::startup_styles(anti_shake) {
        dom::inject_style(id, css);
    }
}
