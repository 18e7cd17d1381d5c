//! Stylesheets injected at startup.

pub const ANTI_SHAKE_STYLE_ID: &str = "anti-shake-fix";
pub const NOTIFICATION_STYLE_ID: &str = "fitverse-notification-keyframes";

/// Freezes transforms and keyframe animations site-wide; only colour and
/// opacity transitions remain.
pub const ANTI_SHAKE_CSS: &str = r#"
*, *::before, *::after {
    animation: none !important;
    transform: none !important;
    -webkit-animation: none !important;
    -webkit-transform: none !important;
}
.navbar, .navbar *, .logo, .logo *, header, header * {
    animation: none !important;
    transform: none !important;
    -webkit-animation: none !important;
    -webkit-transform: none !important;
}
* {
    transition: color 0.3s ease, background-color 0.3s ease, opacity 0.3s ease !important;
}
"#;

pub const NOTIFICATION_KEYFRAMES_CSS: &str = r#"
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
"#;

/// `(element id, css)` pairs to inject, in order.
pub fn startup_styles(anti_shake: bool) -> Vec<(&'static str, &'static str)> {
    let mut styles = Vec::with_capacity(2);
    if anti_shake {
        styles.push((ANTI_SHAKE_STYLE_ID, ANTI_SHAKE_CSS));
    }
    styles.push((NOTIFICATION_STYLE_ID, NOTIFICATION_KEYFRAMES_CSS));
    styles
}
