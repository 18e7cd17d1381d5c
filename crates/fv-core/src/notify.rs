pub const SUCCESS_COLOR: &str = "#28a745";
pub const ERROR_COLOR: &str = "#dc3545";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// Raw kind as given by the caller; used verbatim in the class list.
    pub kind: String,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: Option<&str>) -> Self {
        Self {
            message: message.into(),
            kind: kind.unwrap_or("success").to_owned(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == "success"
    }

    pub fn class_name(&self) -> String {
        format!("notification {}", self.kind)
    }

    pub fn background(&self) -> &'static str {
        if self.is_success() {
            SUCCESS_COLOR
        } else {
            ERROR_COLOR
        }
    }

    pub fn entry_css(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 15px 20px; border-radius: 5px; z-index: 10000; \
             animation: slideInRight 0.3s ease;",
            self.background()
        )
    }
}

pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";
