//! Page identification and the initializer registry.

use std::collections::HashMap;

pub const HOME: &str = "home";

/// Pages that may have a dedicated manager, and the global name that manager
/// is published under by its script.
pub const PAGE_MANAGERS: &[(&str, &str)] = &[
    ("sports", "SportsManager"),
    ("classes", "ClassesManager"),
    ("competitions", "CompetitionsManager"),
    ("shop", "ShopManager"),
    ("login", "AuthManager"),
    ("points", "PointsManager"),
    ("rating", "RatingManager"),
    ("contact", "ContactManager"),
];

pub const SHOP_MANAGER: &str = "ShopManager";

/// Page identifier for a URL path: the last segment up to its first `.`,
/// with empty and `index` both mapping to `home`.
pub fn page_id(path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or_default();
    let stem = last.split('.').next().unwrap_or_default();
    match stem {
        "" | "index" => HOME.to_owned(),
        other => other.to_owned(),
    }
}

/// Page id → initializer. Pages without an entry are simply skipped.
///
/// The registry hands initializers back instead of running them so the
/// caller can release any borrow of the registry first.
pub struct PageRegistry<F> {
    initializers: HashMap<String, F>,
    dispatched: Option<String>,
}

impl<F> Default for PageRegistry<F> {
    fn default() -> Self {
        Self {
            initializers: HashMap::new(),
            dispatched: None,
        }
    }
}

impl<F: Clone> PageRegistry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `page` as the current page and return its initializer, if one
    /// is registered.
    pub fn dispatch(&mut self, page: &str) -> Option<F> {
        self.dispatched = Some(page.to_owned());
        self.due(page)
    }

    /// Register (or replace) the initializer for `page`. When `page` was
    /// already dispatched, the new initializer is returned to be run now.
    pub fn register(&mut self, page: impl Into<String>, init: F) -> Option<F> {
        let page = page.into();
        self.initializers.insert(page.clone(), init);
        self.due(&page)
    }

    /// Fill from a lookup that reports which managers are present.
    pub fn discover_managers<L>(&mut self, mut lookup: L)
    where
        L: FnMut(&'static str) -> Option<F>,
    {
        for (page, name) in PAGE_MANAGERS {
            if let Some(init) = lookup(*name) {
                self.initializers.insert((*page).to_owned(), init);
            }
        }
    }

    fn due(&self, page: &str) -> Option<F> {
        if self.dispatched.as_deref() != Some(page) {
            return None;
        }
        self.initializers.get(page).cloned()
    }
}
