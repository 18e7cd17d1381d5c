//! State transitions behind the public page API.
//!
//! The controller owns `AppState` and writes through to its store on every
//! mutation. It knows nothing about the DOM: callers re-render from
//! `header_view()` after each call. State is updated before the write, so a
//! failed write leaves the in-memory state current and the error is returned
//! for logging.

use crate::cart::{self, CartSummary};
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::UserRecord;
use crate::persist;
use crate::state::AppState;
use crate::store::KeyValueStore;
use crate::view::HeaderView;
use tracing::debug;

pub struct Controller<S> {
    store: S,
    config: AppConfig,
    state: AppState,
    /// Cleared when the stored cart could not be read, so saves leave it be.
    cart_writable: bool,
}

impl<S: KeyValueStore> Controller<S> {
    /// Build a controller and load whatever is in `store`.
    pub fn new(store: S, config: AppConfig) -> Self {
        let loaded = persist::load_state(&store, &config.storage);
        Self {
            store,
            config,
            state: loaded.state,
            cart_writable: loaded.cart_writable,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn save(&mut self) -> Result<()> {
        persist::save_state(
            &self.store,
            &self.config.storage,
            &mut self.state,
            self.cart_writable,
        )
    }

    pub fn login(&mut self, user: UserRecord) -> Result<()> {
        debug!(name = %user.name, points = user.points, "login");
        self.state.user_points = user.points;
        self.state.current_user = Some(user);
        self.save()
    }

    /// Forget the user and the cart, both in memory and in storage. The
    /// caller is responsible for navigating to `config().home_document`.
    pub fn logout(&mut self) -> Result<()> {
        debug!("logout");
        self.state = AppState::default();
        self.cart_writable = true;
        persist::clear_state(&self.store, &self.config.storage)
    }

    /// Adjust the balance when someone is logged in. Negative deltas are
    /// applied as-is and the balance may go below zero. Returns whether the
    /// delta was applied.
    pub fn add_points(&mut self, delta: i64) -> Result<bool> {
        if !self.state.is_logged_in() {
            debug!(delta, "add_points ignored while logged out");
            return Ok(false);
        }
        self.state.user_points = self.state.user_points.saturating_add(delta);
        self.save()?;
        Ok(true)
    }

    pub fn header_view(&self) -> HeaderView {
        HeaderView::from_state(&self.state, &self.config.login_document)
    }

    pub fn cart_summary(&self) -> CartSummary {
        cart::summarize(&self.state.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn controller(store: &InMemoryStore) -> Controller<&InMemoryStore> {
        Controller::new(store, AppConfig::default())
    }

    #[test]
    fn fresh_store_starts_logged_out() {
        let store = InMemoryStore::new();
        let app = controller(&store);
        assert!(!app.state().is_logged_in());
        assert_eq!(app.state().user_points, 0);
        assert!(app.state().cart.is_empty());
    }

    #[test]
    fn login_persists_across_reload() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        controller(&store).login(UserRecord::new("Ana", 50))?;

        let app = controller(&store);
        assert!(app.state().is_logged_in());
        assert_eq!(app.state().user_points, 50);
        assert_eq!(app.state().user_name(), Some("Ana"));
        Ok(())
    }

    #[test]
    fn login_without_points_starts_at_zero() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        let mut app = controller(&store);
        let user: UserRecord = serde_json::from_str(r#"{"name":"Bo"}"#)?;
        app.login(user)?;
        assert_eq!(app.state().user_points, 0);
        Ok(())
    }

    #[test]
    fn login_overwrites_previous_user() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        let mut app = controller(&store);
        app.login(UserRecord::new("Ana", 50))?;
        app.login(UserRecord::new("Bo", 7))?;
        assert_eq!(app.state().user_name(), Some("Bo"));
        assert_eq!(app.state().user_points, 7);
        Ok(())
    }

    #[test]
    fn add_points_is_ignored_while_logged_out() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        let mut app = controller(&store);
        assert!(!app.add_points(10)?);
        assert_eq!(app.state().user_points, 0);
        assert!(!store.contains("fitverse_cart"));
        Ok(())
    }

    #[test]
    fn add_points_accumulates_and_persists() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        let mut app = controller(&store);
        app.login(UserRecord::new("Ana", 5))?;
        assert!(app.add_points(10)?);
        assert_eq!(app.state().user_points, 15);

        let reloaded = controller(&store);
        assert_eq!(reloaded.state().user_points, 15);
        Ok(())
    }

    // No floor is enforced on the balance.
    #[test]
    fn negative_points_go_below_zero() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        let mut app = controller(&store);
        app.login(UserRecord::new("Ana", 5))?;
        app.add_points(-20)?;
        assert_eq!(app.state().user_points, -15);
        Ok(())
    }

    #[test]
    fn logout_clears_storage_and_state() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        store.set("fitverse_cart", r#"[{"quantity":2,"price":9.5}]"#)?;
        let mut app = controller(&store);
        app.login(UserRecord::new("Ana", 50))?;
        assert_eq!(app.state().cart.len(), 1);

        app.logout()?;
        assert_eq!(app.state(), &AppState::default());
        assert!(!store.contains("fitverse_user"));
        assert!(!store.contains("fitverse_cart"));

        let reloaded = controller(&store);
        assert_eq!(reloaded.state(), &AppState::default());
        Ok(())
    }

    #[test]
    fn cart_written_by_shop_is_picked_up_on_next_page() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        controller(&store).login(UserRecord::new("Ana", 1))?;
        store.set(
            "fitverse_cart",
            r#"[{"totalPrice":12},{"price":5,"quantity":3}]"#,
        )?;

        let app = controller(&store);
        let summary = app.cart_summary();
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.total, 17.0);
        assert_eq!(app.header_view().cart_count, 4);
        Ok(())
    }

    #[test]
    fn login_keeps_cart_lines_with_string_prices() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        let raw = r#"[{"id":"shoe","price":"29.99","quantity":2}]"#;
        store.set("fitverse_cart", raw)?;

        let mut app = controller(&store);
        app.login(UserRecord::new("Ana", 50))?;

        assert_eq!(app.state().cart.len(), 1);
        assert_eq!(app.header_view().cart_count, 2);
        let stored: serde_json::Value =
            serde_json::from_str(&store.get("fitverse_cart")?.unwrap_or_default())?;
        assert_eq!(stored, serde_json::from_str::<serde_json::Value>(raw)?);
        Ok(())
    }

    #[test]
    fn login_leaves_unreadable_cart_key_alone() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        store.set("fitverse_cart", r#"{"shoe":{"quantity":2}}"#)?;

        let mut app = controller(&store);
        assert!(app.state().cart.is_empty());
        app.login(UserRecord::new("Ana", 50))?;
        app.add_points(5)?;

        assert_eq!(
            store.get("fitverse_cart")?.as_deref(),
            Some(r#"{"shoe":{"quantity":2}}"#)
        );
        assert!(store.contains("fitverse_user"));
        Ok(())
    }

    #[test]
    fn cart_key_is_writable_again_after_logout() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        store.set("fitverse_cart", "not json")?;

        let mut app = controller(&store);
        app.logout()?;
        app.login(UserRecord::new("Bo", 0))?;
        assert_eq!(store.get("fitverse_cart")?.as_deref(), Some("[]"));
        Ok(())
    }

    #[test]
    fn loosely_typed_stored_user_still_logs_in() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        store.set("fitverse_user", r#"{"name":null,"points":12.5}"#)?;

        let app = controller(&store);
        assert!(app.state().is_logged_in());
        assert_eq!(app.state().user_points, 12);
        assert_eq!(app.state().user_name(), Some(""));
        Ok(())
    }

    #[test]
    fn extra_user_fields_survive_points_update() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        let mut app = controller(&store);
        let user: UserRecord =
            serde_json::from_str(r#"{"name":"Ana","points":1,"memberSince":"2024-02-01"}"#)?;
        app.login(user)?;
        app.add_points(4)?;

        let raw = store.get("fitverse_user")?.unwrap_or_default();
        let stored: serde_json::Value = serde_json::from_str(&raw)?;
        assert_eq!(stored["points"], 5);
        assert_eq!(stored["memberSince"], "2024-02-01");
        Ok(())
    }
}
