//! Application state owned by the controller.
//!
//! `is_logged_in` is derived from `current_user` rather than stored, so the
//! two can never disagree.

use crate::models::{CartItem, UserRecord};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub current_user: Option<UserRecord>,
    pub cart: Vec<CartItem>,
    pub user_points: i64,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.current_user.as_ref().map(|u| u.name.as_str())
    }

    /// Copy `user_points` back onto the user record. Called before every save.
    pub fn sync_points(&mut self) {
        let points = self.user_points;
        if let Some(user) = self.current_user.as_mut() {
            user.points = points;
        }
    }

    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            current_user: self.current_user.as_ref(),
            cart: &self.cart,
            user_points: self.user_points,
            is_logged_in: self.is_logged_in(),
        }
    }
}

/// Read-only view handed to page scripts, shaped like the object they expect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot<'a> {
    pub current_user: Option<&'a UserRecord>,
    pub cart: &'a [CartItem],
    pub user_points: i64,
    pub is_logged_in: bool,
}
