//! Platform-free core of the FitVerse front-end controller: state, storage
//! boundary, cart arithmetic, header view-model and page dispatch.

pub mod cart;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod page;
pub mod persist;
pub mod state;
pub mod store;
pub mod style;
pub mod view;

pub use config::AppConfig;
pub use controller::Controller;
pub use error::{Error, Result};
pub use models::{CartItem, UserRecord};
pub use state::AppState;
pub use store::{InMemoryStore, KeyValueStore};
