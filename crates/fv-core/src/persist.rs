//! Load/save boundary between `AppState` and the key-value store.

use crate::config::StorageKeys;
use crate::error::{Error, Result};
use crate::models::{CartItem, UserRecord};
use crate::state::AppState;
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Read and decode one key. `Ok(None)` when the key is absent.
pub fn decode_key<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| Error::Decode {
            key: key.to_owned(),
            source,
        })
}

fn decode_or_warn<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>> {
    decode_key(store, key).inspect_err(|err| warn!("ignoring stored `{key}`: {err}"))
}

/// State read from storage, plus whether the stored cart may be written over.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub state: AppState,
    /// False when the cart key held something that could not be read as a
    /// list. Such a key is left untouched by `save_state` so the page that
    /// wrote it does not lose it.
    pub cart_writable: bool,
}

/// Build state from storage. Never fails: unreadable or malformed keys count
/// as absent.
pub fn load_state(store: &impl KeyValueStore, keys: &StorageKeys) -> Loaded {
    let mut state = AppState::default();

    if let Ok(Some(user)) = decode_or_warn::<UserRecord>(store, &keys.user_key) {
        state.user_points = user.points;
        state.current_user = Some(user);
    }

    let cart_writable = match decode_or_warn::<Vec<CartItem>>(store, &keys.cart_key) {
        Ok(cart) => {
            state.cart = cart.unwrap_or_default();
            true
        }
        Err(_) => false,
    };

    debug!(
        logged_in = state.is_logged_in(),
        cart_lines = state.cart.len(),
        cart_writable,
        "loaded state"
    );
    Loaded {
        state,
        cart_writable,
    }
}

/// Write state back. The user key is only written while someone is logged
/// in; the cart key is written, empty or not, whenever `cart_writable`.
pub fn save_state(
    store: &impl KeyValueStore,
    keys: &StorageKeys,
    state: &mut AppState,
    cart_writable: bool,
) -> Result<()> {
    state.sync_points();

    if let Some(user) = state.current_user.as_ref() {
        let json = serde_json::to_string(user).map_err(Error::Encode)?;
        store.set(&keys.user_key, &json)?;
    }

    if cart_writable {
        let json = serde_json::to_string(&state.cart).map_err(Error::Encode)?;
        store.set(&keys.cart_key, &json)?;
    }
    Ok(())
}

pub fn clear_state(store: &impl KeyValueStore, keys: &StorageKeys) -> Result<()> {
    store.remove(&keys.user_key)?;
    store.remove(&keys.cart_key)?;
    Ok(())
}
