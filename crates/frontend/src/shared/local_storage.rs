use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected key '{key}'");
        }
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable localStorage entry '{key}': {e}");
            remove_item(key);
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => set_item(key, &json),
        Err(e) => log::warn!("could not serialize '{key}' for localStorage: {e}"),
    }
}
