use gloo::storage::{LocalStorage, Storage};
use log::warn;
use shared::{Session, SessionStore};

/// `window.localStorage`, holding raw strings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalStore;

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            warn!("failed to store {}: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            warn!("failed to remove {}: {:?}", key, e);
        }
    }
}

pub fn browser_session() -> Session<LocalStore> {
    Session::new(LocalStore)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::User;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_keeps_raw_strings() {
        let store = LocalStore;
        store.set("locationId", "4");
        assert_eq!(store.get("locationId").as_deref(), Some("4"));
        store.remove("locationId");
        assert_eq!(store.get("locationId"), None);
    }

    #[wasm_bindgen_test]
    fn test_browser_session_never_stores_password() {
        let session = browser_session();
        session.sign_in(&User {
            user_id: Some(5),
            username: "anna".to_string(),
            password: Some("secret".to_string()),
        });
        let raw = LocalStore.get("user").unwrap_or_default();
        assert!(!raw.contains("secret"));
        assert_eq!(session.current_user_id(), Some(5));
        session.sign_out();
        assert_eq!(session.current_user(), None);
    }
}
