use log::warn;

use crate::models::User;

pub const THEME_KEY: &str = "theme";
pub const USER_KEY: &str = "user";
pub const LOCATION_KEY: &str = "locationId";

/// String key/value storage persisted by the browser
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Everything the app remembers between page loads: the signed-in user,
/// the location picked in the booking wizard and the theme.
///
/// Nothing here is validated against the server or expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    /// Id of the signed-in user, if it is usable for an order
    pub fn current_user_id(&self) -> Option<i64> {
        self.current_user()
            .and_then(|user| user.user_id)
            .filter(|id| *id > 0)
    }

    /// Remember `user`; the password is stripped before it is stored
    pub fn sign_in(&self, user: &User) {
        match serde_json::to_string(&user.without_password()) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => warn!("could not store user: {}", e),
        }
    }

    pub fn sign_out(&self) {
        self.store.remove(USER_KEY);
    }

    pub fn selected_location(&self) -> Option<i64> {
        self.store
            .get(LOCATION_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .filter(|id: &i64| *id > 0)
    }

    pub fn remember_location(&self, location_id: i64) {
        self.store.set(LOCATION_KEY, &location_id.to_string());
    }

    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_sign_in_stores_user_without_password() {
        let session = Session::new(MemoryStore::default());
        let user = User {
            user_id: Some(8),
            username: "anna".to_string(),
            password: Some("secret".to_string()),
        };

        session.sign_in(&user);
        assert!(!session.store.raw(USER_KEY).unwrap().contains("secret"));
        assert_eq!(session.current_user_id(), Some(8));
        assert_eq!(session.current_user().unwrap().username, "anna");

        session.sign_out();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_corrupt_or_id_less_user_is_not_signed_in() {
        let store = MemoryStore::default();
        store.set(USER_KEY, "{not json");
        let session = Session::new(store);
        assert_eq!(session.current_user(), None);

        session.store.set(USER_KEY, r#"{"username":"anna"}"#);
        assert!(session.current_user().is_some());
        assert_eq!(session.current_user_id(), None);
    }

    #[test]
    fn test_selected_location() {
        let session = Session::new(MemoryStore::default());
        assert_eq!(session.selected_location(), None);

        session.remember_location(3);
        assert_eq!(session.selected_location(), Some(3));

        session.store.set(LOCATION_KEY, "abc");
        assert_eq!(session.selected_location(), None);
    }

    #[test]
    fn test_theme_defaults_to_light_and_toggles() {
        let session = Session::new(MemoryStore::default());
        assert_eq!(session.theme(), Theme::Light);

        session.set_theme(session.theme().toggled());
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.store.raw(THEME_KEY).as_deref(), Some("dark"));
    }
}
